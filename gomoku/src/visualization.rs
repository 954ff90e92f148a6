use crate::Board;

/// Draws the board in a frame, with column numbers on top and row numbers on the left.
pub fn visualize_board(board: &Board) -> String {
    let size = board.size();
    // Wide enough for the largest coordinate
    let width = (size - 1).to_string().len();
    let border = "─".repeat(size * (width + 1) + 1);

    let mut result = " ".repeat(width + 2);
    for j in 0..size {
        result += &format!(" {:>width$}", j);
    }
    result += &format!("\n{:width$} ╭{}╮\n", "", border);
    for (i, row) in board.rows().enumerate() {
        result += &format!("{:>width$} │", i);
        for cell in row {
            result += &format!(" {:>width$}", cell.symbol());
        }
        result += " │\n";
    }
    result += &format!("{:width$} ╰{}╯", "", border);
    result
}
