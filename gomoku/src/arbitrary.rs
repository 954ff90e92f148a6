use crate::{Board, Mark};

/// A board of side length 1 to 6 with a random mix of empty and marked cells.
///
/// The marks do not need to be reachable by alternating turns.
#[derive(Clone, Debug)]
pub struct MarkedBoard {
    pub board: Board,
}

impl quickcheck::Arbitrary for MarkedBoard {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let size = (u8::arbitrary(g) % 6) as usize + 1;
        let mut board = Board::new(size).unwrap();
        for row in 0..size as isize {
            for col in 0..size as isize {
                match u8::arbitrary(g) % 3 {
                    0 => {}
                    1 => board.place(row, col, Mark::A).unwrap(),
                    _ => board.place(row, col, Mark::B).unwrap(),
                }
            }
        }
        MarkedBoard { board }
    }
}

impl quickcheck::Arbitrary for Mark {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Mark::A, Mark::B]).unwrap()
    }
}

/// Builds a square board from rows like `"O.X"`, where `.` is an empty cell.
pub fn board_from_diagram(rows: &[&str]) -> Board {
    let mut board = Board::new(rows.len()).unwrap();
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), rows.len(), "diagram must be square");
        for (j, symbol) in row.chars().enumerate() {
            let mark = match symbol {
                'O' => Mark::A,
                'X' => Mark::B,
                '.' => continue,
                other => panic!("unexpected symbol {:?} in diagram", other),
            };
            board.place(i as isize, j as isize, mark).unwrap();
        }
    }
    board
}
