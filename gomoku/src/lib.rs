pub use board::*;
pub use cells::*;
pub use errors::*;
pub use turn::*;
pub use visualization::*;
pub use win::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cells;
mod errors;
mod turn;
mod visualization;
mod win;
