mod config;
mod game;
mod input;
pub use config::*;
pub use game::*;
pub use input::*;
