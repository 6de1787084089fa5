pub use board::{Board, Grid, TileState};
pub use error::BoardError;
pub use pos::Position;
pub use print::{IoLineWriter, LineWriter};

pub mod board;
pub mod error;
pub mod pos;
pub mod print;
pub mod rule;
