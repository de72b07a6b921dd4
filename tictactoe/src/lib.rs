#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
pub mod board;
pub mod error;
pub mod game;

pub use board::{calculate_winner, Board, Status};
pub use error::{Error, Result};
pub use game::{parse_squares, Game, MoveEntry};
pub use ttt_types::{Line, Mark, Square, ALL_MARKS, ALL_SQUARES, LINES};
