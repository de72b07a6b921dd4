use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid cell {0}, expected a number from 1 to 9")]
    InvalidSquare(u8),

    #[error("could not parse cell number: {0}")]
    ParseSquare(#[from] std::num::ParseIntError),

    #[error("invalid board {0:?}, expected 9 cells of 'X', 'O' or '.'")]
    ParseBoard(String),

    #[error("move {requested} is out of range, history has {len} entries")]
    MoveOutOfRange { requested: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
