use std::{fmt, str::FromStr};

use itertools::Itertools;
use ttt_types::{Line, Mark, Square, ALL_SQUARES, LINES};

use crate::error::Error;

/// One position: nine cells, each empty or holding a mark.
///
/// Boards are plain values. A move never touches an existing board, it
/// produces a new one (see [`Board::with`]), so snapshots kept in the game
/// history stay exactly as they were played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; Square::COUNT],
}

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Winner(Mark),
    Draw,
    Next(Mark),
}

impl Status {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Status::Next(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {mark}"),
            Status::Draw => write!(f, "Game Draw!"),
            Status::Next(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [None; Square::COUNT],
    };

    #[must_use]
    pub fn new() -> Self {
        Self::EMPTY
    }

    #[must_use]
    pub fn from_cells(cells: [Option<Mark>; Square::COUNT]) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; Square::COUNT] {
        &self.cells
    }

    #[must_use]
    #[inline(always)]
    pub fn get(&self, square: Square) -> Option<Mark> {
        self.cells[square.index()]
    }

    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Number of marks on the board.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Copy of this board with `mark` placed on `square`.
    #[must_use]
    pub fn with(&self, square: Square, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[square.index()] = Some(mark);
        next
    }

    /// First completed line in [`LINES`] order.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        LINES.into_iter().find(|&[a, b, c]| {
            self.get(a)
                .is_some_and(|mark| self.get(b) == Some(mark) && self.get(c) == Some(mark))
        })
    }

    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().and_then(|[a, _, _]| self.get(a))
    }

    /// Status of this board with `next` to move if the game is still open.
    #[must_use]
    pub fn status(&self, next: Mark) -> Status {
        if let Some(mark) = self.winner() {
            Status::Winner(mark)
        } else if self.is_full() {
            Status::Draw
        } else {
            Status::Next(next)
        }
    }

    /// The board that results from `mark` clicking `square`.
    ///
    /// Returns `None` when the click must be ignored: the cell is taken or the
    /// game on this board is already won.
    #[must_use]
    pub fn after_click(&self, square: Square, mark: Mark) -> Option<Self> {
        if self.is_occupied(square) || self.winner().is_some() {
            return None;
        }
        Some(self.with(square, mark))
    }

    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        ALL_SQUARES
            .into_iter()
            .filter(move |&square| !self.is_occupied(square))
    }
}

/// Mark shared by the first completed line, if any.
#[must_use]
pub fn calculate_winner(board: &Board) -> Option<Mark> {
    board.winner()
}

impl FromStr for Board {
    type Err = Error;

    /// Parses nine cells written as `X`, `O` or `.`; whitespace and `|` are
    /// skipped so a grid can be written over several lines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<Option<Mark>> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Some(Mark::X)),
                'O' => Ok(Some(Mark::O)),
                '.' | '_' => Ok(None),
                _ => Err(Error::ParseBoard(s.to_owned())),
            })
            .collect::<Result<_, _>>()?;
        let cells: [Option<Mark>; Square::COUNT] = cells
            .try_into()
            .map_err(|_| Error::ParseBoard(s.to_owned()))?;
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.cells.chunks(3).map(|row| {
            row.iter()
                .map(|cell| cell.map_or('.', Mark::glyph))
                .join("|")
        });
        write!(f, "{}", rows.format("\n"))
    }
}
