use std::fmt;

use tracing::debug;
use ttt_types::{Mark, Square};

use crate::{
    board::{Board, Status},
    error::{Error, Result},
};

/// A game session: every board played so far plus the position on display.
///
/// The mark to move is never stored. It follows from the parity of
/// `current_move`, so jumping around the history keeps turns consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    current_move: usize,
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    pub index: usize,
    pub is_current: bool,
}

impl fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.index == 0 {
            write!(f, "Start the game")
        } else {
            write!(f, "Go to move #{}", self.index)
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: vec![Board::EMPTY],
            current_move: 0,
        }
    }

    #[must_use]
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of snapshots, the empty starting board included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True while no move has been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.len() == 1
    }

    #[must_use]
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    #[must_use]
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    #[must_use]
    pub fn next_mark(&self) -> Mark {
        Mark::to_move(self.current_move)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.current_board().status(self.next_mark())
    }

    /// Records `board` as the move after the current one.
    ///
    /// Anything after the current move is dropped first, so playing from a
    /// past position replaces the old continuation.
    pub fn play(&mut self, board: Board) {
        let dropped = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(board);
        self.current_move = self.history.len() - 1;
        debug!(
            current_move = self.current_move,
            dropped, "played move"
        );
    }

    /// Shows the board after `mv` moves. The history is left intact until the
    /// next [`Game::play`].
    pub fn jump_to(&mut self, mv: usize) -> Result<()> {
        if mv >= self.history.len() {
            return Err(Error::MoveOutOfRange {
                requested: mv,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, to = mv, "jump");
        self.current_move = mv;
        Ok(())
    }

    /// Places the mark to move on `square`. Returns `false` when the click is
    /// ignored because the cell is taken or the game is already won.
    pub fn handle_click(&mut self, square: Square) -> bool {
        let mark = self.next_mark();
        match self.current_board().after_click(square, mark) {
            Some(board) => {
                debug!(%square, %mark, "click");
                self.play(board);
                true
            }
            None => {
                debug!(%square, "ignored click");
                false
            }
        }
    }

    /// Clicks each square in turn and returns how many were accepted.
    pub fn play_squares<I>(&mut self, squares: I) -> usize
    where
        I: IntoIterator<Item = Square>,
    {
        squares
            .into_iter()
            .filter(|&square| self.handle_click(square))
            .count()
    }

    pub fn moves(&self) -> impl Iterator<Item = MoveEntry> + '_ {
        (0..self.history.len()).map(|index| MoveEntry {
            index,
            is_current: index == self.current_move,
        })
    }
}

/// Parses a comma separated list of cell numbers `1`-`9`, e.g. `"1,5,9"`.
pub fn parse_squares(list: &str) -> Result<Vec<Square>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let number: u8 = s.parse()?;
            Square::from_number(number).ok_or(Error::InvalidSquare(number))
        })
        .collect()
}
