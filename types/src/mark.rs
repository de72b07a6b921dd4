use std::fmt;

use enum_map::Enum;

pub const ALL_MARKS: [Mark; 2] = [Mark::X, Mark::O];

/// The symbol a player places on the board. `X` always opens the game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Enum, PartialOrd, Ord)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Whose turn it is after `moves_played` moves.
    #[must_use]
    pub const fn to_move(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_follows_parity() {
        assert_eq!(Mark::to_move(0), Mark::X);
        assert_eq!(Mark::to_move(1), Mark::O);
        assert_eq!(Mark::to_move(8), Mark::X);
        assert_eq!(Mark::to_move(3).next(), Mark::X);
    }
}
