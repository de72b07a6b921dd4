use std::fmt;

/// Index of a cell on the board, row-major:
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Square(u8);

pub const ALL_SQUARES: [Square; 9] = [
    Square(0),
    Square(1),
    Square(2),
    Square(3),
    Square(4),
    Square(5),
    Square(6),
    Square(7),
    Square(8),
];

impl Square {
    pub const COUNT: usize = 9;

    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < Self::COUNT as u8 {
            Some(Self(index))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self(row * 3 + col))
        } else {
            None
        }
    }

    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    /// One-based number shown to players and accepted from the keyboard.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        if number == 0 {
            return None;
        }
        Self::new(number - 1)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(Square::new(8).is_some());
        assert!(Square::new(9).is_none());
        assert!(Square::from_number(0).is_none());
        assert_eq!(Square::from_number(9), Square::new(8));
        assert!(Square::from_row_col(3, 0).is_none());
    }

    #[test]
    fn row_col() {
        for sq in ALL_SQUARES {
            assert_eq!(Square::from_row_col(sq.row(), sq.col()), Some(sq));
        }
        assert_eq!(Square::from_row_col(1, 2).map(Square::index), Some(5));
    }
}
