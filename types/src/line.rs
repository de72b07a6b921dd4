use crate::square::Square;

const fn sq(index: u8) -> Square {
    match Square::new(index) {
        Some(square) => square,
        None => panic!("square out of range"),
    }
}

/// Three squares that win the game when they all hold the same mark.
pub type Line = [Square; 3];

/// Rows, then columns, then diagonals. Winner detection scans in this order.
pub const LINES: [Line; 8] = [
    [sq(0), sq(1), sq(2)],
    [sq(3), sq(4), sq(5)],
    [sq(6), sq(7), sq(8)],
    [sq(0), sq(3), sq(6)],
    [sq(1), sq(4), sq(7)],
    [sq(2), sq(5), sq(8)],
    [sq(0), sq(4), sq(8)],
    [sq(2), sq(4), sq(6)],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_square_is_covered() {
        for index in 0..9u8 {
            let square = sq(index);
            let count = LINES.iter().filter(|l| l.contains(&square)).count();
            // corners sit on 3 lines, edges on 2, centre on 4
            let expected = match index {
                4 => 4,
                0 | 2 | 6 | 8 => 3,
                _ => 2,
            };
            assert_eq!(count, expected, "square {index}");
        }
    }
}
