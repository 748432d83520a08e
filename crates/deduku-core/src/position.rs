//! Board coordinates.

/// A (row, column) coordinate on the 9x9 board.
///
/// Rows and columns are 0-based internally; the [`Display`](std::fmt::Display)
/// form is the conventional letter-number pair, rows `A`-`I` and columns
/// 1-9, so the top-left cell renders as `A1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9, "row must be 0-8");
        assert!(col < 9, "column must be 0-8");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index (0-8, row-major) of the 3x3 box containing this
    /// position.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.row / 3 * 3 + self.col / 3
    }

    /// Iterates all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|row| (0..9).map(move |col| Self::new(row, col)))
    }

    /// Iterates the 20 distinct peers of this position.
    ///
    /// A peer shares a row, a column, or a box with this position. The
    /// position itself is not a peer, and positions sharing both a line and
    /// the box are yielded once.
    pub fn peers(self) -> impl Iterator<Item = Self> {
        let row_peers = (0..9)
            .filter(move |&col| col != self.col)
            .map(move |col| Self::new(self.row, col));
        let col_peers = (0..9)
            .filter(move |&row| row != self.row)
            .map(move |row| Self::new(row, self.col));
        let box_row = self.row / 3 * 3;
        let box_col = self.col / 3 * 3;
        let box_peers = (box_row..box_row + 3)
            .flat_map(move |row| (box_col..box_col + 3).map(move |col| Self::new(row, col)))
            .filter(move |pos| pos.row != self.row && pos.col != self.col);
        row_peers.chain(col_peers).chain(box_peers)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = char::from(b'A' + self.row);
        write!(f, "{row}{}", self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_all_is_row_major() {
        let positions: Vec<_> = Position::all().collect();
        assert_eq!(positions.len(), 81);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[8], Position::new(0, 8));
        assert_eq!(positions[9], Position::new(1, 0));
        assert_eq!(positions[80], Position::new(8, 8));
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(2, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(6, 8).box_index(), 8);
    }

    #[test]
    fn test_twenty_distinct_peers() {
        for pos in Position::all() {
            let peers: BTreeSet<_> = pos.peers().collect();
            assert_eq!(peers.len(), 20, "peers of {pos}");
            assert_eq!(pos.peers().count(), 20, "duplicate peers of {pos}");
            assert!(!peers.contains(&pos));
            for peer in &peers {
                assert!(
                    peer.row() == pos.row()
                        || peer.col() == pos.col()
                        || peer.box_index() == pos.box_index()
                );
            }
        }
    }

    #[test]
    fn test_display_is_letter_number() {
        assert_eq!(Position::new(0, 0).to_string(), "A1");
        assert_eq!(Position::new(4, 2).to_string(), "E3");
        assert_eq!(Position::new(8, 8).to_string(), "I9");
    }

    #[test]
    #[should_panic(expected = "row must be 0-8")]
    fn test_row_out_of_range_rejected() {
        let _ = Position::new(9, 0);
    }
}
