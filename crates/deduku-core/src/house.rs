//! Houses: the rows, columns, and boxes of the board.

use crate::{BitSet, EngineError, Position};

/// The classification of a full-sized house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseKind {
    /// A 1x9 horizontal house.
    Row,
    /// A 9x1 vertical house.
    Column,
    /// A 3x3 house aligned to the box grid.
    Box,
}

/// Addresses one of the 27 houses owned by a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseId {
    /// The row with the given index (0-8, top to bottom).
    Row(u8),
    /// The column with the given index (0-8, left to right).
    Column(u8),
    /// The box with the given index (0-8, row-major).
    Box(u8),
}

impl HouseId {
    /// Iterates all 27 house identifiers: rows, then columns, then boxes.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9)
            .map(Self::Row)
            .chain((0..9).map(Self::Column))
            .chain((0..9).map(Self::Box))
    }

    /// Returns the identifiers of the three houses containing `pos`.
    #[must_use]
    pub const fn containing(pos: Position) -> [Self; 3] {
        [
            Self::Row(pos.row()),
            Self::Column(pos.col()),
            Self::Box(pos.box_index()),
        ]
    }
}

impl std::fmt::Display for HouseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row(row) => write!(f, "Row({})", char::from(b'A' + row)),
            Self::Column(col) => write!(f, "Col({})", col + 1),
            Self::Box(index) => write!(f, "Box({},{})", index / 3 + 1, index % 3 + 1),
        }
    }
}

/// A rectangle of cells, plus the set of digits already known within it.
///
/// The 27 board houses are full rows, columns, and boxes. Smaller
/// rectangles also occur as transient iteration spans (for example the part
/// of a row lying outside a box); those are only ever traversed by
/// position and never classified or tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct House {
    row_start: u8,
    row_end: u8,
    col_start: u8,
    col_end: u8,
    known_numbers: BitSet,
}

impl House {
    /// Creates a house spanning the inclusive row and column ranges, with no
    /// digit known.
    ///
    /// # Panics
    ///
    /// Panics if the bounds are inverted or reach outside the board.
    #[must_use]
    pub const fn new(row_start: u8, row_end: u8, col_start: u8, col_end: u8) -> Self {
        assert!(row_start <= row_end && row_end < 9, "invalid row bounds");
        assert!(col_start <= col_end && col_end < 9, "invalid column bounds");
        Self {
            row_start,
            row_end,
            col_start,
            col_end,
            known_numbers: BitSet::new(9, 1),
        }
    }

    /// Returns the first row of the house.
    #[must_use]
    pub const fn row_start(&self) -> u8 {
        self.row_start
    }

    /// Returns the last row of the house.
    #[must_use]
    pub const fn row_end(&self) -> u8 {
        self.row_end
    }

    /// Returns the first column of the house.
    #[must_use]
    pub const fn col_start(&self) -> u8 {
        self.col_start
    }

    /// Returns the last column of the house.
    #[must_use]
    pub const fn col_end(&self) -> u8 {
        self.col_end
    }

    /// Classifies this house as a row, column, or box.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedHouse`] if the rectangle is none of
    /// the three full-house shapes.
    pub fn kind(&self) -> Result<HouseKind, EngineError> {
        let rows = self.row_end - self.row_start + 1;
        let cols = self.col_end - self.col_start + 1;
        match (rows, cols) {
            (1, 9) => Ok(HouseKind::Row),
            (9, 1) => Ok(HouseKind::Column),
            (3, 3) if self.row_start % 3 == 0 && self.col_start % 3 == 0 => Ok(HouseKind::Box),
            _ => Err(EngineError::MalformedHouse {
                rows,
                cols,
                row_start: self.row_start,
                col_start: self.col_start,
            }),
        }
    }

    /// Iterates the positions of the house in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.col_start..=self.col_end;
        (self.row_start..=self.row_end)
            .flat_map(move |row| cols.clone().map(move |col| Position::new(row, col)))
    }

    /// Tests whether `digit` is already known (placed) somewhere in this
    /// house.
    ///
    /// # Errors
    ///
    /// Returns an error if `digit` is not 1-9.
    pub fn is_number_known(&self, digit: u8) -> Result<bool, EngineError> {
        Ok(self.known_numbers.contains(digit)?)
    }

    /// Returns the set of digits known in this house.
    #[must_use]
    pub const fn known_numbers(&self) -> &BitSet {
        &self.known_numbers
    }

    /// Iterates the digits not yet known in this house, ascending.
    pub fn unknown_numbers(&self) -> impl Iterator<Item = u8> {
        self.known_numbers.iter_clear()
    }

    pub(crate) fn set_number_known(&mut self, digit: u8) -> Result<bool, EngineError> {
        Ok(self.known_numbers.insert(digit)?)
    }

    pub(crate) fn reset(&mut self) {
        self.known_numbers.clear_all();
    }
}

impl std::fmt::Display for House {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            Ok(HouseKind::Row) => HouseId::Row(self.row_start).fmt(f),
            Ok(HouseKind::Column) => HouseId::Column(self.col_start).fmt(f),
            Ok(HouseKind::Box) => {
                HouseId::Box(self.row_start / 3 * 3 + self.col_start / 3).fmt(f)
            }
            Err(_) => write!(
                f,
                "Span({}-{})",
                Position::new(self.row_start, self.col_start),
                Position::new(self.row_end, self.col_end)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(House::new(3, 3, 0, 8).kind().unwrap(), HouseKind::Row);
        assert_eq!(House::new(0, 8, 7, 7).kind().unwrap(), HouseKind::Column);
        assert_eq!(House::new(3, 5, 6, 8).kind().unwrap(), HouseKind::Box);
    }

    #[test]
    fn test_misaligned_square_is_malformed() {
        let house = House::new(1, 3, 1, 3);
        assert!(matches!(
            house.kind(),
            Err(EngineError::MalformedHouse { rows: 3, cols: 3, .. })
        ));
    }

    #[test]
    fn test_span_is_malformed() {
        let span = House::new(2, 2, 0, 2);
        assert!(matches!(span.kind(), Err(EngineError::MalformedHouse { .. })));
    }

    #[test]
    fn test_positions_row_major() {
        let house = House::new(0, 2, 0, 2);
        let positions: Vec<_> = house.positions().collect();
        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[2], Position::new(0, 2));
        assert_eq!(positions[3], Position::new(1, 0));
        assert_eq!(positions[8], Position::new(2, 2));
    }

    #[test]
    fn test_known_numbers_track_insertions() {
        let mut house = House::new(0, 0, 0, 8);
        assert!(!house.is_number_known(5).unwrap());
        assert!(house.set_number_known(5).unwrap());
        assert!(!house.set_number_known(5).unwrap());
        assert!(house.is_number_known(5).unwrap());
        let unknown: Vec<_> = house.unknown_numbers().collect();
        assert_eq!(unknown, [1, 2, 3, 4, 6, 7, 8, 9]);
        house.reset();
        assert!(house.known_numbers().is_empty());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(House::new(0, 0, 0, 8).to_string(), "Row(A)");
        assert_eq!(House::new(0, 8, 4, 4).to_string(), "Col(5)");
        assert_eq!(House::new(6, 8, 0, 2).to_string(), "Box(3,1)");
        assert_eq!(House::new(1, 1, 3, 5).to_string(), "Span(B4-B6)");
        assert_eq!(HouseId::Box(5).to_string(), "Box(2,3)");
    }

    #[test]
    fn test_digit_out_of_range_rejected() {
        let house = House::new(0, 0, 0, 8);
        assert!(house.is_number_known(0).is_err());
        assert!(house.is_number_known(10).is_err());
    }
}
