//! The failure type shared by the board model.

use derive_more::{Display, Error, From};

use crate::{BitSet, BitSetError, HouseId, Position};

/// An error raised by the board model.
///
/// Every failure is immediate and fail-fast: the operation that detects the
/// problem returns it and the board is left exactly as it was at that point.
/// There is no rollback.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// A bit-level contract violation (bad index or mismatched shapes).
    #[display("{_0}")]
    #[from]
    BitSet(BitSetError),

    /// A given or deduced cell was asked to change its candidates.
    #[display("cell {position} is fixed and cannot have candidate {digit} changed")]
    FrozenCell {
        /// The frozen cell.
        position: Position,
        /// The digit whose possibility was being changed.
        digit: u8,
    },

    /// A cell was left with no possible number: the puzzle is contradictory.
    #[display("no possible number remains for cell {position}")]
    NoCandidates {
        /// The exhausted cell.
        position: Position,
    },

    /// A cell was asked to commit a digit outside its candidate set.
    #[display("cell {position} cannot take {digit}; candidates are {candidates}")]
    NotPossible {
        /// The cell being committed.
        position: Position,
        /// The rejected digit.
        digit: u8,
        /// The candidates the cell actually holds.
        candidates: BitSet,
    },

    /// An unknown digit has nowhere left to go in a house: the puzzle is
    /// contradictory.
    #[display("digit {digit} has no remaining place in {house}")]
    NoPlaceInHouse {
        /// The house with no place for the digit.
        house: HouseId,
        /// The homeless digit.
        digit: u8,
    },

    /// A character in a per-cell parse position was not a digit, `'.'`,
    /// `'0'`, or `' '`.
    #[display("unrecognised character {character:?} in puzzle text")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
    },

    /// A puzzle text ran out before supplying all 81 cells.
    #[display("puzzle text supplies {supplied} cells, but 81 are required")]
    InsufficientInput {
        /// How many recognized cell characters the text contained.
        supplied: usize,
    },

    /// A full-sized house rectangle is neither a row, a column, nor a box.
    #[display(
        "house of {rows}x{cols} cells at ({row_start}, {col_start}) is neither a row, a column nor a box"
    )]
    MalformedHouse {
        /// Height of the rectangle.
        rows: u8,
        /// Width of the rectangle.
        cols: u8,
        /// First row of the rectangle.
        row_start: u8,
        /// First column of the rectangle.
        col_start: u8,
    },
}
