//! Core data structures for the Deduku Sudoku deduction engine.
//!
//! This crate models a 9x9 Sudoku board in a form suited to iterative
//! constraint propagation:
//!
//! - [`bit_set`]: [`BitSet`], a fixed-shape bit vector with a configurable
//!   base index, used for candidate sets and house-membership masks
//! - [`position`]: [`Position`], a (row, column) coordinate with peer and
//!   box helpers
//! - [`cell`]: [`Cell`], one square of the board with its candidate set and
//!   given/deduced state
//! - [`house`]: [`House`] and [`HouseId`], the 27 rows, columns, and boxes
//! - [`board`]: [`Board`], the arena owning every cell and house, with
//!   puzzle parsing, serialization, and the deduction journal
//! - [`error`]: [`EngineError`], the failure type shared by all of the above
//!
//! All board mutation routes through [`Board::set_number`] and
//! [`Board::set_number_impossible`], which keep cell candidates, house
//! known-digit sets, and the deduction journal consistent with each other.
//!
//! # Examples
//!
//! ```
//! use deduku_core::{Board, Position};
//!
//! let mut board = Board::new();
//! board.set_number_string("5................................................................................")?;
//!
//! let corner = Position::new(0, 0);
//! assert_eq!(board.cell(corner).number()?, Some(5));
//! // The placement eliminated 5 from all twenty peers.
//! assert!(!board.cell(Position::new(0, 8)).is_number_possible(5)?);
//! # Ok::<(), deduku_core::EngineError>(())
//! ```

pub mod bit_set;
pub mod board;
pub mod cell;
pub mod error;
pub mod house;
pub mod position;

pub use self::{
    bit_set::{BitSet, BitSetError},
    board::{Board, Deduction, DeductionKind},
    cell::Cell,
    error::EngineError,
    house::{House, HouseId, HouseKind},
    position::Position,
};
