//! The Locked Candidates rule: a digit confined to one line or one box.

use deduku_core::{BitSet, Board, EngineError, HouseId, HouseKind, Position};

use super::{BoxedTechnique, Technique};
use crate::SolverError;

/// Exploits a digit whose possible places within one house all fall inside
/// a single row, column, or box.
///
/// For every house and every digit not yet known there, the rows, columns,
/// and boxes occupied by the digit's possible places are collected into
/// three 9-bit masks. A mask of cardinality one means the digit is
/// confined:
///
/// - confined to one row inside a *column* house (or one column inside a
///   *row* house) pins the digit to the single intersection cell, which is
///   committed outright;
/// - confined to one row or column inside a *box* eliminates the digit from
///   the rest of that line outside the box ("pointing");
/// - confined to one box inside a row or column eliminates the digit from
///   the rest of that box ("claiming").
///
/// The confinement that merely restates the house itself carries no
/// information and is skipped. A digit with no place at all in a house is a
/// contradiction.
#[derive(Debug, Clone, Copy, Default)]
pub struct LockedCandidates;

impl LockedCandidates {
    /// The name of this technique.
    pub const NAME: &'static str = "Locked Candidates";

    /// Creates the technique.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn eliminate_from_box_outside_line(
        board: &mut Board,
        box_index: u8,
        digit: u8,
        keep: impl Fn(Position) -> bool,
    ) -> Result<bool, SolverError> {
        let mut changed = false;
        let row_start = box_index / 3 * 3;
        let col_start = box_index % 3 * 3;
        for row in row_start..row_start + 3 {
            for col in col_start..col_start + 3 {
                let pos = Position::new(row, col);
                if !keep(pos) {
                    changed |= board.set_number_impossible(pos, digit, Self::NAME)?;
                }
            }
        }
        Ok(changed)
    }
}

impl Technique for LockedCandidates {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    #[allow(clippy::too_many_lines)]
    fn apply(&self, board: &mut Board) -> Result<bool, SolverError> {
        let mut changed = false;
        for id in HouseId::all() {
            let house = *board.house(id);
            let kind = house.kind()?;
            for digit in house.unknown_numbers() {
                if board.house(id).is_number_known(digit)? {
                    continue;
                }
                let mut rows = BitSet::new(9, 0);
                let mut cols = BitSet::new(9, 0);
                let mut boxes = BitSet::new(9, 0);
                for pos in house.positions() {
                    if board.cell(pos).is_number_possible(digit)? {
                        rows.insert(pos.row())?;
                        cols.insert(pos.col())?;
                        boxes.insert(pos.box_index())?;
                    }
                }
                if rows.is_empty() {
                    return Err(EngineError::NoPlaceInHouse { house: id, digit }.into());
                }

                if let Some(row) = rows.as_single() {
                    match kind {
                        // The confined row is this house; nothing new.
                        HouseKind::Row => {}
                        HouseKind::Column => {
                            // Only one cell of the column can hold the digit.
                            changed |= board.set_number(
                                Position::new(row, house.col_start()),
                                digit,
                                Self::NAME,
                            )?;
                        }
                        HouseKind::Box => {
                            // Pointing: clear the digit from the row outside
                            // this box.
                            for col in (0..9)
                                .filter(|col| *col < house.col_start() || *col > house.col_end())
                            {
                                changed |= board.set_number_impossible(
                                    Position::new(row, col),
                                    digit,
                                    Self::NAME,
                                )?;
                            }
                        }
                    }
                }

                if let Some(col) = cols.as_single() {
                    match kind {
                        HouseKind::Column => {}
                        HouseKind::Row => {
                            changed |= board.set_number(
                                Position::new(house.row_start(), col),
                                digit,
                                Self::NAME,
                            )?;
                        }
                        HouseKind::Box => {
                            for row in (0..9)
                                .filter(|row| *row < house.row_start() || *row > house.row_end())
                            {
                                changed |= board.set_number_impossible(
                                    Position::new(row, col),
                                    digit,
                                    Self::NAME,
                                )?;
                            }
                        }
                    }
                }

                if let Some(box_index) = boxes.as_single() {
                    match kind {
                        HouseKind::Box => {}
                        HouseKind::Row => {
                            // Claiming: the digit lives in this row's slice
                            // of the box, so clear the box's other rows.
                            changed |= Self::eliminate_from_box_outside_line(
                                board,
                                box_index,
                                digit,
                                |pos| pos.row() == house.row_start(),
                            )?;
                        }
                        HouseKind::Column => {
                            changed |= Self::eliminate_from_box_outside_line(
                                board,
                                box_index,
                                digit,
                                |pos| pos.col() == house.col_start(),
                            )?;
                        }
                    }
                }
            }
        }
        Ok(changed)
    }
}
