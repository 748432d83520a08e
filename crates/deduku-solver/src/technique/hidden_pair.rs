//! The Hidden Pair rule: two digits confined to the same two cells.

use deduku_core::{Board, HouseId};

use super::{BoxedTechnique, Technique};
use crate::SolverError;

/// Two digits that can each go in only the same two cells of a house must
/// occupy exactly those cells, so every *other* candidate of those two
/// cells can be eliminated.
///
/// If a third digit is confined to the same two cells, three digits compete
/// for two places; this is reported as [`SolverError::HiddenPairExcess`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenPair;

impl HiddenPair {
    /// The name of this technique.
    pub const NAME: &'static str = "Hidden Pair";

    /// Creates the technique.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Technique for HiddenPair {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolverError> {
        let mut changed = false;
        for id in HouseId::all() {
            let house = *board.house(id);
            for first in house.unknown_numbers() {
                if board.house(id).is_number_known(first)? {
                    continue;
                }
                let places = board.places_for_number(id, first)?;
                if places.len() != 2 {
                    continue;
                }
                let mut partner = None;
                for second in house.unknown_numbers().filter(|second| *second > first) {
                    if board.places_for_number(id, second)? == places {
                        if partner.is_some() {
                            return Err(SolverError::HiddenPairExcess { house: id });
                        }
                        partner = Some(second);
                    }
                }
                let Some(second) = partner else {
                    continue;
                };
                // The pair owns both cells; strip everything else from them.
                for &pos in &places {
                    for digit in (1..=9).filter(|d| *d != first && *d != second) {
                        changed |= board.set_number_impossible(pos, digit, Self::NAME)?;
                    }
                }
            }
        }
        Ok(changed)
    }
}
