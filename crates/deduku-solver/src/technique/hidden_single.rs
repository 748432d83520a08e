//! The Hidden Single rule: a digit with only one possible place in a house.

use deduku_core::{Board, EngineError, HouseId};

use super::{BoxedTechnique, Technique};
use crate::SolverError;

/// Commits a digit that has exactly one remaining place within a house,
/// even if that cell still lists other candidates.
///
/// A digit that is unknown in a house but has *no* remaining place there is
/// a contradiction and aborts the solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// The name of this technique.
    pub const NAME: &'static str = "Hidden Single";

    /// Creates the technique.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Technique for HiddenSingle {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolverError> {
        let mut changed = false;
        for id in HouseId::all() {
            // Snapshot the unknown digits; placements below update the
            // live house.
            let house = *board.house(id);
            for digit in house.unknown_numbers() {
                if board.house(id).is_number_known(digit)? {
                    continue;
                }
                let places = board.places_for_number(id, digit)?;
                match places.as_slice() {
                    [] => {
                        return Err(EngineError::NoPlaceInHouse { house: id, digit }.into());
                    }
                    [place] => {
                        board.set_number(*place, digit, Self::NAME)?;
                        changed = true;
                    }
                    _ => {}
                }
            }
        }
        Ok(changed)
    }
}
