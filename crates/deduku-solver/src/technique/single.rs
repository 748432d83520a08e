//! The Single rule: commit cells with exactly one remaining candidate.

use deduku_core::{Board, Position};

use super::{BoxedTechnique, Technique};
use crate::SolverError;

/// Commits every open cell whose candidate set has collapsed to a single
/// digit.
///
/// This is the cheapest rule and runs first. A cell with *zero* candidates
/// is a contradiction and aborts the solve.
#[derive(Debug, Clone, Copy, Default)]
pub struct Single;

impl Single {
    /// The name of this technique.
    pub const NAME: &'static str = "Single";

    /// Creates the technique.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Technique for Single {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolverError> {
        let mut changed = false;
        for pos in Position::all() {
            let cell = board.cell(pos);
            if cell.is_frozen() {
                continue;
            }
            if let Some(digit) = cell.sole_possible_number()? {
                board.set_number(pos, digit, Self::NAME)?;
                changed = true;
            }
        }
        Ok(changed)
    }
}
