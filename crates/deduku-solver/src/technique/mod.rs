//! The deduction rules.
//!
//! Each rule implements the [`Technique`] trait and is applied to a
//! [`Board`]. Rules only read board state and mutate it through the board's
//! checked entry points; they never consult the deduction journal.

use std::fmt::Debug;

use deduku_core::Board;

pub use self::{
    hidden_pair::HiddenPair, hidden_single::HiddenSingle, locked_candidates::LockedCandidates,
    naked_pair::NakedPair, single::Single,
};
use crate::SolverError;

mod hidden_pair;
mod hidden_single;
mod locked_candidates;
mod naked_pair;
mod single;

/// Returns all five techniques, ordered from cheapest to most expensive.
///
/// The order is fixed: Singles, Hidden Singles, Locked Candidates, Naked
/// Pairs, Hidden Pairs. The driver relies on this ordering to always try
/// the cheapest rule first.
///
/// # Examples
///
/// ```
/// let techniques = deduku_solver::technique::all_techniques();
/// assert_eq!(techniques.len(), 5);
/// assert_eq!(techniques[0].name(), "Single");
/// ```
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(Single::new()),
        Box::new(HiddenSingle::new()),
        Box::new(LockedCandidates::new()),
        Box::new(NakedPair::new()),
        Box::new(HiddenPair::new()),
    ]
}

/// A deduction rule.
///
/// One application scans the whole board and performs every deduction the
/// rule can currently justify.
pub trait Technique: Debug {
    /// Returns the name of the technique, used in statistics and reason
    /// text.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Applies the technique to a board.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - at least one placement or elimination was made
    /// * `Ok(false)` - the rule found nothing to do
    ///
    /// # Errors
    ///
    /// Returns an error if the rule detects a contradiction in the board.
    fn apply(&self, board: &mut Board) -> Result<bool, SolverError>;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
