//! The fixed-point solver driver.

use std::collections::HashMap;

use deduku_core::{Board, Deduction};

use crate::{
    SolverError,
    technique::{self, BoxedTechnique},
};

/// Statistics collected while solving.
///
/// Tracks how many times each technique was successfully applied and the
/// total number of solving steps taken.
#[derive(Debug, Default, Clone)]
pub struct SolverStats {
    /// Map of technique names to the number of successful applications.
    pub applications: HashMap<&'static str, usize>,
    /// Total number of solving steps (sum of all applications).
    pub total_steps: usize,
}

impl SolverStats {
    /// Creates an empty statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many times the named technique was applied.
    #[must_use]
    pub fn count(&self, technique_name: &str) -> usize {
        self.applications.get(technique_name).copied().unwrap_or(0)
    }

    /// Returns `true` if any technique was applied at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }
}

/// An observer invoked once per recorded deduction.
pub type DeductionObserver = Box<dyn FnMut(&Deduction)>;

/// A solver that applies human-style deduction rules to a board.
///
/// The solver tries its techniques in order and applies the first one that
/// makes progress; after every success the next step starts again from the
/// cheapest technique. Solving therefore runs the cheapest rules to their
/// fixed point before anything expensive is attempted, and stops when a
/// full pass over all techniques changes nothing.
///
/// An optional observer receives every [`Deduction`] the board records,
/// drained at step boundaries. The observer watches; it never steers.
///
/// # Examples
///
/// ```
/// use deduku_core::Board;
/// use deduku_solver::Solver;
///
/// let mut solver = Solver::with_all_techniques();
/// let mut board = Board::new();
///
/// // An open board gives the techniques nothing to work with.
/// let (solved, stats) = solver.solve(&mut board)?;
/// assert!(!solved);
/// assert!(!stats.has_progress());
/// # Ok::<(), deduku_solver::SolverError>(())
/// ```
pub struct Solver {
    techniques: Vec<BoxedTechnique>,
    observer: Option<DeductionObserver>,
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("techniques", &self.techniques)
            .field("observer", &self.observer.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Solver {
    /// Creates a solver with the given techniques, tried in order.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self {
            techniques,
            observer: None,
        }
    }

    /// Creates a solver with all five techniques in their standard order.
    ///
    /// # Examples
    ///
    /// ```
    /// let solver = deduku_solver::Solver::with_all_techniques();
    /// ```
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(technique::all_techniques())
    }

    /// Registers an observer to be invoked for every deduction made while
    /// solving.
    pub fn set_observer(&mut self, observer: impl FnMut(&Deduction) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the registered observer, if any.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    fn drain_deductions(&mut self, board: &mut Board) {
        let deductions = board.take_deductions();
        for deduction in &deductions {
            log::trace!(
                "{}: {} {} at {}",
                deduction.reason,
                if deduction.is_elimination() {
                    "eliminate"
                } else {
                    "place"
                },
                deduction.digit,
                deduction.position,
            );
        }
        if let Some(observer) = &mut self.observer {
            for deduction in &deductions {
                observer(deduction);
            }
        }
    }

    /// Applies one step of solving by trying each technique in order.
    ///
    /// The first technique that makes progress has its statistics entry
    /// incremented, the step's deductions are forwarded to the observer,
    /// and the method returns.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - a technique was applied and made progress
    /// * `Ok(false)` - no technique could make progress
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if a technique detects a contradiction.
    /// The board keeps every deduction made before the failure.
    pub fn step(&mut self, board: &mut Board, stats: &mut SolverStats) -> Result<bool, SolverError> {
        for i in 0..self.techniques.len() {
            let result = self.techniques[i].apply(board);
            let name = self.techniques[i].name();
            self.drain_deductions(board);
            if result? {
                log::debug!("{name} made progress");
                *stats.applications.entry(name).or_default() += 1;
                stats.total_steps += 1;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Applies techniques repeatedly until the board is solved or no
    /// technique makes progress.
    ///
    /// Deductions recorded before solving starts, such as the givens
    /// journalled while parsing, are discarded rather than reported: they
    /// are not the solver's work.
    ///
    /// # Returns
    ///
    /// `(solved, stats)`: whether the board is fully solved when the loop
    /// stops, and which techniques contributed. A board that is already
    /// solved at entry reports `(true, stats)` with empty stats; whether
    /// any work happened is [`SolverStats::has_progress`]. Calling `solve`
    /// again on the same board is harmless.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if any technique detects a contradiction.
    pub fn solve(&mut self, board: &mut Board) -> Result<(bool, SolverStats), SolverError> {
        let _ = board.take_deductions();
        let mut stats = SolverStats::new();
        while self.step(board, &mut stats)? {
            if board.is_solved() {
                break;
            }
        }
        Ok((board.is_solved(), stats))
    }
}

#[cfg(test)]
mod tests {
    use deduku_core::Position;

    use super::*;
    use crate::technique::{HiddenSingle, Single};

    fn singles_solver() -> Solver {
        Solver::new(vec![
            Box::new(Single::new()),
            Box::new(HiddenSingle::new()),
        ])
    }

    #[test]
    fn test_step_reports_no_progress_on_open_board() {
        let mut solver = singles_solver();
        let mut board = Board::new();
        let mut stats = SolverStats::new();
        assert!(!solver.step(&mut board, &mut stats).unwrap());
        assert_eq!(stats.total_steps, 0);
    }

    #[test]
    fn test_step_applies_cheapest_technique_first() {
        let mut solver = singles_solver();
        let mut board = Board::new();
        let mut stats = SolverStats::new();

        for digit in 1..=8 {
            board
                .set_number_impossible(Position::new(4, 4), digit, "test")
                .unwrap();
        }

        assert!(solver.step(&mut board, &mut stats).unwrap());
        assert_eq!(stats.count(Single::NAME), 1);
        assert_eq!(stats.count(HiddenSingle::NAME), 0);
        assert_eq!(stats.total_steps, 1);
        assert_eq!(board.cell(Position::new(4, 4)).number().unwrap(), Some(9));
    }

    #[test]
    fn test_observer_sees_step_deductions_only() {
        use std::{cell::RefCell, rc::Rc};

        let mut board = Board::new();
        // Pre-solve mutation; its journal entries must not reach the
        // observer.
        board
            .set_number_impossible(Position::new(0, 0), 1, "setup")
            .unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut solver = singles_solver();
        solver.set_observer(move |deduction| sink.borrow_mut().push(*deduction));

        let (solved, _stats) = solver.solve(&mut board).unwrap();
        assert!(!solved);
        assert!(seen.borrow().is_empty());

        for digit in 2..=8 {
            board
                .set_number_impossible(Position::new(0, 0), digit, "setup")
                .unwrap();
        }
        let _ = board.take_deductions();
        solver.solve(&mut board).unwrap();
        let seen = seen.borrow();
        assert!(!seen.is_empty());
        assert!(seen.iter().any(|d| !d.is_elimination()
            && d.position == Position::new(0, 0)
            && d.digit == 9
            && d.reason == Single::NAME));
    }

    #[test]
    fn test_solve_is_idempotent() {
        let mut solver = singles_solver();
        let mut board = Board::new();
        for digit in 1..=8 {
            board
                .set_number_impossible(Position::new(2, 7), digit, "test")
                .unwrap();
        }

        let (_, first) = solver.solve(&mut board).unwrap();
        assert!(first.has_progress());
        let (_, second) = solver.solve(&mut board).unwrap();
        assert!(!second.has_progress());
    }

    #[test]
    fn test_stats_count_and_progress() {
        let mut stats = SolverStats::new();
        assert!(!stats.has_progress());
        assert_eq!(stats.count("anything"), 0);
        *stats.applications.entry("anything").or_default() += 2;
        stats.total_steps = 2;
        assert_eq!(stats.count("anything"), 2);
        assert!(stats.has_progress());
    }
}
