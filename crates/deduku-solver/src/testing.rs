//! Test utilities for exercising techniques against prepared boards.
//!
//! [`TechniqueTester`] wraps a [`Board`], remembers its state before a
//! technique ran, and offers chainable assertions about what the technique
//! did. It is used throughout this crate's tests and is equally usable by
//! downstream crates testing their own [`Technique`] implementations.
//!
//! # Examples
//!
//! ```
//! use deduku_core::Position;
//! use deduku_solver::{technique::Single, testing::TechniqueTester};
//!
//! let mut tester = TechniqueTester::new();
//! let pos = Position::new(0, 0);
//! for digit in 2..=9 {
//!     tester.remove_candidate(pos, digit);
//! }
//! tester.apply_once(&Single::new()).assert_placed(pos, 1);
//! ```

use deduku_core::{Board, Position};

use crate::technique::Technique;

/// A fluent harness for testing a single technique application.
#[derive(Debug, Clone)]
pub struct TechniqueTester {
    before: Board,
    board: Board,
    progressed: Option<bool>,
}

impl Default for TechniqueTester {
    fn default() -> Self {
        Self::new()
    }
}

impl TechniqueTester {
    /// Creates a tester over a fully open board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Creates a tester over the given board.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            before: board.clone(),
            board,
            progressed: None,
        }
    }

    /// Creates a tester over a board parsed from puzzle text.
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid puzzle.
    #[must_use]
    #[track_caller]
    pub fn from_str(text: &str) -> Self {
        let board: Board = text.parse().expect("valid puzzle text");
        Self::with_board(board)
    }

    /// Removes a candidate while preparing the board under test.
    ///
    /// # Panics
    ///
    /// Panics if the removal is rejected, e.g. for a frozen cell.
    #[track_caller]
    pub fn remove_candidate(&mut self, pos: Position, digit: u8) {
        self.board
            .set_number_impossible(pos, digit, "test setup")
            .expect("setup removal accepted");
        self.before = self.board.clone();
        self.progressed = None;
    }

    /// Returns the board under test.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns mutable access to the board under test, for driving a
    /// technique directly (e.g. to assert on its error).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Applies the technique once, capturing the board state beforehand.
    ///
    /// # Panics
    ///
    /// Panics if the technique reports a contradiction.
    #[must_use]
    #[track_caller]
    pub fn apply_once(mut self, technique: &dyn Technique) -> Self {
        self.before = self.board.clone();
        let progressed = technique
            .apply(&mut self.board)
            .expect("technique application succeeded");
        self.progressed = Some(progressed);
        self
    }

    /// Applies the technique repeatedly until it stops making progress.
    ///
    /// # Panics
    ///
    /// Panics if the technique reports a contradiction.
    #[must_use]
    #[track_caller]
    pub fn apply_until_stuck(mut self, technique: &dyn Technique) -> Self {
        self.before = self.board.clone();
        let mut progressed = false;
        while technique
            .apply(&mut self.board)
            .expect("technique application succeeded")
        {
            progressed = true;
        }
        self.progressed = Some(progressed);
        self
    }

    /// Asserts that the cell at `pos` ended committed to `digit`.
    #[track_caller]
    pub fn assert_placed(&mut self, pos: Position, digit: u8) -> &mut Self {
        let number = self
            .board
            .cell(pos)
            .number()
            .expect("cell has candidates left");
        assert_eq!(
            number,
            Some(digit),
            "expected {digit} committed at {pos}, found {number:?}"
        );
        self
    }

    /// Asserts that the last application removed candidate `digit` from the
    /// cell at `pos`.
    #[track_caller]
    pub fn assert_removed(&mut self, pos: Position, digit: u8) -> &mut Self {
        let was_possible = self
            .before
            .cell(pos)
            .is_number_possible(digit)
            .expect("digit in range");
        let is_possible = self
            .board
            .cell(pos)
            .is_number_possible(digit)
            .expect("digit in range");
        assert!(
            was_possible && !is_possible,
            "expected {digit} to be removed from {pos} (before: {was_possible}, after: {is_possible})"
        );
        self
    }

    /// Asserts that candidate `digit` is still possible at `pos`.
    #[track_caller]
    pub fn assert_candidate_remains(&mut self, pos: Position, digit: u8) -> &mut Self {
        assert!(
            self.board
                .cell(pos)
                .is_number_possible(digit)
                .expect("digit in range"),
            "expected {digit} to remain possible at {pos}"
        );
        self
    }

    /// Asserts that the last application made no progress at all.
    #[track_caller]
    pub fn assert_stuck(&mut self) -> &mut Self {
        assert_eq!(
            self.progressed,
            Some(false),
            "expected the technique to report no progress"
        );
        assert_eq!(
            self.before, self.board,
            "expected the board to be unchanged"
        );
        self
    }
}
