//! Human-style deduction rules for the Deduku Sudoku engine.
//!
//! This crate turns the board model of [`deduku_core`] into a solver:
//!
//! - [`technique`]: the five deduction rules, each implementing
//!   [`Technique`](technique::Technique), ordered from cheapest to most
//!   expensive
//! - [`solver`]: the [`Solver`] driver, which greedily applies the cheapest
//!   rule that still makes progress and restarts from the top after every
//!   success, until the board is solved or reaches a fixed point
//! - [`testing`]: a fluent harness for exercising a single technique against
//!   a prepared board
//!
//! The solver never guesses. A puzzle the five rules cannot finish is left
//! at its fixed point with every deduction made so far intact, and
//! [`Solver::solve`] reports `Ok(false)`.
//!
//! # Examples
//!
//! ```
//! use deduku_core::Board;
//! use deduku_solver::Solver;
//!
//! let mut board: Board = "\
//!     .6.|7.3|.1.\n\
//!     4..|9.1|..3\n\
//!     ...|.4.|...\n\
//!     58.|3.4|.21\n\
//!     ..6|.2.|5..\n\
//!     14.|8.6|.79\n\
//!     ...|.1.|...\n\
//!     2..|5.7|..4\n\
//!     .1.|6.8|.3."
//!     .parse()?;
//!
//! let mut solver = Solver::with_all_techniques();
//! let (solved, stats) = solver.solve(&mut board)?;
//! assert!(solved);
//! assert!(stats.total_steps > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use derive_more::{Display, Error, From};

use deduku_core::{BitSetError, EngineError, HouseId};

pub mod solver;
pub mod technique;
pub mod testing;

pub use self::solver::{Solver, SolverStats};

/// An error raised while solving.
///
/// Failures are immediate and fail-fast; the board is left exactly as it
/// was when the contradiction was detected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SolverError {
    /// A board-model failure, including the contradictions the model itself
    /// detects (empty candidate sets, homeless digits, conflicting commits).
    #[display("{_0}")]
    #[from]
    Engine(EngineError),

    /// More than two cells in one house are restricted to the same two
    /// candidates, so one of them can hold nothing.
    #[display("more than two cells in {house} are restricted to the same two candidates")]
    NakedPairExcess {
        /// The overcommitted house.
        house: HouseId,
    },

    /// More than two digits in one house are confined to the same two
    /// cells, so one of them has no home.
    #[display("more than two digits in {house} are confined to the same two cells")]
    HiddenPairExcess {
        /// The overcommitted house.
        house: HouseId,
    },
}

impl From<BitSetError> for SolverError {
    fn from(err: BitSetError) -> Self {
        Self::Engine(err.into())
    }
}
