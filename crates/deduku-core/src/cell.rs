//! A single cell of the board.

use crate::{BitSet, EngineError, Position};

/// One square of the board.
///
/// A cell holds the set of digits it could still contain. A cell whose digit
/// was supplied by the puzzle is a *given*; a cell whose digit the engine
/// established is *deduced*. Either way the cell is frozen: its candidate
/// set has collapsed to the one digit and may no longer change (except by a
/// full [`Board::reset`](crate::Board::reset)).
///
/// Candidate mutation routes through [`Board`](crate::Board), which owns
/// propagation to peers and houses and the deduction journal; the cell
/// itself only exposes read access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    candidates: BitSet,
    given: bool,
    deduced: bool,
}

impl Cell {
    pub(crate) fn new(position: Position) -> Self {
        let mut candidates = BitSet::new(9, 1);
        candidates.set_all();
        Self {
            position,
            candidates,
            given: false,
            deduced: false,
        }
    }

    /// Returns this cell's position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns the set of digits this cell could still contain.
    #[must_use]
    pub const fn candidates(&self) -> &BitSet {
        &self.candidates
    }

    /// Returns how many candidate digits remain.
    #[must_use]
    pub const fn candidate_count(&self) -> u8 {
        self.candidates.len()
    }

    /// Tests whether this cell could contain `digit`.
    ///
    /// # Errors
    ///
    /// Returns an error if `digit` is not 1-9.
    pub fn is_number_possible(&self, digit: u8) -> Result<bool, EngineError> {
        Ok(self.candidates.contains(digit)?)
    }

    /// Returns `true` if the puzzle supplied this cell's digit.
    #[must_use]
    pub const fn is_given(&self) -> bool {
        self.given
    }

    /// Returns `true` if the engine established this cell's digit.
    #[must_use]
    pub const fn is_deduced(&self) -> bool {
        self.deduced
    }

    /// Returns `true` if this cell's candidates may no longer change.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.given || self.deduced
    }

    /// Returns `true` if this cell's digit is currently known by any means:
    /// given, deduced, or a sole remaining candidate.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoCandidates`] if the cell has no candidates
    /// left.
    pub fn is_known(&self) -> Result<bool, EngineError> {
        Ok(self.is_frozen() || self.sole_possible_number()?.is_some())
    }

    /// Returns the committed digit, if this cell is given or deduced.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoCandidates`] if the cell has no candidates
    /// left.
    pub fn number(&self) -> Result<Option<u8>, EngineError> {
        if self.is_frozen() {
            self.sole_possible_number()
        } else {
            Ok(None)
        }
    }

    /// Returns the sole remaining candidate, or `None` when two or more
    /// possibilities remain.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoCandidates`] if no candidate remains; a cell
    /// must always be able to contain something.
    pub fn sole_possible_number(&self) -> Result<Option<u8>, EngineError> {
        if self.candidates.is_empty() {
            return Err(EngineError::NoCandidates {
                position: self.position,
            });
        }
        Ok(self.candidates.as_single())
    }

    pub(crate) fn reset(&mut self) {
        self.given = false;
        self.deduced = false;
        self.candidates.set_all();
    }

    pub(crate) fn mark_given(&mut self) {
        self.given = true;
    }

    pub(crate) fn mark_deduced(&mut self) {
        self.deduced = true;
    }

    pub(crate) fn collapse_to(&mut self, digit: u8) -> Result<(), EngineError> {
        Ok(self.candidates.clear_all_but(digit)?)
    }

    pub(crate) fn add_candidate(&mut self, digit: u8) -> Result<bool, EngineError> {
        Ok(self.candidates.insert(digit)?)
    }

    pub(crate) fn remove_candidate(&mut self, digit: u8) -> Result<bool, EngineError> {
        Ok(self.candidates.remove(digit)?)
    }
}

/// Interprets one puzzle-text character.
///
/// Returns `Ok(Some(digit))` for `'1'`-`'9'` (a given), `Ok(None)` for the
/// recognized empty-cell characters `'.'`, `'0'`, and `' '`.
///
/// # Errors
///
/// Returns [`EngineError::UnrecognizedCharacter`] for anything else.
/// Bulk parsing ([`Board::set_number_string`](crate::Board::set_number_string))
/// skips such characters instead of failing.
pub fn parse_cell_char(character: char) -> Result<Option<u8>, EngineError> {
    match character {
        '1'..='9' => {
            #[allow(clippy::cast_possible_truncation)]
            let digit = character as u8 - b'0';
            Ok(Some(digit))
        }
        '.' | '0' | ' ' => Ok(None),
        _ => Err(EngineError::UnrecognizedCharacter { character }),
    }
}
