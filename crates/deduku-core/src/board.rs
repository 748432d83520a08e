//! The board: an arena owning every cell and house.

use std::str::FromStr;

use tinyvec::ArrayVec;

use crate::{Cell, EngineError, House, HouseId, Position, cell};

/// Whether a [`Deduction`] placed a digit or removed a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeductionKind {
    /// A digit was committed to a cell.
    Placement,
    /// A candidate digit was removed from a cell.
    Elimination,
}

/// One recorded change to the board state.
///
/// Every placement and every candidate elimination appends one of these to
/// the board's journal, tagged with the reason text supplied by whoever
/// triggered the mutation. The journal is write-only from the board's point
/// of view; decision logic never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deduction {
    /// The affected cell.
    pub position: Position,
    /// The digit placed or eliminated.
    pub digit: u8,
    /// Whether this was a placement or an elimination.
    pub kind: DeductionKind,
    /// Why the change was made, e.g. the name of the deduction rule.
    pub reason: &'static str,
}

impl Deduction {
    /// Returns `true` if this deduction removed a candidate rather than
    /// placing a digit.
    #[must_use]
    pub const fn is_elimination(&self) -> bool {
        matches!(self.kind, DeductionKind::Elimination)
    }
}

/// The reason recorded for placements and eliminations caused by parsing a
/// puzzle's givens.
pub const GIVEN_REASON: &str = "Given";

/// A 9x9 Sudoku board: 81 cells plus the 27 houses that constrain them.
///
/// The board is the sole mutation entry point. [`set_number`] performs the
/// one piece of eager constraint propagation in the engine: committing a
/// digit eliminates it from the cell's 20 peers and marks it known in the
/// cell's three houses. Everything beyond that is applied iteratively by a
/// solver.
///
/// [`set_number`]: Board::set_number
///
/// # Examples
///
/// ```
/// use deduku_core::{Board, Position};
///
/// let mut board = Board::new();
/// board.set_number(Position::new(4, 4), 5, "example")?;
/// assert!(!board.cell(Position::new(4, 8)).is_number_possible(5)?);
/// assert!(board.house(deduku_core::HouseId::Row(4)).is_number_known(5)?);
/// # Ok::<(), deduku_core::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 9]; 9],
    rows: [House; 9],
    cols: [House; 9],
    boxes: [House; 9],
    journal: Vec<Deduction>,
}

impl Board {
    /// Creates a board with every cell open and every candidate possible.
    #[must_use]
    pub fn new() -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                #[allow(clippy::cast_possible_truncation)]
                let pos = Position::new(row as u8, col as u8);
                Cell::new(pos)
            })
        });
        #[allow(clippy::cast_possible_truncation)]
        let rows = std::array::from_fn(|i| House::new(i as u8, i as u8, 0, 8));
        #[allow(clippy::cast_possible_truncation)]
        let cols = std::array::from_fn(|i| House::new(0, 8, i as u8, i as u8));
        #[allow(clippy::cast_possible_truncation)]
        let boxes = std::array::from_fn(|i| {
            let row = i as u8 / 3 * 3;
            let col = i as u8 % 3 * 3;
            House::new(row, row + 2, col, col + 2)
        });
        Self {
            cells,
            rows,
            cols,
            boxes,
            journal: Vec::new(),
        }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Returns the house addressed by `id`.
    #[must_use]
    pub fn house(&self, id: HouseId) -> &House {
        match id {
            HouseId::Row(i) => &self.rows[usize::from(i)],
            HouseId::Column(i) => &self.cols[usize::from(i)],
            HouseId::Box(i) => &self.boxes[usize::from(i)],
        }
    }

    fn house_mut(&mut self, id: HouseId) -> &mut House {
        match id {
            HouseId::Row(i) => &mut self.rows[usize::from(i)],
            HouseId::Column(i) => &mut self.cols[usize::from(i)],
            HouseId::Box(i) => &mut self.boxes[usize::from(i)],
        }
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Returns the positions within a house where `digit` is still possible.
    ///
    /// # Errors
    ///
    /// Returns an error if `digit` is not 1-9.
    pub fn places_for_number(
        &self,
        id: HouseId,
        digit: u8,
    ) -> Result<ArrayVec<[Position; 9]>, EngineError> {
        let mut places = ArrayVec::new();
        for pos in self.house(id).positions() {
            if self.cell(pos).is_number_possible(digit)? {
                places.push(pos);
            }
        }
        Ok(places)
    }

    /// Counts the cells whose digit is currently known by any means.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoCandidates`] if any cell has run out of
    /// candidates.
    pub fn known_cell_count(&self) -> Result<usize, EngineError> {
        let mut count = 0;
        for cell in self.cells() {
            if cell.is_known()? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Returns `true` if every house has all nine digits known.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        HouseId::all().all(|id| self.house(id).known_numbers().is_full())
    }

    /// Commits `digit` to the cell at `pos`.
    ///
    /// Marks the cell deduced (unless it is a given), collapses its
    /// candidates to the digit, eliminates the digit from all 20 peers, and
    /// marks the digit known in the cell's row, column, and box. Each
    /// placement and successful peer elimination is journalled with
    /// `reason`.
    ///
    /// Re-committing a frozen cell with its own digit is a no-op reporting
    /// `Ok(false)`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotPossible`] if `digit` is not among the cell's
    ///   candidates
    /// - [`EngineError::FrozenCell`] if a frozen peer still holds `digit` as
    ///   a candidate, which means two cells in one house would share a digit
    pub fn set_number(
        &mut self,
        pos: Position,
        digit: u8,
        reason: &'static str,
    ) -> Result<bool, EngineError> {
        self.commit_number(pos, digit, reason, false)
    }

    fn commit_number(
        &mut self,
        pos: Position,
        digit: u8,
        reason: &'static str,
        given: bool,
    ) -> Result<bool, EngineError> {
        let cell = self.cell(pos);
        if !cell.is_number_possible(digit)? {
            return Err(EngineError::NotPossible {
                position: pos,
                digit,
                candidates: *cell.candidates(),
            });
        }
        if cell.is_frozen() {
            // The digit is possible in a frozen cell, so it is the cell's
            // sole candidate already.
            return Ok(false);
        }
        let cell = self.cell_mut(pos);
        if given {
            cell.mark_given();
        } else {
            cell.mark_deduced();
        }
        cell.collapse_to(digit)?;
        self.journal.push(Deduction {
            position: pos,
            digit,
            kind: DeductionKind::Placement,
            reason,
        });
        for peer in pos.peers() {
            self.set_number_impossible(peer, digit, reason)?;
        }
        for id in HouseId::containing(pos) {
            self.house_mut(id).set_number_known(digit)?;
        }
        Ok(true)
    }

    /// Records that the cell at `pos` cannot contain `digit`.
    ///
    /// Reports `Ok(false)` if the digit was already impossible. A successful
    /// removal is journalled with `reason`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FrozenCell`] if the cell is frozen and the
    /// digit is still possible there, i.e. the cell's committed digit is
    /// being contradicted.
    pub fn set_number_impossible(
        &mut self,
        pos: Position,
        digit: u8,
        reason: &'static str,
    ) -> Result<bool, EngineError> {
        let cell = self.cell(pos);
        if !cell.is_number_possible(digit)? {
            return Ok(false);
        }
        if cell.is_frozen() {
            return Err(EngineError::FrozenCell {
                position: pos,
                digit,
            });
        }
        self.cell_mut(pos).remove_candidate(digit)?;
        self.journal.push(Deduction {
            position: pos,
            digit,
            kind: DeductionKind::Elimination,
            reason,
        });
        Ok(true)
    }

    /// Re-admits `digit` as a candidate of the cell at `pos`.
    ///
    /// Reports `Ok(false)` if the digit was already possible. No deduction
    /// is journalled; this undoes one rather than making one.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FrozenCell`] if the cell is frozen.
    pub fn set_number_possible(&mut self, pos: Position, digit: u8) -> Result<bool, EngineError> {
        let cell = self.cell(pos);
        if cell.is_number_possible(digit)? {
            return Ok(false);
        }
        if cell.is_frozen() {
            return Err(EngineError::FrozenCell {
                position: pos,
                digit,
            });
        }
        self.cell_mut(pos).add_candidate(digit)
    }

    /// Restores every cell and house to the fresh, fully-open state and
    /// clears the journal.
    pub fn reset(&mut self) {
        for row in &mut self.cells {
            for cell in row {
                cell.reset();
            }
        }
        for house in self
            .rows
            .iter_mut()
            .chain(self.cols.iter_mut())
            .chain(self.boxes.iter_mut())
        {
            house.reset();
        }
        self.journal.clear();
    }

    /// Loads a puzzle from text, replacing the board's current contents.
    ///
    /// Characters `'1'`-`'9'` fill the next cell (row-major) as a given;
    /// `'.'`, `'0'`, and `' '` leave it open. Any other character, such as
    /// decorative pipes, dashes, or newlines, is skipped. Exactly 81
    /// recognized characters are consumed; anything after the 81st is
    /// ignored.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InsufficientInput`] if the text runs out before 81
    ///   cells are supplied
    /// - [`EngineError::NotPossible`] or [`EngineError::FrozenCell`] if the
    ///   givens contradict each other
    pub fn set_number_string(&mut self, text: &str) -> Result<(), EngineError> {
        self.reset();
        let mut chars = text.chars();
        let mut supplied = 0;
        for pos in Position::all() {
            let given = loop {
                let Some(character) = chars.next() else {
                    return Err(EngineError::InsufficientInput { supplied });
                };
                match cell::parse_cell_char(character) {
                    Ok(given) => break given,
                    Err(_) => {} // Decorative character; skip it.
                }
            };
            supplied += 1;
            if let Some(digit) = given {
                self.commit_number(pos, digit, GIVEN_REASON, true)?;
            }
        }
        Ok(())
    }

    /// Serializes the board's givens: 81 characters row-major, a given's
    /// digit or `'.'` for every other cell. With `formatted`, a newline
    /// follows each row.
    ///
    /// Deduction state is intentionally not serialized; parsing the result
    /// reproduces the original puzzle.
    #[must_use]
    pub fn number_string(&self, formatted: bool) -> String {
        let mut out = String::with_capacity(if formatted { 90 } else { 81 });
        for pos in Position::all() {
            let cell = self.cell(pos);
            let character = if cell.is_given() {
                // A given always has a sole candidate.
                cell.candidates()
                    .as_single()
                    .map_or('.', |digit| char::from(b'0' + digit))
            } else {
                '.'
            };
            out.push(character);
            if formatted && pos.col() == 8 {
                out.push('\n');
            }
        }
        out
    }

    /// Drains and returns every deduction journalled since the last drain.
    pub fn take_deductions(&mut self) -> Vec<Deduction> {
        std::mem::take(&mut self.journal)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::new();
        board.set_number_string(s)?;
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.number_string(true))
    }
}
