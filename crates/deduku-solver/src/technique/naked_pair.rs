//! The Naked Pair rule: two cells sharing the same two candidates.

use deduku_core::{BitSet, Board, HouseId, Position};

use super::{BoxedTechnique, Technique};
use crate::SolverError;

/// Two open cells in one house restricted to the same two candidates claim
/// those digits between them, so the pair can be eliminated from the
/// house's other seven cells.
///
/// Within each house only the first pairing found is exploited. A *third*
/// cell restricted to the same two candidates would leave one of the three
/// with nothing, and is reported as [`SolverError::NakedPairExcess`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NakedPair;

impl NakedPair {
    /// The name of this technique.
    pub const NAME: &'static str = "Naked Pair";

    /// Creates the technique.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Technique for NakedPair {
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
            let mut pair_cells: Vec<(Position, BitSet)> = Vec::new();
            for pos in house.positions() {
                let cell = board.cell(pos);
                if !cell.is_frozen() && cell.candidate_count() == 2 {
                    pair_cells.push((pos, *cell.candidates()));
                }
            }

            let mut found = None;
            'search: for (i, &(first, candidates)) in pair_cells.iter().enumerate() {
                for &(second, other) in &pair_cells[i + 1..] {
                    if candidates == other {
                        let excess = pair_cells
                            .iter()
                            .filter(|(_, set)| *set == candidates)
                            .count();
                        if excess > 2 {
                            return Err(SolverError::NakedPairExcess { house: id });
                        }
                        found = Some((first, second, candidates));
                        break 'search;
                    }
                }
            }

            if let Some((first, second, candidates)) = found {
                for pos in house.positions() {
                    if pos == first || pos == second {
                        continue;
                    }
                    for digit in candidates.iter_set() {
                        changed |= board.set_number_impossible(pos, digit, Self::NAME)?;
                    }
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TechniqueTester;

    fn restrict_to_pair(tester: &mut TechniqueTester, pos: Position, pair: [u8; 2]) {
        for digit in 1..=9 {
            if !pair.contains(&digit) {
                tester.remove_candidate(pos, digit);
            }
        }
    }

    #[test]
    fn test_pair_eliminates_from_rest_of_row() {
        let mut tester = TechniqueTester::new();
        restrict_to_pair(&mut tester, Position::new(0, 0), [1, 2]);
        restrict_to_pair(&mut tester, Position::new(0, 4), [1, 2]);
        let mut tester = tester.apply_once(&NakedPair::new());
        for col in [1, 2, 3, 5, 6, 7, 8] {
            tester.assert_removed(Position::new(0, col), 1);
            tester.assert_removed(Position::new(0, col), 2);
        }
        tester.assert_candidate_remains(Position::new(0, 0), 1);
        tester.assert_candidate_remains(Position::new(0, 4), 2);
    }

    #[test]
    fn test_pair_in_box_eliminates_from_box() {
        let mut tester = TechniqueTester::new();
        restrict_to_pair(&mut tester, Position::new(3, 3), [8, 9]);
        restrict_to_pair(&mut tester, Position::new(5, 5), [8, 9]);
        let mut tester = tester.apply_once(&NakedPair::new());
        tester.assert_removed(Position::new(4, 4), 8);
        tester.assert_removed(Position::new(4, 4), 9);
        tester.assert_removed(Position::new(3, 4), 8);
    }

    #[test]
    fn test_different_pairs_do_not_interact() {
        let mut tester = TechniqueTester::new();
        restrict_to_pair(&mut tester, Position::new(0, 0), [1, 2]);
        restrict_to_pair(&mut tester, Position::new(0, 4), [1, 3]);
        tester.apply_once(&NakedPair::new()).assert_stuck();
    }

    #[test]
    fn test_no_progress_on_open_board() {
        TechniqueTester::new()
            .apply_once(&NakedPair::new())
            .assert_stuck();
    }

    #[test]
    fn test_three_cells_with_same_pair_is_a_contradiction() {
        let mut tester = TechniqueTester::new();
        restrict_to_pair(&mut tester, Position::new(0, 0), [1, 2]);
        restrict_to_pair(&mut tester, Position::new(0, 4), [1, 2]);
        restrict_to_pair(&mut tester, Position::new(0, 8), [1, 2]);
        let err = NakedPair::new().apply(tester.board_mut()).unwrap_err();
        assert_eq!(err, SolverError::NakedPairExcess { house: HouseId::Row(0) });
    }
}
