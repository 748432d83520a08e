//! End-to-end solves of real puzzles.

use deduku_core::{Board, EngineError, Position};
use deduku_solver::{
    Solver, SolverError,
    technique::{BoxedTechnique, HiddenSingle, LockedCandidates, Single},
};

/// A teaching puzzle that yields to the three cheapest rules.
const EASY: &str = "\
    .6.|7.3|.1.\n\
    4..|9.1|..3\n\
    ...|.4.|...\n\
    ---+---+---\n\
    58.|3.4|.21\n\
    ..6|.2.|5..\n\
    14.|8.6|.79\n\
    ---+---+---\n\
    ...|.1.|...\n\
    2..|5.7|..4\n\
    .1.|6.8|.3.";

/// Arto Inkala's "AI Escargot". The five rules find exactly one deduction
/// in it before sticking.
const AI_ESCARGOT: &str = "\
    1..|..7|.9.\n\
    .3.|.2.|..8\n\
    ..9|6..|5..\n\
    ---+---+---\n\
    ..5|3..|9..\n\
    .1.|.8.|..2\n\
    6..|..4|...\n\
    ---+---+---\n\
    3..|...|.1.\n\
    .4.|...|..7\n\
    ..7|...|3..";

/// A complete, conflict-free grid (every cell a given).
const SOLVED: &str = "\
    123456789\
    456789123\
    789123456\
    234567891\
    567891234\
    891234567\
    345678912\
    678912345\
    912345678";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn given_count(text: &str) -> usize {
    text.chars()
        .filter(|c| ('1'..='9').contains(c))
        .count()
}

fn canonical_givens(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '1'..='9' => Some(c),
            '.' | '0' | ' ' => Some('.'),
            _ => None,
        })
        .collect()
}

#[test]
fn easy_puzzle_solves_with_three_cheapest_rules() {
    init_logging();
    let mut board: Board = EASY.parse().unwrap();
    let techniques: Vec<BoxedTechnique> = vec![
        Box::new(Single::new()),
        Box::new(HiddenSingle::new()),
        Box::new(LockedCandidates::new()),
    ];
    let mut solver = Solver::new(techniques);

    let (solved, stats) = solver.solve(&mut board).unwrap();
    assert!(solved, "stats: {stats:?}");
    assert!(board.is_solved());
    for pos in Position::all() {
        assert!(board.cell(pos).is_known().unwrap());
        assert!(board.cell(pos).number().unwrap().is_some());
    }
    assert!(stats.has_progress());
}

#[test]
fn easy_puzzle_solves_with_full_technique_set() {
    init_logging();
    let mut board: Board = EASY.parse().unwrap();
    let mut solver = Solver::with_all_techniques();
    let (solved, _stats) = solver.solve(&mut board).unwrap();
    assert!(solved);
}

#[test]
fn easy_puzzle_serialization_preserves_givens_only() {
    let mut board: Board = EASY.parse().unwrap();
    let expected = canonical_givens(EASY);
    assert_eq!(board.number_string(false), expected);

    // Solving fills cells by deduction, but serialization still reports
    // just the original givens.
    let mut solver = Solver::with_all_techniques();
    solver.solve(&mut board).unwrap();
    assert_eq!(board.number_string(false), expected);
}

#[test]
fn ai_escargot_stops_at_its_exact_fixed_point() {
    init_logging();
    let mut board: Board = AI_ESCARGOT.parse().unwrap();
    let mut solver = Solver::with_all_techniques();

    let (solved, stats) = solver.solve(&mut board).unwrap();
    assert!(!solved);
    assert!(!board.is_solved());

    // The only deduction the five rules can make: column 3 has a single
    // place left for 1, at H3.
    assert_eq!(stats.count(HiddenSingle::NAME), 1);
    assert_eq!(stats.total_steps, 1);
    let placed = Position::new(7, 2);
    assert!(board.cell(placed).is_deduced());
    assert_eq!(board.cell(placed).number().unwrap(), Some(1));
    assert_eq!(
        board.known_cell_count().unwrap(),
        given_count(AI_ESCARGOT) + 1
    );

    // Spot-check the residual candidates of some open cells.
    assert_eq!(
        board.cell(Position::new(1, 2)).candidates().to_string(),
        "{4, 6}"
    );
    assert_eq!(
        board.cell(Position::new(4, 2)).candidates().to_string(),
        "{3, 4}"
    );
    assert_eq!(
        board.cell(Position::new(8, 3)).candidates().to_string(),
        "{1, 2, 4, 5, 8, 9}"
    );

    // The fixed point is a fixed point: running again changes nothing,
    // and the givens survived untouched.
    let (solved_again, second) = solver.solve(&mut board).unwrap();
    assert!(!solved_again);
    assert!(!second.has_progress());
    assert_eq!(board.number_string(false), canonical_givens(AI_ESCARGOT));
}

#[test]
fn observer_reports_each_deduced_placement() {
    use std::{cell::RefCell, rc::Rc};

    let mut board: Board = EASY.parse().unwrap();
    let placements = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&placements);

    let mut solver = Solver::with_all_techniques();
    solver.set_observer(move |deduction| {
        if !deduction.is_elimination() {
            *sink.borrow_mut() += 1;
        }
    });

    let (solved, _stats) = solver.solve(&mut board).unwrap();
    assert!(solved);
    // The givens were journalled by the parser, not the solver; the
    // observer sees exactly the deduced placements.
    assert_eq!(*placements.borrow(), 81 - given_count(EASY));
}

#[test]
fn too_short_input_is_rejected() {
    let result: Result<Board, _> = ".........".parse();
    assert_eq!(
        result.unwrap_err(),
        EngineError::InsufficientInput { supplied: 9 }
    );
}

#[test]
fn conflicting_givens_fail_fast() {
    // Two 5s in the top row.
    let mut text = String::from("5...5....");
    text.push_str(&".".repeat(72));
    let result: Result<Board, _> = text.parse();
    assert!(matches!(
        result.unwrap_err(),
        EngineError::NotPossible { digit: 5, .. }
    ));
}

#[test]
fn fully_given_board_reports_solved_at_entry() {
    let mut board: Board = SOLVED.parse().unwrap();
    assert!(board.is_solved());
    assert_eq!(board.known_cell_count().unwrap(), 81);

    let mut solver = Solver::with_all_techniques();
    let (solved, stats) = solver.solve(&mut board).unwrap();
    assert!(solved);
    assert!(!stats.has_progress());
}

#[test]
fn resolving_a_solved_board_reports_solved_without_progress() {
    let mut board: Board = EASY.parse().unwrap();
    let mut solver = Solver::with_all_techniques();
    let (solved, _) = solver.solve(&mut board).unwrap();
    assert!(solved);

    let (still_solved, stats) = solver.solve(&mut board).unwrap();
    assert!(still_solved);
    assert!(!stats.has_progress());
    assert!(board.is_solved());
}

#[test]
fn reset_allows_reloading_a_new_puzzle() {
    let mut board: Board = EASY.parse().unwrap();
    let mut solver = Solver::with_all_techniques();
    solver.solve(&mut board).unwrap();

    board.set_number_string(AI_ESCARGOT).unwrap();
    assert_eq!(board.number_string(false), canonical_givens(AI_ESCARGOT));
    assert_eq!(board.known_cell_count().unwrap(), given_count(AI_ESCARGOT));
}

#[test]
fn error_type_converts_from_engine_errors() {
    let engine = EngineError::InsufficientInput { supplied: 0 };
    let solver: SolverError = engine.clone().into();
    assert_eq!(solver, SolverError::Engine(engine));
}
