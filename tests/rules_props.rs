use proptest::prelude::*;
use tictactoe::{evaluate, is_draw, winner, winning_line, Board, GameStatus, Mark, LINES};

fn has_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.cells()[i] == Some(mark)))
}

fn mark_strategy() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

fn cell_strategy() -> impl Strategy<Value = Option<Mark>> {
    prop_oneof![Just(None), Just(Some(Mark::X)), Just(Some(Mark::O))]
}

#[test]
fn empty_board_has_no_winner_and_no_draw() {
    let board = Board::new();
    assert_eq!(winner(&board), None);
    assert!(!is_draw(&board));
    assert_eq!(evaluate(&board), GameStatus::InProgress);
}

#[test]
fn every_line_is_recognised() {
    for line in LINES {
        for mark in [Mark::X, Mark::O] {
            let mut cells = [None; 9];
            for i in line {
                cells[i] = Some(mark);
            }
            let board = Board::from_cells(cells);
            assert_eq!(winner(&board), Some(mark));
            assert_eq!(winning_line(&board), Some((line, mark)));
            assert_eq!(evaluate(&board), GameStatus::Won(mark));
        }
    }
}

#[test]
fn full_board_without_line_is_draw() {
    let board: Board = "XOX XXO OXO".parse().unwrap();
    assert_eq!(winner(&board), None);
    assert!(is_draw(&board));
    assert_eq!(evaluate(&board), GameStatus::Draw);
}

#[test]
fn full_board_with_line_is_not_draw() {
    let board: Board = "XXX OOX OXO".parse().unwrap();
    assert_eq!(winner(&board), Some(Mark::X));
    assert!(!is_draw(&board));
}

#[test]
fn first_line_in_order_wins_ties() {
    // Not reachable under alternating play, but evaluation must stay deterministic.
    let board: Board = "OOO ... XXX".parse().unwrap();
    assert_eq!(winning_line(&board), Some(([0, 1, 2], Mark::O)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn uniform_line_yields_its_mark(
        line_idx in 0..LINES.len(),
        mark in mark_strategy(),
        filler in proptest::array::uniform9(cell_strategy()),
    ) {
        let mut cells = filler;
        for i in LINES[line_idx] {
            cells[i] = Some(mark);
        }
        let board = Board::from_cells(cells);
        prop_assume!(!has_line(&board, mark.opponent()));
        prop_assert_eq!(winner(&board), Some(mark));
        prop_assert!(!is_draw(&board));
    }

    #[test]
    fn full_boards_are_draws_exactly_when_lineless(
        cells in proptest::array::uniform9(mark_strategy()),
    ) {
        let board = Board::from_cells(cells.map(Some));
        let lineless = !has_line(&board, Mark::X) && !has_line(&board, Mark::O);
        prop_assert_eq!(is_draw(&board), lineless);
        prop_assert_eq!(evaluate(&board) == GameStatus::Draw, lineless);
    }
}
