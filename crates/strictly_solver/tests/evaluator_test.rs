//! Tests for position evaluation over the whole reachable game.

mod common;

use common::{board, reachable_positions};
use strictly_solver::{LINES, Outcome, Player, Square, check_winner, evaluate, is_full, winners};

#[test]
fn test_reachable_position_count() {
    // Known size of the tic-tac-toe state space under legal play.
    assert_eq!(reachable_positions().len(), 5478);
}

#[test]
fn test_outcome_exclusive_and_consistent() {
    for position in reachable_positions() {
        let outcome = evaluate(&position);
        let owners = winners(&position);
        assert!(owners.len() <= 1, "double winner on\n{}", position);

        match outcome {
            Outcome::Won(player) => assert_eq!(owners, vec![player]),
            Outcome::Drawn => {
                assert!(owners.is_empty());
                assert!(is_full(&position));
            }
            Outcome::Undecided => {
                assert!(owners.is_empty());
                assert!(!is_full(&position));
            }
        }
    }
}

#[test]
fn test_evaluate_is_pure() {
    for position in reachable_positions() {
        assert_eq!(evaluate(&position), evaluate(&position));
    }
}

#[test]
fn test_mark_balance_holds_everywhere() {
    for position in reachable_positions() {
        let x = position.count(Player::X);
        let o = position.count(Player::O);
        assert!(x == o || x == o + 1);
    }
}

#[test]
fn test_every_line_wins() {
    // O completes one line each; X holds three cells off it.
    let boards = [
        "OOO XX. X..",
        "XX. OOO X..",
        "XX. X.. OOO",
        "OXX OX. O..",
        "XOX XO. .O.",
        "XXO X.O ..O",
        "OXX XO. ..O",
        "XXO XO. O..",
    ];
    for (line, text) in LINES.iter().zip(boards) {
        let position = board(text);
        assert_eq!(check_winner(&position), Some(Player::O), "line {:?}", line);
        for index in line {
            assert_eq!(position.squares()[*index], Square::Occupied(Player::O));
        }
    }
}

#[test]
fn test_drawn_board() {
    assert_eq!(evaluate(&board("XOX XOO OXX")), Outcome::Drawn);
}
