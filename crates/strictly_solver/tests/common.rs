//! Shared helpers for solver integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use strictly_solver::{Cell, Outcome, Player, Position, Score, evaluate};

/// Every position reachable from the empty board by alternating play with
/// X first, including terminal ones.
pub fn reachable_positions() -> Vec<Position> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![Position::new()];
    while let Some(position) = stack.pop() {
        if !seen.insert(position) {
            continue;
        }
        order.push(position);
        if evaluate(&position) != Outcome::Undecided {
            continue;
        }
        let player = position.next_player();
        stack.extend(position.children(player).map(|(_, child)| child));
    }
    order
}

/// Plain minimax without pruning, scored for `optimizing_for`.
pub fn minimax(position: &Position, to_move: Player, optimizing_for: Player) -> Score {
    match evaluate(position) {
        Outcome::Won(player) if player == optimizing_for => Score::Win,
        Outcome::Won(_) => Score::Loss,
        Outcome::Drawn => Score::Draw,
        Outcome::Undecided => {
            let scores = position
                .children(to_move)
                .map(|(_, child)| minimax(&child, to_move.opponent(), optimizing_for));
            if to_move == optimizing_for {
                scores.max().unwrap_or(Score::Draw)
            } else {
                scores.min().unwrap_or(Score::Draw)
            }
        }
    }
}

pub fn board(text: &str) -> Position {
    text.parse().expect("test board should parse")
}

pub fn cell(index: usize) -> Cell {
    Cell::new(index).expect("test cell should be in range")
}
