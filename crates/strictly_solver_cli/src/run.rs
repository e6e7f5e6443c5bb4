//! Command handlers.
//!
//! Handlers write to any [`Write`] sink and read from any [`BufRead`]
//! source so that whole sessions can be scripted.

use crate::config::PlayConfig;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_solver::{
    Cell, FULL_DEPTH, GameRecord, Outcome, Player, Position, Score, best_move, evaluate, search,
    threats,
};
use tracing::{debug, info, instrument, warn};

/// One line of input during interactive play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at a cell (entered 1-9).
    Place(Cell),
    /// Go back to the previous human turn.
    Undo,
    /// View a history entry.
    Jump(usize),
    /// Print the move list.
    History,
    /// Start over, optionally switching the engine's mark.
    Reset(Option<Player>),
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

impl FromStr for Input {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            bail!("Empty command");
        };
        let arg = words.next();
        let input = match head.to_ascii_lowercase().as_str() {
            "undo" | "u" => Input::Undo,
            "history" | "h" => Input::History,
            "help" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            "jump" | "j" => {
                let step = arg
                    .context("jump needs a step number")?
                    .parse()
                    .context("step must be a number")?;
                Input::Jump(step)
            }
            "reset" | "r" => Input::Reset(arg.map(str::parse::<Player>).transpose()?),
            other => {
                let label: usize = other
                    .parse()
                    .with_context(|| format!("Unknown command '{}'", other))?;
                let index = label
                    .checked_sub(1)
                    .context("cells are numbered 1 to 9")?;
                Input::Place(Cell::new(index)?)
            }
        };
        Ok(input)
    }
}

const HELP: &str = "Commands: 1-9 place a mark, undo, jump N, history, reset [x|o], help, quit";

/// Runs an interactive game until `quit` or end of input.
#[instrument(skip_all, fields(engine = %config.engine()))]
pub fn run_play<R: BufRead, W: Write>(config: &PlayConfig, input: R, out: &mut W) -> Result<()> {
    let mut record = GameRecord::new(*config.engine());
    info!(human = %record.human(), "Starting game");
    writeln!(out, "You play {}. {}", record.human(), HELP)?;
    print_turn(&record, config, out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Input>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };
        debug!(?command, "Received input");

        match command {
            Input::Quit => break,
            Input::Help => writeln!(out, "{}", HELP)?,
            Input::History => print_history(&record, out)?,
            Input::Place(cell) => match record.play(cell) {
                Ok(()) => print_turn(&record, config, out)?,
                Err(err) => {
                    warn!(%err, "Rejected move");
                    writeln!(out, "{}", err)?;
                }
            },
            Input::Undo => match previous_human_turn(&record) {
                Some(step) => {
                    record.jump_to(step)?;
                    print_turn(&record, config, out)?;
                }
                None => writeln!(out, "Nothing to undo")?,
            },
            Input::Jump(step) => match record.jump_to(step) {
                Ok(()) => print_turn(&record, config, out)?,
                Err(err) => writeln!(out, "{}", err)?,
            },
            Input::Reset(engine) => {
                record.reset(engine.unwrap_or(record.engine()));
                writeln!(out, "New game. You play {}.", record.human())?;
                print_turn(&record, config, out)?;
            }
        }
    }

    info!(status = %record.status(), "Session ended");
    Ok(())
}

/// Latest step before the viewed one at which the human is to move.
fn previous_human_turn(record: &GameRecord) -> Option<usize> {
    let parity = match record.human() {
        Player::X => 0,
        Player::O => 1,
    };
    (0..record.step()).rev().find(|step| step % 2 == parity)
}

fn print_turn<W: Write>(record: &GameRecord, config: &PlayConfig, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}\n", record.current())?;
    if *config.show_history() {
        print_history(record, out)?;
    }
    writeln!(out, "{}", record.status())?;
    Ok(())
}

fn print_history<W: Write>(record: &GameRecord, out: &mut W) -> Result<()> {
    for (step, label) in record.moves().iter().enumerate() {
        let marker = if step == record.step() { ">" } else { " " };
        writeln!(out, "{} {}. {}", marker, step, label)?;
    }
    Ok(())
}

/// Answer to a `best` query.
#[derive(Debug, Clone, Serialize)]
pub struct BestReport {
    /// The board searched.
    pub position: Position,
    /// Player to move.
    pub to_move: Player,
    /// Player the score is relative to.
    pub optimizing_for: Player,
    /// Classification of the board itself.
    pub outcome: Outcome,
    /// Value for `optimizing_for`.
    pub score: Score,
    /// Recommended cell (0-8), absent when the game is over.
    pub best_move: Option<Cell>,
    /// Cells that would win immediately for the player to move.
    pub threats: Vec<Cell>,
}

/// Searches a board given as text.
#[instrument]
pub fn analyze(
    board: &str,
    to_move: Option<Player>,
    optimize_for: Option<Player>,
) -> Result<BestReport> {
    let position: Position = board
        .parse()
        .with_context(|| format!("Invalid board '{}'", board))?;
    let to_move = to_move.unwrap_or_else(|| position.next_player());
    let optimizing_for = optimize_for.unwrap_or(to_move);

    let result = search(
        &position,
        FULL_DEPTH,
        Score::Loss,
        Score::Win,
        to_move == optimizing_for,
        to_move,
        optimizing_for,
    );

    Ok(BestReport {
        position,
        to_move,
        optimizing_for,
        outcome: evaluate(&position),
        score: result.score,
        best_move: result.best_move,
        threats: threats(&position, to_move),
    })
}

/// Prints the best move for a board.
pub fn run_best<W: Write>(
    board: &str,
    to_move: Option<Player>,
    optimize_for: Option<Player>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let report = analyze(board, to_move, optimize_for)?;

    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    writeln!(out, "{}\n", report.position)?;
    match report.best_move {
        Some(cell) => writeln!(
            out,
            "{} to move: play {} (score {} for {})",
            report.to_move,
            cell.label(),
            report.score.value(),
            report.optimizing_for
        )?,
        None => writeln!(
            out,
            "Game over: {:?} (score {} for {})",
            report.outcome,
            report.score.value(),
            report.optimizing_for
        )?,
    }
    if !report.threats.is_empty() {
        let labels: Vec<String> = report.threats.iter().map(|c| c.label().to_string()).collect();
        writeln!(out, "Winning now: {}", labels.join(", "))?;
    }
    Ok(())
}

/// Plays the engine against itself and prints every position.
#[instrument(skip_all)]
pub fn run_selfplay<W: Write>(out: &mut W) -> Result<Outcome> {
    let mut position = Position::new();
    let mut player = Player::X;

    while !evaluate(&position).is_terminal() {
        let Some(cell) = best_move(&position, player).best_move else {
            bail!("Engine found no move on an undecided board");
        };
        position = position.apply(cell, player)?;
        writeln!(out, "{} plays {}\n\n{}\n", player, cell.label(), position)?;
        player = player.opponent();
    }

    let outcome = evaluate(&position);
    info!(?outcome, "Self play finished");
    match outcome {
        Outcome::Won(winner) => writeln!(out, "Winner: {}", winner)?,
        _ => writeln!(out, "Draw")?,
    }
    Ok(outcome)
}
