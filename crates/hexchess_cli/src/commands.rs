//! Subcommand handlers.
//!
//! Each handler reads and writes save files itself and prints to the
//! supplied writer, so tests can capture the output.

use crate::cli::Command;
use crate::config::CliConfig;
use crate::render::{render_board, render_status};
use anyhow::{Context, Result, anyhow, bail};
use hexchess::{Cell, Game, Move, PieceKind, Variant};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Dispatches a parsed subcommand.
#[instrument(skip(config, out))]
pub fn run(command: Command, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Command::New { variant, output } => {
            run_new(config, variant.as_deref(), output.as_deref(), out)
        }
        Command::Show { save, json } => run_show(config, &save, json, out),
        Command::Moves { save, cell } => run_moves(&save, cell.as_deref(), out),
        Command::Play {
            save,
            from,
            to,
            promote,
        } => run_play(&save, &from, &to, promote, out),
        Command::Undo { save } => run_undo(&save, out),
    }
}

/// Reads a save file and replays it.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_game(path: &Path) -> Result<Game> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read save file {}", path.display()))?;
    let game = Game::from_save(&text)
        .with_context(|| format!("Failed to load save file {}", path.display()))?;
    debug!(moves = game.history().len(), "Loaded game");
    Ok(game)
}

#[instrument(skip(game))]
fn store_game(path: &Path, game: &Game) -> Result<()> {
    std::fs::write(path, game.save_text())
        .with_context(|| format!("Failed to write save file {}", path.display()))
}

/// Prints or writes the save text of a fresh game.
#[instrument(skip(config, out))]
pub fn run_new(
    config: &CliConfig,
    variant: Option<&str>,
    output: Option<&Path>,
    out: &mut impl Write,
) -> Result<()> {
    let variant = match variant {
        Some(name) => {
            Variant::from_str(name).map_err(|_| anyhow!("Unknown variant '{}'", name))?
        }
        None => *config.default_variant(),
    };
    if !variant.is_loadable() {
        bail!("Variant '{}' cannot be saved and reloaded", variant);
    }

    let game = Game::new(variant);
    match output {
        Some(path) => {
            store_game(path, &game)?;
            info!(%variant, path = %path.display(), "New game written");
            writeln!(out, "New {} game written to {}", variant, path.display())?;
        }
        None => writeln!(out, "{}", game.save_text())?,
    }
    Ok(())
}

/// Prints the board and status of a saved game, or its JSON snapshot.
#[instrument(skip(config, out))]
pub fn run_show(config: &CliConfig, save: &Path, json: bool, out: &mut impl Write) -> Result<()> {
    let game = load_game(save)?;
    if json || *config.json() {
        let snapshot = serde_json::to_string_pretty(&game.snapshot())
            .context("Failed to serialize snapshot")?;
        writeln!(out, "{}", snapshot)?;
    } else {
        write!(out, "{}", render_board(game.board(), *config.show_labels()))?;
        writeln!(out, "{}", render_status(&game))?;
    }
    Ok(())
}

/// Lists the movable pieces with their destinations, or the destinations
/// of the piece on `cell`.
#[instrument(skip(out))]
pub fn run_moves(save: &Path, cell: Option<&str>, out: &mut impl Write) -> Result<()> {
    let game = load_game(save)?;
    let join = |cells: Vec<Cell>| {
        cells
            .iter()
            .map(Cell::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    };

    match cell {
        Some(label) => {
            let from = parse_cell(label)?;
            writeln!(out, "{}", join(game.legal_moves(from)))?;
        }
        None => {
            for from in game.movable_pieces() {
                writeln!(out, "{}: {}", from, join(game.legal_moves(from)))?;
            }
        }
    }
    Ok(())
}

/// Executes a move and rewrites the save file.
#[instrument(skip(out))]
pub fn run_play(
    save: &Path,
    from: &str,
    to: &str,
    promote: Option<char>,
    out: &mut impl Write,
) -> Result<()> {
    let mut game = load_game(save)?;
    let from = parse_cell(from)?;
    let to = parse_cell(to)?;
    let mv = match promote {
        Some(letter) => {
            let kind = PieceKind::from_shorthand(letter.to_ascii_uppercase())
                .filter(|kind| kind.is_promotion_target())
                .ok_or_else(|| anyhow!("Cannot promote to '{}'", letter))?;
            Move::promoting(from, to, kind)
        }
        None => Move::new(from, to),
    };

    game.execute(mv)
        .with_context(|| format!("Move {} rejected", mv))?;
    store_game(save, &game)?;
    writeln!(out, "{}", game.notation())?;
    writeln!(out, "{}", render_status(&game))?;
    Ok(())
}

/// Takes back the last move and rewrites the save file.
#[instrument(skip(out))]
pub fn run_undo(save: &Path, out: &mut impl Write) -> Result<()> {
    let mut game = load_game(save)?;
    match game.undo()? {
        Some(mv) => {
            store_game(save, &game)?;
            writeln!(out, "Took back {}", mv)?;
            writeln!(out, "{}", render_status(&game))?;
        }
        None => writeln!(out, "Nothing to undo")?,
    }
    Ok(())
}

fn parse_cell(label: &str) -> Result<Cell> {
    Cell::from_str(label).with_context(|| format!("Invalid cell '{}'", label))
}
