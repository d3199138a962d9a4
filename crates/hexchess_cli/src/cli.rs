//! Command-line interface for hexchess.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hexchess - Glinski hexagonal chess on the command line
#[derive(Parser, Debug)]
#[command(name = "hexchess")]
#[command(about = "Play and inspect Glinski hexagonal chess save files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "hexchess.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print or write the save text of a new game
    New {
        /// Starting layout (defaults to the configured variant)
        #[arg(long)]
        variant: Option<String>,

        /// Write the save text to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replay a save file and print the position
    Show {
        /// Save file to load
        save: PathBuf,

        /// Print a JSON snapshot instead of the text board
        #[arg(long)]
        json: bool,
    },

    /// List movable pieces, or the destinations of one piece
    Moves {
        /// Save file to load
        save: PathBuf,

        /// Cell of the piece to inspect, e.g. f5
        cell: Option<String>,
    },

    /// Make a move and rewrite the save file
    Play {
        /// Save file to update
        save: PathBuf,

        /// Origin cell, e.g. f5
        from: String,

        /// Destination cell, e.g. f6
        to: String,

        /// Promotion piece (Q, R, B or N)
        #[arg(long)]
        promote: Option<char>,
    },

    /// Take back the last move and rewrite the save file
    Undo {
        /// Save file to update
        save: PathBuf,
    },
}
