//! Hexchess CLI - terminal front end for the hexchess rules engine
//!
//! Reads and writes save files, prints a text board and forwards moves to
//! [`hexchess::Game`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod render;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{CliConfig, ConfigError};

// Crate-level exports - Handlers
pub use commands::{load_game, run, run_moves, run_new, run_play, run_show, run_undo};
pub use render::{piece_char, render_board, render_status};
