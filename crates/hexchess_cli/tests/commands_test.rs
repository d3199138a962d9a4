//! Tests for the subcommand handlers against real save files.

use hexchess::{GameSnapshot, GameStatus, Player};
use hexchess_cli::{
    CliConfig, Command, load_game, run, run_moves, run_new, run_play, run_show, run_undo,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn output(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).expect("Command failed");
    String::from_utf8(buf).expect("Output is not UTF-8")
}

fn new_save(temp_dir: &TempDir) -> PathBuf {
    let path = temp_dir.path().join("game.hex");
    let config = CliConfig::default();
    output(|out| run_new(&config, None, Some(path.as_path()), out));
    path
}

#[test]
fn test_new_prints_save_text() {
    let config = CliConfig::default();
    let text = output(|out| run_new(&config, None, None, out));
    assert_eq!(text, "Glinski\n");
}

#[test]
fn test_new_rejects_demonstration_layouts() {
    let config = CliConfig::default();
    let mut out = Vec::new();
    assert!(run_new(&config, Some("testRook"), None, &mut out).is_err());
    assert!(run_new(&config, Some("Chess"), None, &mut out).is_err());
}

#[test]
fn test_new_writes_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = new_save(&temp_dir);
    assert_eq!(fs::read_to_string(&path).expect("Failed to read save"), "Glinski");
}

#[test]
fn test_play_rewrites_save() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = new_save(&temp_dir);

    let text = output(|out| run_play(&path, "f5", "f6", None, out));
    assert!(text.starts_with("f5f6\n"));
    let text = output(|out| run_play(&path, "e7", "e6", None, out));
    assert!(text.contains("Player 1 to move"));

    let saved = fs::read_to_string(&path).expect("Failed to read save");
    assert_eq!(saved, "Glinski\n1.f5f6 e7e6 ");
    assert_eq!(load_game(&path).expect("Failed to load").history().len(), 2);
}

#[test]
fn test_rejected_move_leaves_save_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = new_save(&temp_dir);

    let mut out = Vec::new();
    assert!(run_play(&path, "f5", "f8", None, &mut out).is_err());
    assert!(run_play(&path, "z5", "f6", None, &mut out).is_err());
    assert!(run_play(&path, "f5", "f6", Some('Q'), &mut out).is_err());
    assert_eq!(fs::read_to_string(&path).expect("Failed to read save"), "Glinski");
}

#[test]
fn test_undo_takes_back_last_move() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = new_save(&temp_dir);
    output(|out| run_play(&path, "f5", "f6", None, out));

    let text = output(|out| run_undo(&path, out));
    assert!(text.starts_with("Took back f5-f6"));
    assert_eq!(fs::read_to_string(&path).expect("Failed to read save"), "Glinski");

    let text = output(|out| run_undo(&path, out));
    assert_eq!(text, "Nothing to undo\n");
}

#[test]
fn test_moves_for_one_cell_and_all() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = new_save(&temp_dir);

    let text = output(|out| run_moves(&path, Some("f5"), out));
    assert_eq!(text, "f6 f7\n");

    let text = output(|out| run_moves(&path, None, out));
    assert_eq!(text.lines().count(), 18);
    assert!(text.lines().any(|line| line == "f5: f6 f7"));
}

#[test]
fn test_show_renders_board_and_status() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = new_save(&temp_dir);
    output(|out| run_play(&path, "f5", "f6", None, out));

    let config = CliConfig::default();
    let text = output(|out| run_show(&config, &path, false, out));
    assert!(text.starts_with("a b c d e f g h i k l\n"));
    assert!(text.ends_with("Glinski: In progress, Player 2 to move (last: f5f6)\n"));
}

#[test]
fn test_show_json_is_a_snapshot() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = new_save(&temp_dir);

    let config = CliConfig::default();
    let text = output(|out| run_show(&config, &path, true, out));
    let snapshot: GameSnapshot = serde_json::from_str(&text).expect("Output is not a snapshot");
    assert_eq!(snapshot.current_player, Player::Player1);
    assert_eq!(snapshot.status, GameStatus::InProgress);
    assert_eq!(snapshot.pieces.len(), 36);
}

#[test]
fn test_run_dispatches_and_reports_bad_saves() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("broken.hex");
    fs::write(&path, "Glinski\n1.f5f9 ").expect("Failed to write save");

    let config = CliConfig::default();
    let mut out = Vec::new();
    let err = run(Command::Show { save: path, json: false }, &config, &mut out).unwrap_err();
    assert!(err.to_string().contains("Failed to load save file"));

    let missing = temp_dir.path().join("missing.hex");
    assert!(run(Command::Undo { save: missing }, &config, &mut out).is_err());
}
