// Integration tests for the replay module
//
// Loads a recorded JSONL log and checks that:
// - Entries deserialize with their moves and policies
// - Replaying flags logged moves the selector no longer allows
// - Expected-move validation accepts alternatives and reports misses

use forager_snake::config::Config;
use forager_snake::replay::ReplayEngine;
use forager_snake::selector::FoodPolicy;
use forager_snake::types::Direction;
use std::path::PathBuf;

/// Helper function to get the path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

fn engine() -> ReplayEngine {
    ReplayEngine::new(Config::default_hardcoded(), false)
}

#[test]
fn test_load_log_file() {
    let entries = engine()
        .load_log_file(fixture_path("corner_game.jsonl"))
        .expect("Failed to load corner_game.jsonl");

    assert_eq!(entries.len(), 3, "Expected 3 log entries");
    assert_eq!(entries[0].turn, 14);
    assert_eq!(entries[0].chosen_move, Direction::Up);
    assert_eq!(entries[0].policy, FoodPolicy::Avoid);
    assert_eq!(entries[2].policy, FoodPolicy::Seek);
    assert_eq!(entries[2].you.health, 4);
}

#[test]
fn test_load_missing_file_is_error() {
    let result = engine().load_log_file(fixture_path("does_not_exist.jsonl"));
    assert!(result.is_err());
}

#[test]
fn test_replay_all_flags_disallowed_move() {
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("corner_game.jsonl"))
        .expect("Failed to load corner_game.jsonl");

    let results = engine.replay_all(&entries);
    assert_eq!(results.len(), 3);

    assert!(results[0].matches, "turn 14: only up is legal");
    assert_eq!(results[0].candidates, vec![Direction::Up]);

    assert!(results[1].matches, "turn 15: right is a free, non-food tile");
    assert_eq!(results[1].candidates, vec![Direction::Up, Direction::Right]);

    // Starving at (1,1) with food at (5,5): only up or right close the gap
    assert!(!results[2].matches);
    assert_eq!(results[2].replayed_policy, FoodPolicy::Seek);
    assert_eq!(results[2].candidates, vec![Direction::Up, Direction::Right]);

    let stats = engine.generate_stats(&results);
    assert_eq!(stats.matches, 2);
    assert_eq!(stats.mismatches, 1);
    assert_eq!(stats.policy_changes, 0);
}

#[test]
fn test_replay_specific_turns() {
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("corner_game.jsonl"))
        .expect("Failed to load corner_game.jsonl");

    let results = engine
        .replay_turns(&entries, &[15])
        .expect("turn 15 is in the log");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].turn, 15);

    assert!(engine.replay_turns(&entries, &[99]).is_err());
}

#[test]
fn test_seeded_replay_is_reproducible() {
    let mut config = Config::default_hardcoded();
    config.selection.seed = Some(2026);
    let engine = ReplayEngine::new(config, false);

    let entries = engine
        .load_log_file(fixture_path("corner_game.jsonl"))
        .expect("Failed to load corner_game.jsonl");

    let first = engine.replay_entry(&entries[1]);
    let second = engine.replay_entry(&entries[1]);
    assert_eq!(first.replayed_move, second.replayed_move);
}

#[test]
fn test_validate_expected_moves() {
    let engine = engine();
    let entries = engine
        .load_log_file(fixture_path("corner_game.jsonl"))
        .expect("Failed to load corner_game.jsonl");

    let ok = engine.validate_expected_moves(
        &entries,
        &[
            (14, vec![Direction::Up]),
            (15, vec![Direction::Up, Direction::Right]),
        ],
    );
    assert!(ok.is_ok(), "{:?}", ok.err());

    let wrong = engine.validate_expected_moves(&entries, &[(16, vec![Direction::Up])]);
    assert!(wrong.is_err());

    let missing = engine.validate_expected_moves(&entries, &[(3, vec![Direction::Up])]);
    assert!(missing.is_err());
}
