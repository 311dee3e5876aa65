//! CLI Tests
//!
//! Runs the `pagesim` binary end to end: exit status, stderr on bad input,
//! and the JSON it prints on success.

use assert_cmd::Command;
use predicates::prelude::*;

fn pagesim() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pagesim"))
}

// ============================================================================
// Validation failures
// ============================================================================

/// A non-digit reference exits non-zero and names the bad character.
#[test]
fn test_cli_rejects_non_digit_references() {
    pagesim()
        .arg("12x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid reference string"))
        .stderr(predicate::str::contains("'x' at position 2"));
}

/// Whitespace-only input is an empty reference string.
#[test]
fn test_cli_rejects_empty_references() {
    pagesim()
        .arg("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid reference string"));
}

/// Frame counts outside 1..=10 exit non-zero.
#[test]
fn test_cli_rejects_frame_count() {
    for frames in ["0", "11"] {
        pagesim()
            .args(["7045679", "-f", frames])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid frame count"))
            .stderr(predicate::str::contains(format!("frame count {frames}")));
    }
}

/// Policy names go through the library's parser.
#[test]
fn test_cli_rejects_unknown_policy() {
    pagesim()
        .args(["7045679", "--policy", "clock"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown replacement policy"));
}

// ============================================================================
// Output
// ============================================================================

/// `--json` prints one wire result per policy, keyed by policy name.
#[test]
fn test_cli_json_all_policies() {
    let output = pagesim()
        .args(["7045679", "-f", "3", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["FIFO"]["misses"], 7);
    assert_eq!(json["LRU"]["misses"], 7);
    assert_eq!(json["OPTIMAL"]["misses"], 6);
    assert_eq!(json["OPTIMAL"]["table"][6], serde_json::json!([9, 6, 4]));
}

/// Aliases accepted by the library parser select a single policy.
#[test]
fn test_cli_single_policy_alias() {
    let output = pagesim()
        .args(["7045679", "-p", "OPT", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json.as_object().unwrap().len(), 1);
    assert_eq!(json["OPTIMAL"]["steps"], 7);
}

/// `--trace` prints one line per step and closes with the counters.
#[test]
fn test_cli_trace() {
    pagesim()
        .args(["7045679", "-p", "fifo", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: reference 7 => MISS | Frames: [7, -, -]"))
        .stdout(predicate::str::contains(
            "Stats { hits: 0, misses: 7, evictions: 4, hit_rate: 0.00% }",
        ));
}
