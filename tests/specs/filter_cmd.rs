// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! Behavioral specs for the riddle filter command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// Pattern matching
// =============================================================================

/// A lowercase query matches case-insensitively and hump-jumps nothing
#[test]
fn filters_stdin_lines() {
    let temp = default_project();
    riddle_cmd()
        .arg("conv")
        .current_dir(temp.path())
        .write_stdin("convertToPattern\nfindConfig\nteardown\n")
        .assert()
        .success()
        .stdout("convertToPattern\n");
}

/// An uppercase hump in the query jumps to the matching capital
#[test]
fn hump_query_respects_capitals() {
    let temp = default_project();
    riddle_cmd()
        .arg("paCo")
        .current_dir(temp.path())
        .write_stdin("patternCompiler\npatterncompiler\n")
        .assert()
        .success()
        .stdout("patternCompiler\n");
}

/// Smart case folds an all-lowercase query
#[test]
fn smart_case_folds_lowercase_queries() {
    let temp = default_project();
    riddle_cmd()
        .arg("compiler")
        .current_dir(temp.path())
        .write_stdin("patternCompiler\n")
        .assert()
        .success()
        .stdout("patternCompiler\n");
}

/// Smart case turns exact as soon as the query has an uppercase char
#[test]
fn smart_case_uppercase_is_exact() {
    let temp = default_project();
    riddle_cmd()
        .arg("Pattern")
        .current_dir(temp.path())
        .write_stdin("patterncompiler\n")
        .assert()
        .code(1);
}

/// --case sensitive rejects a case-mismatched candidate
#[test]
fn case_flag_forces_sensitivity() {
    let temp = default_project();
    riddle_cmd()
        .args(["--case", "sensitive", "compiler"])
        .current_dir(temp.path())
        .write_stdin("patternCompiler\n")
        .assert()
        .code(1);
}

/// --case insensitive folds even an uppercase query
#[test]
fn case_flag_forces_folding() {
    let temp = default_project();
    riddle_cmd()
        .args(["--case", "insensitive", "COMPILER"])
        .current_dir(temp.path())
        .write_stdin("patternCompiler\n")
        .assert()
        .success();
}

/// --strict-start anchors the match to the head of each candidate
#[test]
fn strict_start_anchors_matches() {
    let temp = default_project();
    riddle_cmd()
        .args(["--strict-start", "conv"])
        .current_dir(temp.path())
        .write_stdin("myConvert\nconvertTo\n")
        .assert()
        .success()
        .stdout("convertTo\n");
}

/// A star typed in the query stays a wildcard
#[test]
fn star_in_query_is_a_wildcard() {
    let temp = default_project();
    riddle_cmd()
        .arg("pat*iler")
        .current_dir(temp.path())
        .write_stdin("patternCompiler\npattern\n")
        .assert()
        .success()
        .stdout("patternCompiler\n");
}

/// An empty query keeps every candidate
#[test]
fn empty_query_matches_everything() {
    let temp = default_project();
    riddle_cmd()
        .arg("")
        .current_dir(temp.path())
        .write_stdin("alpha\nbeta\n")
        .assert()
        .success()
        .stdout("alpha\nbeta\n");
}

// =============================================================================
// Substring mode
// =============================================================================

/// -s treats the query as one contiguous literal
#[test]
fn substring_mode_requires_contiguity() {
    let temp = default_project();
    riddle_cmd()
        .args(["-s", "paCo"])
        .current_dir(temp.path())
        .write_stdin("patternCompiler\n")
        .assert()
        .code(1);
}

/// -s matches plain text anywhere in the candidate
#[test]
fn substring_mode_matches_plain_text() {
    let temp = default_project();
    riddle_cmd()
        .args(["-s", "ttern"])
        .current_dir(temp.path())
        .write_stdin("patternCompiler\n")
        .assert()
        .success()
        .stdout("patternCompiler\n");
}

// =============================================================================
// Count and limit
// =============================================================================

/// -c prints the match count instead of the matches
#[test]
fn count_prints_totals() {
    let temp = default_project();
    riddle_cmd()
        .args(["-c", "a"])
        .current_dir(temp.path())
        .write_stdin("apple\nbanana\ncherry\n")
        .assert()
        .success()
        .stdout("2\n");
}

/// A zero count still prints and exits one
#[test]
fn count_zero_exits_one() {
    let temp = default_project();
    riddle_cmd()
        .args(["-c", "zzz"])
        .current_dir(temp.path())
        .write_stdin("apple\n")
        .assert()
        .code(1)
        .stdout("0\n");
}

/// --limit stops after N matches
#[test]
fn limit_caps_printed_matches() {
    let temp = default_project();
    riddle_cmd()
        .args(["--limit", "1", "a"])
        .current_dir(temp.path())
        .write_stdin("apple\nbanana\n")
        .assert()
        .success()
        .stdout("apple\n");
}

// =============================================================================
// File input
// =============================================================================

/// Lines from several files carry their file as a prefix
#[test]
fn many_files_prefix_their_lines() {
    let temp = default_project();
    temp.file("a.txt", "alphaOne\nbeta\n");
    temp.file("b.txt", "alphaTwo\n");

    riddle_cmd()
        .args(["alpha", "a.txt", "b.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("a.txt:alphaOne\nb.txt:alphaTwo\n");
}

/// A single file prints bare lines
#[test]
fn single_file_has_no_prefix() {
    let temp = default_project();
    temp.file("names.txt", "alphaOne\n");

    riddle_cmd()
        .args(["alpha", "names.txt"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("alphaOne\n");
}

/// A FILE of `-` names stdin
#[test]
fn dash_file_reads_stdin() {
    let temp = default_project();
    temp.file("a.txt", "alphaOne\n");

    riddle_cmd()
        .args(["alpha", "a.txt", "-"])
        .current_dir(temp.path())
        .write_stdin("alphaTwo\nbeta\n")
        .assert()
        .success()
        .stdout("a.txt:alphaOne\n-:alphaTwo\n");
}

/// A missing file is a hard error, not an empty result
#[test]
fn missing_file_fails() {
    let temp = default_project();
    riddle_cmd()
        .args(["alpha", "gone.txt"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read"));
}

// =============================================================================
// JSON output
// =============================================================================

/// --output json reports matches with their highlight spans
#[test]
fn json_output_carries_spans() {
    let temp = default_project();
    let output = riddle_cmd()
        .args(["--output", "json", "paCo"])
        .current_dir(temp.path())
        .write_stdin("patternCompiler\nnope\n")
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    let matches = json.as_array().expect("should be an array");
    assert_eq!(matches.len(), 1, "should have one match");
    assert_eq!(matches[0]["text"], "patternCompiler");
    assert_eq!(matches[0]["spans"], serde_json::json!([[0, 2], [7, 9]]));
}

/// -c --output json reports one count object per file
#[test]
fn json_count_is_per_file() {
    let temp = default_project();
    temp.file("a.txt", "alphaOne\nbeta\n");
    temp.file("b.txt", "alphaTwo\n");

    let output = riddle_cmd()
        .args(["-c", "--output", "json", "alpha", "a.txt", "b.txt"])
        .current_dir(temp.path())
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "file": "a.txt", "count": 1 },
            { "file": "b.txt", "count": 1 },
        ])
    );
}

// =============================================================================
// Configuration
// =============================================================================

/// riddle.toml defaults apply when flags are absent
#[test]
fn config_defaults_apply() {
    let temp = default_project();
    temp.config("[defaults]\nmode = \"substring\"\n");

    riddle_cmd()
        .arg("paCo")
        .current_dir(temp.path())
        .write_stdin("patternCompiler\n")
        .assert()
        .code(1);
}

/// Flags override configured defaults
#[test]
fn flags_override_config() {
    let temp = default_project();
    temp.config("[defaults]\nmode = \"substring\"\n");

    riddle_cmd()
        .args(["--pattern", "paCo"])
        .current_dir(temp.path())
        .write_stdin("patternCompiler\n")
        .assert()
        .success();
}

/// --no-strict-start undoes a configured strict start
#[test]
fn no_strict_start_undoes_config() {
    let temp = default_project();
    temp.config("[defaults]\nstrict-start = true\n");

    riddle_cmd()
        .arg("conv")
        .current_dir(temp.path())
        .write_stdin("myConvertTo\n")
        .assert()
        .code(1);

    riddle_cmd()
        .args(["--no-strict-start", "conv"])
        .current_dir(temp.path())
        .write_stdin("myConvertTo\n")
        .assert()
        .success();
}

/// A config file that does not parse is a hard error
#[test]
fn invalid_config_is_an_error() {
    let temp = default_project();
    temp.config("defaults = \"nope\"\n");

    riddle_cmd()
        .arg("alpha")
        .current_dir(temp.path())
        .write_stdin("alpha\n")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("riddle.toml"));
}

/// -C points at a config file directly, skipping discovery
#[test]
fn explicit_config_path() {
    let temp = default_project();
    let config = temp.file("conf/strict.toml", "[defaults]\nstrict-start = true\n");

    riddle_cmd()
        .arg("-C")
        .arg(&config)
        .arg("conv")
        .current_dir(temp.path())
        .write_stdin("myConvert\n")
        .assert()
        .code(1);
}

/// RIDDLE_CONFIG selects a config file the same way -C does
#[test]
fn env_selects_the_config_file() {
    let temp = default_project();
    let config = temp.file("conf/strict.toml", "[defaults]\nstrict-start = true\n");

    riddle_cmd()
        .arg("conv")
        .current_dir(temp.path())
        .write_stdin("myConvert\n")
        .assert()
        .success();

    riddle_cmd()
        .env("RIDDLE_CONFIG", &config)
        .arg("conv")
        .current_dir(temp.path())
        .write_stdin("myConvert\n")
        .assert()
        .code(1);
}

// =============================================================================
// Diagnostics and color
// =============================================================================

/// --explain prints the compiled pattern on stderr
#[test]
fn explain_shows_the_compiled_pattern() {
    let temp = default_project();
    riddle_cmd()
        .args(["--explain", "paCo"])
        .current_dir(temp.path())
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicates::str::contains("*pa*Co"));
}

/// -v surfaces compile-time diagnostics on stderr
#[test]
fn verbose_logs_the_compiled_pattern() {
    let temp = default_project();
    riddle_cmd()
        .args(["-v", "paCo"])
        .current_dir(temp.path())
        .write_stdin("patternCompiler\n")
        .assert()
        .success()
        .stdout("patternCompiler\n")
        .stderr(predicates::str::contains("compiled \"paCo\" into pattern"));
}

/// --color always paints matches even when piped
#[test]
fn color_always_paints_matches() {
    let temp = default_project();
    riddle_cmd()
        .args(["--color", "always", "alpha"])
        .current_dir(temp.path())
        .write_stdin("alphaOne\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}

/// NO_COLOR strips paint even under --color always
#[test]
fn no_color_env_wins() {
    let temp = default_project();
    riddle_cmd()
        .args(["--color", "always", "alpha"])
        .env("NO_COLOR", "1")
        .current_dir(temp.path())
        .write_stdin("alphaOne\n")
        .assert()
        .success()
        .stdout("alphaOne\n");
}
