// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! Config file discovery.
//!
//! Walks from the starting directory up to the git root looking for
//! riddle.toml.

use std::path::{Path, PathBuf};

/// File name riddle looks for in each directory.
pub const CONFIG_FILE_NAME: &str = "riddle.toml";

/// Find riddle.toml starting from `start_dir` and walking up.
///
/// The walk stops at the first directory containing `.git`, so a
/// repository never picks up configuration from outside itself. A
/// config sitting next to `.git` is still found.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            return None;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
