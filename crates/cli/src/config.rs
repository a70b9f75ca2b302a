// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! Configuration structures and riddle.toml loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::ColorMode;
use crate::matcher::{CaseMatching, MatchMode, MatcherConfig};

/// Top-level configuration parsed from riddle.toml.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Defaults applied when the corresponding flag is absent.
    pub defaults: Defaults,
}

/// The `[defaults]` table.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Defaults {
    /// Query interpretation: "pattern" | "substring"
    pub mode: MatchMode,

    /// Case policy: "smart" | "sensitive" | "insensitive"
    pub case: CaseMatching,

    /// Anchor matches to the start of each candidate.
    pub strict_start: bool,

    /// Color output: "auto" | "always" | "never"
    pub color: ColorMode,
}

impl Defaults {
    /// Matcher options carried by these defaults.
    pub fn matcher(&self) -> MatcherConfig {
        MatcherConfig {
            mode: self.mode,
            case: self.case,
            strict_start: self.strict_start,
        }
    }
}

/// Failure while reading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load configuration from `path`.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text, path)
}

/// Parse configuration text, attributing errors to `path`.
///
/// Unknown keys are rejected so typos surface instead of silently
/// falling back to defaults.
pub fn parse(text: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
