// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! Terminal color policy and the output color scheme.

use std::io::IsTerminal;

use serde::Deserialize;
use termcolor::{Color, ColorChoice, ColorSpec};

/// When to colorize output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Colorize only when stdout is a terminal.
    #[default]
    Auto,
    /// Always emit color escapes.
    Always,
    /// Never emit color escapes.
    Never,
}

/// Resolve the effective color choice for stdout.
///
/// `no_color` (the `NO_COLOR` convention, or `--no-color`) wins over
/// everything, including an explicit `--color always`.
pub fn resolve_color(mode: ColorMode, no_color: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            // termcolor's Auto does not probe the tty itself.
            if std::io::stdout().is_terminal() {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}

/// Color specs for each element of text output.
pub mod scheme {
    use super::{Color, ColorSpec};

    /// Matched fragments inside a candidate.
    pub fn highlight() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// File name prefix when filtering more than one file.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Per-file match counts in count mode.
    pub fn count() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
