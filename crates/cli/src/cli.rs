//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::matcher::{CaseMatching, MatchMode, MatcherConfig};

/// Filter names and lines with camel-hump patterns
#[derive(Parser)]
#[command(name = "riddle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Query to match candidates against
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Files to filter (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Match the query as a plain substring
    #[arg(short = 's', long)]
    pub substring: bool,

    /// Match the query as a hump pattern (the default)
    #[arg(long)]
    pub pattern: bool,

    /// Case policy
    #[arg(long, value_name = "CASE")]
    pub case: Option<CaseMatching>,

    /// Anchor matches to the start of each candidate
    #[arg(long)]
    pub strict_start: bool,

    /// Allow matches to start anywhere (undo a configured strict start)
    #[arg(long)]
    pub no_strict_start: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print per-source match counts instead of matches
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Stop after N matches
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print the compiled pattern to stderr before filtering
    #[arg(long)]
    pub explain: bool,

    /// Color output mode
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "RIDDLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Query interpretation after layering flags over `default`.
    ///
    /// An explicit `--substring` wins over `--pattern`.
    pub fn mode(&self, default: MatchMode) -> MatchMode {
        if self.substring {
            MatchMode::Substring
        } else if self.pattern {
            MatchMode::Pattern
        } else {
            default
        }
    }

    /// Start anchoring after layering flags over `default`.
    pub fn strict_start(&self, default: bool) -> bool {
        if self.strict_start {
            true
        } else if self.no_strict_start {
            false
        } else {
            default
        }
    }

    /// Matcher options after layering flags over config defaults.
    pub fn matcher_config(&self, defaults: MatcherConfig) -> MatcherConfig {
        MatcherConfig {
            mode: self.mode(defaults.mode),
            case: self.case.unwrap_or(defaults.case),
            strict_start: self.strict_start(defaults.strict_start),
        }
    }

    /// Color mode after layering flags over `default`.
    pub fn color(&self, default: ColorMode) -> ColorMode {
        if self.no_color {
            ColorMode::Never
        } else {
            self.color.unwrap_or(default)
        }
    }
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
