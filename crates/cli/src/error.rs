// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! Process exit codes.

/// Exit status of a `riddle` run.
///
/// Grep-family convention: zero matches is a distinct, successful
/// outcome that shell pipelines can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// At least one candidate matched.
    Matches,
    /// The run completed but nothing matched.
    NoMatches,
    /// Usage, configuration, or I/O failure.
    Error,
}

impl ExitCode {
    /// Numeric process exit code.
    pub fn code(self) -> u8 {
        match self {
            ExitCode::Matches => 0,
            ExitCode::NoMatches => 1,
            ExitCode::Error => 2,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.code())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
