// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! Camel-hump pattern filtering for names, lines, and lists.
//!
//! The pieces compose in one direction: [`pattern`] turns a query into
//! a wildcarded pattern, [`matcher`] compiles that pattern or a plain
//! substring into a reusable [`Matcher`], and [`filter`] plugs a
//! matcher into any iterator pipeline. Everything else is surface for
//! the `riddle` binary.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod input;
pub mod matcher;
pub mod output;
pub mod pattern;

pub use filter::MatchingExt;
pub use matcher::{CaseMatching, MatchMode, Matcher, MatcherConfig};
pub use pattern::convert_to_pattern;
