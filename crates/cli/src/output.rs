// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! Match output emitters.
//!
//! Text output paints matched fragments with the [`crate::color::scheme`]
//! specs; JSON output is assembled per match and printed as one array by
//! the command layer.

use std::io;
use std::ops::Range;

use termcolor::WriteColor;

use crate::color::scheme;

/// Print one matched candidate, highlighting its fragments.
///
/// `ranges` must be ascending, non-overlapping byte ranges into `text`,
/// which is what [`crate::matcher::Matcher::match_ranges`] produces.
pub fn print_match<W: WriteColor>(
    out: &mut W,
    origin: Option<&str>,
    text: &str,
    ranges: &[Range<usize>],
) -> io::Result<()> {
    print_origin(out, origin)?;

    let mut pos = 0;
    for range in ranges {
        write!(out, "{}", &text[pos..range.start])?;
        out.set_color(&scheme::highlight())?;
        write!(out, "{}", &text[range.clone()])?;
        out.reset()?;
        pos = range.end;
    }
    writeln!(out, "{}", &text[pos..])
}

/// Print a per-source match count.
pub fn print_count<W: WriteColor>(
    out: &mut W,
    origin: Option<&str>,
    count: usize,
) -> io::Result<()> {
    print_origin(out, origin)?;
    out.set_color(&scheme::count())?;
    write!(out, "{count}")?;
    out.reset()?;
    writeln!(out)
}

/// One match as a JSON value.
pub fn match_value(
    origin: Option<&str>,
    text: &str,
    ranges: &[Range<usize>],
) -> serde_json::Value {
    let spans: Vec<serde_json::Value> =
        ranges.iter().map(|r| serde_json::json!([r.start, r.end])).collect();
    match origin {
        Some(file) => serde_json::json!({
            "file": file,
            "text": text,
            "spans": spans,
        }),
        None => serde_json::json!({
            "text": text,
            "spans": spans,
        }),
    }
}

fn print_origin<W: WriteColor>(out: &mut W, origin: Option<&str>) -> io::Result<()> {
    if let Some(origin) = origin {
        out.set_color(&scheme::path())?;
        write!(out, "{origin}")?;
        out.reset()?;
        write!(out, ":")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
