// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! Query-to-pattern compilation.
//!
//! Splits identifier-like text into hump segments (camel-case words,
//! digit runs, separator characters) and joins them with `*` wildcards
//! so a query like `paCo` can reach `patternCompiler`. See
//! docs/specs/02-matching.md for the boundary rules.

/// Convert raw query text into a wildcarded match pattern.
///
/// A `*` is inserted at every segment boundary, plus a leading `*`
/// unless `strict_start` is set: `convertToPattern` compiles to
/// `*convert*To*Pattern`. Blank input (empty or whitespace-only) is
/// returned unchanged, with no wildcards added.
pub fn convert_to_pattern(text: &str, strict_start: bool) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    // Worst case is one wildcard per character plus a leading one.
    let mut pattern = String::with_capacity(text.len() * 2);
    if !strict_start {
        pattern.push('*');
    }
    for (i, segment) in segments(text).enumerate() {
        if i > 0 {
            pattern.push('*');
        }
        pattern.push_str(segment);
    }
    pattern
}

/// Iterate over the hump segments of `text` as zero-copy slices.
///
/// A boundary falls before a character when:
/// - it or its predecessor is a separator (non-alphanumeric characters
///   are always one-character segments),
/// - exactly one of the pair is a digit,
/// - it is uppercase after a non-uppercase character, or
/// - it is uppercase inside an uppercase run whose length so far is
///   even (acronym runs group two at a time: `IOSHttpRequest` splits
///   as `IO`, `SHttp`, `Request`).
///
/// Blank input yields no segments.
pub fn segments(text: &str) -> Segments<'_> {
    let text = if text.trim().is_empty() { "" } else { text };
    Segments { text, pos: 0 }
}

/// Lazy segment iterator returned by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.text[self.pos..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let mut prev = classify(first);
        // Consecutive uppercase characters seen up to and including the
        // previous one. Parity is preserved across segment boundaries:
        // a pair boundary always lands on an odd run position, so
        // restarting the count per segment cannot change rule 4.
        let mut upper_run = usize::from(prev.is_upper);
        let mut split = rest.len();

        for (offset, c) in chars {
            let class = classify(c);
            if is_boundary(prev, upper_run, class) {
                split = offset;
                break;
            }
            upper_run = if class.is_upper { upper_run + 1 } else { 0 };
            prev = class;
        }

        self.pos += split;
        Some(&rest[..split])
    }
}

#[derive(Debug, Clone, Copy)]
struct CharClass {
    is_separator: bool,
    is_digit: bool,
    is_upper: bool,
}

fn classify(c: char) -> CharClass {
    CharClass {
        is_separator: !c.is_alphanumeric(),
        is_digit: c.is_numeric(),
        is_upper: c.is_uppercase(),
    }
}

/// Decide whether a segment boundary falls between `prev` and `next`.
///
/// `upper_run` counts the consecutive uppercase characters ending at
/// `prev`; rule 4 fires on even counts so acronym runs split in pairs
/// (boundary before the 3rd, 5th, 7th... character of a run).
fn is_boundary(prev: CharClass, upper_run: usize, next: CharClass) -> bool {
    if prev.is_separator || next.is_separator {
        return true;
    }
    if prev.is_digit != next.is_digit {
        return true;
    }
    if next.is_upper && !prev.is_upper {
        return true;
    }
    next.is_upper && prev.is_upper && upper_run % 2 == 0
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
