// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! Compiled query matching.
//!
//! A [`Matcher`] is built once per query and applied across many
//! candidates. Pattern mode aligns the wildcarded pattern produced by
//! [`crate::pattern::convert_to_pattern`] against each candidate with
//! glob `*` semantics; substring mode tests plain containment. Both
//! can report the matched fragments as byte ranges for highlighting.

use std::ops::Range;

use memchr::memmem;
use serde::Deserialize;

use crate::pattern::convert_to_pattern;

/// Case folding policy applied when comparing query and candidate text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CaseMatching {
    /// Compare characters exactly as written.
    Sensitive,
    /// Fold both sides with simple one-to-one lowercasing.
    Insensitive,
    /// Insensitive unless the query contains an uppercase character.
    #[default]
    Smart,
}

/// How the query is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Hump pattern compiled from the query, matched glob-style.
    #[default]
    Pattern,
    /// Plain substring containment.
    Substring,
}

/// Construction-time options for [`Matcher`].
///
/// Deserializable so the CLI reads the same shape from `riddle.toml`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MatcherConfig {
    pub mode: MatchMode,
    pub case: CaseMatching,
    pub strict_start: bool,
}

/// Immutable match predicate compiled from a single query.
///
/// Construction is total: any query, including the empty string,
/// produces a matcher. The empty query matches every candidate.
#[derive(Debug, Clone)]
pub struct Matcher {
    kind: MatcherKind,
    fold: bool,
    strict_start: bool,
}

#[derive(Debug, Clone)]
enum MatcherKind {
    Substring {
        /// Containment target; stored folded when the matcher folds.
        needle: String,
        /// Pre-built searcher, present on the unfolded path only.
        finder: Option<memmem::Finder<'static>>,
    },
    Pattern {
        /// The wildcarded pattern text, kept for reporting.
        source: String,
        /// Glob tokens compiled from `source`.
        tokens: Vec<Token>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// `*`: any possibly-empty run of characters.
    Any,
    /// One literal character; folded when the matcher folds case.
    Lit(char),
}

impl Matcher {
    /// Build a matcher for `query` under `config`.
    pub fn new(query: &str, config: MatcherConfig) -> Self {
        let fold = match config.case {
            CaseMatching::Sensitive => false,
            CaseMatching::Insensitive => true,
            CaseMatching::Smart => !query.chars().any(char::is_uppercase),
        };
        let kind = match config.mode {
            MatchMode::Substring => {
                let needle: String = if fold {
                    query.chars().map(fold_char).collect()
                } else {
                    query.to_string()
                };
                let finder = (!fold).then(|| memmem::Finder::new(needle.as_bytes()).into_owned());
                MatcherKind::Substring { needle, finder }
            }
            MatchMode::Pattern => {
                let source = convert_to_pattern(query, config.strict_start);
                let tokens = compile_tokens(&source, fold);
                tracing::debug!("compiled {:?} into pattern {:?}", query, source);
                MatcherKind::Pattern { source, tokens }
            }
        };
        Self {
            kind,
            fold,
            strict_start: config.strict_start,
        }
    }

    /// Pattern-mode matcher with the default configuration.
    pub fn pattern(query: &str) -> Self {
        Self::new(query, MatcherConfig::default())
    }

    /// Substring-mode matcher with the default configuration.
    pub fn substring(query: &str) -> Self {
        let config = MatcherConfig {
            mode: MatchMode::Substring,
            ..MatcherConfig::default()
        };
        Self::new(query, config)
    }

    /// The compiled wildcard pattern, when built in pattern mode.
    pub fn as_pattern(&self) -> Option<&str> {
        match &self.kind {
            MatcherKind::Pattern { source, .. } => Some(source),
            MatcherKind::Substring { .. } => None,
        }
    }

    /// Test one candidate. Stateless: candidates are judged
    /// independently and in any order.
    pub fn is_match(&self, candidate: &str) -> bool {
        match &self.kind {
            MatcherKind::Substring { needle, finder } => {
                self.find_substring(needle, finder.as_ref(), candidate).is_some()
            }
            MatcherKind::Pattern { tokens, .. } => {
                align(tokens, self.fold, candidate, false).is_some()
            }
        }
    }

    /// Like [`Matcher::is_match`], but report the matched fragments as
    /// byte ranges into `candidate`: non-empty, strictly ascending,
    /// with adjacent runs merged. `None` means no match; a match that
    /// consumed no literal characters (empty query) yields an empty
    /// vector.
    pub fn match_ranges(&self, candidate: &str) -> Option<Vec<Range<usize>>> {
        match &self.kind {
            MatcherKind::Substring { needle, finder } => {
                let range = self.find_substring(needle, finder.as_ref(), candidate)?;
                Some(if range.is_empty() { Vec::new() } else { vec![range] })
            }
            MatcherKind::Pattern { tokens, .. } => align(tokens, self.fold, candidate, true),
        }
    }

    fn find_substring(
        &self,
        needle: &str,
        finder: Option<&memmem::Finder<'static>>,
        candidate: &str,
    ) -> Option<Range<usize>> {
        if needle.is_empty() {
            return Some(0..0);
        }
        if let Some(finder) = finder {
            if self.strict_start {
                return candidate.starts_with(needle).then(|| 0..needle.len());
            }
            return finder.find(candidate.as_bytes()).map(|at| at..at + needle.len());
        }

        // Folded path: slide a char window over the candidate,
        // comparing fold-to-fold. The needle is folded already.
        let hay: Vec<(usize, char)> = candidate.char_indices().collect();
        let len = needle.chars().count();
        if len > hay.len() {
            return None;
        }
        let last_start = if self.strict_start { 0 } else { hay.len() - len };
        for start in 0..=last_start {
            let window = &hay[start..start + len];
            if needle.chars().zip(window).all(|(nc, &(_, hc))| nc == fold_char(hc)) {
                let begin = window[0].0;
                let (last, c) = window[len - 1];
                return Some(begin..last + c.len_utf8());
            }
        }
        None
    }
}

/// Flatten a wildcard pattern into match tokens: collapse runs of
/// `*`, fold literals when requested, and leave the tail open by
/// appending a final `*` (candidate text after the last aligned
/// pattern character is always allowed, which is how the query `conv`
/// reaches `convertToPattern`).
fn compile_tokens(pattern: &str, fold: bool) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len() + 1);
    for c in pattern.chars() {
        if c == '*' {
            if tokens.last() != Some(&Token::Any) {
                tokens.push(Token::Any);
            }
        } else {
            tokens.push(Token::Lit(if fold { fold_char(c) } else { c }));
        }
    }
    if tokens.last() != Some(&Token::Any) {
        tokens.push(Token::Any);
    }
    tokens
}

/// Align glob tokens against a candidate.
///
/// Classic iterative wildcard matching: advance two cursors, and on a
/// mismatch resume at the most recent `*`, widening its span by one
/// character. When `record` is set, the indices of literally matched
/// characters are kept (and rolled back together with the cursor) so
/// fragments can be reported; otherwise the hit list stays empty and
/// never allocates.
fn align(tokens: &[Token], fold: bool, candidate: &str, record: bool) -> Option<Vec<Range<usize>>> {
    let text: Vec<(usize, char)> = candidate.char_indices().collect();
    let mut hits: Vec<usize> = Vec::new();

    let mut p = 0;
    let mut t = 0;
    let mut star: Option<usize> = None;
    let mut star_t = 0;
    let mut star_hits = 0;

    while t < text.len() {
        match tokens.get(p) {
            Some(Token::Any) => {
                star = Some(p);
                star_t = t;
                star_hits = hits.len();
                p += 1;
            }
            Some(Token::Lit(want)) if lit_eq(*want, text[t].1, fold) => {
                if record {
                    hits.push(t);
                }
                p += 1;
                t += 1;
            }
            _ => {
                // Mismatch, or pattern exhausted with text left over.
                let sp = star?;
                p = sp + 1;
                star_t += 1;
                t = star_t;
                hits.truncate(star_hits);
            }
        }
    }
    while tokens.get(p) == Some(&Token::Any) {
        p += 1;
    }
    if p < tokens.len() {
        return None;
    }

    Some(merge_hits(&text, &hits))
}

/// Compare a pattern literal (possibly pre-folded) to a candidate char.
fn lit_eq(want: char, got: char, fold: bool) -> bool {
    if fold { want == fold_char(got) } else { want == got }
}

/// Simple one-to-one lowercase folding. Characters whose lowercase
/// expansion is longer than one char (e.g. `İ`) are left unfolded so
/// byte offsets stay aligned with the original text.
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Turn literally matched char indices into merged byte ranges.
fn merge_hits(text: &[(usize, char)], hits: &[usize]) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    for &i in hits {
        let (start, c) = text[i];
        let end = start + c.len_utf8();
        match ranges.last_mut() {
            Some(last) if last.end == start => last.end = end,
            _ => ranges.push(start..end),
        }
    }
    ranges
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
