// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! Lazy filtering of candidate sequences.
//!
//! [`MatchingExt`] hangs two adapters off any iterator: `matching`
//! for string-like items and `matching_by` for arbitrary items with a
//! key extractor. Both preserve source order, test candidates only as
//! they are consumed, and restart cleanly when rebuilt from the same
//! source (the matcher holds no per-iteration state).

use crate::matcher::Matcher;

/// Iterator extension for filtering candidates through a [`Matcher`].
pub trait MatchingExt: Iterator + Sized {
    /// Keep the items whose string form matches.
    fn matching(self, matcher: &Matcher) -> Matching<'_, Self>
    where
        Self::Item: AsRef<str>,
    {
        Matching {
            inner: self,
            matcher,
        }
    }

    /// Keep the items whose extracted key matches.
    ///
    /// The key function is called once per tested candidate. If it
    /// panics, the panic propagates to the caller unchanged.
    fn matching_by<F>(self, matcher: &Matcher, key: F) -> MatchingBy<'_, Self, F>
    where
        F: FnMut(&Self::Item) -> &str,
    {
        MatchingBy {
            inner: self,
            matcher,
            key,
        }
    }
}

impl<I: Iterator> MatchingExt for I {}

/// Iterator returned by [`MatchingExt::matching`].
#[derive(Debug, Clone)]
pub struct Matching<'m, I> {
    inner: I,
    matcher: &'m Matcher,
}

impl<I> Iterator for Matching<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|item| self.matcher.is_match(item.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every candidate may be filtered out.
        (0, self.inner.size_hint().1)
    }
}

/// Iterator returned by [`MatchingExt::matching_by`].
#[derive(Debug, Clone)]
pub struct MatchingBy<'m, I, F> {
    inner: I,
    matcher: &'m Matcher,
    key: F,
}

impl<I, F> Iterator for MatchingBy<'_, I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> &str,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let matcher = self.matcher;
        let key = &mut self.key;
        self.inner.find(|item| matcher.is_match(key(item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
