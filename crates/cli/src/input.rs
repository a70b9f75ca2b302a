// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Riddle contributors

//! Candidate input with size-based reading strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification is acceptable for filtering
#![allow(unsafe_code)]
//!
//! Files below [`MMAP_THRESHOLD`] are read straight into a buffer;
//! larger ones are memory-mapped. Candidates are the lines of the
//! content, split with [`str::lines`] so CRLF input needs no special
//! handling.

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped (64 KiB).
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Content of one input file, either owned or memory-mapped.
#[derive(Debug)]
pub enum FileContent {
    /// Small file read into memory.
    Owned(String),
    /// Large file memory-mapped.
    Mapped(MappedContent),
}

/// Memory-mapped file content with deferred UTF-8 validation.
#[derive(Debug)]
pub struct MappedContent {
    mmap: Mmap,
}

impl MappedContent {
    /// Content as a string slice, or `None` if it is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.mmap).ok()
    }
}

impl FileContent {
    /// Read `path` using the strategy its size calls for.
    pub fn read(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;

        if meta.len() < MMAP_THRESHOLD {
            let content = fs::read_to_string(path)?;
            Ok(FileContent::Owned(content))
        } else {
            let file = File::open(path)?;
            // SAFETY: the handle was just opened, the mapping is never
            // written through, and stale data on concurrent modification
            // is acceptable for filtering.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(FileContent::Mapped(MappedContent { mmap }))
        }
    }

    /// Content as a string slice, or `None` if it is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FileContent::Owned(s) => Some(s),
            FileContent::Mapped(m) => m.as_str(),
        }
    }
}

/// Read all of stdin into a string.
pub fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().lock().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
