//! Scanning a source tree for localization key usage.
//!
//! A key counts as used when it occurs as a literal substring anywhere in
//! the content of a scanned source file. This is intentionally not semantic
//! code analysis: a key that happens to be a substring of another identifier
//! registers as used.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::constants::{DEFAULT_IGNORE_PATTERNS, DEFAULT_SOURCE_EXTENSION};
use crate::error::Error;

/// Where and how to scan for key usage.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Root of the source tree to walk.
    pub source_dir: PathBuf,
    /// File extension (without dot) of source files to read.
    pub source_extension: String,
    /// Shell-glob patterns matched against each entry's base name. A
    /// matching directory prunes its whole subtree, a matching file is
    /// skipped.
    pub ignore_patterns: Vec<String>,
}

impl ScanOptions {
    pub fn new(source_dir: impl AsRef<Path>) -> Self {
        ScanOptions {
            source_dir: source_dir.as_ref().to_path_buf(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = extension.into();
        self
    }
}

/// Which candidate keys were found in the scanned tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageReport {
    /// Keys found in at least one scanned file.
    pub used: BTreeSet<String>,
    /// The complement of `used` against the candidate set, sorted.
    pub unused: Vec<String>,
}

/// Walks `options.source_dir` and classifies every candidate key as used or
/// unused.
///
/// Invalid ignore patterns are rejected before any file is read. Candidate
/// keys already found are not searched again in later files; the dominant
/// cost stays file I/O and substring search.
pub fn scan(options: &ScanOptions, keys: &[String]) -> Result<UsageReport, Error> {
    let ignore = options
        .ignore_patterns
        .iter()
        .map(|pattern| Pattern::new(pattern))
        .collect::<Result<Vec<_>, _>>()?;

    let mut pending: BTreeSet<String> = keys.iter().cloned().collect();
    let mut used: BTreeSet<String> = BTreeSet::new();

    let walker = WalkDir::new(&options.source_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored(entry, &ignore));

    for entry in walker {
        let entry = entry?;
        if pending.is_empty() {
            break;
        }
        if !entry.file_type().is_file() || !has_extension(entry.path(), &options.source_extension) {
            continue;
        }

        // Source files are not guaranteed to be valid UTF-8; decode lossily.
        let content = String::from_utf8_lossy(&fs::read(entry.path())?).into_owned();
        pending.retain(|key| {
            if content.contains(key.as_str()) {
                used.insert(key.clone());
                false
            } else {
                true
            }
        });
    }

    Ok(UsageReport {
        used,
        unused: pending.into_iter().collect(),
    })
}

fn is_ignored(entry: &DirEntry, patterns: &[Pattern]) -> bool {
    let name = entry.file_name().to_string_lossy();
    patterns.iter().any(|pattern| pattern.matches(&name))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}
