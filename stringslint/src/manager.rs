//! Resolving path specifiers into a working set of [`StringsFile`]s.
//!
//! A specifier naming an existing directory is walked recursively for
//! `.strings` files; anything else is expanded as a glob pattern (a plain
//! file path is a glob without meta-characters and matches itself).

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants::STRINGS_EXTENSION;
use crate::error::Error;
use crate::line::Line;
use crate::strings_file::{DuplicatePolicy, FileSummary, StringsFile};

/// A working set of `.strings` files resolved from one or more path, glob,
/// or directory specifiers. Built once per command invocation.
#[derive(Debug)]
pub struct StringsFileManager {
    /// The input specifiers, as given.
    pub paths: Vec<String>,
    /// Resolved files in discovery order, one entry per matched file.
    pub files: Vec<StringsFile>,
}

impl StringsFileManager {
    /// Resolves and parses every specifier.
    ///
    /// Matched paths are deduplicated by canonical path, so a file reached
    /// through overlapping specifiers is parsed once. Construction is
    /// fail-fast: the first unreadable file aborts with an error.
    pub fn new(paths: Vec<String>) -> Result<Self, Error> {
        if paths.is_empty() {
            return Err(Error::configuration(
                "at least one path specifier is required",
            ));
        }

        let mut manager = StringsFileManager {
            paths,
            files: Vec::new(),
        };

        let mut seen: HashSet<PathBuf> = HashSet::new();
        for spec in manager.paths.clone() {
            for path in resolve_specifier(&spec)? {
                let identity = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
                if seen.insert(identity) {
                    manager.files.push(StringsFile::read_from(&path)?);
                }
            }
        }

        Ok(manager)
    }

    /// All distinct keys across every managed file, sorted lexicographically.
    pub fn all_keys(&self) -> Vec<String> {
        let keys: BTreeSet<String> = self
            .files
            .iter()
            .flat_map(|file| file.all_keys())
            .collect();

        keys.into_iter().collect()
    }

    /// Distinct keys of one managed file, sorted; empty if the path is not
    /// managed.
    pub fn keys_for_file(&self, path: impl AsRef<Path>) -> Vec<String> {
        self.file(path).map(StringsFile::all_keys).unwrap_or_default()
    }

    /// Exact-match lookup by stored path.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&StringsFile> {
        self.files.iter().find(|file| file.path == path.as_ref())
    }

    /// Exact-match mutable lookup by stored path.
    pub fn file_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut StringsFile> {
        self.files.iter_mut().find(|file| file.path == path.as_ref())
    }

    /// Per-file duplicate maps in file order, omitting files without
    /// duplicates.
    pub fn find_duplicates(
        &self,
        policy: DuplicatePolicy,
    ) -> Vec<(&StringsFile, BTreeMap<String, Vec<Line>>)> {
        self.files
            .iter()
            .filter_map(|file| {
                let duplicates = file.find_duplicate_keys(policy);
                if duplicates.is_empty() {
                    None
                } else {
                    Some((file, duplicates))
                }
            })
            .collect()
    }

    /// Sanitizes every managed file, in manager order.
    pub fn sanitize_all(&mut self) {
        for file in &mut self.files {
            file.sanitize();
        }
    }

    /// Sorts and regroups every managed file, in manager order.
    pub fn sort_all(&mut self) {
        for file in &mut self.files {
            file.sort();
        }
    }

    /// Saves every managed file, in manager order.
    ///
    /// Fail-fast, matching construction: the first I/O error aborts the
    /// batch. Files already written stay written; there is no rollback.
    pub fn save_all(&self) -> Result<(), Error> {
        for file in &self.files {
            file.save()?;
        }
        Ok(())
    }

    /// Per-file totals, in manager order.
    pub fn summaries(&self) -> Vec<FileSummary> {
        self.files.iter().map(StringsFile::summary).collect()
    }
}

fn resolve_specifier(spec: &str) -> Result<Vec<PathBuf>, Error> {
    let path = Path::new(spec);
    if path.is_dir() {
        return collect_strings_files(path);
    }

    let mut matches = Vec::new();
    for entry in glob::glob(spec)? {
        let entry = entry.map_err(|e| Error::Io(e.into_error()))?;
        matches.push(entry);
    }
    Ok(matches)
}

// Recursive walk, lexicographic order within each directory for
// deterministic discovery.
fn collect_strings_files(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == STRINGS_EXTENSION)
        {
            found.push(entry.path().to_path_buf());
        }
    }
    Ok(found)
}
