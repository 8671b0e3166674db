//! In-memory model of one `.strings` file.
//!
//! A [`StringsFile`] is an ordered sequence of [`Line`]s parsed from disk.
//! Query operations never touch the file; mutations happen in place and are
//! only persisted by an explicit [`StringsFile::save`], which fully rewrites
//! the file from the line sequence.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::line::{Entry, Line};

/// How duplicate keys are counted.
///
/// Historically the tool shipped both behaviors implicitly; the policy is now
/// an explicit option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Any key occurring two or more times is a duplicate.
    #[default]
    AnyRepeat,
    /// A key is a duplicate only if its occurrences carry at least two
    /// distinct values; identical repeats are tolerated.
    DistinctValues,
}

/// Per-file totals, as shown by the `check` summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub path: PathBuf,
    /// Number of distinct keys.
    pub total_keys: usize,
    /// Number of keys occurring more than once.
    pub duplicate_keys: usize,
    pub needs_sorting: bool,
}

/// One `.strings` file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringsFile {
    /// Filesystem location; identity within a manager and persistence target.
    pub path: PathBuf,
    /// Ordered lines; order controls on-disk layout and grouping on save.
    pub lines: Vec<Line>,
}

impl StringsFile {
    /// Parse a `.strings` file from disk.
    ///
    /// Decoding is BOM-aware: Xcode frequently emits UTF-16 `.strings` files,
    /// which are transparently decoded; files without a BOM are read as
    /// UTF-8.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(&path)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .encoding(Some(encoding_rs::UTF_8))
            .bom_override(true)
            .build(file);

        let mut content = String::new();
        decoder.read_to_string(&mut content)?;

        Ok(Self::from_content(path, &content))
    }

    /// Build the model from already-decoded content.
    pub fn from_content(path: impl AsRef<Path>, content: &str) -> Self {
        let lines = content
            .lines()
            .enumerate()
            .map(|(index, text)| Line::parse(text, index + 1))
            .collect();

        StringsFile {
            path: path.as_ref().to_path_buf(),
            lines,
        }
    }

    /// All distinct keys, sorted lexicographically.
    pub fn all_keys(&self) -> Vec<String> {
        let keys: BTreeSet<&str> = self
            .lines
            .iter()
            .filter(|line| line.is_key_value())
            .map(|line| line.key.as_str())
            .collect();

        keys.into_iter().map(str::to_string).collect()
    }

    /// All lines with the given key, in file order.
    pub fn lines_for_key(&self, key: &str) -> Vec<&Line> {
        self.lines.iter().filter(|line| line.key == key).collect()
    }

    /// Keyed lines as bare [`Entry`] pairs, in file order.
    pub fn entries(&self) -> Vec<Entry> {
        self.lines.iter().filter_map(Line::entry).collect()
    }

    /// Keys occurring more than once, mapped to all their lines in file
    /// order. With [`DuplicatePolicy::DistinctValues`], keys whose repeats
    /// all share one value are not reported.
    pub fn find_duplicate_keys(&self, policy: DuplicatePolicy) -> BTreeMap<String, Vec<Line>> {
        let mut key_lines: BTreeMap<String, Vec<Line>> = BTreeMap::new();
        for line in &self.lines {
            if line.is_key_value() {
                key_lines.entry(line.key.clone()).or_default().push(line.clone());
            }
        }

        key_lines.retain(|_, lines| match policy {
            DuplicatePolicy::AnyRepeat => lines.len() > 1,
            DuplicatePolicy::DistinctValues => {
                let values: BTreeSet<&str> = lines.iter().map(|l| l.value.as_str()).collect();
                lines.len() > 1 && values.len() > 1
            }
        });

        key_lines
    }

    pub fn has_duplicates(&self, policy: DuplicatePolicy) -> bool {
        !self.find_duplicate_keys(policy).is_empty()
    }

    /// Lines with a non-empty key and an empty value, in file order.
    pub fn empty_values(&self) -> Vec<&Line> {
        self.lines
            .iter()
            .filter(|line| line.is_key_value() && line.value.is_empty())
            .collect()
    }

    pub fn has_empty_values(&self) -> bool {
        !self.empty_values().is_empty()
    }

    /// Removes all lines whose key matches exactly and returns them.
    /// Does not save.
    pub fn remove_key(&mut self, key: &str) -> Vec<Line> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.lines.len());

        for line in self.lines.drain(..) {
            if line.key == key && line.is_key_value() {
                removed.push(line);
            } else {
                kept.push(line);
            }
        }

        self.lines = kept;
        removed
    }

    /// For every key occurring multiple times, keeps only the last
    /// occurrence. Lines without a key (comments, blanks) stay in place.
    /// Returns the removed lines.
    pub fn remove_duplicates_keep_last(&mut self) -> Vec<Line> {
        let mut last_occurrence: HashMap<String, usize> = HashMap::new();
        for (index, line) in self.lines.iter().enumerate() {
            if line.is_key_value() {
                last_occurrence.insert(line.key.clone(), index);
            }
        }

        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.lines.len());

        for (index, line) in self.lines.drain(..).enumerate() {
            if line.is_key_value() && last_occurrence.get(&line.key) != Some(&index) {
                removed.push(line);
            } else {
                kept.push(line);
            }
        }

        self.lines = kept;
        removed
    }

    /// Whether keys appear in non-decreasing lexicographic order. Lines
    /// without keys do not interrupt the comparison chain.
    pub fn is_sorted(&self) -> bool {
        let mut last_key: Option<&str> = None;

        for line in &self.lines {
            if line.is_key_value() {
                if let Some(last) = last_key
                    && last > line.key.as_str()
                {
                    return false;
                }
                last_key = Some(&line.key);
            }
        }

        true
    }

    /// Whether every line already equals its sanitized form; a non-mutating
    /// "needs cleanup" check.
    pub fn is_sanitized(&self) -> bool {
        self.lines.iter().all(|line| line.sanitized_text() == line.text)
    }

    /// Rewrites every line into canonical form: surrounding whitespace
    /// trimmed, key-value pairs reassembled as `"key" = "value";` with
    /// exactly one trailing semicolon. Mutates `text` only.
    pub fn sanitize(&mut self) {
        for line in &mut self.lines {
            line.text = line.sanitized_text();
        }
    }

    /// Stable-sorts keyed lines lexicographically and regroups them: one
    /// blank separator line before each group of keys sharing a first
    /// character (none before the first group).
    ///
    /// Comments and blank lines are dropped; the sorted file contains only
    /// key-value lines and group separators. This loss is the documented
    /// contract of sorting. Idempotent on already-sorted files.
    pub fn sort(&mut self) {
        let mut keyed: Vec<Line> = self
            .lines
            .drain(..)
            .filter(|line| line.is_key_value() && !line.text.trim().is_empty())
            .collect();
        keyed.sort_by(|a, b| a.key.cmp(&b.key));

        let mut sorted = Vec::with_capacity(keyed.len());
        let mut current_group: Option<char> = None;

        for line in keyed {
            let group = line.key.chars().next();
            if current_group.is_some() && group != current_group {
                sorted.push(Line::separator());
            }
            current_group = group;
            sorted.push(line);
        }

        self.lines = sorted;
    }

    /// Overwrites the file with each line's text, newline-terminated.
    ///
    /// The write fully replaces the previous content; on failure to create
    /// the file, the original is left untouched.
    pub fn save(&self) -> Result<(), Error> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        for line in &self.lines {
            writer.write_all(line.text.as_bytes())?;
            writer.write_all(b"\n")?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Per-file totals for summary output.
    pub fn summary(&self) -> FileSummary {
        let mut key_count: HashMap<&str, usize> = HashMap::new();
        for line in &self.lines {
            if line.is_key_value() {
                *key_count.entry(line.key.as_str()).or_default() += 1;
            }
        }

        FileSummary {
            path: self.path.clone(),
            total_keys: key_count.len(),
            duplicate_keys: key_count.values().filter(|&&count| count > 1).count(),
            needs_sorting: !self.is_sorted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(content: &str) -> StringsFile {
        StringsFile::from_content("Localizable.strings", content)
    }

    #[test]
    fn test_is_sorted() {
        assert!(file("\"a\" = \"1\";\n\"b\" = \"2\";\n\"c\" = \"3\";").is_sorted());
        assert!(!file("\"b\" = \"2\";\n\"a\" = \"1\";").is_sorted());
    }

    #[test]
    fn test_is_sorted_ignores_unkeyed_lines() {
        let content = "\"a\" = \"1\";\n\n// comment\n\"b\" = \"2\";";
        assert!(file(content).is_sorted());
    }

    #[test]
    fn test_is_sorted_on_empty_file() {
        assert!(file("").is_sorted());
    }

    #[test]
    fn test_find_duplicate_keys() {
        let sf = file("\"k\" = \"1\";\n\"k\" = \"2\";\n\"j\" = \"1\";");
        let duplicates = sf.find_duplicate_keys(DuplicatePolicy::AnyRepeat);

        assert_eq!(duplicates.len(), 1);
        let lines = &duplicates["k"];
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line_number, 1);
        assert_eq!(lines[1].line_number, 2);
    }

    #[test]
    fn test_distinct_values_policy_tolerates_identical_repeats() {
        let sf = file("\"k\" = \"same\";\n\"k\" = \"same\";\n\"j\" = \"1\";\n\"j\" = \"2\";");

        assert!(sf.has_duplicates(DuplicatePolicy::AnyRepeat));
        let distinct = sf.find_duplicate_keys(DuplicatePolicy::DistinctValues);
        assert_eq!(distinct.len(), 1);
        assert!(distinct.contains_key("j"));
    }

    #[test]
    fn test_remove_duplicates_keep_last() {
        let mut sf = file("\"k\" = \"1\";\n\"k\" = \"2\";\n\"j\" = \"1\";");
        let removed = sf.remove_duplicates_keep_last();

        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].value, "1");

        let keys: Vec<(&str, &str)> = sf
            .lines
            .iter()
            .map(|l| (l.key.as_str(), l.value.as_str()))
            .collect();
        assert_eq!(keys, vec![("k", "2"), ("j", "1")]);
    }

    #[test]
    fn test_remove_duplicates_keeps_comments_in_place() {
        let mut sf = file("// header\n\"k\" = \"1\";\n\n\"k\" = \"2\";");
        sf.remove_duplicates_keep_last();

        let texts: Vec<&str> = sf.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["// header", "", "\"k\" = \"2\";"]);
    }

    #[test]
    fn test_empty_values() {
        let sf = file("\"a\" = \"\";\n\"b\" = \"x\";");
        let empty = sf.empty_values();
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].key, "a");
        assert!(sf.has_empty_values());
    }

    #[test]
    fn test_remove_key_removes_all_occurrences() {
        let mut sf = file("\"a\" = \"1\";\n\"b\" = \"2\";\n\"a\" = \"3\";");
        let removed = sf.remove_key("a");

        assert_eq!(removed.len(), 2);
        assert_eq!(sf.lines.len(), 1);
        assert_eq!(sf.lines[0].key, "b");
    }

    #[test]
    fn test_remove_missing_key_is_a_no_op() {
        let mut sf = file("\"a\" = \"1\";");
        assert!(sf.remove_key("nope").is_empty());
        assert_eq!(sf.lines.len(), 1);
    }

    #[test]
    fn test_sanitize_reformats_pairs() {
        let mut sf = file("  \"a\"=\"1\"  ;;\n  // comment  \n\"b\" =\"2\";");
        assert!(!sf.is_sanitized());

        sf.sanitize();
        let texts: Vec<&str> = sf.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["\"a\" = \"1\";", "// comment", "\"b\" = \"2\";"]);
        assert!(sf.is_sanitized());
    }

    #[test]
    fn test_sort_groups_by_first_character() {
        let mut sf = file(
            "\"b_two\" = \"2\";\n// dropped comment\n\"a_one\" = \"1\";\n\"a_two\" = \"2\";\n\"b_one\" = \"1\";",
        );
        sf.sanitize();
        sf.sort();

        let texts: Vec<&str> = sf.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "\"a_one\" = \"1\";",
                "\"a_two\" = \"2\";",
                "",
                "\"b_one\" = \"1\";",
                "\"b_two\" = \"2\";",
            ]
        );
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut sf = file("\"zebra\" = \"z\";\n\"apple\" = \"a\";\n\"avocado\" = \"b\";");
        sf.sanitize();
        sf.sort();
        let once: Vec<String> = sf.lines.iter().map(|l| l.text.clone()).collect();

        sf.sort();
        let twice: Vec<String> = sf.lines.iter().map(|l| l.text.clone()).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_lines_for_key() {
        let sf = file("\"a\" = \"1\";\n\"b\" = \"2\";\n\"a\" = \"3\";");
        let lines = sf.lines_for_key("a");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].value, "1");
        assert_eq!(lines[1].value, "3");
    }

    #[test]
    fn test_summary() {
        let sf = file("\"b\" = \"2\";\n\"a\" = \"1\";\n\"a\" = \"3\";");
        let summary = sf.summary();
        assert_eq!(summary.total_keys, 2);
        assert_eq!(summary.duplicate_keys, 1);
        assert!(summary.needs_sorting);
    }

    #[test]
    fn test_entries_skip_opaque_lines() {
        let sf = file("// comment\n\"a\" = \"1\";\n\n\"b\" = \"2\";");
        let entries = sf.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "a");
        assert_eq!(entries[1].value, "2");
    }

    #[test]
    fn test_all_keys_sorted_and_distinct() {
        let sf = file("\"b\" = \"2\";\n\"a\" = \"1\";\n\"a\" = \"3\";");
        assert_eq!(sf.all_keys(), vec!["a".to_string(), "b".to_string()]);
    }
}
