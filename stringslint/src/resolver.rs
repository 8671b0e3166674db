//! Set-difference logic on top of the manager and the usage scanner:
//! unused keys (defined but never referenced in source) and missing
//! translations (present in the base file, absent from a sibling file).

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::line::Line;
use crate::manager::StringsFileManager;
use crate::scanner::{self, ScanOptions};

/// Keys defined in the base file but not found in any scanned source file,
/// sorted lexicographically.
///
/// The base file must be part of the managed set.
pub fn find_unused_keys(
    manager: &StringsFileManager,
    base_path: impl AsRef<Path>,
    options: &ScanOptions,
) -> Result<Vec<String>, Error> {
    let base = manager
        .file(&base_path)
        .ok_or_else(|| Error::FileNotFound(base_path.as_ref().to_path_buf()))?;

    let report = scanner::scan(options, &base.all_keys())?;
    Ok(report.unused)
}

/// For every managed file other than the base, the base keys it lacks.
///
/// Each missing key carries the base file's line, so callers can show the
/// reference translation. Files with no missing keys are omitted.
pub fn find_missing_translations(
    manager: &StringsFileManager,
    base_path: impl AsRef<Path>,
) -> Result<BTreeMap<PathBuf, Vec<Line>>, Error> {
    let base = manager
        .file(&base_path)
        .ok_or_else(|| Error::FileNotFound(base_path.as_ref().to_path_buf()))?;
    let base_keys = base.all_keys();

    let mut missing: BTreeMap<PathBuf, Vec<Line>> = BTreeMap::new();
    for file in &manager.files {
        if file.path == base.path {
            continue;
        }

        let keys: BTreeSet<String> = file.all_keys().into_iter().collect();
        let mut lines = Vec::new();
        for key in &base_keys {
            if !keys.contains(key)
                && let Some(line) = base.lines_for_key(key).first()
            {
                lines.push((*line).clone());
            }
        }

        if !lines.is_empty() {
            missing.insert(file.path.clone(), lines);
        }
    }

    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &Path, relative: &str, content: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_translations_reports_absent_keys() {
        let temp = TempDir::new().unwrap();
        let base = write_file(
            temp.path(),
            "en.lproj/Localizable.strings",
            "\"a\" = \"A\";\n\"b\" = \"B\";\n\"c\" = \"C\";",
        );
        let target = write_file(
            temp.path(),
            "de.lproj/Localizable.strings",
            "\"a\" = \"Ah\";\n\"c\" = \"Zeh\";",
        );

        let manager =
            StringsFileManager::new(vec![temp.path().to_string_lossy().to_string()]).unwrap();
        let missing = find_missing_translations(&manager, &base).unwrap();

        assert_eq!(missing.len(), 1);
        let lines = &missing[&target];
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].key, "b");
        assert_eq!(lines[0].text, "\"b\" = \"B\";");
    }

    #[test]
    fn test_missing_translations_empty_when_complete() {
        let temp = TempDir::new().unwrap();
        let base = write_file(temp.path(), "en.lproj/Localizable.strings", "\"a\" = \"A\";");
        write_file(temp.path(), "de.lproj/Localizable.strings", "\"a\" = \"Ah\";");

        let manager =
            StringsFileManager::new(vec![temp.path().to_string_lossy().to_string()]).unwrap();
        assert!(find_missing_translations(&manager, &base).unwrap().is_empty());
    }

    #[test]
    fn test_missing_translations_requires_managed_base() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "en.lproj/Localizable.strings", "\"a\" = \"A\";");

        let manager =
            StringsFileManager::new(vec![temp.path().to_string_lossy().to_string()]).unwrap();
        let result = find_missing_translations(&manager, "unmanaged.strings");
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_unused_keys_against_source_tree() {
        let temp = TempDir::new().unwrap();
        let base = write_file(
            temp.path(),
            "Resources/en.lproj/Localizable.strings",
            "\"hello_key\" = \"Hello\";\n\"unused_key\" = \"Unused\";",
        );
        write_file(
            temp.path(),
            "Sources/App.swift",
            "label.text = String(localized: \"hello_key\")",
        );

        let manager = StringsFileManager::new(vec![
            temp.path().join("Resources").to_string_lossy().to_string(),
        ])
        .unwrap();
        let options = ScanOptions::new(temp.path().join("Sources"));
        let unused = find_unused_keys(&manager, &base, &options).unwrap();

        assert_eq!(unused, vec!["unused_key"]);
    }
}
