//! `.stringslint.yaml` configuration loading.
//!
//! The config file supplies defaults shared by all commands; flags always
//! win over config values, and config values win over built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use stringslint::constants::{DEFAULT_IGNORE_PATTERNS, DEFAULT_STRINGS_GLOB};

pub const DEFAULT_CONFIG_FILE: &str = ".stringslint.yaml";

/// Defaults loaded from `.stringslint.yaml`.
///
/// ```yaml
/// baseStringsFile: App/Resources/en.lproj/Localizable.strings
/// stringsPath: App/Resources
/// sourcePath: App/Sources
/// ignorePatterns:
///   - Pods
///   - "*.generated.swift"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Base (reference) `.strings` file for unused/missing checks.
    pub base_strings_file: Option<String>,
    /// Default file/directory/glob specifier for `.strings` files.
    pub strings_path: Option<String>,
    /// Default source directory for usage scans.
    pub source_path: Option<String>,
    /// Ignore patterns for usage scans.
    pub ignore_patterns: Option<Vec<String>>,
}

impl Config {
    /// Loads `path`, or `.stringslint.yaml` from the working directory.
    ///
    /// A missing default file yields an empty configuration; a missing
    /// explicitly requested file is an error. Errors are detected before any
    /// command does file I/O.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !path.exists() {
            if required {
                return Err(format!("config file does not exist: {}", path.display()));
            }
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| format!("cannot read config file {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("invalid config file {}: {}", path.display(), e))
    }

    /// The `.strings` specifier: flag, else config, else `*.strings`.
    pub fn strings_path_or(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.strings_path.clone())
            .unwrap_or_else(|| DEFAULT_STRINGS_GLOB.to_string())
    }

    /// The source directory: flag, else config, else the working directory.
    pub fn source_dir_or(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.source_path.clone())
            .unwrap_or_else(|| ".".to_string())
    }

    /// The base file: flag, else config. Commands that need one error out
    /// when both are absent.
    pub fn base_or(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.base_strings_file.clone())
    }

    /// Ignore patterns: flags, else config, else the built-in defaults.
    pub fn ignore_patterns_or(&self, flags: Vec<String>) -> Vec<String> {
        if !flags.is_empty() {
            return flags;
        }
        self.ignore_patterns.clone().unwrap_or_else(|| {
            DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect()
        })
    }
}
