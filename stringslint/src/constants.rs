//! Shared defaults for path resolution and scanning.

/// Base-name patterns skipped by the usage scanner unless overridden.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "Pods",
    "Carthage",
    "build",
    ".build",
    "DerivedData",
    ".git",
    "*.generated.swift",
];

/// Specifier used when no path argument is given.
pub const DEFAULT_STRINGS_GLOB: &str = "*.strings";

/// Extension (without dot) of the files a manager collects.
pub const STRINGS_EXTENSION: &str = "strings";

/// Extension (without dot) of the source files the scanner reads.
pub const DEFAULT_SOURCE_EXTENSION: &str = "swift";
