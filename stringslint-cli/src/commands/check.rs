use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, ValueEnum};
use indoc::indoc;

use stringslint::{DuplicatePolicy, ScanOptions, StringsFileManager, resolver};

use crate::config::Config;
use crate::report;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Sorting,
    Duplicates,
    EmptyValues,
    Unused,
}

const ALL_CHECKS: &[CheckKind] = &[
    CheckKind::Sorting,
    CheckKind::Duplicates,
    CheckKind::EmptyValues,
    CheckKind::Unused,
];

#[derive(Args, Debug)]
#[command(after_help = indoc! {"
    Examples:
      # run all checks (sorting, duplicates, empty values, unused keys)
      stringslint check -b en.lproj/Localizable.strings

      # only the sorting and duplicates checks
      stringslint check --include sorting --include duplicates

      # everything except the unused-key check
      stringslint check --exclude unused
"})]
pub struct CheckArgs {
    /// File, directory, or glob of .strings files to check
    pub path: Option<String>,

    /// Base .strings file used as reference for the unused-key check
    #[arg(short, long)]
    pub base: Option<String>,

    /// Directory containing source files
    #[arg(short = 'd', long, value_name = "DIR")]
    pub source_dir: Option<String>,

    /// Glob patterns for files or directories to ignore while scanning
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Checks to run (default: all)
    #[arg(long, value_enum, value_name = "CHECK", conflicts_with = "exclude")]
    pub include: Vec<CheckKind>,

    /// Checks to skip
    #[arg(long, value_enum, value_name = "CHECK")]
    pub exclude: Vec<CheckKind>,

    /// Report issues without a failing exit code
    #[arg(long)]
    pub no_fail: bool,
}

pub fn run(args: CheckArgs, config: &Config) -> Result<ExitCode, String> {
    let checks = active_checks(&args);
    let base = config.base_or(args.base.clone());
    if checks.contains(&CheckKind::Unused) && base.is_none() {
        return Err(
            "a base .strings file is required for the unused-key check (use --base or set baseStringsFile)"
                .to_string(),
        );
    }

    let strings_path = config.strings_path_or(args.path.clone());
    let manager = StringsFileManager::new(vec![strings_path])
        .map_err(|e| format!("error resolving .strings files: {e}"))?;

    let mut unsorted: Vec<&PathBuf> = Vec::new();
    let mut with_duplicates: Vec<&PathBuf> = Vec::new();
    let mut with_empty_values: Vec<&PathBuf> = Vec::new();

    for file in &manager.files {
        if checks.contains(&CheckKind::Sorting) && (!file.is_sorted() || !file.is_sanitized()) {
            unsorted.push(&file.path);
        }
        if checks.contains(&CheckKind::Duplicates)
            && file.has_duplicates(DuplicatePolicy::AnyRepeat)
        {
            with_duplicates.push(&file.path);
        }
        if checks.contains(&CheckKind::EmptyValues) && file.has_empty_values() {
            with_empty_values.push(&file.path);
        }
    }

    let mut unused: Vec<String> = Vec::new();
    if checks.contains(&CheckKind::Unused)
        && let Some(base) = &base
    {
        let options = ScanOptions::new(config.source_dir_or(args.source_dir.clone()))
            .with_ignore_patterns(config.ignore_patterns_or(args.ignore.clone()));
        unused = resolver::find_unused_keys(&manager, base, &options).map_err(|e| e.to_string())?;
    }

    if !unsorted.is_empty() {
        report::heading(&format!("Unsorted files ({}):", unsorted.len()));
        for path in &unsorted {
            println!("{}", path.display());
        }
    }
    if !with_duplicates.is_empty() {
        report::heading(&format!("Files with duplicates ({}):", with_duplicates.len()));
        for path in &with_duplicates {
            println!("{}", path.display());
        }
    }
    if !with_empty_values.is_empty() {
        report::heading(&format!(
            "Files with empty values ({}):",
            with_empty_values.len()
        ));
        for path in &with_empty_values {
            println!("{}", path.display());
        }
    }
    if !unused.is_empty() {
        report::heading(&format!("Unused keys ({}):", unused.len()));
        for key in &unused {
            println!("{key}");
        }
    }

    let summaries = manager.summaries();
    let total_keys: usize = summaries.iter().map(|s| s.total_keys).sum();
    println!("Checked {} files ({} keys).", summaries.len(), total_keys);

    let any_issues = !unsorted.is_empty()
        || !with_duplicates.is_empty()
        || !with_empty_values.is_empty()
        || !unused.is_empty();

    if any_issues {
        report::problem("Issues found.");
        if !args.no_fail {
            return Ok(ExitCode::from(1));
        }
    } else {
        report::success("No issues found.");
    }

    Ok(ExitCode::SUCCESS)
}

fn active_checks(args: &CheckArgs) -> Vec<CheckKind> {
    if !args.include.is_empty() {
        return ALL_CHECKS
            .iter()
            .copied()
            .filter(|check| args.include.contains(check))
            .collect();
    }

    ALL_CHECKS
        .iter()
        .copied()
        .filter(|check| !args.exclude.contains(check))
        .collect()
}
