use std::process::ExitCode;

use clap::Args;
use indoc::indoc;

use stringslint::{ScanOptions, StringsFile, StringsFileManager, scanner};

use crate::config::Config;
use crate::report;

#[derive(Args, Debug)]
#[command(after_help = indoc! {"
    Scans the source tree for usages of the reference file's keys, removes
    the unused ones from every matched .strings file, and sorts the files
    unless --skip-sort is given.

    Examples:
      stringslint clean -r en.lproj/Localizable.strings
      stringslint clean -r en.lproj/Localizable.strings --strings Resources -d Sources
"})]
pub struct CleanArgs {
    /// Reference .strings file used to find unused keys
    #[arg(short = 'r', long)]
    pub reference: Option<String>,

    /// File, directory, or glob of .strings files to clean
    #[arg(long, value_name = "PATH")]
    pub strings: Option<String>,

    /// Directory containing source files
    #[arg(short = 'd', long, value_name = "DIR")]
    pub source_dir: Option<String>,

    /// Glob patterns for files or directories to ignore while scanning
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Skip sorting the cleaned files
    #[arg(short, long)]
    pub skip_sort: bool,
}

pub fn run(args: CleanArgs, config: &Config) -> Result<ExitCode, String> {
    let reference = config
        .base_or(args.reference)
        .ok_or_else(|| "a reference .strings file is required (use --reference or set baseStringsFile)".to_string())?;

    // The reference may live outside the cleaned set, so it is parsed on
    // its own rather than through the manager.
    let base = StringsFile::read_from(&reference)
        .map_err(|e| format!("error reading reference file {reference}: {e}"))?;

    let options = ScanOptions::new(config.source_dir_or(args.source_dir))
        .with_ignore_patterns(config.ignore_patterns_or(args.ignore));
    let usage = scanner::scan(&options, &base.all_keys()).map_err(|e| e.to_string())?;

    println!("Found {} unused keys", usage.unused.len());
    if usage.unused.is_empty() && args.skip_sort {
        report::success("Nothing to clean.");
        return Ok(ExitCode::SUCCESS);
    }

    let mut manager = StringsFileManager::new(vec![config.strings_path_or(args.strings)])
        .map_err(|e| format!("error resolving .strings files: {e}"))?;

    for file in &mut manager.files {
        for key in &usage.unused {
            file.remove_key(key);
        }
        if !args.skip_sort {
            file.sanitize();
            file.sort();
        }
        file.save()
            .map_err(|e| format!("error saving {}: {e}", file.path.display()))?;
        println!("Cleaned {}", file.path.display());
    }

    report::success("Cleaning completed.");
    Ok(ExitCode::SUCCESS)
}
