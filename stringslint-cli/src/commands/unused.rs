use std::process::ExitCode;

use clap::Args;
use indoc::indoc;

use stringslint::{ScanOptions, StringsFileManager, resolver};

use crate::config::Config;
use crate::report;

#[derive(Args, Debug)]
#[command(after_help = indoc! {"
    A key counts as used when it appears as a literal substring in any
    scanned source file.

    Examples:
      stringslint unused -b en.lproj/Localizable.strings
      stringslint unused Resources -b Resources/en.lproj/Localizable.strings \\
          -d Sources -i \"Pods\" -i \"*.generated.swift\"
"})]
pub struct UnusedArgs {
    /// File, directory, or glob of .strings files to manage
    pub path: Option<String>,

    /// Base .strings file whose keys are checked against source usage
    #[arg(short, long)]
    pub base: Option<String>,

    /// Directory containing source files
    #[arg(short = 'd', long, value_name = "DIR")]
    pub source_dir: Option<String>,

    /// Glob patterns for files or directories to ignore while scanning
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,
}

pub fn run(args: UnusedArgs, config: &Config) -> Result<ExitCode, String> {
    let base = config
        .base_or(args.base)
        .ok_or_else(|| "a base .strings file is required (use --base or set baseStringsFile)".to_string())?;

    let manager = StringsFileManager::new(vec![config.strings_path_or(args.path)])
        .map_err(|e| format!("error resolving .strings files: {e}"))?;

    let options = ScanOptions::new(config.source_dir_or(args.source_dir))
        .with_ignore_patterns(config.ignore_patterns_or(args.ignore));
    let unused = resolver::find_unused_keys(&manager, &base, &options).map_err(|e| e.to_string())?;

    if unused.is_empty() {
        report::success("No unused keys found.");
        return Ok(ExitCode::SUCCESS);
    }

    for key in &unused {
        println!("{key}");
    }
    report::heading(&format!("\nFound {} unused keys", unused.len()));

    Ok(ExitCode::SUCCESS)
}
