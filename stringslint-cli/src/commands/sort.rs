use std::process::ExitCode;

use clap::Args;
use indoc::indoc;

use stringslint::StringsFileManager;

use crate::config::Config;
use crate::report;

#[derive(Args, Debug)]
#[command(after_help = indoc! {"
    Sorting rewrites each file: keys are sorted alphabetically and grouped
    by their first character, with one blank line between groups. Comments
    and existing blank lines are dropped.

    Examples:
      # sort every .strings file matched by the default specifier
      stringslint sort

      # sort all .strings files under a directory
      stringslint sort path/to/Resources

      # sort one file
      stringslint sort en.lproj/Localizable.strings
"})]
pub struct SortArgs {
    /// File, directory, or glob of .strings files to sort
    pub path: Option<String>,
}

pub fn run(args: SortArgs, config: &Config) -> Result<ExitCode, String> {
    let mut manager = StringsFileManager::new(vec![config.strings_path_or(args.path)])
        .map_err(|e| format!("error resolving .strings files: {e}"))?;

    if manager.files.is_empty() {
        println!("No .strings files matched.");
        return Ok(ExitCode::SUCCESS);
    }

    manager.sanitize_all();
    manager.sort_all();
    manager
        .save_all()
        .map_err(|e| format!("error saving sorted files: {e}"))?;

    for file in &manager.files {
        println!("Sorted {}", file.path.display());
    }
    report::success("Sorting completed.");

    Ok(ExitCode::SUCCESS)
}
