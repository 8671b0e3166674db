use std::process::ExitCode;

use clap::Args;
use colored::Colorize;
use indoc::indoc;
use serde_json::json;

use stringslint::{DuplicatePolicy, StringsFileManager};

use crate::config::Config;
use crate::report;

#[derive(Args, Debug)]
#[command(after_help = indoc! {"
    Examples:
      # list duplicate keys in all matched .strings files
      stringslint duplicates path/to/Resources

      # only report keys whose occurrences carry different values
      stringslint duplicates --distinct-values

      # keep the last occurrence of each duplicate key and save
      stringslint duplicates --remove
"})]
pub struct DuplicatesArgs {
    /// File, directory, or glob of .strings files to inspect
    pub path: Option<String>,

    /// Only count keys whose occurrences have at least two distinct values
    #[arg(long, conflicts_with = "remove")]
    pub distinct_values: bool,

    /// Remove all but the last occurrence of each duplicate key and save
    #[arg(long)]
    pub remove: bool,

    /// Print the report as JSON
    #[arg(long, conflicts_with = "remove")]
    pub json: bool,
}

pub fn run(args: DuplicatesArgs, config: &Config) -> Result<ExitCode, String> {
    let policy = if args.distinct_values {
        DuplicatePolicy::DistinctValues
    } else {
        DuplicatePolicy::AnyRepeat
    };

    let mut manager = StringsFileManager::new(vec![config.strings_path_or(args.path)])
        .map_err(|e| format!("error resolving .strings files: {e}"))?;

    if args.remove {
        let mut cleaned = 0;
        for file in &mut manager.files {
            let removed = file.remove_duplicates_keep_last();
            if !removed.is_empty() {
                file.save()
                    .map_err(|e| format!("error saving {}: {e}", file.path.display()))?;
                println!(
                    "Removed {} duplicate lines from {}",
                    removed.len(),
                    file.path.display()
                );
                cleaned += 1;
            }
        }

        if cleaned == 0 {
            report::success("No duplicate keys found.");
        } else {
            report::success("Duplicates removed successfully.");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let duplicates = manager.find_duplicates(policy);

    if args.json {
        let files = duplicates
            .iter()
            .map(|(file, dups)| {
                json!({
                    "path": file.path.display().to_string(),
                    "duplicates": dups
                        .iter()
                        .map(|(key, lines)| json!({
                            "key": key,
                            "values": lines.iter().map(|l| l.value.clone()).collect::<Vec<_>>(),
                        }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>();
        let report = json!({ "files": files });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?
        );
        return Ok(ExitCode::SUCCESS);
    }

    if duplicates.is_empty() {
        report::success("No duplicate keys found.");
        return Ok(ExitCode::SUCCESS);
    }

    for (file, dups) in &duplicates {
        println!(
            "{}",
            format!("Duplicates in {}:", file.path.display()).cyan().bold()
        );
        for (key, lines) in dups {
            println!("{}", format!("{key}:").yellow());
            for line in lines {
                println!("  -> {} (line {})", line.value, line.line_number);
            }
        }
        println!();
    }

    Ok(ExitCode::SUCCESS)
}
