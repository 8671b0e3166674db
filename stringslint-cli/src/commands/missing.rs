use std::process::ExitCode;

use clap::Args;
use indoc::indoc;
use serde_json::json;

use stringslint::{Line, StringsFileManager, resolver};

use crate::config::Config;
use crate::report;

#[derive(Args, Debug)]
#[command(after_help = indoc! {"
    Examples:
      # find translations missing from sibling files
      stringslint missing App/Resources -b App/Resources/en.lproj/Localizable.strings

      # machine-readable report
      stringslint missing App/Resources -b App/Resources/en.lproj/Localizable.strings --json
"})]
pub struct MissingArgs {
    /// File, directory, or glob of .strings files to compare
    pub path: Option<String>,

    /// Base .strings file whose keys every other file must contain
    #[arg(short, long)]
    pub base: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: MissingArgs, config: &Config) -> Result<ExitCode, String> {
    let base = config
        .base_or(args.base)
        .ok_or_else(|| "a base .strings file is required (use --base or set baseStringsFile)".to_string())?;

    let manager = StringsFileManager::new(vec![config.strings_path_or(args.path)])
        .map_err(|e| format!("error resolving .strings files: {e}"))?;

    let missing =
        resolver::find_missing_translations(&manager, &base).map_err(|e| e.to_string())?;

    if args.json {
        let files = missing
            .iter()
            .map(|(path, lines)| {
                json!({
                    "path": path.display().to_string(),
                    "count": lines.len(),
                    "missing": lines.iter().filter_map(Line::entry).collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>();
        let report = json!({ "base": base, "files": files });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?
        );
        return Ok(ExitCode::SUCCESS);
    }

    if missing.is_empty() {
        report::success("No missing translations found.");
        return Ok(ExitCode::SUCCESS);
    }

    for (path, lines) in &missing {
        report::heading(&format!(
            "{} missing translations in {}:",
            lines.len(),
            path.display()
        ));
        for line in lines {
            println!("{}", line.text);
        }
        println!();
    }

    Ok(ExitCode::SUCCESS)
}
