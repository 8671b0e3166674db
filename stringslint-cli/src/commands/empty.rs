use std::process::ExitCode;

use clap::Args;

use stringslint::StringsFileManager;

use crate::config::Config;
use crate::report;

#[derive(Args, Debug)]
pub struct EmptyArgs {
    /// File, directory, or glob of .strings files to inspect
    pub path: Option<String>,
}

pub fn run(args: EmptyArgs, config: &Config) -> Result<ExitCode, String> {
    let manager = StringsFileManager::new(vec![config.strings_path_or(args.path)])
        .map_err(|e| format!("error resolving .strings files: {e}"))?;

    let mut any_empty = false;
    for file in &manager.files {
        let empty = file.empty_values();
        if empty.is_empty() {
            continue;
        }

        any_empty = true;
        report::heading(&format!(
            "{} empty values in {}:",
            empty.len(),
            file.path.display()
        ));
        for line in empty {
            println!("{} (line {})", line.key, line.line_number);
        }
        println!();
    }

    if !any_empty {
        report::success("No empty translation values found.");
    }

    Ok(ExitCode::SUCCESS)
}
