use std::process::ExitCode;

use clap::Args;
use indoc::indoc;

use stringslint::StringsFileManager;

use crate::config::Config;

#[derive(Args, Debug)]
#[command(after_help = indoc! {"
    Examples:
      # find a key in all matched .strings files
      stringslint keys greeting_title

      # look up several keys under a directory
      stringslint keys greeting_title greeting_subtitle -p path/to/Resources

      # remove keys, previewing the result first
      stringslint keys obsolete_key --remove --dry-run
      stringslint keys obsolete_key --remove
"})]
pub struct KeysArgs {
    /// Keys to look up
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// File, directory, or glob of .strings files to search
    #[arg(short, long)]
    pub path: Option<String>,

    /// Remove the keys instead of listing them
    #[arg(long)]
    pub remove: bool,

    /// Report what would change without saving
    #[arg(long, requires = "remove")]
    pub dry_run: bool,
}

pub fn run(args: KeysArgs, config: &Config) -> Result<ExitCode, String> {
    let mut manager = StringsFileManager::new(vec![config.strings_path_or(args.path)])
        .map_err(|e| format!("error resolving .strings files: {e}"))?;

    for file in &mut manager.files {
        let mut touched = false;

        for key in &args.keys {
            let found = file.lines_for_key(key).len();
            if found == 0 {
                // Informational; keep going with the remaining keys.
                println!("Key [{key}] not found in {}", file.path.display());
                continue;
            }

            if args.remove {
                let removed = file.remove_key(key);
                touched = true;
                println!(
                    "Key [{key}] removed [{}x] in {}",
                    removed.len(),
                    file.path.display()
                );
            } else {
                println!("Key [{key}] found [{found}x] in {}", file.path.display());
            }
        }

        if touched && !args.dry_run {
            file.save()
                .map_err(|e| format!("error saving {}: {e}", file.path.display()))?;
        }
    }

    if args.remove && args.dry_run {
        println!("Dry run; no files were changed.");
    }

    Ok(ExitCode::SUCCESS)
}
