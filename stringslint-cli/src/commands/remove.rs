use std::path::Path;
use std::process::ExitCode;

use clap::Args;
use indoc::indoc;

use stringslint::StringsFileManager;

use crate::config::Config;

#[derive(Args, Debug)]
#[command(after_help = indoc! {"
    Examples:
      # remove a key from all .strings files under the working directory
      stringslint remove obsolete_key

      # remove several keys under a directory
      stringslint remove key_one key_two -p path/to/Resources

      # keep the German translations untouched
      stringslint remove obsolete_key --exclude-language de
"})]
pub struct RemoveArgs {
    /// Keys to remove
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Directory containing the .strings files
    #[arg(short = 'p', long, default_value = ".")]
    pub path: String,

    /// Languages to exclude; "de" skips files inside de.lproj
    #[arg(short = 'e', long = "exclude-language", value_name = "LANG")]
    pub exclude_languages: Vec<String>,
}

pub fn run(args: RemoveArgs, _config: &Config) -> Result<ExitCode, String> {
    let mut manager = StringsFileManager::new(vec![args.path.clone()])
        .map_err(|e| format!("error resolving .strings files: {e}"))?;

    for key in &args.keys {
        let mut removed_from = Vec::new();

        for file in &mut manager.files {
            if is_excluded_language(&file.path, &args.exclude_languages) {
                continue;
            }

            let removed = file.remove_key(key);
            if !removed.is_empty() {
                file.save()
                    .map_err(|e| format!("error saving {}: {e}", file.path.display()))?;
                removed_from.push(file.path.clone());
            }
        }

        if removed_from.is_empty() {
            println!("Key [{key}] not found in any .strings file");
            continue;
        }

        println!(
            "Key [{key}] removed from the following {} files:",
            removed_from.len()
        );
        for path in removed_from {
            println!("{}", path.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

// Translation files live in "<language>.lproj" directories.
fn is_excluded_language(path: &Path, languages: &[String]) -> bool {
    let Some(parent) = path
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
    else {
        return false;
    };

    languages
        .iter()
        .any(|lang| parent == format!("{lang}.lproj"))
}
