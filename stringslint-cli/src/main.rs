use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};

use stringslint_cli::commands::{
    check, clean, duplicates, empty, keys, missing, remove, sort, unused,
};
use stringslint_cli::config::Config;
use stringslint_cli::report;

#[derive(Parser, Debug)]
#[command(
    name = "stringslint",
    version,
    about = "Keep Apple .strings localization files clean",
    long_about = None
)]
struct Cli {
    /// Path to a configuration file (default: .stringslint.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check .strings files for sorting, duplicate, empty-value, and unused-key issues
    Check(check::CheckArgs),

    /// Sort keys alphabetically and group them by prefix
    Sort(sort::SortArgs),

    /// Find duplicate keys in .strings files
    Duplicates(duplicates::DuplicatesArgs),

    /// Find empty translation values in .strings files
    Empty(empty::EmptyArgs),

    /// Find or remove specific keys across .strings files
    Keys(keys::KeysArgs),

    /// Remove keys from all .strings files in a directory tree
    Remove(remove::RemoveArgs),

    /// Find keys defined in a base .strings file but never used in source code
    Unused(unused::UnusedArgs),

    /// Find keys present in the base file but missing from sibling files
    Missing(missing::MissingArgs),

    /// Remove unused keys from .strings files, then sort them
    Clean(clean::CleanArgs),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut command = Cli::command();
        clap_complete::generate(*shell, &mut command, "stringslint", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(message) => {
            report::problem(&format!("Error: {message}"));
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Check(args) => check::run(args, &config),
        Commands::Sort(args) => sort::run(args, &config),
        Commands::Duplicates(args) => duplicates::run(args, &config),
        Commands::Empty(args) => empty::run(args, &config),
        Commands::Keys(args) => keys::run(args, &config),
        Commands::Remove(args) => remove::run(args, &config),
        Commands::Unused(args) => unused::run(args, &config),
        Commands::Missing(args) => missing::run(args, &config),
        Commands::Clean(args) => clean::run(args, &config),
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    match result {
        Ok(code) => code,
        Err(message) => {
            report::problem(&format!("Error: {message}"));
            ExitCode::FAILURE
        }
    }
}
