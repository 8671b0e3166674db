//! One module per subcommand. Each module owns its clap `Args` struct and a
//! `run` function; failures bubble up as messages and are turned into exit
//! codes by `main`.

pub mod check;
pub mod clean;
pub mod duplicates;
pub mod empty;
pub mod keys;
pub mod missing;
pub mod remove;
pub mod sort;
pub mod unused;
