//! Console reporting helpers: plain text plus an emphasis channel for
//! findings.

use colored::Colorize;

/// Section header for a group of findings.
pub fn heading(message: &str) {
    println!("{}", message.yellow());
}

/// All-clear line.
pub fn success(message: &str) {
    println!("{}", message.green());
}

/// Problem line, sent to stderr.
pub fn problem(message: &str) {
    eprintln!("{}", message.red());
}
