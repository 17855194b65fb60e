//! Terminal output utilities

use console::style;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print a failed check to stdout
pub fn failure(msg: &str) {
    println!("{} {}", style("✗").red().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print a plain line to stdout
pub fn plain(msg: &str) {
    println!("{}", msg);
}

/// Print a plain line to stderr
pub fn plain_err(msg: &str) {
    eprintln!("{}", msg);
}
