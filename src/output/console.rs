//! Console output utilities.

use std::path::{Path, PathBuf};

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print one success line per path.
pub fn print_paths(verb: &str, paths: &[PathBuf]) {
    for path in paths {
        print_path(verb, path);
    }
}

/// Print a success line for a single path.
pub fn print_path(verb: &str, path: &Path) {
    print_success(&format!("{} {}", verb, style(path.display()).bold()));
}
