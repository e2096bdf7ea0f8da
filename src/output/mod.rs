//! Output module for console output.
//!
//! Provides colored status lines for the command-line interface.

pub mod console;

pub use console::{print_error, print_info, print_path, print_paths, print_success};
