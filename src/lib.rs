//! fsutil - guard-checked filesystem operations
//!
//! This library creates, copies, renames and removes files and directories,
//! checking existence and permissions before each mutation.
//!
//! # Features
//!
//! - Path sanitization (`[A-Za-z0-9./]`, collapsed separators)
//! - Filename sanitization with casing policies (lower, upper, camel, pascal, date)
//! - Collision-free copies (`name(1).ext`, `name(2).ext`, ...)
//! - Numbered file sequences and sequential renaming
//! - Batch copy/remove/rename that aggregate per-entry failures
//! - Pluggable error sink receiving `(message, code)`
//!
//! # Example
//!
//! ```no_run
//! use fsutil::{CasingPolicy, FileOps};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ops = FileOps::default();
//!     let created = ops.create_sequence("uploads/2024", "scan.png", CasingPolicy::Lower, 3)?;
//!     for path in &created {
//!         ops.copy_file(path.to_str().unwrap_or_default(), "backup")?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod ops;
pub mod output;
pub mod report;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use fs::{sanitize_filename, sanitize_path, CasingPolicy};
pub use ops::{
    copy_all_files, copy_file, copy_file_content, create_directory, create_file, create_sequence,
    remove_all_and_directory, remove_directory, remove_file, rename, rename_all_sequential,
    FileOps,
};
pub use report::{CollectingSink, ErrorSink, TracingSink};
