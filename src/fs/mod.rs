//! Filesystem module.
//!
//! Provides:
//! - Path and filename sanitization with casing policies
//! - Filename generation (sequences, collision-free copies)
//! - Existence and permission probes

pub mod access;
pub mod naming;
pub mod policy;
pub mod sanitize;

pub use access::{is_empty_dir, is_readable, is_writable};
pub use naming::{sequence_name, split_extension, unique_copy_name};
pub use policy::CasingPolicy;
pub use sanitize::{sanitize_filename, sanitize_filename_on, sanitize_path};
