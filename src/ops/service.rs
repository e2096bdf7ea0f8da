//! Stateless operation service that reports every error to a sink.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Result, DEFAULT_ERROR_CODE};
use crate::fs::{sanitize_filename, sanitize_path, CasingPolicy};
use crate::ops::{copy, create, remove, rename};
use crate::report::{ErrorSink, TracingSink};

/// Front door to the filesystem operations.
///
/// Holds no state beyond its settings. Every method runs the matching
/// operation and, on failure, hands `(message, code)` to the sink once before
/// returning the error to the caller.
#[derive(Debug, Clone)]
pub struct FileOps<S: ErrorSink = TracingSink> {
    sink: S,
    dir_mode: u32,
    error_code: u16,
}

impl Default for FileOps<TracingSink> {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl<S: ErrorSink> FileOps<S> {
    /// Create a service with default settings reporting to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            dir_mode: create::DEFAULT_DIR_MODE,
            error_code: DEFAULT_ERROR_CODE,
        }
    }

    /// Create a service with settings taken from `config`.
    pub fn from_config(config: &Config, sink: S) -> Self {
        Self {
            sink,
            dir_mode: config.defaults.dir_mode,
            error_code: config.reporting.error_code,
        }
    }

    /// Mode used for directories created implicitly.
    pub fn with_dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }

    /// Code passed to the sink with each report.
    pub fn with_error_code(mut self, code: u16) -> Self {
        self.error_code = code;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn dir_mode(&self) -> u32 {
        self.dir_mode
    }

    fn reported<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.sink.report(&e.to_string(), self.error_code);
        }
        result
    }

    pub fn sanitize_path(&self, input: &str) -> String {
        sanitize_path(input)
    }

    pub fn sanitize_filename(&self, input: &str, policy: CasingPolicy) -> Result<String> {
        self.reported(sanitize_filename(input, policy))
    }

    /// Create a directory; `None` uses the configured mode.
    pub fn create_directory(&self, path: &str, mode: Option<u32>) -> Result<PathBuf> {
        self.reported(create::create_directory(path, mode.unwrap_or(self.dir_mode)))
    }

    pub fn create_file(&self, dir: &str, name: &str, policy: CasingPolicy) -> Result<PathBuf> {
        self.reported(create::create_file(dir, name, policy, self.dir_mode))
    }

    pub fn create_sequence(
        &self,
        dir: &str,
        base_name: &str,
        policy: CasingPolicy,
        count: i64,
    ) -> Result<Vec<PathBuf>> {
        self.reported(create::create_sequence(dir, base_name, policy, count, self.dir_mode))
    }

    pub fn copy_file(&self, origin: &str, destination_dir: &str) -> Result<PathBuf> {
        self.reported(copy::copy_file(origin, destination_dir, self.dir_mode))
    }

    pub fn copy_all_files(&self, origin_dir: &str, destination_dir: &str) -> Result<usize> {
        self.reported(copy::copy_all_files(origin_dir, destination_dir, self.dir_mode))
    }

    pub fn copy_file_content(&self, src_path: &str, dst_path: &str) -> Result<u64> {
        self.reported(copy::copy_file_content(src_path, dst_path, self.dir_mode))
    }

    pub fn remove_directory(&self, path: &str) -> Result<PathBuf> {
        self.reported(remove::remove_directory(path))
    }

    pub fn remove_file(&self, path: &str) -> Result<PathBuf> {
        self.reported(remove::remove_file(path))
    }

    pub fn remove_all_and_directory(&self, path: &str) -> Result<usize> {
        self.reported(remove::remove_all_and_directory(path))
    }

    pub fn rename(&self, old_path: &str, new_path: &str, policy: CasingPolicy) -> Result<PathBuf> {
        self.reported(rename::rename(old_path, new_path, policy))
    }

    pub fn rename_all_sequential(
        &self,
        dir: &str,
        base_name: &str,
        policy: CasingPolicy,
    ) -> Result<Vec<PathBuf>> {
        self.reported(rename::rename_all_sequential(dir, base_name, policy))
    }
}
