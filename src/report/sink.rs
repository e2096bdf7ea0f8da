//! Error sinks.

use std::sync::Mutex;

/// Receives every error an operation reports.
///
/// The sink decides how to surface it (log line, HTTP status, ...). Reporting
/// never fails and never aborts the caller.
pub trait ErrorSink {
    fn report(&self, message: &str, code: u16);
}

impl<S: ErrorSink + ?Sized> ErrorSink for &S {
    fn report(&self, message: &str, code: u16) {
        (**self).report(message, code)
    }
}

/// Sink that logs each report at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn report(&self, message: &str, code: u16) {
        tracing::error!(code, "{}", message);
    }
}

/// Sink that keeps every report in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<(String, u16)>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports received so far, oldest first.
    pub fn reports(&self) -> Vec<(String, u16)> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }

    /// Drain the received reports.
    pub fn take(&self) -> Vec<(String, u16)> {
        self.reports
            .lock()
            .map(|mut reports| std::mem::take(&mut *reports))
            .unwrap_or_default()
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, message: &str, code: u16) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push((message.to_string(), code));
        }
    }
}
