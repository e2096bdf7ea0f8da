//! Error reporting.
//!
//! Provides:
//! - The `ErrorSink` trait that receives `(message, code)` pairs
//! - A `tracing`-backed sink and an in-memory collecting sink

pub mod sink;

pub use sink::{CollectingSink, ErrorSink, TracingSink};
