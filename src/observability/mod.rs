//! Observability for geokv
//!
//! Structured JSON logging for query and CLI events.
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on execution
//! 2. No async or background threads
//! 3. Deterministic output (sorted field keys)
//! 4. Diagnostics go to stderr; stdout carries protocol frames only

mod logger;

pub use logger::{Logger, Severity};
