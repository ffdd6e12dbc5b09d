//! Unified error type for calendar generation.
//!
//! This module provides a single error type covering the calendar core
//! (dates, holiday sources, configuration) and the presentation writer,
//! presenting a consistent API to callers.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
