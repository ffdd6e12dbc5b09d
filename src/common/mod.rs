//! Common types and utilities shared by the calendar core and the PPTX writer.

// Submodule declarations
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
