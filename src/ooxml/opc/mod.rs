/// Open Packaging Conventions (OPC) building blocks for writing packages.
///
/// Provides partname handling, relationship collections and the content-type,
/// namespace and relationship-type constants needed to emit a PresentationML
/// package.
pub mod constants;
pub mod packuri;
pub mod rel;

// Re-export commonly used types
pub use packuri::PackURI;
pub use rel::{Relationship, Relationships};
