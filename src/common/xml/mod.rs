//! XML text helpers for the hand-written PresentationML serialisers.

mod escape;

pub use escape::escape_xml;
