//! Office Open XML (OOXML) presentation writer.
//!
//! This module renders calendar slides into a PresentationML (.pptx) package.
//! It is organized into two layers:
//!
//! 1. **OPC Layer** (`opc`): partnames, relationships and package constants
//! 2. **PresentationML** (`pptx`): mutable presentation, slides, shapes and
//!    tables, plus the package serialiser
//!
//! # Example
//!
//! ```rust,no_run
//! use calendar_slides::common::unit::EmuRect;
//! use calendar_slides::ooxml::pptx::MutablePresentation;
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide
//!     .add_text_box("Hello", EmuRect::from_cm(1.0, 1.0, 10.0, 2.0))
//!     .font_size(32.0)
//!     .bold(true);
//! pres.save("hello.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
