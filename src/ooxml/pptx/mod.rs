//! PowerPoint (.pptx) presentation writing.
//!
//! - `MutablePresentation`: slide size, document title, serialisation
//! - `MutableSlide`: text boxes, rectangles and tables on a blank layout
//! - `Table` / `TableCell`: DrawingML tables with multi-paragraph cells
//! - `package`: the OPC package writer
//!
//! # Example
//!
//! ```rust,no_run
//! use calendar_slides::common::unit::EmuRect;
//! use calendar_slides::ooxml::pptx::{MutablePresentation, Paragraph, Table, TextFormat};
//!
//! let mut pres = MutablePresentation::new();
//! let rect = EmuRect::from_cm(1.0, 1.0, 20.0, 10.0);
//! let mut table = Table::new(2, 7, rect.width, rect.height);
//! if let Some(cell) = table.cell_mut(1, 0) {
//!     cell.set_text("5").format_mut().color = Some("FF0000".to_string());
//!     cell.add_paragraph(Paragraph::new("Holiday").with_format(TextFormat::new().with_size(12.0)));
//! }
//! pres.add_slide().add_table(table, rect);
//! pres.save("table.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod format;
pub mod package;
pub mod template;
pub mod writer;

pub use format::{Paragraph, TextAlignment, TextFormat};
pub use package::PackageWriter;
pub use writer::{MutablePresentation, MutableShape, MutableSlide, Table, TableCell};
