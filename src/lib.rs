//! Calendar Slides - twelve-slide PPTX wall calendars
//!
//! This library builds a one-slide-per-month calendar for a given year and
//! writes it as an Office Open XML presentation (.pptx).
//!
//! # Features
//!
//! - **Holiday merge**: Official public holidays combined with author-supplied
//!   holidays and birthdays, the latter taking precedence
//! - **Month grids**: Sunday-first week layout for any month
//! - **Colour coding**: Weekend, official and additional holiday colours
//! - **PPTX writer**: Self-contained presentation package writer (slides,
//!   text boxes, rectangles and tables)
//! - **Configuration**: Typed defaults with optional YAML overrides
//!
//! # Example - Generating a calendar
//!
//! ```no_run
//! use calendar_slides::calendar::{generate, TaiwanHolidays};
//! use calendar_slides::config::CalendarConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CalendarConfig::default();
//! let path = generate(&config, &TaiwanHolidays)?;
//! println!("Saved to {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting a month
//!
//! ```
//! use calendar_slides::calendar::{HolidayTable, MonthGrid, MonthSlide};
//! use calendar_slides::config::CalendarConfig;
//! use std::collections::BTreeMap;
//!
//! let config = CalendarConfig::default();
//! let holidays = HolidayTable::merge(2025, &BTreeMap::new(), &config.additional_holidays());
//! let grid = MonthGrid::build(2025, 2).unwrap();
//! let slide = MonthSlide::build(&grid, &holidays, &config.colors);
//!
//! let (row, col) = grid.position_of(14).unwrap();
//! assert_eq!(slide.cell(row, col).unwrap().holiday.as_ref().unwrap().name, "情人節");
//! ```

/// Common types shared across the crate
///
/// Error handling, length units and XML escaping.
pub mod common;

/// Calendar domain: holiday sources and merge, month grids, slide rendering
pub mod calendar;

/// Calendar configuration with compile-time defaults
pub mod config;

/// OOXML (Office Open XML) presentation writer
///
/// This module writes .pptx packages: OPC parts, relationships, slide
/// master, layout, theme and slides holding text boxes, rectangles and
/// tables.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use calendar::generate;
pub use common::{Error, Result};
pub use config::CalendarConfig;
