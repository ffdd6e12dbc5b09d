//! Calendar generation: holidays, month grids and slide rendering.
//!
//! A run fetches the official holidays of the configured year from a
//! [`HolidaySource`], merges them with the configured additional holidays
//! into a [`HolidayTable`], lays out each month as a [`MonthGrid`] and hands
//! one [`MonthSlide`] per month to a [`SlideRenderer`].

pub mod grid;
pub mod holiday;
pub mod render;
pub mod source;

pub use grid::{DayRenderInfo, MonthGrid};
pub use holiday::{HolidayCategory, HolidayEntry, HolidayTable};
pub use render::{MonthSlide, PptxRenderer, SlideRenderer};
pub use source::{HolidaySource, TaiwanHolidays};

use crate::common::Result;
use crate::config::CalendarConfig;
use log::info;
use std::path::PathBuf;

/// Generate the calendar described by `config` and save it to
/// `config.output_path`, returning that path.
///
/// Any failure aborts the run; nothing is written unless every slide was
/// rendered.
pub fn generate<S: HolidaySource + ?Sized>(config: &CalendarConfig, source: &S) -> Result<PathBuf> {
    let official = source.holidays(config.year, &config.language)?;
    let holidays = HolidayTable::merge(config.year, &official, &config.additional_holidays());
    info!(
        "Loaded {} holidays for {} ({} official)",
        holidays.len(),
        config.year,
        official.len()
    );

    let mut renderer = PptxRenderer::new(config);
    render::render_calendar(config, &holidays, &mut renderer)?;
    renderer.save(&config.output_path)?;

    Ok(config.output_path.clone())
}
