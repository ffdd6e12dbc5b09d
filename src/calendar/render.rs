//! Per-month slide records and rendering into a presentation.
//!
//! [`MonthSlide`] is a renderer-independent description of one calendar
//! page. A [`SlideRenderer`] turns each record into output; [`PptxRenderer`]
//! writes them as slides of a `.pptx` package.

use super::grid::{DAYS_PER_WEEK, MAX_WEEKS, MonthGrid};
use super::holiday::{HolidayCategory, HolidayTable};
use crate::common::Result;
use crate::config::{CalendarConfig, FontConfig, Palette};
use crate::ooxml::pptx::{MutablePresentation, Paragraph, Table, TextAlignment, TextFormat};
use log::{debug, info};
use std::path::Path;

pub const MONTH_NAMES: [&str; 12] = [
    "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "十二月",
];

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["日", "一", "二", "三", "四", "五", "六"];

/// Name of `month` (1-based), if in range.
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
}

/// Slide title, e.g. `2025年 一月`.
pub fn month_title(year: i32, month: u32) -> String {
    format!("{}年 {}", year, month_name(month).unwrap_or_default())
}

/// Holiday shown under a day number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayLabel {
    pub name: String,
    pub category: HolidayCategory,
}

/// A non-empty day cell with its resolved colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub day: u32,
    /// Hex RGB text colour, `None` for the default
    pub color: Option<String>,
    pub holiday: Option<HolidayLabel>,
}

pub type BodyRow = [Option<CalendarCell>; DAYS_PER_WEEK];

/// Everything drawn on one month's slide.
///
/// The body always has [`MAX_WEEKS`] rows; rows past the month's last week
/// stay blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSlide {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub headers: [&'static str; DAYS_PER_WEEK],
    pub rows: Vec<BodyRow>,
}

impl MonthSlide {
    pub fn build(grid: &MonthGrid, holidays: &HolidayTable, palette: &Palette) -> Self {
        let mut rows: Vec<BodyRow> = (0..MAX_WEEKS)
            .map(|_| std::array::from_fn(|_| None))
            .collect();

        for (row, col, info) in grid.day_infos(holidays) {
            rows[row][col] = Some(CalendarCell {
                day: info.day,
                color: info.color(palette).map(str::to_string),
                holiday: info.holiday.map(|h| HolidayLabel {
                    name: h.name.clone(),
                    category: h.category,
                }),
            });
        }

        Self {
            year: grid.year(),
            month: grid.month(),
            title: month_title(grid.year(), grid.month()),
            headers: WEEKDAY_LABELS,
            rows,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CalendarCell> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Non-empty cells as (row, column, cell), in reading order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &CalendarCell)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.as_ref().map(|c| (row, col, c)))
        })
    }
}

/// Output backend for month slides.
pub trait SlideRenderer {
    /// Append one month as the next slide.
    fn render_month(&mut self, slide: &MonthSlide, config: &CalendarConfig) -> Result<()>;

    /// Write the finished document to `path`.
    fn save(&mut self, path: &Path) -> Result<()>;
}

/// Render all twelve months of `holidays.year()` in order.
pub fn render_calendar<R: SlideRenderer + ?Sized>(
    config: &CalendarConfig,
    holidays: &HolidayTable,
    renderer: &mut R,
) -> Result<()> {
    for month in 1..=12 {
        let grid = MonthGrid::build(holidays.year(), month)?;
        let slide = MonthSlide::build(&grid, holidays, &config.colors);
        renderer.render_month(&slide, config)?;
        info!("Generated slide for {}", slide.title);
    }
    Ok(())
}

/// Renders month slides into a PPTX presentation.
#[derive(Debug)]
pub struct PptxRenderer {
    pres: MutablePresentation,
}

impl PptxRenderer {
    /// Create an empty presentation sized from `config.layout`.
    pub fn new(config: &CalendarConfig) -> Self {
        let (width, height) = config.layout.slide_size_emu();
        let mut pres = MutablePresentation::new();
        pres.set_slide_width(width);
        pres.set_slide_height(height);
        pres.set_title(&format!("{}年 日曆", config.year));
        Self { pres }
    }

    pub fn presentation(&self) -> &MutablePresentation {
        &self.pres
    }

    pub fn into_presentation(self) -> MutablePresentation {
        self.pres
    }
}

fn text_format(fonts: &FontConfig, size: f64, bold: bool, color: Option<&str>) -> TextFormat {
    let mut format = TextFormat::new().with_size(size);
    if bold {
        format = format.with_bold(true);
    }
    if let Some(family) = &fonts.family {
        format = format.with_font(family);
    }
    if let Some(color) = color {
        format = format.with_color(color);
    }
    format
}

impl SlideRenderer for PptxRenderer {
    fn render_month(&mut self, slide: &MonthSlide, config: &CalendarConfig) -> Result<()> {
        let fonts = &config.fonts;
        let layout = &config.layout;
        let out = self.pres.add_slide();

        out.add_rectangle(
            layout.picture.to_emu(),
            Some(config.colors.placeholder_fill.clone()),
            Some(config.colors.placeholder_line.clone()),
        );

        out.add_text_box(&slide.title, layout.title.to_emu())
            .set_text_format(text_format(fonts, fonts.title_size, fonts.title_bold, None))
            .alignment(TextAlignment::Center);

        let rect = layout.table.to_emu();
        let mut table = Table::new(MAX_WEEKS + 1, DAYS_PER_WEEK, rect.width, rect.height);
        table.set_first_row_header(true);

        let header_format = text_format(fonts, fonts.header_size, fonts.header_bold, None);
        for (col, label) in slide.headers.iter().enumerate() {
            if let Some(cell) = table.cell_mut(0, col) {
                let paragraph = cell.set_text(label);
                *paragraph.format_mut() = header_format.clone();
                paragraph.set_alignment(TextAlignment::Center);
            }
        }

        for (row, col, day) in slide.cells() {
            let Some(cell) = table.cell_mut(row + 1, col) else {
                continue;
            };
            let color = day.color.as_deref();
            let mut number = itoa::Buffer::new();
            let paragraph = cell.set_text(number.format(day.day));
            *paragraph.format_mut() = text_format(fonts, fonts.day_size, false, color);

            if let Some(holiday) = &day.holiday {
                cell.add_paragraph(Paragraph::new(&holiday.name).with_format(text_format(
                    fonts,
                    fonts.holiday_name_size,
                    false,
                    color,
                )));
            }
        }

        out.add_table(table, rect);
        debug!(
            "slide {} for {} has {} shapes",
            out.slide_id(),
            slide.title,
            out.shape_count()
        );
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        self.pres.save(path)?;
        info!(
            "Saved {} slides to {}",
            self.pres.slide_count(),
            path.display()
        );
        Ok(())
    }
}
