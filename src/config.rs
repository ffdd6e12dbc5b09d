//! Calendar configuration.
//!
//! Every parameter of a run (target year, holiday language, extra holidays,
//! colours, fonts and slide geometry) lives in [`CalendarConfig`]. Its
//! `Default` is the built-in calendar; embedders may override any subset of
//! fields from a YAML document with [`CalendarConfig::from_yaml_str`].

use crate::calendar::holiday::AdditionalHolidays;
use crate::common::unit::{EmuRect, cm_to_emu};
use crate::common::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration of a calendar run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Target year
    pub year: i32,
    /// Language tag passed to the official holiday source
    pub language: String,
    /// Output file
    pub output_path: PathBuf,
    /// Author-supplied holidays and birthdays, keyed by month and day
    pub additional_holidays: Vec<AdditionalHoliday>,
    pub colors: Palette,
    pub fonts: FontConfig,
    pub layout: LayoutConfig,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let additional = [
            (1, 9, "捏生日"),
            (2, 12, "元宵節"),
            (2, 14, "情人節"),
            (4, 2, "玲生日"),
            (5, 1, "勞動節"),
            (5, 11, "母親節"),
            (5, 22, "88生日"),
            (10, 6, "中秋節"),
            (10, 28, "蓮生日"),
            (12, 25, "聖誕節"),
        ];

        Self {
            year: 2025,
            language: "zh_TW".to_string(),
            output_path: PathBuf::from("台灣日曆.pptx"),
            additional_holidays: additional
                .into_iter()
                .map(|(month, day, name)| AdditionalHoliday::new(month, day, name))
                .collect(),
            colors: Palette::default(),
            fonts: FontConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl CalendarConfig {
    /// Parse a YAML document; fields it omits keep their default values.
    ///
    /// ```
    /// use calendar_slides::config::CalendarConfig;
    ///
    /// let config = CalendarConfig::from_yaml_str("year: 2026\nlanguage: en_US\n").unwrap();
    /// assert_eq!(config.year, 2026);
    /// assert_eq!(config.language, "en_US");
    /// assert_eq!(config.additional_holidays.len(), 10);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// The additional holidays as a (month, day) → name mapping.
    ///
    /// A later entry for the same (month, day) replaces an earlier one.
    pub fn additional_holidays(&self) -> AdditionalHolidays {
        self.additional_holidays
            .iter()
            .map(|h| ((h.month, h.day), h.name.clone()))
            .collect()
    }
}

/// A holiday with no year, implicitly in the target year.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdditionalHoliday {
    pub month: u32,
    pub day: u32,
    pub name: String,
}

impl AdditionalHoliday {
    pub fn new(month: u32, day: u32, name: &str) -> Self {
        Self {
            month,
            day,
            name: name.to_string(),
        }
    }
}

/// Colours as hex RGB strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Day numbers in the Sunday and Saturday columns
    pub weekend: String,
    /// Official holidays
    pub official: String,
    /// Additional holidays
    pub additional: String,
    /// Fill of the picture placeholder
    pub placeholder_fill: String,
    /// Outline of the picture placeholder
    pub placeholder_line: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            weekend: "FF0000".to_string(),
            official: "FF0000".to_string(),
            additional: "FFA500".to_string(),
            placeholder_fill: "D9D9D9".to_string(),
            placeholder_line: "A6A6A6".to_string(),
        }
    }
}

/// Font family and sizes in points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Typeface for all text; `None` uses the theme font
    pub family: Option<String>,
    pub title_size: f64,
    pub title_bold: bool,
    pub header_size: f64,
    pub header_bold: bool,
    pub day_size: f64,
    pub holiday_name_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: None,
            title_size: 55.0,
            title_bold: true,
            header_size: 60.0,
            header_bold: true,
            day_size: 60.0,
            holiday_name_size: 30.0,
        }
    }
}

/// A rectangle in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RectCm {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectCm {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn to_emu(&self) -> EmuRect {
        EmuRect::from_cm(self.x, self.y, self.width, self.height)
    }
}

/// Slide geometry in centimetres.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub slide_width: f64,
    pub slide_height: f64,
    /// Region reserved for a picture above the calendar
    pub picture: RectCm,
    /// Title text box between the picture and the table
    pub title: RectCm,
    /// Calendar table (header row plus six week rows)
    pub table: RectCm,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            slide_width: 38.0,
            slide_height: 52.0,
            picture: RectCm::new(0.5, 0.5, 37.0, 20.0),
            title: RectCm::new(1.0, 20.5, 36.0, 2.0),
            table: RectCm::new(1.0, 23.0, 36.0, 28.0),
        }
    }
}

impl LayoutConfig {
    /// Slide (width, height) in EMUs.
    pub fn slide_size_emu(&self) -> (i64, i64) {
        (cm_to_emu(self.slide_width), cm_to_emu(self.slide_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CalendarConfig::default();
        assert_eq!(config.year, 2025);
        assert_eq!(config.language, "zh_TW");
        assert_eq!(config.output_path, PathBuf::from("台灣日曆.pptx"));
        assert_eq!(config.layout.slide_size_emu(), (13_680_000, 18_720_000));
        assert_eq!(config.colors.additional, "FFA500");
    }

    #[test]
    fn test_additional_holiday_map() {
        let map = CalendarConfig::default().additional_holidays();
        assert_eq!(map.len(), 10);
        assert_eq!(map.get(&(1, 9)).map(String::as_str), Some("捏生日"));
        assert_eq!(map.get(&(12, 25)).map(String::as_str), Some("聖誕節"));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let config = CalendarConfig {
            additional_holidays: vec![
                AdditionalHoliday::new(3, 8, "first"),
                AdditionalHoliday::new(3, 8, "second"),
            ],
            ..Default::default()
        };
        let map = config.additional_holidays();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&(3, 8)], "second");
    }

    #[test]
    fn test_yaml_partial_override() {
        let yaml = r#"
year: 2024
additional_holidays:
  - month: 2
    day: 30
    name: 不存在
colors:
  additional: "00AA00"
fonts:
  family: Noto Sans TC
layout:
  title: { x: 2.0, y: 21.0, width: 34.0, height: 2.0 }
"#;
        let config = CalendarConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.year, 2024);
        assert_eq!(config.additional_holidays, vec![AdditionalHoliday::new(2, 30, "不存在")]);
        assert_eq!(config.colors.additional, "00AA00");
        assert_eq!(config.colors.weekend, "FF0000");
        assert_eq!(config.fonts.family.as_deref(), Some("Noto Sans TC"));
        assert_eq!(config.fonts.day_size, 60.0);
        assert_eq!(config.layout.title, RectCm::new(2.0, 21.0, 34.0, 2.0));
        assert_eq!(config.layout.slide_width, 38.0);
    }

    #[test]
    fn test_yaml_error() {
        let err = CalendarConfig::from_yaml_str("year: [not, a, number]").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
