//! Sunday-first month grids.

use super::holiday::{HolidayCategory, HolidayEntry, HolidayTable};
use crate::common::{Error, Result};
use crate::config::Palette;
use chrono::{Datelike, NaiveDate};

pub const DAYS_PER_WEEK: usize = 7;

/// Upper bound on the number of weeks any month spans.
pub const MAX_WEEKS: usize = 6;

/// One row of a month grid. `None` cells belong to an adjacent month.
pub type Week = [Option<u32>; DAYS_PER_WEEK];

/// Day numbers of one month laid out in weeks, Sunday in column 0.
///
/// Holds exactly as many weeks as the month needs (4 to 6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lay out `month` of `year`.
    ///
    /// ```
    /// use calendar_slides::calendar::grid::MonthGrid;
    ///
    /// // January 2025 starts on a Wednesday.
    /// let grid = MonthGrid::build(2025, 1).unwrap();
    /// assert_eq!(grid.week_count(), 5);
    /// assert_eq!(grid.position_of(1), Some((0, 3)));
    /// assert_eq!(grid.position_of(31), Some((4, 5)));
    /// ```
    pub fn build(year: i32, month: u32) -> Result<Self> {
        let first = first_of_month(year, month)?;
        let days = days_in_month(year, month)?;
        let lead = first.weekday().num_days_from_sunday() as usize;

        let mut weeks = Vec::with_capacity(MAX_WEEKS);
        let mut week: Week = [None; DAYS_PER_WEEK];
        let mut col = lead;
        for day in 1..=days {
            week[col] = Some(day);
            col += 1;
            if col == DAYS_PER_WEEK {
                weeks.push(week);
                week = [None; DAYS_PER_WEEK];
                col = 0;
            }
        }
        if col != 0 {
            weeks.push(week);
        }

        Ok(Self { year, month, weeks })
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn days_in_month(&self) -> u32 {
        self.cells().count() as u32
    }

    /// Non-empty cells as (row, column, day), in reading order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.weeks.iter().enumerate().flat_map(|(row, week)| {
            week.iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|day| (row, col, day)))
        })
    }

    /// (row, column) of `day`, if the month has it.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.cells()
            .find(|&(_, _, d)| d == day)
            .map(|(row, col, _)| (row, col))
    }

    /// Render info for every non-empty cell, as (row, column, info).
    pub fn day_infos<'a>(
        &'a self,
        holidays: &'a HolidayTable,
    ) -> impl Iterator<Item = (usize, usize, DayRenderInfo<'a>)> + 'a {
        self.cells().map(move |(row, col, day)| {
            (row, col, DayRenderInfo::new(day, col, holidays.get(self.month, day)))
        })
    }
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = first_of_month(year, month)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next = first_of_month(next_year, next_month)?;
    Ok((next - first).num_days() as u32)
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::InvalidDate {
        year,
        month,
        day: 1,
    })
}

/// Whether a grid column holds Sundays or Saturdays.
#[inline]
pub fn is_weekend_column(col: usize) -> bool {
    col == 0 || col == DAYS_PER_WEEK - 1
}

/// What the renderer needs to know about one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRenderInfo<'a> {
    pub day: u32,
    pub is_weekend_column: bool,
    pub holiday: Option<&'a HolidayEntry>,
}

impl<'a> DayRenderInfo<'a> {
    pub fn new(day: u32, col: usize, holiday: Option<&'a HolidayEntry>) -> Self {
        Self {
            day,
            is_weekend_column: is_weekend_column(col),
            holiday,
        }
    }

    /// Text colour of the day, `None` for the default.
    ///
    /// A holiday's category colour takes precedence over the weekend colour.
    pub fn color<'p>(&self, palette: &'p Palette) -> Option<&'p str> {
        let mut color = None;
        if self.is_weekend_column {
            color = Some(palette.weekend.as_str());
        }
        if let Some(holiday) = self.holiday {
            color = Some(match holiday.category {
                HolidayCategory::Official => palette.official.as_str(),
                HolidayCategory::Additional => palette.additional.as_str(),
            });
        }
        color
    }
}
