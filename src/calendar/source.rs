//! Official holiday sources.

use super::holiday::OfficialHolidays;
use crate::common::{Error, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Provides the official public holidays of a year.
pub trait HolidaySource {
    /// Official holidays of `year`, named in `language`.
    ///
    /// Every returned date lies in `year`. Two holidays falling on the same
    /// day are reported as one entry whose names are joined with `"; "`.
    fn holidays(&self, year: i32, language: &str) -> Result<OfficialHolidays>;
}

/// Languages in which holiday names are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Traditional Chinese (`zh_TW`)
    TraditionalChinese,
    /// English (`en_US`)
    English,
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zh_TW" | "zh-TW" => Ok(Language::TraditionalChinese),
            "en_US" | "en-US" | "en" => Ok(Language::English),
            other => Err(Error::UnsupportedLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Holiday {
    FoundingDay,
    LunarNewYearsEve,
    LunarNewYear,
    PeaceMemorialDay,
    ChildrensDay,
    TombSweepingDay,
    LaborDay,
    DragonBoatFestival,
    ConfuciusBirthday,
    MidAutumnFestival,
    NationalDay,
    RetrocessionDay,
    ConstitutionDay,
}

impl Holiday {
    fn name(self, language: Language) -> &'static str {
        use Holiday::*;
        match language {
            Language::TraditionalChinese => match self {
                FoundingDay => "中華民國開國紀念日",
                LunarNewYearsEve => "農曆除夕",
                LunarNewYear => "春節",
                PeaceMemorialDay => "和平紀念日",
                ChildrensDay => "兒童節",
                TombSweepingDay => "民族掃墓節",
                LaborDay => "勞動節",
                DragonBoatFestival => "端午節",
                ConfuciusBirthday => "孔子誕辰紀念日",
                MidAutumnFestival => "中秋節",
                NationalDay => "國慶日",
                RetrocessionDay => "臺灣光復暨金門古寧頭大捷紀念日",
                ConstitutionDay => "行憲紀念日",
            },
            Language::English => match self {
                FoundingDay => "Founding Day of the Republic of China",
                LunarNewYearsEve => "Chinese New Year's Eve",
                LunarNewYear => "Chinese New Year",
                PeaceMemorialDay => "Peace Memorial Day",
                ChildrensDay => "Children's Day",
                TombSweepingDay => "Tomb-Sweeping Day",
                LaborDay => "Labor Day",
                DragonBoatFestival => "Dragon Boat Festival",
                ConfuciusBirthday => "Dr. Sun Yat-sen's Birthday and Confucius' Birthday",
                MidAutumnFestival => "Mid-Autumn Festival",
                NationalDay => "National Day",
                RetrocessionDay => "Taiwan Retrocession Day",
                ConstitutionDay => "Constitution Day",
            },
        }
    }
}

/// Gregorian dates of the lunisolar holidays of one year, as (month, day).
struct MovableDates {
    lunar_new_year: (u32, u32),
    tomb_sweeping_day: (u32, u32),
    dragon_boat: (u32, u32),
    mid_autumn: (u32, u32),
}

const MOVABLE_DATES: &[(i32, MovableDates)] = &[
    (
        2023,
        MovableDates {
            lunar_new_year: (1, 22),
            tomb_sweeping_day: (4, 5),
            dragon_boat: (6, 22),
            mid_autumn: (9, 29),
        },
    ),
    (
        2024,
        MovableDates {
            lunar_new_year: (2, 10),
            tomb_sweeping_day: (4, 4),
            dragon_boat: (6, 10),
            mid_autumn: (9, 17),
        },
    ),
    (
        2025,
        MovableDates {
            lunar_new_year: (1, 29),
            tomb_sweeping_day: (4, 4),
            dragon_boat: (5, 31),
            mid_autumn: (10, 6),
        },
    ),
    (
        2026,
        MovableDates {
            lunar_new_year: (2, 17),
            tomb_sweeping_day: (4, 5),
            dragon_boat: (6, 19),
            mid_autumn: (9, 25),
        },
    ),
    (
        2027,
        MovableDates {
            lunar_new_year: (2, 6),
            tomb_sweeping_day: (4, 5),
            dragon_boat: (6, 9),
            mid_autumn: (9, 15),
        },
    ),
];

/// First year whose calendar includes Confucius' Birthday, Retrocession Day
/// and Constitution Day as days off.
const EXTENDED_HOLIDAYS_SINCE: i32 = 2025;

/// Public holidays of Taiwan (Republic of China).
///
/// Lunisolar holidays come from a resolved table, so only the years in
/// [`supported_years`](Self::supported_years) are available.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaiwanHolidays;

impl TaiwanHolidays {
    pub fn supported_years() -> RangeInclusive<i32> {
        let first = MOVABLE_DATES.first().map_or(0, |(year, _)| *year);
        let last = MOVABLE_DATES.last().map_or(-1, |(year, _)| *year);
        first..=last
    }

    fn movable_dates(year: i32) -> Option<&'static MovableDates> {
        MOVABLE_DATES
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, dates)| dates)
    }
}

impl HolidaySource for TaiwanHolidays {
    fn holidays(&self, year: i32, language: &str) -> Result<OfficialHolidays> {
        let language = Language::from_str(language)?;
        let movable = Self::movable_dates(year).ok_or(Error::UnsupportedYear(year))?;

        let mut builder = Builder {
            year,
            language,
            holidays: OfficialHolidays::new(),
        };

        builder.add((1, 1), Holiday::FoundingDay)?;

        let new_year = builder.date(movable.lunar_new_year)?;
        builder.add_date(new_year - Duration::days(1), Holiday::LunarNewYearsEve);
        for offset in 0..3 {
            builder.add_date(new_year + Duration::days(offset), Holiday::LunarNewYear);
        }

        builder.add((2, 28), Holiday::PeaceMemorialDay)?;

        let tomb_sweeping = builder.date(movable.tomb_sweeping_day)?;
        let childrens_day = builder.date((4, 4))?;
        builder.add_date(tomb_sweeping, Holiday::TombSweepingDay);
        builder.add_date(observed_childrens_day(childrens_day, tomb_sweeping), Holiday::ChildrensDay);

        builder.add((5, 1), Holiday::LaborDay)?;
        builder.add(movable.dragon_boat, Holiday::DragonBoatFestival)?;
        builder.add(movable.mid_autumn, Holiday::MidAutumnFestival)?;
        builder.add((10, 10), Holiday::NationalDay)?;

        if year >= EXTENDED_HOLIDAYS_SINCE {
            builder.add((9, 28), Holiday::ConfuciusBirthday)?;
            builder.add((10, 25), Holiday::RetrocessionDay)?;
            builder.add((12, 25), Holiday::ConstitutionDay)?;
        }

        Ok(builder.holidays)
    }
}

/// Children's Day sharing a date with Tomb-Sweeping Day moves to the
/// following Friday when that date is a Thursday, otherwise to the day before.
fn observed_childrens_day(childrens_day: NaiveDate, tomb_sweeping: NaiveDate) -> NaiveDate {
    if childrens_day != tomb_sweeping {
        childrens_day
    } else if childrens_day.weekday() == Weekday::Thu {
        childrens_day + Duration::days(1)
    } else {
        childrens_day - Duration::days(1)
    }
}

struct Builder {
    year: i32,
    language: Language,
    holidays: OfficialHolidays,
}

impl Builder {
    fn date(&self, (month, day): (u32, u32)) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, month, day).ok_or(Error::InvalidDate {
            year: self.year,
            month,
            day,
        })
    }

    fn add(&mut self, month_day: (u32, u32), holiday: Holiday) -> Result<()> {
        let date = self.date(month_day)?;
        self.add_date(date, holiday);
        Ok(())
    }

    /// Dates outside the year (a New Year's Eve in December) are dropped.
    fn add_date(&mut self, date: NaiveDate, holiday: Holiday) {
        if date.year() != self.year {
            return;
        }
        let name = holiday.name(self.language);
        self.holidays
            .entry(date)
            .and_modify(|existing| {
                existing.push_str("; ");
                existing.push_str(name);
            })
            .or_insert_with(|| name.to_string());
    }
}
