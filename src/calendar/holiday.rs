//! Holiday records and the merged per-year holiday table.

use chrono::{Datelike, NaiveDate};
use log::debug;
use std::collections::BTreeMap;
use std::fmt;

/// Official holidays as produced by a [`HolidaySource`](super::source::HolidaySource).
pub type OfficialHolidays = BTreeMap<NaiveDate, String>;

/// Author-supplied holidays keyed by (month, day), implicitly in the target year.
pub type AdditionalHolidays = BTreeMap<(u32, u32), String>;

/// Where a holiday came from. Decides its display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayCategory {
    Official,
    Additional,
}

impl fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HolidayCategory::Official => f.write_str("official"),
            HolidayCategory::Additional => f.write_str("additional"),
        }
    }
}

/// A named holiday on one day of the target year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayEntry {
    pub month: u32,
    pub day: u32,
    pub name: String,
    pub category: HolidayCategory,
}

/// Holidays of one year, indexed by month then day.
///
/// At most one entry exists per day, and every key is a valid date of
/// [`year`](Self::year).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayTable {
    year: i32,
    months: BTreeMap<u32, BTreeMap<u32, HolidayEntry>>,
}

impl HolidayTable {
    /// Create an empty table for `year`.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            months: BTreeMap::new(),
        }
    }

    /// Combine official and additional holidays into one table.
    ///
    /// Official entries are inserted first; an additional entry on the same
    /// day replaces the official one. Official dates outside `year` and
    /// additional (month, day) pairs that are not real dates in `year`
    /// (e.g. 2/30, or 2/29 in a common year) are skipped.
    ///
    /// ```
    /// use calendar_slides::calendar::holiday::{HolidayCategory, HolidayTable};
    /// use chrono::NaiveDate;
    /// use std::collections::BTreeMap;
    ///
    /// let official = BTreeMap::from([(NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(), "中秋節".to_string())]);
    /// let additional = BTreeMap::from([((10, 6), "賞月".to_string())]);
    /// let table = HolidayTable::merge(2025, &official, &additional);
    ///
    /// let entry = table.get(10, 6).unwrap();
    /// assert_eq!(entry.name, "賞月");
    /// assert_eq!(entry.category, HolidayCategory::Additional);
    /// ```
    pub fn merge(year: i32, official: &OfficialHolidays, additional: &AdditionalHolidays) -> Self {
        let mut table = Self::new(year);

        for (date, name) in official {
            if date.year() != year {
                debug!("skipping official holiday {date} outside {year}");
                continue;
            }
            table.insert(HolidayEntry {
                month: date.month(),
                day: date.day(),
                name: name.clone(),
                category: HolidayCategory::Official,
            });
        }

        for (&(month, day), name) in additional {
            if NaiveDate::from_ymd_opt(year, month, day).is_none() {
                continue;
            }
            table.insert(HolidayEntry {
                month,
                day,
                name: name.clone(),
                category: HolidayCategory::Additional,
            });
        }

        debug!(
            "merged {} official and {} additional holidays into {} entries for {year}",
            official.len(),
            additional.len(),
            table.len()
        );
        table
    }

    /// Insert or replace the entry for its day.
    fn insert(&mut self, entry: HolidayEntry) {
        self.months
            .entry(entry.month)
            .or_default()
            .insert(entry.day, entry);
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The holiday on `month`/`day`, if any.
    pub fn get(&self, month: u32, day: u32) -> Option<&HolidayEntry> {
        self.months.get(&month).and_then(|days| days.get(&day))
    }

    /// Holidays of one month keyed by day, if the month has any.
    pub fn month(&self, month: u32) -> Option<&BTreeMap<u32, HolidayEntry>> {
        self.months.get(&month)
    }

    pub fn len(&self) -> usize {
        self.months.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All entries in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = &HolidayEntry> {
        self.months.values().flat_map(BTreeMap::values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_additional_overrides_official() {
        let official = BTreeMap::from([
            (date(2025, 5, 1), "Labor Day".to_string()),
            (date(2025, 10, 10), "National Day".to_string()),
        ]);
        let additional = BTreeMap::from([((5, 1), "勞動節".to_string())]);

        let table = HolidayTable::merge(2025, &official, &additional);
        assert_eq!(table.len(), 2);

        let may_day = table.get(5, 1).unwrap();
        assert_eq!(may_day.name, "勞動節");
        assert_eq!(may_day.category, HolidayCategory::Additional);

        let national = table.get(10, 10).unwrap();
        assert_eq!(national.category, HolidayCategory::Official);
    }

    #[test]
    fn test_invalid_additional_dates_are_inert() {
        let additional = BTreeMap::from([
            ((2, 30), "never".to_string()),
            ((2, 29), "leap only".to_string()),
            ((13, 1), "no such month".to_string()),
        ]);

        let common = HolidayTable::merge(2025, &BTreeMap::new(), &additional);
        assert!(common.is_empty());
        assert!(common.get(2, 30).is_none());

        let leap = HolidayTable::merge(2024, &BTreeMap::new(), &additional);
        assert_eq!(leap.len(), 1);
        assert_eq!(leap.get(2, 29).unwrap().name, "leap only");
    }

    #[test]
    fn test_official_outside_year_skipped() {
        let official = BTreeMap::from([
            (date(2024, 12, 31), "old".to_string()),
            (date(2025, 1, 1), "new".to_string()),
        ]);
        let table = HolidayTable::merge(2025, &official, &BTreeMap::new());
        assert_eq!(table.len(), 1);
        assert!(table.get(12, 31).is_none());
    }

    #[test]
    fn test_month_view_and_order() {
        let additional = BTreeMap::from([
            ((2, 14), "情人節".to_string()),
            ((1, 9), "捏生日".to_string()),
            ((2, 12), "元宵節".to_string()),
        ]);
        let table = HolidayTable::merge(2025, &BTreeMap::new(), &additional);

        let february: Vec<_> = table.month(2).unwrap().keys().copied().collect();
        assert_eq!(february, vec![12, 14]);
        assert!(table.month(3).is_none());

        let names: Vec<_> = table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["捏生日", "元宵節", "情人節"]);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(HolidayCategory::Official.to_string(), "official");
        assert_eq!(HolidayCategory::Additional.to_string(), "additional");
    }

    fn official_strategy(year: i32) -> impl Strategy<Value = OfficialHolidays> {
        prop::collection::btree_map(
            (1u32..=12, 1u32..=28).prop_map(move |(m, d)| date(year, m, d)),
            "[a-z]{1,8}",
            0..20,
        )
    }

    fn additional_strategy() -> impl Strategy<Value = AdditionalHolidays> {
        prop::collection::btree_map((1u32..=12, 1u32..=31), "[A-Z]{1,8}", 0..20)
    }

    proptest! {
        #[test]
        fn prop_additional_always_wins(
            official in official_strategy(2025),
            additional in additional_strategy(),
        ) {
            let table = HolidayTable::merge(2025, &official, &additional);
            for (&(month, day), name) in &additional {
                if NaiveDate::from_ymd_opt(2025, month, day).is_some() {
                    let entry = table.get(month, day).unwrap();
                    prop_assert_eq!(&entry.name, name);
                    prop_assert_eq!(entry.category, HolidayCategory::Additional);
                }
            }
        }

        #[test]
        fn prop_official_kept_unless_overridden(
            official in official_strategy(2025),
            additional in additional_strategy(),
        ) {
            let table = HolidayTable::merge(2025, &official, &additional);
            for (d, name) in &official {
                if !additional.contains_key(&(d.month(), d.day())) {
                    let entry = table.get(d.month(), d.day()).unwrap();
                    prop_assert_eq!(&entry.name, name);
                    prop_assert_eq!(entry.category, HolidayCategory::Official);
                }
            }
        }

        #[test]
        fn prop_keys_are_valid_dates(
            year in 2000i32..2100,
            additional in additional_strategy(),
        ) {
            let table = HolidayTable::merge(year, &BTreeMap::new(), &additional);
            for entry in table.iter() {
                prop_assert!(NaiveDate::from_ymd_opt(year, entry.month, entry.day).is_some());
            }
        }
    }
}
