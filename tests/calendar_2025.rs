use calendar_slides::calendar::render::MONTH_NAMES;
use calendar_slides::calendar::{
    HolidayCategory, HolidaySource, HolidayTable, MonthGrid, MonthSlide, TaiwanHolidays, generate,
};
use calendar_slides::config::{AdditionalHoliday, CalendarConfig};
use calendar_slides::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

fn read_member(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut member = archive.by_name(name).unwrap();
    let mut xml = String::new();
    member.read_to_string(&mut xml).unwrap();
    xml
}

fn table_2025(config: &CalendarConfig) -> HolidayTable {
    let official = TaiwanHolidays.holidays(2025, "zh_TW").unwrap();
    HolidayTable::merge(2025, &official, &config.additional_holidays())
}

#[test]
fn january_2025_layout() {
    let config = CalendarConfig::default();
    let holidays = table_2025(&config);
    let grid = MonthGrid::build(2025, 1).unwrap();

    assert_eq!(grid.week_count(), 5);
    assert_eq!(grid.position_of(1), Some((0, 3)));
    assert_eq!(grid.position_of(31), Some((4, 5)));

    let ninth = holidays.get(1, 9).unwrap();
    assert_eq!(ninth.name, "捏生日");
    assert_eq!(ninth.category, HolidayCategory::Additional);

    // New Year's Day on a Wednesday: official colour, not weekend.
    let slide = MonthSlide::build(&grid, &holidays, &config.colors);
    let first = slide.cell(0, 3).unwrap();
    assert_eq!(first.holiday.as_ref().unwrap().category, HolidayCategory::Official);
    assert_eq!(first.color.as_deref(), Some("FF0000"));
}

#[test]
fn additional_holidays_override_official() {
    let config = CalendarConfig::default();
    let holidays = table_2025(&config);

    let mid_autumn = holidays.get(10, 6).unwrap();
    assert_eq!(mid_autumn.name, "中秋節");
    assert_eq!(mid_autumn.category, HolidayCategory::Additional);

    let christmas = holidays.get(12, 25).unwrap();
    assert_eq!(christmas.name, "聖誕節");
    assert_eq!(christmas.category, HolidayCategory::Additional);

    assert_eq!(holidays.get(10, 10).unwrap().category, HolidayCategory::Official);
}

#[test]
fn merge_is_idempotent() {
    let config = CalendarConfig::default();
    assert_eq!(table_2025(&config), table_2025(&config));
}

#[test]
fn generates_twelve_slides_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = CalendarConfig {
        output_path: dir.path().join("台灣日曆.pptx"),
        ..Default::default()
    };

    let path = generate(&config, &TaiwanHolidays).unwrap();
    assert_eq!(path, config.output_path);
    assert!(path.exists());

    let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let slide_count = (0..archive.len())
        .filter(|&i| {
            let name = archive.by_index(i).unwrap().name().to_string();
            name.starts_with("ppt/slides/slide") && name.ends_with(".xml")
        })
        .count();
    assert_eq!(slide_count, 12);

    for (index, month) in MONTH_NAMES.iter().enumerate() {
        let xml = read_member(&path, &format!("ppt/slides/slide{}.xml", index + 1));
        assert!(xml.contains(&format!("2025年 {}", month)), "slide {} title", index + 1);
    }

    let january = read_member(&path, "ppt/slides/slide1.xml");
    assert!(january.contains("捏生日"));
    assert!(january.contains("FFA500"));
    assert!(january.contains("中華民國開國紀念日"));

    let app = read_member(&path, "docProps/app.xml");
    assert!(app.contains("<Slides>12</Slides>"));
}

#[test]
fn impossible_additional_date_is_inert() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = CalendarConfig {
        output_path: dir.path().join("calendar.pptx"),
        ..Default::default()
    };
    config
        .additional_holidays
        .push(AdditionalHoliday::new(2, 30, "不存在的日子"));

    let path = generate(&config, &TaiwanHolidays).unwrap();
    for index in 1..=12 {
        let xml = read_member(&path, &format!("ppt/slides/slide{}.xml", index));
        assert!(!xml.contains("不存在的日子"));
    }
}

#[test]
fn unsupported_year_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = CalendarConfig {
        year: 1999,
        output_path: dir.path().join("calendar.pptx"),
        ..Default::default()
    };

    let err = generate(&config, &TaiwanHolidays).unwrap_err();
    assert!(matches!(err, Error::UnsupportedYear(1999)));
    assert!(!config.output_path.exists());
}
