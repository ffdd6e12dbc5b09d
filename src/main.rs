use calendar_slides::calendar::{TaiwanHolidays, generate};
use calendar_slides::config::CalendarConfig;
use flexi_logger::Logger;

#[cfg(debug_assertions)]
const LOG_SPEC: &str = "debug";
#[cfg(not(debug_assertions))]
const LOG_SPEC: &str = "info";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_str(LOG_SPEC)?.start()?;

    let config = CalendarConfig::default();
    let path = generate(&config, &TaiwanHolidays)?;

    println!("日曆已成功生成，保存於：{}", path.display());
    Ok(())
}
