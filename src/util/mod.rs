use chrono::{Local, NaiveDate, TimeDelta};

pub mod logging;

pub const FITBIT_DATE_FORMAT: &str = "%Y-%m-%d";

pub struct DateTimeUtils {}

impl DateTimeUtils {
    pub fn date_to_str(date: NaiveDate) -> String {
        date.format(FITBIT_DATE_FORMAT).to_string()
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// `YYYY-MM-DD` of the day `days` before `from`, `None` past chrono's date range.
    pub fn days_before(from: NaiveDate, days: i64) -> Option<String> {
        TimeDelta::try_days(days)
            .and_then(|delta| from.checked_sub_signed(delta))
            .map(DateTimeUtils::date_to_str)
    }
}
