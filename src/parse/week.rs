use std::sync::OnceLock;

use chrono::{NaiveDate, Weekday};
use regex::Regex;

use super::Error;

/// Finds the first run of two digits in `text` (ex. "Uke 12") and reads it as an ISO week number.
pub fn extract_week_number(text: &str) -> Result<u32, Error> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\d\d").expect("regex should be valid"));
    let digits = re.find(text).ok_or_else(|| {
        Error::WeekNumber(format!("no two digit week number found in {text:?}"))
    })?;
    let week: u32 = digits
        .as_str()
        .parse()
        .map_err(|_| Error::week_number_error("week number is not numeric"))?;
    if (1..=53).contains(&week) {
        Ok(week)
    } else {
        Err(Error::WeekNumber(format!(
            "{week} is not a valid ISO week number"
        )))
    }
}

/// Monday is 0 and Sunday is 6.
pub const fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

/// Calendar date of the given weekday in ISO week `week` of `year`.
///
/// Returns `None` when the year does not have that week (ex. week 53 in a 52 week year)
/// or when `weekday_index` is outside of `0..=6`.
pub fn weekday_to_date(year: i32, week: u32, weekday_index: u8) -> Option<NaiveDate> {
    let weekday = weekday_from_index(weekday_index)?;
    NaiveDate::from_isoywd_opt(year, week, weekday)
}
