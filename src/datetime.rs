// src/datetime.rs
// Pure date/time parsing for the raw stamp column of the news table.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Split the raw date/time text on whitespace.
/// One token: it is a time-of-day, the date defaults to `today` (the scrape
/// date; kept as-is even though headlines scraped near midnight can land on
/// the wrong day). Two tokens: `(date, time)`. Anything else is a row-level
/// parse error; callers skip the row rather than abort the run.
pub fn parse_news_stamp(raw: &str, today: NaiveDate) -> Result<(NaiveDate, String)> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    match tokens.as_slice() {
        [time] => Ok((today, (*time).to_string())),
        [date, time] => Ok((parse_date_token(date, today)?, (*time).to_string())),
        _ => Err(anyhow!("unexpected date/time stamp: {raw:?}")),
    }
}

/// A literal `Today` normalizes to the current run date; otherwise the
/// source formats dates like `Dec-27-22`.
fn parse_date_token(token: &str, today: NaiveDate) -> Result<NaiveDate> {
    if token.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    NaiveDate::parse_from_str(token, "%b-%d-%y")
        .map_err(|e| anyhow!("unparseable date token {token:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn one_token_is_a_time_with_todays_date() {
        let today = day(2024, 5, 3);
        let (date, time) = parse_news_stamp("09:15AM", today).unwrap();
        assert_eq!(date, today);
        assert_eq!(time, "09:15AM");
    }

    #[test]
    fn two_tokens_are_date_then_time() {
        let today = day(2024, 5, 3);
        let (date, time) = parse_news_stamp("Dec-27-22 07:56PM", today).unwrap();
        assert_eq!(date, day(2022, 12, 27));
        assert_eq!(time, "07:56PM");
    }

    #[test]
    fn literal_today_normalizes_to_run_date() {
        let today = day(2024, 5, 3);
        let (date, time) = parse_news_stamp("Today 05:00PM", today).unwrap();
        assert_eq!(date, today);
        assert_eq!(time, "05:00PM");

        // A bare "Today" is one token, so it lands in the time slot and the
        // date still defaults to the run date.
        let (date, _) = parse_news_stamp("Today", today).unwrap();
        assert_eq!(date, today);
    }

    #[test]
    fn malformed_stamps_are_errors_not_panics() {
        let today = day(2024, 5, 3);
        assert!(parse_news_stamp("", today).is_err());
        assert!(parse_news_stamp("a b c", today).is_err());
        assert!(parse_news_stamp("NotADate 07:56PM", today).is_err());
    }
}
