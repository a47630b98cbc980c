//! Parsing and formatting of dates typed by the user
//!
//! Accepted input: `yyyy-MM-dd`, `dd/MM/yyyy`, `dd/MM/yy` and `dd/MM`.
use chrono::{Datelike, NaiveDate};

/// A two-digit year resolves to the century that keeps it within this many years of today
const TWO_DIGIT_YEAR_WINDOW: i32 = 50;

fn number(part: &str, max_digits: usize) -> Option<u32> {
    if part.is_empty() || part.len() > max_digits || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn resolve_two_digit_year(short: i32, today: NaiveDate) -> i32 {
    let current = today.year();
    let candidate = current - current.rem_euclid(100) + short;
    if candidate > current + TWO_DIGIT_YEAR_WINDOW {
        candidate - 100
    } else if candidate < current - TWO_DIGIT_YEAR_WINDOW {
        candidate + 100
    } else {
        candidate
    }
}

fn parse_year(part: &str, today: NaiveDate) -> Option<i32> {
    match part.len() {
        4 => number(part, 4).map(|y| y as i32),
        1 | 2 => number(part, 2).map(|y| resolve_two_digit_year(y as i32, today)),
        _ => None,
    }
}

/// Parse a date typed by the user, `today` supplies the missing or short year.
///
/// Example: with today in 2021, "22/11" -> 2021-11-22 and "6/6/98" -> 1998-06-06
pub fn parse_date_id(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();

    if input.contains('-') {
        let mut parts = input.split('-');
        let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() || year.len() != 4 {
            return None;
        }
        return NaiveDate::from_ymd_opt(
            number(year, 4)? as i32,
            number(month, 2)?,
            number(day, 2)?,
        );
    }

    let parts: Vec<&str> = input.split('/').collect();
    let (day, month, year) = match parts.as_slice() {
        [day, month] => (*day, *month, today.year()),
        [day, month, year] => (*day, *month, parse_year(year, today)?),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, number(month, 2)?, number(day, 2)?)
}

/// Format as `dd/MM/yyyy`, the form `parse_date_id` reads back
pub fn format_date_id(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
