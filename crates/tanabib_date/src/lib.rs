/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! tanabib_date - partial dates for bibliographic records
//!
//! Bibliographic data rarely carries a complete calendar date. A record may
//! know only its year, or a month and a year, or nothing parseable at all.
//! This crate parses the loose date strings found in reference managers into
//! a [`PartialDate`] and renders the canonical Tana display form,
//! `"March 15th, 2020"`, filling any missing component with a fixed default.

use std::fmt;

use thiserror::Error;
use winnow::ascii::{alpha1, space1};
use winnow::combinator::{alt, opt, preceded, terminated};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{take, take_while};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// English month names, indexed by the 0-based month number.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Year shown when a date has no year. Undated records sort into the far future.
pub const FALLBACK_YEAR: i32 = 2100;

/// Day shown when a date has no day.
pub const FALLBACK_DAY: u32 = 1;

/// Errors raised while reading a date string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("unrecognized date: {0:?}")]
    Unrecognized(String),
}

/// A calendar date where any component may be missing.
///
/// `month` is 0-based (January is `0`), matching the item data exported by
/// Zotero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartialDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl PartialDate {
    pub fn new(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Self {
        Self { year, month, day }
    }

    /// A date that only knows its year.
    pub fn year_only(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Default::default()
        }
    }

    /// The year to display; a missing or zero year becomes [`FALLBACK_YEAR`].
    pub fn display_year(&self) -> i32 {
        self.year.filter(|y| *y != 0).unwrap_or(FALLBACK_YEAR)
    }

    /// The month name to display; a missing or out-of-range month becomes January.
    pub fn month_name(&self) -> &'static str {
        self.month
            .and_then(|m| MONTHS.get(m as usize))
            .copied()
            .unwrap_or(MONTHS[0])
    }

    /// The day to display; a missing or zero day becomes [`FALLBACK_DAY`].
    pub fn display_day(&self) -> u32 {
        self.day.filter(|d| *d != 0).unwrap_or(FALLBACK_DAY)
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = self.display_day();
        write!(
            f,
            "{} {}{}, {}",
            self.month_name(),
            day,
            ordinal_suffix(day),
            self.display_year()
        )
    }
}

/// English ordinal suffix for a day of the month.
///
/// Days 4 through 20 always take "th", which covers the 11–13 exception.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if day > 3 && day < 21 {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

type PResult<O> = Result<O, ErrMode<ContextError>>;

fn backtrack<O>() -> PResult<O> {
    Err(ErrMode::Backtrack(ContextError::default()))
}

fn four<'i>(input: &mut &'i str) -> PResult<&'i str> {
    take(4_usize).parse_next(input)
}

fn digits<'i>(input: &mut &'i str) -> PResult<&'i str> {
    take_while(1..=2, |c: char| c.is_ascii_digit()).parse_next(input)
}

fn word<'i>(input: &mut &'i str) -> PResult<&'i str> {
    alpha1.parse_next(input)
}

fn spaces(input: &mut &str) -> PResult<()> {
    space1.void().parse_next(input)
}

fn separator(input: &mut &str) -> PResult<char> {
    alt(('-', '/', '.')).parse_next(input)
}

fn year(input: &mut &str) -> PResult<i32> {
    let s = four(input)?;
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return backtrack();
    }
    s.parse::<i32>()
        .map_err(|_| ErrMode::Backtrack(ContextError::default()))
}

/// A two-digit year, read the way POSIX `%y` reads it: 69-99 is the 1900s,
/// 00-68 the 2000s.
fn short_year(input: &mut &str) -> PResult<i32> {
    let value: i32 = take_while(2, |c: char| c.is_ascii_digit())
        .try_map(|s: &str| s.parse::<i32>())
        .parse_next(input)?;
    Ok(if value >= 69 { 1900 + value } else { 2000 + value })
}

/// A 1-based month number, returned 0-based.
fn month_number(input: &mut &str) -> PResult<u32> {
    let value: u32 = digits
        .try_map(|s: &str| s.parse::<u32>())
        .parse_next(input)?;
    match value {
        1..=12 => Ok(value - 1),
        _ => backtrack(),
    }
}

/// A full or abbreviated English month name, returned 0-based.
fn month_name(input: &mut &str) -> PResult<u32> {
    let name = word(input)?;
    let _ = opt('.').parse_next(input)?;
    match lookup_month(name) {
        Some(index) => Ok(index),
        None => backtrack(),
    }
}

fn lookup_month(name: &str) -> Option<u32> {
    if name.len() < 3 {
        return None;
    }
    let lower = name.to_lowercase();
    MONTHS
        .iter()
        .position(|m| m.to_lowercase().starts_with(&lower))
        .map(|i| i as u32)
}

/// A weekday name ("Monday", "Tue.") with its trailing comma and space.
fn weekday(input: &mut &str) -> PResult<()> {
    let name = word(input)?;
    let lower = name.to_lowercase();
    if name.len() < 3 || !WEEKDAYS.iter().any(|d| d.starts_with(&lower)) {
        return backtrack();
    }
    let _ = opt('.').parse_next(input)?;
    let _ = opt(',').parse_next(input)?;
    spaces(input)
}

const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

fn day(input: &mut &str) -> PResult<u32> {
    let value: u32 = digits
        .try_map(|s: &str| s.parse::<u32>())
        .parse_next(input)?;
    match value {
        1..=31 => Ok(value),
        _ => backtrack(),
    }
}

/// A day with an optional English ordinal suffix ("15th").
fn ordinal_day(input: &mut &str) -> PResult<u32> {
    let value = day(input)?;
    let _ = opt(alt(("st", "nd", "rd", "th"))).parse_next(input)?;
    Ok(value)
}

/// Rejects a match that stops in the middle of a number ("20201").
fn boundary(input: &mut &str) -> PResult<()> {
    match input.chars().next() {
        Some(c) if c.is_ascii_digit() => backtrack(),
        _ => Ok(()),
    }
}

/// `YYYY[-MM[-DD]]`, with `-`, `/` or `.` separators and any trailing time.
fn iso_date(input: &mut &str) -> PResult<PartialDate> {
    let year = year(input)?;
    let month = opt(preceded(separator, month_number)).parse_next(input)?;
    let day = if month.is_some() {
        opt(preceded(separator, day)).parse_next(input)?
    } else {
        None
    };
    boundary(input)?;
    Ok(PartialDate::new(Some(year), month, day))
}

/// `M/D/YYYY` or `M/D/YY`
fn us_date(input: &mut &str) -> PResult<PartialDate> {
    let month = month_number(input)?;
    let _ = '/'.parse_next(input)?;
    let day = day(input)?;
    let _ = '/'.parse_next(input)?;
    let year = alt((year, short_year)).parse_next(input)?;
    boundary(input)?;
    Ok(PartialDate::new(Some(year), Some(month), Some(day)))
}

/// `MM/YYYY`
fn month_year(input: &mut &str) -> PResult<PartialDate> {
    let month = month_number(input)?;
    let _ = '/'.parse_next(input)?;
    let year = year(input)?;
    boundary(input)?;
    Ok(PartialDate::new(Some(year), Some(month), None))
}

/// `D.M.YYYY`
fn european_date(input: &mut &str) -> PResult<PartialDate> {
    let day = day(input)?;
    let _ = '.'.parse_next(input)?;
    let month = month_number(input)?;
    let _ = '.'.parse_next(input)?;
    let year = year(input)?;
    boundary(input)?;
    Ok(PartialDate::new(Some(year), Some(month), Some(day)))
}

/// `Month D, YYYY`, `Month Dth YYYY`, `Month YYYY` or `Month, YYYY`
fn month_first(input: &mut &str) -> PResult<PartialDate> {
    let month = month_name(input)?;
    let _ = opt(',').parse_next(input)?;
    spaces(input)?;
    let day = opt(terminated(ordinal_day, (opt(','), spaces))).parse_next(input)?;
    let year = year(input)?;
    boundary(input)?;
    Ok(PartialDate::new(Some(year), Some(month), day))
}

/// `D Month YYYY`
fn day_first(input: &mut &str) -> PResult<PartialDate> {
    let day = ordinal_day(input)?;
    spaces(input)?;
    let month = month_name(input)?;
    let _ = opt(',').parse_next(input)?;
    spaces(input)?;
    let year = year(input)?;
    boundary(input)?;
    Ok(PartialDate::new(Some(year), Some(month), Some(day)))
}

/// `YYYY Month [D]`
fn year_first(input: &mut &str) -> PResult<PartialDate> {
    let year = year(input)?;
    spaces(input)?;
    let month = month_name(input)?;
    let _ = opt(',').parse_next(input)?;
    let day = opt(preceded(spaces, ordinal_day)).parse_next(input)?;
    boundary(input)?;
    Ok(PartialDate::new(Some(year), Some(month), day))
}

/// The first standalone four-digit token, for strings like "Spring 2020".
fn year_token(input: &str) -> Option<i32> {
    input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .find(|token| token.len() == 4 && token.chars().all(|c| c.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
}

/// Parse a loosely formatted date string.
///
/// Structured forms are tried first, after skipping a leading weekday;
/// failing those, a lone four-digit year anywhere in the string is accepted.
/// A string with nothing recognizable is an error.
pub fn parse(input: &str) -> Result<PartialDate, DateError> {
    let trimmed = input.trim();
    let mut rest = trimmed;
    let forms = alt((
        year_first,
        iso_date,
        us_date,
        month_year,
        european_date,
        month_first,
        day_first,
    ));
    if let Ok(date) = preceded(opt(weekday), forms).parse_next(&mut rest) {
        return Ok(date);
    }
    year_token(trimmed)
        .map(PartialDate::year_only)
        .ok_or_else(|| DateError::Unrecognized(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let date = parse("2020-03-15").unwrap();
        assert_eq!(date, PartialDate::new(Some(2020), Some(2), Some(15)));
    }

    #[test]
    fn test_parse_iso_partial() {
        assert_eq!(parse("2020-03").unwrap(), PartialDate::new(Some(2020), Some(2), None));
        assert_eq!(parse("1962").unwrap(), PartialDate::year_only(1962));
        assert_eq!(
            parse("2020/3/5").unwrap(),
            PartialDate::new(Some(2020), Some(2), Some(5))
        );
    }

    #[test]
    fn test_parse_iso_with_time() {
        let date = parse("2021-11-02T08:15:00Z").unwrap();
        assert_eq!(date, PartialDate::new(Some(2021), Some(10), Some(2)));
    }

    #[test]
    fn test_parse_invalid_month_keeps_year() {
        assert_eq!(parse("2020-13-01").unwrap(), PartialDate::year_only(2020));
    }

    #[test]
    fn test_parse_numeric_orders() {
        assert_eq!(
            parse("3/15/2020").unwrap(),
            PartialDate::new(Some(2020), Some(2), Some(15))
        );
        assert_eq!(
            parse("15.03.2020").unwrap(),
            PartialDate::new(Some(2020), Some(2), Some(15))
        );
        assert_eq!(
            parse("03/2020").unwrap(),
            PartialDate::new(Some(2020), Some(2), None)
        );
        assert_eq!(
            parse("3/15/20").unwrap(),
            PartialDate::new(Some(2020), Some(2), Some(15))
        );
        assert_eq!(
            parse("12/31/99").unwrap(),
            PartialDate::new(Some(1999), Some(11), Some(31))
        );
        assert!(parse("3/15/201").is_err());
    }

    #[test]
    fn test_parse_month_names() {
        assert_eq!(
            parse("March 15, 2020").unwrap(),
            PartialDate::new(Some(2020), Some(2), Some(15))
        );
        assert_eq!(
            parse("March 15th, 2020").unwrap(),
            PartialDate::new(Some(2020), Some(2), Some(15))
        );
        assert_eq!(
            parse("15 March 2020").unwrap(),
            PartialDate::new(Some(2020), Some(2), Some(15))
        );
        assert_eq!(
            parse("Sept. 2019").unwrap(),
            PartialDate::new(Some(2019), Some(8), None)
        );
        assert_eq!(
            parse("dec 2019").unwrap(),
            PartialDate::new(Some(2019), Some(11), None)
        );
        assert_eq!(
            parse("March, 2020").unwrap(),
            PartialDate::new(Some(2020), Some(2), None)
        );
        assert_eq!(
            parse("2020 March 15").unwrap(),
            PartialDate::new(Some(2020), Some(2), Some(15))
        );
        assert_eq!(
            parse("2020 Mar").unwrap(),
            PartialDate::new(Some(2020), Some(2), None)
        );
        assert_eq!(
            parse("Monday, March 15, 2020").unwrap(),
            PartialDate::new(Some(2020), Some(2), Some(15))
        );
        assert_eq!(
            parse("Tue 16 March 2021").unwrap(),
            PartialDate::new(Some(2021), Some(2), Some(16))
        );
    }

    #[test]
    fn test_parse_year_in_text() {
        assert_eq!(parse("Spring 2020").unwrap(), PartialDate::year_only(2020));
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(
            parse("n.d."),
            Err(DateError::Unrecognized("n.d.".to_string()))
        );
        assert!(parse("").is_err());
    }

    #[test]
    fn test_ordinal_suffix() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (20, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn test_display_complete_date() {
        let date = PartialDate::new(Some(2020), Some(2), Some(15));
        assert_eq!(date.to_string(), "March 15th, 2020");
        let date = PartialDate::new(Some(1999), Some(11), Some(22));
        assert_eq!(date.to_string(), "December 22nd, 1999");
    }

    #[test]
    fn test_display_fallbacks() {
        assert_eq!(PartialDate::default().to_string(), "January 1st, 2100");
        assert_eq!(PartialDate::year_only(1962).to_string(), "January 1st, 1962");
        assert_eq!(
            PartialDate::new(None, Some(5), None).to_string(),
            "June 1st, 2100"
        );
    }

    #[test]
    fn test_display_out_of_range_month() {
        let date = PartialDate::new(Some(2001), Some(12), Some(3));
        assert_eq!(date.to_string(), "January 3rd, 2001");
    }

    #[test]
    fn test_display_zero_components() {
        let date = PartialDate::new(Some(0), Some(0), Some(0));
        assert_eq!(date.to_string(), "January 1st, 2100");
    }
}
