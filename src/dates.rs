//! Date expression parser
//!
//! Converts a constrained natural-language phrase of the shape
//! `"<MonthName> <day>-<day>"` (e.g. "March 28-30") into a [`DateRange`].
//! The year is fixed: the assistant books within a single known calendar
//! year and never infers one from the current date.

use crate::models::DateRange;
use crate::{Result, StayfinderError};
use chrono::NaiveDate;

/// Calendar year applied to every parsed phrase
pub const BOOKING_YEAR: i32 = 2025;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Map a month name to its 1-based number, case-insensitively
#[must_use]
pub fn month_number(name: &str) -> Option<u32> {
    let lowered = name.to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|month| *month == lowered)
        .map(|index| index as u32 + 1)
}

/// Parse a `"<Month> <d1>-<d2>"` phrase into a date range
///
/// Splits on the first hyphen: the left side carries the month name and
/// starting day, the right side the ending day only. Any malformed segment
/// yields [`StayfinderError::InvalidDateExpression`] rather than panicking.
pub fn parse_date_phrase(phrase: &str) -> Result<DateRange> {
    let (start, end) = phrase
        .trim()
        .split_once('-')
        .ok_or(StayfinderError::InvalidDateExpression)?;

    let mut start_words = start.split_whitespace();
    let month_name = start_words
        .next()
        .ok_or(StayfinderError::InvalidDateExpression)?;
    let day_in = start_words
        .next()
        .ok_or(StayfinderError::InvalidDateExpression)?;

    let month = month_number(month_name).ok_or(StayfinderError::InvalidDateExpression)?;

    let day_in: u32 = day_in
        .parse()
        .map_err(|_| StayfinderError::InvalidDateExpression)?;
    let day_out: u32 = end
        .trim()
        .parse()
        .map_err(|_| StayfinderError::InvalidDateExpression)?;

    let check_in = NaiveDate::from_ymd_opt(BOOKING_YEAR, month, day_in)
        .ok_or(StayfinderError::InvalidDateExpression)?;
    let check_out = NaiveDate::from_ymd_opt(BOOKING_YEAR, month, day_out)
        .ok_or(StayfinderError::InvalidDateExpression)?;

    Ok(DateRange {
        check_in,
        check_out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("March 28-30", "2025-03-28", "2025-03-30")]
    #[case("march 28-30", "2025-03-28", "2025-03-30")]
    #[case("January 1-2", "2025-01-01", "2025-01-02")]
    #[case("September 5-12", "2025-09-05", "2025-09-12")]
    #[case("  December 9-10  ", "2025-12-09", "2025-12-10")]
    fn test_well_formed_phrases(
        #[case] phrase: &str,
        #[case] check_in: &str,
        #[case] check_out: &str,
    ) {
        let range = parse_date_phrase(phrase).expect("should parse");
        assert_eq!(range.check_in.to_string(), check_in);
        assert_eq!(range.check_out.to_string(), check_out);
    }

    #[rstest]
    #[case("March 28")] // missing hyphen
    #[case("Smarch 28-30")] // unknown month
    #[case("March x-30")] // non-numeric start day
    #[case("March 28-y")] // non-numeric end day
    #[case("March")] // missing days entirely
    #[case("")]
    #[case("28-30")] // day number where the month should be
    #[case("February 30-31")] // not a real calendar date
    fn test_malformed_phrases(#[case] phrase: &str) {
        assert!(matches!(
            parse_date_phrase(phrase),
            Err(StayfinderError::InvalidDateExpression)
        ));
    }

    #[test]
    fn test_days_are_zero_padded_in_iso_output() {
        let range = parse_date_phrase("April 5-7").unwrap();
        assert_eq!(range.check_in.to_string(), "2025-04-05");
        assert_eq!(range.check_out.to_string(), "2025-04-07");
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("january"), Some(1));
        assert_eq!(month_number("DECEMBER"), Some(12));
        assert_eq!(month_number("March"), Some(3));
        assert_eq!(month_number("smarch"), None);
    }

    #[test]
    fn test_reversed_range_parses() {
        // checkOut > checkIn is not enforced here; the search client
        // rejects non-positive night counts.
        let range = parse_date_phrase("March 30-28").unwrap();
        assert_eq!(range.nights(), -2);
    }
}
