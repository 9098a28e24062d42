//! Core data types shared across the `Stayfinder` modules

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the destination registry: a city name and the opaque
/// identifier the search provider knows it by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityEntry {
    pub name: &'static str,
    pub dest_id: &'static str,
}

/// A check-in/check-out date pair derived from a date phrase
///
/// The check-out date is not validated to lie after the check-in date; a
/// reversed range is rejected later by the search client before the
/// per-night division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl DateRange {
    /// Number of nights between check-in and check-out
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Everything the search client needs for one provider query
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// City name as extracted from the message (lower-cased)
    pub destination: String,
    pub dates: DateRange,
    /// Maximum acceptable price per night, in INR
    pub nightly_budget: u32,
}

/// One hotel listing that passed the budget filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelOffer {
    pub name: String,
    /// Star class, 0-5
    pub stars: u8,
    /// Gross price divided by nights, rounded to two decimals for display
    pub price_per_night: f64,
    /// Gross price for the whole stay, unrounded
    pub total_price: f64,
    /// Excluded taxes and charges, unrounded
    pub taxes: f64,
    pub review_score: f64,
    pub review_word: String,
    pub review_count: u32,
    pub photo_url: String,
    pub free_cancellation: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_nights_count() {
        let range = DateRange {
            check_in: date(2025, 3, 28),
            check_out: date(2025, 3, 30),
        };
        assert_eq!(range.nights(), 2);
    }

    #[test]
    fn test_nights_reversed_range_is_negative() {
        let range = DateRange {
            check_in: date(2025, 3, 30),
            check_out: date(2025, 3, 28),
        };
        assert_eq!(range.nights(), -2);
    }

    #[test]
    fn test_date_range_serializes_as_iso() {
        let range = DateRange {
            check_in: date(2025, 4, 5),
            check_out: date(2025, 4, 7),
        };
        let json = serde_json::to_value(range).unwrap();
        assert_eq!(json["check_in"], "2025-04-05");
        assert_eq!(json["check_out"], "2025-04-07");
    }
}
