use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Calendar-derived feature set required by the prediction endpoints.
///
/// Derived from the user-selected date on every prediction round; never
/// persisted. All fields are numeric because the model service consumes
/// them as features.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    /// 0 = Sunday … 6 = Saturday.
    pub day_of_week: u32,
    /// 1–12.
    pub month: u32,
    /// 1–4.
    pub quarter: u32,
    pub year: i32,
    /// 1 iff the date falls on a Saturday or Sunday, else 0.
    pub is_weekend: u8,
}

impl DateParts {
    pub fn from_date(date: NaiveDate) -> Self {
        let weekday = date.weekday();
        Self {
            day_of_week: weekday.num_days_from_sunday(),
            month: date.month(),
            quarter: date.month0() / 3 + 1,
            year: date.year(),
            is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saturday_and_sunday_are_weekend() {
        // 2026-08-08 is a Saturday, 2026-08-09 a Sunday, 2026-08-10 a Monday.
        assert_eq!(DateParts::from_date(date(2026, 8, 8)).is_weekend, 1);
        assert_eq!(DateParts::from_date(date(2026, 8, 9)).is_weekend, 1);
        assert_eq!(DateParts::from_date(date(2026, 8, 10)).is_weekend, 0);
    }

    #[test]
    fn day_of_week_is_sunday_based() {
        assert_eq!(DateParts::from_date(date(2026, 8, 9)).day_of_week, 0);
        assert_eq!(DateParts::from_date(date(2026, 8, 10)).day_of_week, 1);
        assert_eq!(DateParts::from_date(date(2026, 8, 8)).day_of_week, 6);
    }

    #[test]
    fn quarter_boundaries() {
        assert_eq!(DateParts::from_date(date(2026, 1, 1)).quarter, 1);
        assert_eq!(DateParts::from_date(date(2026, 3, 31)).quarter, 1);
        assert_eq!(DateParts::from_date(date(2026, 4, 1)).quarter, 2);
        assert_eq!(DateParts::from_date(date(2026, 9, 30)).quarter, 3);
        assert_eq!(DateParts::from_date(date(2026, 12, 31)).quarter, 4);
    }

    proptest! {
        #[test]
        fn derived_parts_are_consistent(y in 2000i32..2100, m in 1u32..=12, d in 1u32..=28) {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let parts = DateParts::from_date(date);

            prop_assert_eq!(parts.year, y);
            prop_assert_eq!(parts.month, m);
            prop_assert!((1..=4).contains(&parts.quarter));
            prop_assert_eq!(parts.quarter, (m - 1) / 3 + 1);
            prop_assert!(parts.day_of_week <= 6);
            prop_assert_eq!(parts.day_of_week, date.weekday().num_days_from_sunday());
            prop_assert_eq!(
                parts.is_weekend == 1,
                matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
            );
        }
    }
}
