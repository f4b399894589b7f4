//! Dosing calendar expansion.
//!
//! A therapy is stored as `(start, end, period frequency)`; this module turns
//! that compact form into the explicit list of administration timestamps.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::domain::error::DomainError;

/// Drop sub-second precision. Stored timestamps carry whole seconds only.
pub fn truncate_to_seconds(at: NaiveDateTime) -> NaiveDateTime {
    at.with_nanosecond(0).unwrap_or(at)
}

/// Midnight at the beginning of `day`.
pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Last representable instant of `day`.
pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    // 23:59:59.999 always exists, so `and_hms_milli_opt` cannot fail here.
    day.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(day))
}

/// Expand a recurrence into an ascending dosing calendar.
///
/// The first element is `start`. Each following element is the previous one
/// plus `frequency_days` days, and stepping continues while the current
/// element is strictly before `end`. The last element can therefore land on
/// or after `end`: a cycle that starts before the end date is always
/// completed.
///
/// The result always holds at least one element. A non-positive frequency is
/// rejected before any stepping takes place.
pub fn dosing_dates(
    start: NaiveDateTime,
    end: NaiveDateTime,
    frequency_days: i64,
) -> Result<Vec<NaiveDateTime>, DomainError> {
    if frequency_days <= 0 {
        return Err(DomainError::InvalidFrequency {
            field: "period frequency",
            frequency: frequency_days,
        });
    }

    let start = truncate_to_seconds(start);
    let end = truncate_to_seconds(end);
    let step = Duration::try_days(frequency_days).ok_or_else(|| DomainError::InvalidDateRange {
        reason: format!("period of {frequency_days} days is out of range"),
    })?;

    let mut dates = vec![start];
    let mut current = start;
    while current < end {
        current = current
            .checked_add_signed(step)
            .ok_or_else(|| DomainError::InvalidDateRange {
                reason: format!("stepping past {current} overflows the calendar"),
            })?;
        dates.push(current);
    }

    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        start_of_day(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn every_third_day_lands_on_end() {
        let dates = dosing_dates(at(2024, 1, 1), at(2024, 1, 10), 3).unwrap();
        assert_eq!(
            dates,
            vec![at(2024, 1, 1), at(2024, 1, 4), at(2024, 1, 7), at(2024, 1, 10)]
        );
    }

    #[test]
    fn last_cycle_overshoots_end() {
        let dates = dosing_dates(at(2024, 1, 1), at(2024, 1, 9), 3).unwrap();
        assert_eq!(dates.last().copied(), Some(at(2024, 1, 10)));
    }

    #[test]
    fn single_day_therapy_has_one_date() {
        let dates = dosing_dates(at(2024, 3, 5), at(2024, 3, 5), 1).unwrap();
        assert_eq!(dates, vec![at(2024, 3, 5)]);
    }

    #[test]
    fn end_before_start_still_yields_start() {
        let dates = dosing_dates(at(2024, 3, 5), at(2024, 3, 1), 2).unwrap();
        assert_eq!(dates, vec![at(2024, 3, 5)]);
    }

    #[test]
    fn zero_and_negative_frequency_are_rejected() {
        assert_eq!(
            dosing_dates(at(2024, 1, 1), at(2024, 1, 10), 0),
            Err(DomainError::InvalidFrequency { field: "period frequency", frequency: 0 })
        );
        assert_eq!(
            dosing_dates(at(2024, 1, 1), at(2024, 1, 10), -4),
            Err(DomainError::InvalidFrequency { field: "period frequency", frequency: -4 })
        );
    }

    #[test]
    fn consecutive_dates_differ_by_frequency() {
        for freq in 1..=9 {
            let dates = dosing_dates(at(2024, 2, 1), at(2024, 4, 30), freq).unwrap();
            assert_eq!(dates[0], at(2024, 2, 1));
            for pair in dates.windows(2) {
                assert!(pair[0] < pair[1]);
                assert_eq!(pair[1] - pair[0], Duration::days(freq));
            }
        }
    }

    #[test]
    fn sub_second_precision_is_dropped() {
        let start = at(2024, 1, 1)
            .with_nanosecond(250_000_000)
            .unwrap();
        let dates = dosing_dates(start, start, 1).unwrap();
        assert_eq!(dates, vec![at(2024, 1, 1)]);
    }

    #[test]
    fn day_boundaries() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(start_of_day(day).time(), NaiveTime::MIN);
        assert!(end_of_day(day) > day.and_hms_opt(23, 59, 59).unwrap());
        assert!(end_of_day(day) < start_of_day(day.succ_opt().unwrap()));
    }
}
