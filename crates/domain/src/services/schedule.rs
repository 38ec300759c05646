//! Booking schedule policy.
//!
//! Decides whether a requested reservation slot is bookable: inside
//! operating hours, not on the weekly closed day, not in the past.
//! The hour cutoffs come from configuration; the closed day is fixed.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use thiserror::Error;

/// The restaurant does not take reservations on this weekday.
pub const CLOSED_WEEKDAY: Weekday = Weekday::Tue;

/// Why a requested slot is not bookable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("reservation_time must be between {opening} and {closing}")]
    OutsideHours { opening: String, closing: String },

    #[error("the restaurant is closed on Tuesdays")]
    ClosedDay,

    #[error("reservation must be set for a future date and time")]
    InPast,
}

/// Operating-hours policy with inclusive opening and closing cutoffs.
#[derive(Debug, Clone, Copy)]
pub struct SchedulePolicy {
    opening: NaiveTime,
    closing: NaiveTime,
}

impl SchedulePolicy {
    pub fn new(opening: NaiveTime, closing: NaiveTime) -> Self {
        Self { opening, closing }
    }

    pub fn opening(&self) -> NaiveTime {
        self.opening
    }

    pub fn closing(&self) -> NaiveTime {
        self.closing
    }

    /// Checks a requested slot against the policy, failing on the first
    /// violated rule: hours, then closed day, then past date.
    ///
    /// `now` is passed in rather than read from the clock so callers and
    /// tests control the comparison instant.
    pub fn check_slot(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        now: NaiveDateTime,
    ) -> Result<(), ScheduleError> {
        if time < self.opening || time > self.closing {
            return Err(ScheduleError::OutsideHours {
                opening: self.opening.format("%H:%M").to_string(),
                closing: self.closing.format("%H:%M").to_string(),
            });
        }

        if date.weekday() == CLOSED_WEEKDAY {
            return Err(ScheduleError::ClosedDay);
        }

        if date.and_time(time) < now {
            return Err(ScheduleError::InPast);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> SchedulePolicy {
        SchedulePolicy::new(
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(21, 30, 0).unwrap(),
        )
    }

    fn now() -> NaiveDateTime {
        // A Wednesday, well before any slot used in the tests.
        NaiveDate::from_ymd_opt(2031, 4, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn wednesday() -> NaiveDate {
        let date = NaiveDate::from_ymd_opt(2031, 4, 9).unwrap();
        assert_eq!(date.weekday(), Weekday::Wed);
        date
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_slot_inside_hours_is_bookable() {
        assert!(policy().check_slot(wednesday(), time(18, 0), now()).is_ok());
    }

    #[test]
    fn test_boundary_times_are_inclusive() {
        assert!(policy().check_slot(wednesday(), time(10, 30), now()).is_ok());
        assert!(policy().check_slot(wednesday(), time(21, 30), now()).is_ok());
    }

    #[test]
    fn test_before_opening_rejected() {
        let err = policy()
            .check_slot(wednesday(), time(10, 29), now())
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::OutsideHours {
                opening: "10:30".to_string(),
                closing: "21:30".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "reservation_time must be between 10:30 and 21:30"
        );
    }

    #[test]
    fn test_after_closing_rejected() {
        assert!(policy().check_slot(wednesday(), time(21, 31), now()).is_err());
        assert!(policy().check_slot(wednesday(), time(23, 0), now()).is_err());
    }

    #[test]
    fn test_tuesday_rejected() {
        let tuesday = NaiveDate::from_ymd_opt(2031, 4, 8).unwrap();
        assert_eq!(tuesday.weekday(), Weekday::Tue);
        assert_eq!(
            policy().check_slot(tuesday, time(18, 0), now()),
            Err(ScheduleError::ClosedDay)
        );
    }

    #[test]
    fn test_tuesday_rejected_even_outside_hours_reports_hours_first() {
        // Hours are checked before the closed day; first failure wins.
        let tuesday = NaiveDate::from_ymd_opt(2031, 4, 8).unwrap();
        let err = policy().check_slot(tuesday, time(9, 0), now()).unwrap_err();
        assert!(matches!(err, ScheduleError::OutsideHours { .. }));
    }

    #[test]
    fn test_past_slot_rejected() {
        let past = NaiveDate::from_ymd_opt(2031, 4, 2).unwrap();
        // 2031-04-02 is a Wednesday; 08:00 < now (09:00), but hours are
        // checked first, so probe with an in-hours past time.
        let later_now = past.and_hms_opt(19, 0, 0).unwrap();
        assert_eq!(
            policy().check_slot(past, time(18, 0), later_now),
            Err(ScheduleError::InPast)
        );
    }

    #[test]
    fn test_same_instant_is_not_past() {
        let date = wednesday();
        let at_slot = date.and_hms_opt(18, 0, 0).unwrap();
        assert!(policy().check_slot(date, time(18, 0), at_slot).is_ok());
    }

    #[test]
    fn test_custom_hours() {
        let wide = SchedulePolicy::new(time(10, 0), time(21, 30));
        assert!(wide.check_slot(wednesday(), time(10, 0), now()).is_ok());
        assert!(wide.check_slot(wednesday(), time(9, 59), now()).is_err());
    }
}
