//! Shift model and related types.
//!
//! This module defines the stored [`Shift`] record and the [`NewShift`]
//! value produced by validation before the store assigns an identifier.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::scheduling::resolved_duration_hours;

/// A validated shift that has not been persisted yet.
///
/// Only the shift validator produces these; the store turns one into a
/// [`Shift`] by assigning an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShift {
    /// The employee working the shift.
    pub employee_id: i64,
    /// The calendar date the shift is assigned to.
    pub date: NaiveDate,
    /// The time of day the shift starts.
    pub start_time: NaiveTime,
    /// The time of day the shift ends. Earlier than `start_time` means the next day.
    pub end_time: NaiveTime,
    /// Optional free-form label such as "MORNING" or "NIGHT".
    #[serde(default)]
    pub shift_type: Option<String>,
}

impl NewShift {
    /// Attaches a store-assigned identifier, producing the stored record.
    pub fn with_id(self, id: i64) -> Shift {
        Shift {
            id,
            employee_id: self.employee_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            shift_type: self.shift_type,
        }
    }
}

/// A work shift assigned to one employee on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Store-assigned identifier, immutable after creation.
    pub id: i64,
    /// The employee working the shift.
    pub employee_id: i64,
    /// The calendar date the shift is assigned to.
    pub date: NaiveDate,
    /// The time of day the shift starts.
    pub start_time: NaiveTime,
    /// The time of day the shift ends. Earlier than `start_time` means the next day.
    pub end_time: NaiveTime,
    /// Optional free-form label such as "MORNING" or "NIGHT".
    #[serde(default)]
    pub shift_type: Option<String>,
}

impl Shift {
    /// Returns the shift length in hours, wrapping past midnight when the
    /// end time is earlier than the start time.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_board::models::Shift;
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     id: 1,
    ///     employee_id: 5,
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    ///     start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///     end_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     shift_type: Some("NIGHT".to_string()),
    /// };
    /// assert_eq!(shift.duration_hours(), Decimal::new(8, 0));
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        resolved_duration_hours(self.start_time, self.end_time)
    }

    /// Returns true if the shift ends on the calendar day after `date`.
    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_shift(start: &str, end: &str) -> Shift {
        Shift {
            id: 1,
            employee_id: 5,
            date: make_date("2024-01-10"),
            start_time: make_time(start),
            end_time: make_time(end),
            shift_type: None,
        }
    }

    #[test]
    fn test_day_shift_duration() {
        let shift = make_shift("09:00", "17:00");
        assert_eq!(shift.duration_hours(), Decimal::new(8, 0));
        assert!(!shift.is_overnight());
    }

    #[test]
    fn test_overnight_shift_duration() {
        let shift = make_shift("22:00", "06:00");
        assert_eq!(shift.duration_hours(), Decimal::new(8, 0));
        assert!(shift.is_overnight());
    }

    #[test]
    fn test_half_hour_duration() {
        let shift = make_shift("09:00", "13:30");
        assert_eq!(shift.duration_hours(), Decimal::new(45, 1));
    }

    #[test]
    fn test_with_id_keeps_fields() {
        let new_shift = NewShift {
            employee_id: 3,
            date: make_date("2024-02-01"),
            start_time: make_time("08:00"),
            end_time: make_time("16:00"),
            shift_type: Some("MORNING".to_string()),
        };

        let shift = new_shift.clone().with_id(12);
        assert_eq!(shift.id, 12);
        assert_eq!(shift.employee_id, new_shift.employee_id);
        assert_eq!(shift.date, new_shift.date);
        assert_eq!(shift.start_time, new_shift.start_time);
        assert_eq!(shift.end_time, new_shift.end_time);
        assert_eq!(shift.shift_type, new_shift.shift_type);
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{
            "id": 4,
            "employee_id": 2,
            "date": "2024-01-10",
            "start_time": "22:00:00",
            "end_time": "06:00:00",
            "shift_type": "NIGHT"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.id, 4);
        assert_eq!(shift.start_time, make_time("22:00"));
        assert_eq!(shift.shift_type.as_deref(), Some("NIGHT"));
    }

    #[test]
    fn test_shift_type_defaults_to_none() {
        let json = r#"{
            "id": 4,
            "employee_id": 2,
            "date": "2024-01-10",
            "start_time": "09:00:00",
            "end_time": "17:00:00"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert!(shift.shift_type.is_none());
    }
}
