//! Shift duration resolution.
//!
//! Shifts are stored as a date plus two times of day. An end time earlier
//! than the start time is read as falling on the next calendar day, so the
//! raw difference gets a single 24 hour adjustment. Shifts longer than a day
//! cannot be expressed.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::{SchedulingError, SchedulingResult};

/// Minimum accepted shift length in hours.
pub const MINIMUM_SHIFT_HOURS: i64 = 4;

const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Returns the shift length in seconds after overnight wraparound.
///
/// Equal start and end times resolve to zero.
///
/// # Examples
///
/// ```
/// use shift_board::scheduling::resolved_duration_seconds;
/// use chrono::NaiveTime;
///
/// let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(resolved_duration_seconds(start, end), 8 * 3600);
/// ```
pub fn resolved_duration_seconds(start_time: NaiveTime, end_time: NaiveTime) -> i64 {
    let raw = (end_time - start_time).num_seconds();
    if raw < 0 { raw + SECONDS_PER_DAY } else { raw }
}

/// Returns the shift length in hours, rounded to two decimal places.
pub fn resolved_duration_hours(start_time: NaiveTime, end_time: NaiveTime) -> Decimal {
    let seconds = resolved_duration_seconds(start_time, end_time);
    (Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR))
        .round_dp(2)
        .normalize()
}

/// Checks the minimum duration rule and returns the resolved hours.
///
/// # Errors
///
/// Returns [`SchedulingError::InvalidDuration`] when the resolved length is
/// under [`MINIMUM_SHIFT_HOURS`].
pub fn validate_duration(start_time: NaiveTime, end_time: NaiveTime) -> SchedulingResult<Decimal> {
    let seconds = resolved_duration_seconds(start_time, end_time);
    let hours = resolved_duration_hours(start_time, end_time);

    if seconds < MINIMUM_SHIFT_HOURS * SECONDS_PER_HOUR {
        return Err(SchedulingError::InvalidDuration { hours });
    }

    Ok(hours)
}
