//! Shift validation.
//!
//! The validator runs three fail-fast checks against a proposed shift and
//! returns a [`NewShift`] ready for persistence. It reads from the stores but
//! never writes; saving is the caller's job.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SchedulingError, SchedulingResult};
use crate::models::NewShift;
use crate::store::{EmployeeStore, ShiftStore};

use super::duration::validate_duration;

/// A shift as requested by a caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftProposal {
    /// The employee to assign.
    pub employee_id: i64,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The time of day the shift starts.
    pub start_time: NaiveTime,
    /// The time of day the shift ends.
    pub end_time: NaiveTime,
    /// Optional free-form label.
    #[serde(default)]
    pub shift_type: Option<String>,
}

/// Validates proposed shifts against the employee and shift stores.
pub struct ShiftValidator<'a> {
    employees: &'a dyn EmployeeStore,
    shifts: &'a dyn ShiftStore,
}

impl<'a> ShiftValidator<'a> {
    /// Creates a validator reading from the given stores.
    pub fn new(employees: &'a dyn EmployeeStore, shifts: &'a dyn ShiftStore) -> Self {
        Self { employees, shifts }
    }

    /// Validates a proposal and returns the shift to persist.
    ///
    /// Checks run in this order and stop at the first failure:
    /// 1. the employee exists
    /// 2. the resolved duration is at least four hours
    /// 3. the employee has no shift on that date yet, whatever its times
    ///
    /// # Errors
    ///
    /// - [`SchedulingError::EmployeeNotFound`] for an unknown employee
    /// - [`SchedulingError::InvalidDuration`] for a shift under four hours
    /// - [`SchedulingError::DuplicateShiftForDay`] when the day is taken
    /// - [`SchedulingError::Storage`] when a store lookup fails
    pub fn validate_and_prepare(&self, proposal: ShiftProposal) -> SchedulingResult<NewShift> {
        self.check_employee_exists(proposal.employee_id)?;

        let hours = validate_duration(proposal.start_time, proposal.end_time)?;

        self.check_day_is_free(proposal.employee_id, proposal.date)?;

        debug!(
            employee_id = proposal.employee_id,
            date = %proposal.date,
            hours = %hours,
            "Shift proposal passed validation"
        );

        Ok(NewShift {
            employee_id: proposal.employee_id,
            date: proposal.date,
            start_time: proposal.start_time,
            end_time: proposal.end_time,
            shift_type: proposal.shift_type,
        })
    }

    fn check_employee_exists(&self, employee_id: i64) -> SchedulingResult<()> {
        if !self.employees.exists_by_id(employee_id)? {
            return Err(SchedulingError::EmployeeNotFound { employee_id });
        }
        Ok(())
    }

    fn check_day_is_free(&self, employee_id: i64, date: NaiveDate) -> SchedulingResult<()> {
        if self.shifts.exists_by_employee_and_date(employee_id, date)? {
            return Err(SchedulingError::DuplicateShiftForDay { employee_id, date });
        }
        Ok(())
    }
}
