//! Shift operations exposed to callers.
//!
//! [`ShiftService`] wires the validator, the query engine and the shift
//! store together. Every call reads the current store state; nothing is
//! cached between calls.
//!
//! The one-shift-per-day check and the following save are not atomic here.
//! Two concurrent creations for the same employee and date can both pass
//! validation unless the shift store enforces its own constraint (see
//! [`InMemoryShiftStore::with_daily_uniqueness`](crate::store::InMemoryShiftStore::with_daily_uniqueness)).

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{SchedulingError, SchedulingResult};
use crate::models::Shift;
use crate::store::{EmployeeStore, ShiftStore};

use super::query::{ShiftFilter, query_shifts};
use super::validator::{ShiftProposal, ShiftValidator};

/// Create, list, fetch and delete shifts.
#[derive(Clone)]
pub struct ShiftService {
    employees: Arc<dyn EmployeeStore>,
    shifts: Arc<dyn ShiftStore>,
}

impl ShiftService {
    /// Creates a service over the given stores.
    pub fn new(employees: Arc<dyn EmployeeStore>, shifts: Arc<dyn ShiftStore>) -> Self {
        Self { employees, shifts }
    }

    /// Validates a proposal and persists it.
    ///
    /// # Errors
    ///
    /// Any validation error from [`ShiftValidator::validate_and_prepare`],
    /// or [`SchedulingError::Storage`] when the save fails.
    pub fn create_shift(&self, proposal: ShiftProposal) -> SchedulingResult<Shift> {
        let validator = ShiftValidator::new(self.employees.as_ref(), self.shifts.as_ref());
        let new_shift = validator.validate_and_prepare(proposal)?;
        let shift = self.shifts.save(new_shift)?;

        info!(
            shift_id = shift.id,
            employee_id = shift.employee_id,
            date = %shift.date,
            start_time = %shift.start_time,
            end_time = %shift.end_time,
            hours = %shift.duration_hours(),
            overnight = shift.is_overnight(),
            "Shift created"
        );
        Ok(shift)
    }

    /// Lists shifts matching the filter.
    pub fn list_shifts(&self, filter: ShiftFilter) -> SchedulingResult<Vec<Shift>> {
        let shifts = query_shifts(self.shifts.as_ref(), filter)?;
        debug!(lookup = ?filter.lookup(), count = shifts.len(), "Shifts listed");
        Ok(shifts)
    }

    /// Fetches one shift by identifier.
    pub fn get_shift(&self, id: i64) -> SchedulingResult<Shift> {
        self.shifts
            .find_by_id(id)?
            .ok_or(SchedulingError::ShiftNotFound { id })
    }

    /// Deletes a shift. Deleting a missing identifier succeeds and changes nothing.
    pub fn delete_shift(&self, id: i64) -> SchedulingResult<()> {
        self.shifts.delete_by_id(id)?;
        info!(shift_id = id, "Shift deleted");
        Ok(())
    }
}
