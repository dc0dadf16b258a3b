//! Shift query dispatch.
//!
//! A [`ShiftFilter`] resolves to exactly one store lookup. Results are the
//! full matching set, re-read from the store on every call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SchedulingResult;
use crate::models::Shift;
use crate::store::ShiftStore;

/// Optional criteria for listing shifts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftFilter {
    /// Restrict to one employee.
    #[serde(default)]
    pub employee_id: Option<i64>,
    /// Restrict to one calendar date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// The store lookup a filter resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftLookup {
    /// Shifts for one employee on one date.
    EmployeeOnDate(i64, NaiveDate),
    /// All shifts for one employee.
    Employee(i64),
    /// All shifts on one date across employees.
    Date(NaiveDate),
    /// Every shift.
    All,
}

impl ShiftFilter {
    /// Filter matching every shift.
    pub fn all() -> Self {
        Self::default()
    }

    /// Picks the lookup for the fields present, most specific first.
    pub fn lookup(&self) -> ShiftLookup {
        match (self.employee_id, self.date) {
            (Some(employee_id), Some(date)) => ShiftLookup::EmployeeOnDate(employee_id, date),
            (Some(employee_id), None) => ShiftLookup::Employee(employee_id),
            (None, Some(date)) => ShiftLookup::Date(date),
            (None, None) => ShiftLookup::All,
        }
    }
}

/// Runs a filtered shift lookup against the store.
///
/// # Examples
///
/// ```
/// use shift_board::scheduling::{query_shifts, ShiftFilter};
/// use shift_board::store::InMemoryShiftStore;
///
/// let store = InMemoryShiftStore::new();
/// let shifts = query_shifts(&store, ShiftFilter::all()).unwrap();
/// assert!(shifts.is_empty());
/// ```
pub fn query_shifts(store: &dyn ShiftStore, filter: ShiftFilter) -> SchedulingResult<Vec<Shift>> {
    let shifts = match filter.lookup() {
        ShiftLookup::EmployeeOnDate(employee_id, date) => {
            store.find_by_employee_and_date(employee_id, date)?
        }
        ShiftLookup::Employee(employee_id) => store.find_by_employee(employee_id)?,
        ShiftLookup::Date(date) => store.find_by_date(date)?,
        ShiftLookup::All => store.find_all()?,
    };
    Ok(shifts)
}
