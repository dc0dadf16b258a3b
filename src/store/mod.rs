//! Storage collaborators for employees and shifts.
//!
//! The scheduling core only talks to storage through the [`EmployeeStore`]
//! and [`ShiftStore`] traits. Identifier generation and any storage-level
//! constraints belong to the implementation; [`memory`] provides the
//! in-process implementation used by the server and the tests.

pub mod memory;

use chrono::NaiveDate;

use crate::models::{Employee, NewEmployee, NewShift, Shift};

pub use memory::{InMemoryEmployeeStore, InMemoryShiftStore};

/// Error enumeration for storage failures.
///
/// The scheduling core treats these as opaque and propagates them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A storage-level uniqueness constraint rejected the write.
    #[error("constraint violated: {0}")]
    Conflict(String),
    /// An update targeted a record that does not exist.
    #[error("record {id} not found")]
    NotFound {
        /// The missing record identifier.
        id: i64,
    },
    /// The backing store could not be reached or is in a broken state.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Employee storage as seen by the directory, the seeder and the validator.
pub trait EmployeeStore: Send + Sync {
    /// Returns true if an employee with this identifier exists.
    fn exists_by_id(&self, id: i64) -> Result<bool, StoreError>;
    /// Returns true if an employee with this code exists.
    fn exists_by_code(&self, employee_code: &str) -> Result<bool, StoreError>;
    /// Looks up an employee by identifier.
    fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StoreError>;
    /// Looks up an employee by code.
    fn find_by_code(&self, employee_code: &str) -> Result<Option<Employee>, StoreError>;
    /// Returns every employee.
    fn find_all(&self) -> Result<Vec<Employee>, StoreError>;
    /// Persists a new employee and returns it with its assigned identifier.
    ///
    /// An absent code is stored as an empty string.
    fn save(&self, employee: NewEmployee) -> Result<Employee, StoreError>;
    /// Replaces an existing employee record.
    fn update(&self, employee: Employee) -> Result<Employee, StoreError>;
    /// Removes an employee. Missing identifiers are ignored.
    fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}

/// Shift storage as seen by the validator, the query engine and the service.
pub trait ShiftStore: Send + Sync {
    /// Returns true if the employee has any shift on the date.
    fn exists_by_employee_and_date(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> Result<bool, StoreError>;
    /// Looks up a shift by identifier.
    fn find_by_id(&self, id: i64) -> Result<Option<Shift>, StoreError>;
    /// Returns every shift of one employee.
    fn find_by_employee(&self, employee_id: i64) -> Result<Vec<Shift>, StoreError>;
    /// Returns every shift on one date.
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Shift>, StoreError>;
    /// Returns the shifts of one employee on one date.
    fn find_by_employee_and_date(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Shift>, StoreError>;
    /// Returns every shift.
    fn find_all(&self) -> Result<Vec<Shift>, StoreError>;
    /// Persists a validated shift and returns it with its assigned identifier.
    fn save(&self, shift: NewShift) -> Result<Shift, StoreError>;
    /// Removes a shift. Missing identifiers are ignored.
    fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}
