//! Application state for the shift board API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::directory::EmployeeDirectory;
use crate::scheduling::ShiftService;
use crate::store::{EmployeeStore, InMemoryEmployeeStore, InMemoryShiftStore, ShiftStore};

/// Shared application state.
///
/// Holds the shift service and employee directory, both of which share the
/// same employee store.
#[derive(Clone)]
pub struct AppState {
    shifts: ShiftService,
    employees: EmployeeDirectory,
}

impl AppState {
    /// Creates application state over the given stores.
    pub fn new(employee_store: Arc<dyn EmployeeStore>, shift_store: Arc<dyn ShiftStore>) -> Self {
        Self {
            shifts: ShiftService::new(employee_store.clone(), shift_store),
            employees: EmployeeDirectory::new(employee_store),
        }
    }

    /// Creates application state backed by fresh in-memory stores.
    pub fn in_memory(storage: &StorageConfig) -> Self {
        Self::new(
            Arc::new(InMemoryEmployeeStore::new()),
            Arc::new(InMemoryShiftStore::for_storage(storage)),
        )
    }

    /// Returns the shift service.
    pub fn shifts(&self) -> &ShiftService {
        &self.shifts
    }

    /// Returns the employee directory.
    pub fn employees(&self) -> &EmployeeDirectory {
        &self.employees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_directory_and_shifts_share_employees() {
        use crate::models::NewEmployee;
        use crate::scheduling::ShiftProposal;
        use chrono::{NaiveDate, NaiveTime};

        let state = AppState::in_memory(&StorageConfig::default());
        let employee = state
            .employees()
            .create(NewEmployee {
                name: "John Doe".to_string(),
                employee_code: None,
                department: "Engineering".to_string(),
            })
            .unwrap();

        let shift = state.shifts().create_shift(ShiftProposal {
            employee_id: employee.id,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            shift_type: None,
        });
        assert!(shift.is_ok());
    }
}
