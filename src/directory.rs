//! Employee directory.
//!
//! Shifts only reference employees by id; this module owns the employee
//! records themselves. Deleting an employee does not touch their shifts.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{SchedulingError, SchedulingResult};
use crate::models::{Employee, EmployeeUpdate, NewEmployee};
use crate::store::{EmployeeStore, StoreError};

/// Create, list, fetch, update and delete employees.
#[derive(Clone)]
pub struct EmployeeDirectory {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeDirectory {
    /// Creates a directory over the given store.
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Lists every employee.
    pub fn list(&self) -> SchedulingResult<Vec<Employee>> {
        Ok(self.store.find_all()?)
    }

    /// Fetches one employee by identifier.
    pub fn get(&self, id: i64) -> SchedulingResult<Employee> {
        self.store
            .find_by_id(id)?
            .ok_or(SchedulingError::EmployeeNotFound { employee_id: id })
    }

    /// Creates an employee.
    ///
    /// When no code is supplied the employee is saved first and then given
    /// a code derived from the assigned identifier (`EMP` plus at least
    /// three digits). If that code already belongs to someone else, or the
    /// follow-up write fails, the provisional record is removed again.
    ///
    /// # Errors
    ///
    /// [`SchedulingError::InvalidEmployee`] for a blank name or department,
    /// or for a supplied or generated code already in use.
    pub fn create(&self, employee: NewEmployee) -> SchedulingResult<Employee> {
        require_non_blank("name", &employee.name)?;
        require_non_blank("department", &employee.department)?;

        let explicit_code = employee.explicit_code().map(str::to_string);
        let created = match explicit_code {
            Some(code) => {
                self.ensure_code_available(&code, None)?;
                self.store.save(NewEmployee {
                    employee_code: Some(code),
                    ..employee
                })?
            }
            None => self.create_with_generated_code(employee)?,
        };

        info!(
            employee_id = created.id,
            employee_code = %created.employee_code,
            department = %created.department,
            "Employee created"
        );
        Ok(created)
    }

    /// Replaces the name, code and department of an existing employee.
    pub fn update(&self, id: i64, update: EmployeeUpdate) -> SchedulingResult<Employee> {
        require_non_blank("name", &update.name)?;
        require_non_blank("employee_code", &update.employee_code)?;
        require_non_blank("department", &update.department)?;

        let existing = self.get(id)?;
        let code = update.employee_code.trim().to_string();
        self.ensure_code_available(&code, Some(id))?;

        let updated = self
            .store
            .update(Employee {
                id: existing.id,
                name: update.name,
                employee_code: code,
                department: update.department,
            })
            .map_err(|err| match err {
                StoreError::NotFound { id } => SchedulingError::EmployeeNotFound { employee_id: id },
                other => other.into(),
            })?;

        info!(employee_id = id, "Employee updated");
        Ok(updated)
    }

    /// Deletes an employee. Missing identifiers are ignored.
    pub fn delete(&self, id: i64) -> SchedulingResult<()> {
        self.store.delete_by_id(id)?;
        info!(employee_id = id, "Employee deleted");
        Ok(())
    }

    fn create_with_generated_code(&self, employee: NewEmployee) -> SchedulingResult<Employee> {
        let saved = self.store.save(NewEmployee {
            employee_code: None,
            ..employee
        })?;
        let provisional_id = saved.id;
        let code = Employee::generated_code(provisional_id);

        let assigned = match self.ensure_code_available(&code, Some(provisional_id)) {
            Ok(()) => self
                .store
                .update(Employee {
                    employee_code: code,
                    ..saved
                })
                .map_err(SchedulingError::from),
            Err(err) => Err(err),
        };

        if assigned.is_err() {
            self.discard_provisional(provisional_id);
        }
        assigned
    }

    fn discard_provisional(&self, id: i64) {
        match self.store.delete_by_id(id) {
            Ok(()) => debug!(employee_id = id, "Provisional employee discarded"),
            Err(err) => warn!(
                employee_id = id,
                error = %err,
                "Failed to discard provisional employee"
            ),
        }
    }

    fn ensure_code_available(&self, code: &str, owner: Option<i64>) -> SchedulingResult<()> {
        match self.store.find_by_code(code)? {
            Some(existing) if Some(existing.id) != owner => Err(SchedulingError::InvalidEmployee {
                field: "employee_code".to_string(),
                message: format!("'{}' is already assigned to employee {}", code, existing.id),
            }),
            _ => Ok(()),
        }
    }
}

fn require_non_blank(field: &str, value: &str) -> SchedulingResult<()> {
    if value.trim().is_empty() {
        return Err(SchedulingError::InvalidEmployee {
            field: field.to_string(),
            message: "must not be blank".to_string(),
        });
    }
    Ok(())
}
