//! In-memory store implementations.
//!
//! Records live in a `BTreeMap` keyed by identifier behind a mutex, so
//! listings come back in creation order. Identifiers start at 1 and are
//! never reused, even after deletion.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::debug;

use crate::config::StorageConfig;
use crate::models::{Employee, NewEmployee, NewShift, Shift};

use super::{EmployeeStore, ShiftStore, StoreError};

#[derive(Debug)]
struct Table<T> {
    records: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn lock<'a, T>(table: &'a Mutex<Table<T>>, name: &str) -> Result<MutexGuard<'a, Table<T>>, StoreError> {
    table
        .lock()
        .map_err(|_| StoreError::Unavailable(format!("{name} table mutex poisoned")))
}

/// Employee store backed by process memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEmployeeStore {
    table: Arc<Mutex<Table<Employee>>>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        Ok(lock(&self.table, "employee")?.records.contains_key(&id))
    }

    fn exists_by_code(&self, employee_code: &str) -> Result<bool, StoreError> {
        Ok(self.find_by_code(employee_code)?.is_some())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Employee>, StoreError> {
        Ok(lock(&self.table, "employee")?.records.get(&id).cloned())
    }

    fn find_by_code(&self, employee_code: &str) -> Result<Option<Employee>, StoreError> {
        let guard = lock(&self.table, "employee")?;
        Ok(guard
            .records
            .values()
            .find(|employee| employee.employee_code == employee_code)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(lock(&self.table, "employee")?
            .records
            .values()
            .cloned()
            .collect())
    }

    fn save(&self, employee: NewEmployee) -> Result<Employee, StoreError> {
        let mut guard = lock(&self.table, "employee")?;
        let id = guard.allocate_id();
        let record = Employee {
            id,
            name: employee.name,
            employee_code: employee.employee_code.unwrap_or_default(),
            department: employee.department,
        };
        guard.records.insert(id, record.clone());
        debug!(employee_id = id, "Employee stored");
        Ok(record)
    }

    fn update(&self, employee: Employee) -> Result<Employee, StoreError> {
        let mut guard = lock(&self.table, "employee")?;
        match guard.records.get_mut(&employee.id) {
            Some(existing) => {
                *existing = employee.clone();
                Ok(employee)
            }
            None => Err(StoreError::NotFound { id: employee.id }),
        }
    }

    fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        lock(&self.table, "employee")?.records.remove(&id);
        Ok(())
    }
}

/// Shift store backed by process memory.
///
/// By default the store accepts any write, leaving the one-shift-per-day
/// rule to the validator. [`InMemoryShiftStore::with_daily_uniqueness`]
/// adds a compound (employee, date) constraint checked under the same lock
/// as the insert, closing the read-then-write window between concurrent
/// creations.
#[derive(Debug, Default, Clone)]
pub struct InMemoryShiftStore {
    table: Arc<Mutex<Table<Shift>>>,
    enforce_daily_uniqueness: bool,
}

impl InMemoryShiftStore {
    /// Creates an empty store without a storage-level uniqueness constraint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that rejects a second shift for the same
    /// employee and date with [`StoreError::Conflict`].
    pub fn with_daily_uniqueness() -> Self {
        Self {
            table: Arc::default(),
            enforce_daily_uniqueness: true,
        }
    }

    /// Creates an empty store with the constraints named in the storage
    /// configuration.
    pub fn for_storage(storage: &StorageConfig) -> Self {
        if storage.enforce_daily_uniqueness {
            Self::with_daily_uniqueness()
        } else {
            Self::new()
        }
    }

    fn matching<F>(&self, predicate: F) -> Result<Vec<Shift>, StoreError>
    where
        F: Fn(&Shift) -> bool,
    {
        let guard = lock(&self.table, "shift")?;
        Ok(guard
            .records
            .values()
            .filter(|shift| predicate(shift))
            .cloned()
            .collect())
    }
}

impl ShiftStore for InMemoryShiftStore {
    fn exists_by_employee_and_date(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> Result<bool, StoreError> {
        let guard = lock(&self.table, "shift")?;
        Ok(guard
            .records
            .values()
            .any(|shift| shift.employee_id == employee_id && shift.date == date))
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Shift>, StoreError> {
        Ok(lock(&self.table, "shift")?.records.get(&id).cloned())
    }

    fn find_by_employee(&self, employee_id: i64) -> Result<Vec<Shift>, StoreError> {
        self.matching(|shift| shift.employee_id == employee_id)
    }

    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Shift>, StoreError> {
        self.matching(|shift| shift.date == date)
    }

    fn find_by_employee_and_date(
        &self,
        employee_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Shift>, StoreError> {
        self.matching(|shift| shift.employee_id == employee_id && shift.date == date)
    }

    fn find_all(&self) -> Result<Vec<Shift>, StoreError> {
        self.matching(|_| true)
    }

    fn save(&self, shift: NewShift) -> Result<Shift, StoreError> {
        let mut guard = lock(&self.table, "shift")?;
        if self.enforce_daily_uniqueness
            && guard
                .records
                .values()
                .any(|existing| existing.employee_id == shift.employee_id && existing.date == shift.date)
        {
            return Err(StoreError::Conflict(format!(
                "shift for employee {} on {} already exists",
                shift.employee_id, shift.date
            )));
        }

        let id = guard.allocate_id();
        let record = shift.with_id(id);
        guard.records.insert(id, record.clone());
        debug!(shift_id = id, employee_id = record.employee_id, date = %record.date, "Shift stored");
        Ok(record)
    }

    fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        lock(&self.table, "shift")?.records.remove(&id);
        Ok(())
    }
}
