//! Startup seeding of default employees.
//!
//! Seeding is idempotent: an entry is skipped whenever an employee with the
//! same code already exists, so running it on every start is safe.

use tracing::info;

use crate::config::SeedEmployee;
use crate::error::SchedulingResult;
use crate::models::NewEmployee;
use crate::store::EmployeeStore;

/// Creates each seed employee whose code is not yet taken.
///
/// Returns the number of employees created.
pub fn seed_employees(store: &dyn EmployeeStore, seeds: &[SeedEmployee]) -> SchedulingResult<usize> {
    let mut created = 0;

    for seed in seeds {
        if store.exists_by_code(&seed.employee_code)? {
            continue;
        }

        let employee = store.save(NewEmployee {
            name: seed.name.clone(),
            employee_code: Some(seed.employee_code.clone()),
            department: seed.department.clone(),
        })?;
        info!(
            employee_id = employee.id,
            employee_code = %employee.employee_code,
            department = %employee.department,
            "Seed employee created"
        );
        created += 1;
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedConfig;
    use crate::store::InMemoryEmployeeStore;

    #[test]
    fn test_seeds_default_employees() {
        let store = InMemoryEmployeeStore::new();
        let created = seed_employees(&store, &SeedConfig::default().employees).unwrap();

        assert_eq!(created, 3);
        let codes: Vec<String> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|e| e.employee_code)
            .collect();
        assert_eq!(codes, vec!["EMP001", "EMP002", "EMP003"]);
    }

    #[test]
    fn test_seeding_twice_creates_nothing_new() {
        let store = InMemoryEmployeeStore::new();
        let seeds = SeedConfig::default().employees;

        seed_employees(&store, &seeds).unwrap();
        let second_run = seed_employees(&store, &seeds).unwrap();

        assert_eq!(second_run, 0);
        assert_eq!(store.find_all().unwrap().len(), 3);
    }

    #[test]
    fn test_existing_code_is_skipped() {
        let store = InMemoryEmployeeStore::new();
        store
            .save(NewEmployee {
                name: "Renamed John".to_string(),
                employee_code: Some("EMP001".to_string()),
                department: "Engineering".to_string(),
            })
            .unwrap();

        let created = seed_employees(&store, &SeedConfig::default().employees).unwrap();

        assert_eq!(created, 2);
        let john = store.find_by_code("EMP001").unwrap().unwrap();
        assert_eq!(john.name, "Renamed John");
    }
}
