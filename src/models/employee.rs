//! Employee model and related types.
//!
//! Employees are owned by the directory; shifts only reference them by id.

use serde::{Deserialize, Serialize};

/// Prefix for generated employee codes.
pub const EMPLOYEE_CODE_PREFIX: &str = "EMP";

/// Represents an employee who can be assigned shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unique employee code (e.g., "EMP001").
    pub employee_code: String,
    /// The department the employee belongs to.
    pub department: String,
}

/// An employee that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Display name.
    pub name: String,
    /// Unique employee code. Blank or absent means one is generated from the id.
    #[serde(default)]
    pub employee_code: Option<String>,
    /// The department the employee belongs to.
    pub department: String,
}

impl NewEmployee {
    /// Returns the explicit employee code, ignoring blank values.
    pub fn explicit_code(&self) -> Option<&str> {
        self.employee_code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// Replacement values for an existing employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    /// Display name.
    pub name: String,
    /// Unique employee code.
    pub employee_code: String,
    /// The department the employee belongs to.
    pub department: String,
}

impl Employee {
    /// Builds the generated employee code for an identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_board::models::Employee;
    ///
    /// assert_eq!(Employee::generated_code(7), "EMP007");
    /// assert_eq!(Employee::generated_code(1234), "EMP1234");
    /// ```
    pub fn generated_code(id: i64) -> String {
        format!("{}{:03}", EMPLOYEE_CODE_PREFIX, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_new_employee_without_code() {
        let json = r#"{
            "name": "Jane Smith",
            "department": "Operations"
        }"#;

        let employee: NewEmployee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.name, "Jane Smith");
        assert!(employee.employee_code.is_none());
        assert!(employee.explicit_code().is_none());
    }

    #[test]
    fn test_blank_code_is_not_explicit() {
        let employee = NewEmployee {
            name: "Bob Johnson".to_string(),
            employee_code: Some("   ".to_string()),
            department: "Administration".to_string(),
        };
        assert!(employee.explicit_code().is_none());
    }

    #[test]
    fn test_explicit_code_is_trimmed() {
        let employee = NewEmployee {
            name: "John Doe".to_string(),
            employee_code: Some(" EMP001 ".to_string()),
            department: "Engineering".to_string(),
        };
        assert_eq!(employee.explicit_code(), Some("EMP001"));
    }

    #[test]
    fn test_generated_code_padding() {
        assert_eq!(Employee::generated_code(1), "EMP001");
        assert_eq!(Employee::generated_code(42), "EMP042");
        assert_eq!(Employee::generated_code(999), "EMP999");
    }

    #[test]
    fn test_serialize_employee() {
        let employee = Employee {
            id: 1,
            name: "John Doe".to_string(),
            employee_code: "EMP001".to_string(),
            department: "Engineering".to_string(),
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["employee_code"], "EMP001");
        assert_eq!(json["id"], 1);
    }
}
