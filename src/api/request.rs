//! Request types for the shift board API.
//!
//! This module defines the JSON bodies and query parameters accepted by the
//! shift and employee endpoints.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{EmployeeUpdate, NewEmployee};
use crate::scheduling::{ShiftFilter, ShiftProposal};

/// Accepts `HH:MM:SS` or `HH:MM`.
pub(crate) fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|err| format!("failed to parse '{raw}' as HH:MM or HH:MM:SS ({err})"))
}

fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_time(&raw).map_err(serde::de::Error::custom)
}

/// Request body for `POST /api/shifts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    /// The employee to assign.
    pub employee_id: i64,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Start time of day.
    #[serde(deserialize_with = "deserialize_time")]
    pub start_time: NaiveTime,
    /// End time of day; earlier than the start means the next day.
    #[serde(deserialize_with = "deserialize_time")]
    pub end_time: NaiveTime,
    /// Optional free-form label.
    #[serde(default)]
    pub shift_type: Option<String>,
}

/// Query parameters for `GET /api/shifts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListShiftsParams {
    /// Restrict to one employee.
    #[serde(default)]
    pub employee: Option<i64>,
    /// Restrict to one date (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Request body for `POST /api/employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Display name.
    pub name: String,
    /// Optional code; generated from the id when blank or absent.
    #[serde(default)]
    pub employee_code: Option<String>,
    /// Department.
    pub department: String,
}

/// Request body for `PUT /api/employees/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmployeeRequest {
    /// Display name.
    pub name: String,
    /// Employee code.
    pub employee_code: String,
    /// Department.
    pub department: String,
}

impl From<CreateShiftRequest> for ShiftProposal {
    fn from(req: CreateShiftRequest) -> Self {
        ShiftProposal {
            employee_id: req.employee_id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            shift_type: req.shift_type,
        }
    }
}

impl From<ListShiftsParams> for ShiftFilter {
    fn from(params: ListShiftsParams) -> Self {
        ShiftFilter {
            employee_id: params.employee,
            date: params.date,
        }
    }
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        NewEmployee {
            name: req.name,
            employee_code: req.employee_code,
            department: req.department,
        }
    }
}

impl From<UpdateEmployeeRequest> for EmployeeUpdate {
    fn from(req: UpdateEmployeeRequest) -> Self {
        EmployeeUpdate {
            name: req.name,
            employee_code: req.employee_code,
            department: req.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_create_shift_with_short_times() {
        let json = r#"{
            "employee_id": 5,
            "date": "2024-01-10",
            "start_time": "22:00",
            "end_time": "06:00",
            "shift_type": "NIGHT"
        }"#;

        let request: CreateShiftRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, 5);
        assert_eq!(request.start_time, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        assert_eq!(request.end_time, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert_eq!(request.shift_type.as_deref(), Some("NIGHT"));
    }

    #[test]
    fn test_deserialize_create_shift_with_seconds() {
        let json = r#"{
            "employee_id": 5,
            "date": "2024-01-10",
            "start_time": "09:15:30",
            "end_time": "17:00:00"
        }"#;

        let request: CreateShiftRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.start_time, NaiveTime::from_hms_opt(9, 15, 30).unwrap());
        assert!(request.shift_type.is_none());
    }

    #[test]
    fn test_invalid_time_is_rejected() {
        let json = r#"{
            "employee_id": 5,
            "date": "2024-01-10",
            "start_time": "25:00",
            "end_time": "06:00"
        }"#;

        let err = serde_json::from_str::<CreateShiftRequest>(json).unwrap_err();
        assert!(err.to_string().contains("25:00"));
    }

    #[test]
    fn test_list_params_convert_to_filter() {
        let params = ListShiftsParams {
            employee: Some(5),
            date: None,
        };
        let filter: ShiftFilter = params.into();
        assert_eq!(filter.employee_id, Some(5));
        assert!(filter.date.is_none());
    }

    #[test]
    fn test_create_shift_conversion() {
        let request = CreateShiftRequest {
            employee_id: 2,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            start_time: parse_time("08:00").unwrap(),
            end_time: parse_time("16:00").unwrap(),
            shift_type: Some("MORNING".to_string()),
        };

        let proposal: ShiftProposal = request.into();
        assert_eq!(proposal.employee_id, 2);
        assert_eq!(proposal.shift_type.as_deref(), Some("MORNING"));
    }
}
