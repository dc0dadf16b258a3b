//! Core data models for the shift board.
//!
//! This module contains the employee and shift records shared by the
//! stores, the scheduling core and the HTTP boundary.

mod employee;
mod shift;

pub use employee::{EMPLOYEE_CODE_PREFIX, Employee, EmployeeUpdate, NewEmployee};
pub use shift::{NewShift, Shift};
