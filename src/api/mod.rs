//! HTTP API module for the shift board.
//!
//! This module provides the REST endpoints for assigning, listing and
//! deleting shifts and for managing the employee directory.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateEmployeeRequest, CreateShiftRequest, ListShiftsParams, UpdateEmployeeRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
