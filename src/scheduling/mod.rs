//! Shift scheduling core.
//!
//! This module contains the rules every shift must satisfy and the
//! operations that apply them:
//! - duration resolution with a single overnight wraparound
//! - validation of proposed shifts (employee exists, at least four hours,
//!   at most one shift per employee per day)
//! - filtered shift queries
//! - the [`ShiftService`] tying them to the stores

mod duration;
mod query;
mod service;
mod validator;

pub use duration::{
    MINIMUM_SHIFT_HOURS, resolved_duration_hours, resolved_duration_seconds, validate_duration,
};
pub use query::{ShiftFilter, ShiftLookup, query_shifts};
pub use service::ShiftService;
pub use validator::{ShiftProposal, ShiftValidator};
