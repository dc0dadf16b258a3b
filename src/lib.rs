//! Shift Board
//!
//! This crate assigns work shifts to employees while enforcing a minimum
//! shift duration of four hours (with overnight wraparound) and at most one
//! shift per employee per day. It provides the validation and query core,
//! storage traits with in-memory implementations, an employee directory and
//! an axum HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod scheduling;
pub mod seed;
pub mod store;
pub mod telemetry;
