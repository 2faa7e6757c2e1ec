//! Shift assignment and payroll engine for security guard rostering.
//!
//! This crate schedules security guards onto buildings and prices the
//! worked shifts: rest-time validation, scored candidate selection,
//! absence replacement, hour-bucket classification, and payroll
//! aggregation, exposed through a JSON HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod payroll;
pub mod scheduling;
pub mod storage;
