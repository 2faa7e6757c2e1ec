//! HTTP API module for the roster engine.
//!
//! This module provides the REST endpoints for managing guards,
//! buildings, and shifts, and for running assignment and payroll
//! decisions over them.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AbsenceRequest, CreateBuildingRequest, CreateGuardRequest, CreateShiftRequest, PayrollRequest,
    RecommendRequest,
};
pub use response::{ApiError, SelectedGuard, SelectionResponse};
pub use state::AppState;
