//! Configuration loading and management for the roster engine.
//!
//! This module provides the [`EngineConfig`] knobs used by the scheduling
//! and payroll components, with YAML file loading and sensible defaults.
//!
//! # Example
//!
//! ```no_run
//! use roster_engine::config::EngineConfig;
//!
//! let config = EngineConfig::load("./config/engine.yaml").unwrap();
//! println!("Minimum rest: {} hours", config.scheduling.minimum_rest_hours);
//! ```

mod loader;
mod types;

pub use types::{ClassificationConfig, EngineConfig, PayrollConfig, SchedulingConfig};
