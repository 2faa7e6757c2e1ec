//! Hour classification and payroll aggregation.
//!
//! This module turns a guard's shifts into money: each shift is
//! classified into one of the four pay buckets (normal, overtime,
//! holiday, night) and the bucket hours are charged at the owning
//! building's rate schedule. Like the scheduling module, everything
//! here is pure computation over explicit inputs.

mod aggregation;
mod hours;

pub use aggregation::compute_payment;
pub use hours::classify_shift;
