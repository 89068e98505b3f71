//! Deterministic placement readiness analysis service.
//!
//! The engine itself lives in [`workflows::placement`]; everything else here
//! is the operational shell (configuration, telemetry, error surface).

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
