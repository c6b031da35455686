// BP Calculator API lib.rs
//
// Web layer for the BP Calculator: JSON endpoints, the calculator page,
// health/metrics and request telemetry over the domain crate.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod logging;
pub mod openapi;
