// Public entities for the BP Calculator API
// This module contains data structures that cross the HTTP boundary

// Calculator and explainer payloads
pub mod blood_pressure;

// Common entities for error handling
pub mod common;
