// BP Calculator Domain
// This crate contains the business logic for the BP Calculator: classifying a
// reading and explaining what its category means.

// Domain entities and value objects
pub mod entities;

// Services that implement business logic
pub mod services;

pub use entities::blood_pressure::{Category, Reading, ReadingError};
pub use services::classifier::classify;
pub use services::explainer::{explain, explain_with_guidance};
