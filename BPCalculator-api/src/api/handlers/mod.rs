pub mod blood_pressure;
pub mod health;
pub mod page;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use blood_pressure::{calculate_blood_pressure, explain_category};
pub use health::{health_check, metrics};
pub use page::{calculator_page, submit_calculator};
