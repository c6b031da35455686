// Domain entities and value objects
pub mod blood_pressure;
pub mod category_info;

// Re-export common types for easier imports
pub use blood_pressure::{Category, Reading, ReadingError};
pub use category_info::{CategoryInfo, Explanation, Guidance};
