pub mod classifier;
pub mod explainer;

// Domain services
// Pure functions over readings and category names; nothing here holds state.

pub use classifier::classify;
pub use explainer::{
    explain, explain_with_guidance, get_explanation, get_guidance, get_range, get_recommendations,
    GuidedExplanation,
};
