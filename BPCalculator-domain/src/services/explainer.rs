//! Category explanations.
//!
//! Every lookup accepts arbitrary text (or none at all) and always answers:
//! unrecognized input gets the fallback record instead of an error.

use serde::Serialize;

use crate::entities::blood_pressure::Category;
use crate::entities::category_info::{self, CategoryInfo, Explanation, Guidance, FALLBACK};

/// An [`Explanation`] together with the doctor-visit and monitoring guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuidedExplanation {
    #[serde(flatten)]
    pub explanation: Explanation,
    #[serde(flatten)]
    pub guidance: Guidance,
}

/// Resolve free text to a category. Missing, empty and whitespace-only text
/// never matches.
fn normalize(category: Option<&str>) -> Option<Category> {
    category
        .filter(|text| !text.trim().is_empty())
        .and_then(Category::from_name)
}

fn lookup(category: Option<&str>) -> &'static CategoryInfo {
    normalize(category).map_or(&FALLBACK, Category::info)
}

/// Descriptive sentence with the numeric range and risk note
pub fn get_explanation(category: Option<&str>) -> &'static str {
    lookup(category).explanation
}

/// Actionable advice for the category
pub fn get_recommendations(category: Option<&str>) -> &'static str {
    lookup(category).recommendation
}

/// Numeric range of the category as display text
pub fn get_range(category: Option<&str>) -> &'static str {
    lookup(category).range
}

/// Doctor-visit urgency and monitoring frequency. Unknown names get the
/// routine guidance.
pub fn get_guidance(category: Option<&str>) -> Guidance {
    category_info::guidance_for(normalize(category))
}

pub fn explain(category: Option<&str>) -> Explanation {
    let info = lookup(category);
    Explanation {
        explanation: info.explanation,
        recommendation: info.recommendation,
        range: info.range,
        is_valid: info.explanation != FALLBACK.explanation,
    }
}

pub fn explain_with_guidance(category: Option<&str>) -> GuidedExplanation {
    GuidedExplanation {
        explanation: explain(category),
        guidance: get_guidance(category),
    }
}
