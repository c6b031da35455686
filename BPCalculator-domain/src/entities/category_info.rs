use serde::Serialize;

use crate::entities::blood_pressure::Category;

/// Static description of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Human-readable label
    pub display_name: &'static str,

    /// Sentence with the numeric range and the associated risk
    pub explanation: &'static str,

    /// Actionable advice
    pub recommendation: &'static str,

    /// Numeric range as display text
    pub range: &'static str,
}

/// Doctor-visit urgency and monitoring frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guidance {
    /// How soon a doctor should be seen
    pub when_to_see_doctor: &'static str,

    /// How often to measure
    pub monitoring_frequency: &'static str,
}

/// Combined lookup result for a category name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub explanation: &'static str,
    pub recommendation: &'static str,
    pub range: &'static str,

    /// False when the name did not match any category and fallbacks were returned
    pub is_valid: bool,
}

pub const LOW: CategoryInfo = CategoryInfo {
    display_name: "Low Blood Pressure",
    explanation: "Low BP (<90/60 mmHg): May cause dizziness. Usually not concerning.",
    recommendation: "Drink more water. Add slight salt. Avoid sudden movements.",
    range: "< 90/60 mmHg",
};

pub const IDEAL: CategoryInfo = CategoryInfo {
    display_name: "Ideal Blood Pressure",
    explanation: "Ideal BP (90/60-120/80 mmHg): Optimal for heart health.",
    recommendation: "Maintain lifestyle. Exercise regularly. Eat balanced diet.",
    range: "90/60 - 120/80 mmHg",
};

pub const PRE_HIGH: CategoryInfo = CategoryInfo {
    display_name: "Pre-High Blood Pressure",
    explanation: "Pre-High BP (121/81-139/89 mmHg): Lifestyle changes needed.",
    recommendation: "Reduce salt. Exercise more. Manage stress. Limit alcohol.",
    range: "121/81 - 139/89 mmHg",
};

pub const HIGH: CategoryInfo = CategoryInfo {
    display_name: "High Blood Pressure",
    explanation: "High BP (≥140/90 mmHg): Consult doctor. Increases heart risks.",
    recommendation: "See doctor. Monitor weekly. May need medication.",
    range: "≥ 140/90 mmHg",
};

/// Returned for any name that is not one of the four categories
pub const FALLBACK: CategoryInfo = CategoryInfo {
    display_name: "Unknown Category",
    explanation: "Invalid category. Use: Low, Ideal, PreHigh, High",
    recommendation: "No recommendations for invalid category.",
    range: "Unknown range",
};

pub(crate) fn info_for(category: Category) -> &'static CategoryInfo {
    match category {
        Category::Low => &LOW,
        Category::Ideal => &IDEAL,
        Category::PreHigh => &PRE_HIGH,
        Category::High => &HIGH,
    }
}

pub(crate) fn guidance_for(category: Option<Category>) -> Guidance {
    match category {
        Some(Category::High) => Guidance {
            when_to_see_doctor: "Consult doctor as soon as possible",
            monitoring_frequency: "Weekly or as directed by doctor",
        },
        Some(Category::PreHigh) => Guidance {
            when_to_see_doctor: "Schedule checkup within 3 months",
            monitoring_frequency: "Monthly",
        },
        _ => Guidance {
            when_to_see_doctor: "Regular annual checkups are sufficient",
            monitoring_frequency: "Every 6-12 months",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_distinct_from_every_category() {
        for category in Category::ALL {
            let info = info_for(category);
            assert_ne!(info.explanation, FALLBACK.explanation);
            assert_ne!(info.recommendation, FALLBACK.recommendation);
            assert_ne!(info.range, FALLBACK.range);
        }
    }

    #[test]
    fn test_guidance_for_missing_category_matches_low_and_ideal() {
        let none = guidance_for(None);
        assert_eq!(none, guidance_for(Some(Category::Low)));
        assert_eq!(none, guidance_for(Some(Category::Ideal)));
        assert_eq!(none.monitoring_frequency, "Every 6-12 months");
    }
}
