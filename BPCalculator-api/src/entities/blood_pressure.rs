use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use bp_calculator_domain::services::GuidedExplanation;
use bp_calculator_domain::{Category, Reading};

/// Request payload for classifying a blood pressure reading
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    /// Systolic blood pressure (70-190 mmHg)
    #[schema(example = 130, minimum = 70, maximum = 190)]
    pub systolic: i32,

    /// Diastolic blood pressure (40-100 mmHg, below systolic)
    #[schema(example = 85, minimum = 40, maximum = 100)]
    pub diastolic: i32,
}

/// Classification result for a reading
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    /// Category name (Low, Ideal, PreHigh, High)
    pub category: Category,

    /// Human-readable category label
    pub category_display_name: String,

    pub systolic: i32,
    pub diastolic: i32,

    /// Short summary of the result
    pub message: String,

    /// What the category means
    pub explanation: String,

    /// Advice for the category
    pub recommendations: String,
}

impl From<Reading> for CalculateResponse {
    fn from(reading: Reading) -> Self {
        let category = reading.category();
        let info = category.info();

        Self {
            category,
            category_display_name: category.display_name().to_string(),
            systolic: reading.systolic(),
            diastolic: reading.diastolic(),
            message: category.message().to_string(),
            explanation: info.explanation.to_string(),
            recommendations: info.recommendation.to_string(),
        }
    }
}

/// Explanation of a category name, with guidance
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    /// The category text as requested
    pub category: String,

    /// Whether the text matched a known category
    pub is_valid: bool,

    /// Numeric range of the category
    pub blood_pressure_range: String,

    pub explanation: String,
    pub recommendations: String,

    /// How soon a doctor should be consulted
    pub when_to_see_doctor: String,

    /// How often to measure
    pub monitoring_frequency: String,
}

impl ExplainResponse {
    pub fn new(category: String, guided: GuidedExplanation) -> Self {
        Self {
            category,
            is_valid: guided.explanation.is_valid,
            blood_pressure_range: guided.explanation.range.to_string(),
            explanation: guided.explanation.explanation.to_string(),
            recommendations: guided.explanation.recommendation.to_string(),
            when_to_see_doctor: guided.guidance.when_to_see_doctor.to_string(),
            monitoring_frequency: guided.guidance.monitoring_frequency.to_string(),
        }
    }
}

/// Form fields posted by the calculator page, kept as the raw text so a blank
/// or non-numeric box can be reported on the page itself
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub systolic: String,
    #[serde(default)]
    pub diastolic: String,
}

impl CalculatorForm {
    /// Parsed systolic value, `None` when the box is blank or not a number
    pub fn systolic(&self) -> Option<i32> {
        self.systolic.trim().parse().ok()
    }

    /// Parsed diastolic value, `None` when the box is blank or not a number
    pub fn diastolic(&self) -> Option<i32> {
        self.diastolic.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bp_calculator_domain::explain_with_guidance;

    #[test]
    fn test_calculate_response_uses_camel_case() {
        let reading = Reading::new(130, 85).unwrap();
        let value = serde_json::to_value(CalculateResponse::from(reading)).unwrap();

        assert_eq!(value["category"], "PreHigh");
        assert_eq!(value["categoryDisplayName"], "Pre-High Blood Pressure");
        assert_eq!(value["message"], "Your blood pressure is pre-high");
        assert_eq!(value["systolic"], 130);
        assert!(value["recommendations"].as_str().unwrap().contains("Reduce salt"));
    }

    #[test]
    fn test_explain_response_echoes_requested_text() {
        let response = ExplainResponse::new("hIgH".to_string(), explain_with_guidance(Some("hIgH")));

        assert_eq!(response.category, "hIgH");
        assert!(response.is_valid);
        assert_eq!(response.blood_pressure_range, "≥ 140/90 mmHg");
        assert_eq!(response.monitoring_frequency, "Weekly or as directed by doctor");
    }

    #[test]
    fn test_calculator_form_parses_lenient_text() {
        let form = CalculatorForm {
            systolic: " 130 ".to_string(),
            diastolic: String::new(),
        };

        assert_eq!(form.systolic(), Some(130));
        assert_eq!(form.diastolic(), None);
        assert_eq!(CalculatorForm::default().systolic(), None);
    }
}
