use axum::{extract::Form, response::Html};
use tracing::{info, instrument, warn};

use bp_calculator_domain::{Category, Reading};

use crate::entities::blood_pressure::CalculatorForm;

const DEFAULT_SYSTOLIC: i32 = 100;
const DEFAULT_DIASTOLIC: i32 = 60;

/// What the calculator page shows below the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Empty,
    Classified(Category),
    Rejected(&'static str),
}

/// Calculator page with the form prefilled
#[instrument]
pub async fn calculator_page() -> Html<String> {
    Html(render(DEFAULT_SYSTOLIC, DEFAULT_DIASTOLIC, Outcome::Empty))
}

/// Classify the submitted form and re-render the page with the result
#[instrument(skip(form))]
pub async fn submit_calculator(Form(form): Form<CalculatorForm>) -> Html<String> {
    let (systolic, diastolic) = match (form.systolic(), form.diastolic()) {
        (Some(systolic), Some(diastolic)) => (systolic, diastolic),
        (systolic, diastolic) => {
            let message = if systolic.is_none() {
                "Invalid Systolic Value"
            } else {
                "Invalid Diastolic Value"
            };
            warn!(
                "Rejected form input systolic={:?} diastolic={:?}: {}",
                form.systolic, form.diastolic, message
            );
            return Html(render(
                systolic.unwrap_or(DEFAULT_SYSTOLIC),
                diastolic.unwrap_or(DEFAULT_DIASTOLIC),
                Outcome::Rejected(message),
            ));
        }
    };

    let outcome = match Reading::new(systolic, diastolic) {
        Ok(reading) => {
            let category = reading.category();
            info!(
                "Blood Pressure reading {}/{} categorized as {}",
                systolic, diastolic, category
            );
            Outcome::Classified(category)
        }
        Err(err) => {
            warn!("Rejected reading {}/{}: {}", systolic, diastolic, err);
            Outcome::Rejected(rejection_message(&err))
        }
    };

    Html(render(systolic, diastolic, outcome))
}

fn rejection_message(err: &bp_calculator_domain::ReadingError) -> &'static str {
    use bp_calculator_domain::ReadingError::*;
    match err {
        SystolicOutOfRange(_) => "Invalid Systolic Value",
        DiastolicOutOfRange(_) => "Invalid Diastolic Value",
        SystolicNotAboveDiastolic { .. } => "Systolic must be greater than Diastolic",
    }
}

fn render(systolic: i32, diastolic: i32, outcome: Outcome) -> String {
    let result = match outcome {
        Outcome::Empty => String::new(),
        Outcome::Classified(category) => {
            let info = category.info();
            format!(
                r#"<section class="result">
      <h2>{display_name}</h2>
      <p class="category">{category}</p>
      <p class="explanation">{explanation}</p>
      <p class="recommendation">{recommendation}</p>
      <p class="range">Range: {range}</p>
    </section>"#,
                display_name = info.display_name,
                category = category,
                explanation = info.explanation,
                recommendation = info.recommendation,
                range = info.range,
            )
        }
        Outcome::Rejected(message) => {
            format!(r#"<div class="validation-error">{}</div>"#, message)
        }
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>BP Category Calculator</title>
  </head>
  <body>
    <h1>BP Category Calculator</h1>
    <form method="post" action="/">
      <label>Systolic <input type="number" name="systolic" min="70" max="190" value="{systolic}"></label>
      <label>Diastolic <input type="number" name="diastolic" min="40" max="100" value="{diastolic}"></label>
      <button type="submit">Submit</button>
    </form>
    {result}
  </body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(systolic: &str, diastolic: &str) -> CalculatorForm {
        CalculatorForm {
            systolic: systolic.to_string(),
            diastolic: diastolic.to_string(),
        }
    }

    #[tokio::test]
    async fn test_page_is_prefilled() {
        let Html(body) = calculator_page().await;
        assert!(body.contains(r#"name="systolic" min="70" max="190" value="100""#));
        assert!(body.contains(r#"name="diastolic" min="40" max="100" value="60""#));
        assert!(!body.contains("class=\"result\""));
    }

    #[tokio::test]
    async fn test_submit_shows_category() {
        let form = form("150", "95");
        let Html(body) = submit_calculator(Form(form)).await;

        assert!(body.contains("High Blood Pressure"));
        assert!(body.contains("Increases heart risks"));
        assert!(body.contains("See doctor"));
    }

    #[tokio::test]
    async fn test_submit_rejects_inverted_reading() {
        let form = form("80", "90");
        let Html(body) = submit_calculator(Form(form)).await;

        assert!(body.contains("Systolic must be greater than Diastolic"));
        assert!(!body.contains("class=\"result\""));
    }

    #[tokio::test]
    async fn test_submit_blank_systolic_shows_field_message() {
        let Html(body) = submit_calculator(Form(form("", "70"))).await;

        assert!(body.contains("Invalid Systolic Value"));
        assert!(body.contains(r#"name="systolic" min="70" max="190" value="100""#));
        assert!(body.contains(r#"name="diastolic" min="40" max="100" value="70""#));
    }

    #[tokio::test]
    async fn test_submit_non_numeric_diastolic_shows_field_message() {
        let Html(body) = submit_calculator(Form(form("120", "abc"))).await;

        assert!(body.contains("Invalid Diastolic Value"));
        assert!(body.contains(r#"value="120""#));
        assert!(body.contains(r#"name="diastolic" min="40" max="100" value="60""#));
    }

    #[test]
    fn test_rejection_messages() {
        let err = Reading::new(60, 50).unwrap_err();
        assert_eq!(rejection_message(&err), "Invalid Systolic Value");

        let err = Reading::new(120, 30).unwrap_err();
        assert_eq!(rejection_message(&err), "Invalid Diastolic Value");
    }
}
