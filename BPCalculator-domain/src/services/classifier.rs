use crate::entities::blood_pressure::Category;

/// Categorize blood pressure based on measurements.
///
/// Thresholds are checked from most to least severe and the first match
/// wins, so a single high value is enough to land in a higher category.
/// Total over all integers; range checks belong to [`Reading::new`].
///
/// [`Reading::new`]: crate::entities::blood_pressure::Reading::new
pub fn classify(systolic: i32, diastolic: i32) -> Category {
    if systolic >= 140 || diastolic >= 90 {
        Category::High
    } else if systolic >= 120 || diastolic >= 80 {
        Category::PreHigh
    } else if systolic >= 90 && diastolic >= 60 {
        Category::Ideal
    } else {
        Category::Low
    }
}
