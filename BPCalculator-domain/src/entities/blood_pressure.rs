use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::category_info::{self, CategoryInfo, Guidance};
use crate::services::classifier::classify;

/// Lowest accepted systolic value in mmHg
pub const SYSTOLIC_MIN: i32 = 70;
/// Highest accepted systolic value in mmHg
pub const SYSTOLIC_MAX: i32 = 190;
/// Lowest accepted diastolic value in mmHg
pub const DIASTOLIC_MIN: i32 = 40;
/// Highest accepted diastolic value in mmHg
pub const DIASTOLIC_MAX: i32 = 100;

/// Blood pressure category of a reading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Category {
    /// Below 90/60 mmHg
    Low,

    /// 90/60 up to 120/80 mmHg
    Ideal,

    /// Systolic 120-139 or diastolic 80-89
    PreHigh,

    /// Systolic 140 or above, or diastolic 90 or above
    High,
}

impl Category {
    /// Every category in ascending order of severity
    pub const ALL: [Category; 4] = [
        Category::Low,
        Category::Ideal,
        Category::PreHigh,
        Category::High,
    ];

    /// Canonical name, as used on the wire and accepted by [`Category::from_name`]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Low => "Low",
            Category::Ideal => "Ideal",
            Category::PreHigh => "PreHigh",
            Category::High => "High",
        }
    }

    /// Parse a category name, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not exactly one of the four names,
    /// including empty and whitespace-only text.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name))
    }

    /// Human-readable label, e.g. "Pre-High Blood Pressure"
    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    /// Short sentence describing a reading in this category
    pub const fn message(self) -> &'static str {
        match self {
            Category::Low => "Your blood pressure is lower than normal",
            Category::Ideal => "Your blood pressure is ideal",
            Category::PreHigh => "Your blood pressure is pre-high",
            Category::High => "Your blood pressure is high",
        }
    }

    /// Explanation, recommendation and range text for this category
    pub fn info(self) -> &'static CategoryInfo {
        category_info::info_for(self)
    }

    /// Doctor-visit and monitoring guidance for this category
    pub fn guidance(self) -> Guidance {
        category_info::guidance_for(Some(self))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons a reading is rejected before classification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingError {
    /// Systolic outside 70-190 mmHg
    #[error("Systolic must be between 70 and 190")]
    SystolicOutOfRange(i32),

    /// Diastolic outside 40-100 mmHg
    #[error("Diastolic must be between 40 and 100")]
    DiastolicOutOfRange(i32),

    /// Systolic is not strictly greater than diastolic
    #[error("Systolic must be greater than Diastolic")]
    SystolicNotAboveDiastolic { systolic: i32, diastolic: i32 },
}

/// A validated blood pressure reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct Reading {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 70, max = 190))]
    systolic: i32,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 40, max = 100))]
    diastolic: i32,
}

impl Reading {
    /// Validate a pair of measurements.
    ///
    /// Range checks run first (systolic, then diastolic), followed by the
    /// requirement that systolic exceeds diastolic.
    pub fn new(systolic: i32, diastolic: i32) -> Result<Self, ReadingError> {
        let reading = Self { systolic, diastolic };

        if let Err(errors) = reading.validate() {
            let fields = errors.field_errors();
            if fields.contains_key("systolic") {
                return Err(ReadingError::SystolicOutOfRange(systolic));
            }
            return Err(ReadingError::DiastolicOutOfRange(diastolic));
        }

        if systolic <= diastolic {
            return Err(ReadingError::SystolicNotAboveDiastolic { systolic, diastolic });
        }

        Ok(reading)
    }

    pub fn systolic(&self) -> i32 {
        self.systolic
    }

    pub fn diastolic(&self) -> i32 {
        self.diastolic
    }

    /// Category of this reading
    pub fn category(&self) -> Category {
        classify(self.systolic, self.diastolic)
    }
}
