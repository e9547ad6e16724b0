// ABOUTME: BMI computation, band classification, and recommendation assembly
// ABOUTME: Category advice (five lines) is followed by activity advice (two lines)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMI Calculator Module
//!
//! `bmi = weight_kg / (height_cm / 100)^2`
//!
//! The category is taken from the unrounded value so that a BMI of 24.96 stays
//! "Normal weight" even though it is displayed as 25.0.

use crate::config::BmiConfig;
use nutriwise_core::errors::{AppError, AppResult};
use nutriwise_core::models::{ActivityLevel, BmiCategory, Sex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parsed BMI form input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Age in years
    pub age_years: f64,
    /// Carried for display only
    pub sex: Sex,
    /// Selects the two activity-based recommendations
    pub activity_level: ActivityLevel,
}

/// Result of a BMI assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// BMI rounded to the configured display precision
    pub bmi: f64,
    /// Unrounded BMI used for classification
    pub raw_bmi: f64,
    /// Band of the unrounded BMI
    pub category: BmiCategory,
    /// Category advice followed by activity advice
    pub recommendations: Vec<String>,
}

const UNDERWEIGHT_ADVICE: [&str; 5] = [
    "Focus on nutrient-dense foods to gain weight healthily",
    "Eat more frequently throughout the day (5-6 smaller meals)",
    "Include healthy fats like avocados, nuts, and olive oil",
    "Add protein-rich foods to each meal",
    "Consider smoothies with fruits, protein, and healthy fats",
];

const NORMAL_WEIGHT_ADVICE: [&str; 5] = [
    "Maintain a balanced diet with plenty of fruits and vegetables",
    "Include whole grains and lean proteins",
    "Stay hydrated with water throughout the day",
    "Limit processed foods and added sugars",
    "Continue regular physical activity",
];

const OVERWEIGHT_ADVICE: [&str; 5] = [
    "Focus on portion control and mindful eating",
    "Increase vegetable intake to feel fuller with fewer calories",
    "Choose lean proteins and reduce saturated fats",
    "Limit refined carbohydrates and added sugars",
    "Combine diet changes with regular physical activity",
];

const OBESITY_ADVICE: [&str; 5] = [
    "Consult with a healthcare provider for personalized advice",
    "Focus on whole, unprocessed foods",
    "Control portions and consider keeping a food journal",
    "Gradually increase physical activity",
    "Set realistic, sustainable goals for weight loss",
];

/// Compute the unrounded BMI
///
/// # Errors
///
/// Returns `INVALID_VALUE` if either input is not a finite, strictly positive number
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> AppResult<f64> {
    ensure_positive("height", height_cm)?;
    ensure_positive("weight", weight_kg)?;

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to_precision(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powf(f64::from(decimals));
    (value * factor).round() / factor
}

/// Map a BMI onto its band; each band includes its lower bound
#[must_use]
pub fn classify_bmi(bmi: f64, config: &BmiConfig) -> BmiCategory {
    if bmi < config.underweight_below {
        BmiCategory::Underweight
    } else if bmi < config.overweight_from {
        BmiCategory::NormalWeight
    } else if bmi < config.obesity_from {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

/// The five fixed recommendations for a category
#[must_use]
pub const fn category_recommendations(category: BmiCategory) -> &'static [&'static str; 5] {
    match category {
        BmiCategory::Underweight => &UNDERWEIGHT_ADVICE,
        BmiCategory::NormalWeight => &NORMAL_WEIGHT_ADVICE,
        BmiCategory::Overweight => &OVERWEIGHT_ADVICE,
        BmiCategory::Obesity => &OBESITY_ADVICE,
    }
}

/// The two fixed recommendations for an activity level
#[must_use]
pub const fn activity_recommendations(level: ActivityLevel) -> [&'static str; 2] {
    match level {
        ActivityLevel::Sedentary => [
            "Try to incorporate more movement into your daily routine",
            "Start with short walks and gradually increase duration",
        ],
        ActivityLevel::LightlyActive => [
            "Aim to increase intensity of current activities",
            "Consider adding strength training 2 times per week",
        ],
        ActivityLevel::ModeratelyActive => [
            "Maintain current activity level while focusing on nutrition",
            "Consider adding variety to your exercise routine",
        ],
        ActivityLevel::VeryActive => [
            "Ensure adequate protein intake for muscle recovery",
            "Focus on quality of nutrition to support high activity levels",
        ],
        ActivityLevel::ExtraActive => [
            "Consider working with a sports nutritionist for optimal performance",
            "Focus on recovery nutrition and adequate calorie intake",
        ],
    }
}

/// Validate, compute, classify, and assemble recommendations
///
/// # Errors
///
/// Returns `INVALID_VALUE` naming the first of height, weight, or age that is not a
/// finite, strictly positive number
pub fn assess_bmi(input: &BmiInput, config: &BmiConfig) -> AppResult<BmiAssessment> {
    let raw_bmi = calculate_bmi(input.height_cm, input.weight_kg)?;
    ensure_positive("age", input.age_years)?;
    let category = classify_bmi(raw_bmi, config);

    let recommendations: Vec<String> = category_recommendations(category)
        .iter()
        .chain(activity_recommendations(input.activity_level).iter())
        .map(|line| (*line).to_owned())
        .collect();

    let bmi = round_to_precision(raw_bmi, config.display_precision);
    debug!(bmi, %category, activity = %input.activity_level, "BMI assessed");

    Ok(BmiAssessment {
        bmi,
        raw_bmi,
        category,
        recommendations,
    })
}

fn ensure_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_value(field, "must be a positive number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_precision() {
        assert!((round_to_precision(24.221_453, 1) - 24.2).abs() < f64::EPSILON);
        assert!((round_to_precision(29.320_987, 1) - 29.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_classification_uses_unrounded_value() {
        let config = BmiConfig::default();
        assert_eq!(classify_bmi(24.96, &config), BmiCategory::NormalWeight);
        assert_eq!(classify_bmi(18.49, &config), BmiCategory::Underweight);
    }

    #[test]
    fn test_every_activity_pair_is_distinct() {
        let pairs: Vec<_> = ActivityLevel::ALL
            .into_iter()
            .map(activity_recommendations)
            .collect();
        for (i, a) in pairs.iter().enumerate() {
            for b in &pairs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
