// ABOUTME: Daily calorie estimate from the Mifflin-St Jeor BMR and an activity multiplier
// ABOUTME: Rounds the scaled BMR to a whole number of kilocalories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Calculator Module
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use nutriwise_core::errors::{AppError, AppResult};
use nutriwise_core::models::{CalorieActivityLevel, Sex};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parsed calorie estimator input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieInput {
    /// Age in years
    pub age_years: f64,
    /// Selects the sex constant of the equation
    pub sex: Sex,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Selects the multiplier
    pub activity_level: CalorieActivityLevel,
}

/// Daily calorie estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieEstimate {
    /// Basal Metabolic Rate in kcal/day
    pub bmr: f64,
    /// Multiplier applied to the BMR
    pub activity_multiplier: f64,
    /// Rounded daily calorie need in kcal/day
    pub calories: i64,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Men: +5
/// - Women: -161
///
/// No range checks or clamping are applied here.
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * age_years;

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Multiplier for an activity tier
#[must_use]
pub const fn activity_multiplier(level: CalorieActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    config.factor_for(level)
}

/// Estimate daily calorie needs
///
/// # Errors
///
/// Returns `INVALID_VALUE` for a non-finite input, or for a non-positive age, weight or
/// height when `require_positive_inputs` is enabled. Returns `INTERNAL_ERROR` if the
/// result does not fit in an `i64`.
pub fn estimate_daily_calories(
    input: &CalorieInput,
    config: &NutritionConfig,
) -> AppResult<CalorieEstimate> {
    let strict = config.calorie_estimator.require_positive_inputs;
    for (field, value) in [
        ("age", input.age_years),
        ("weight", input.weight_kg),
        ("height", input.height_cm),
    ] {
        if !value.is_finite() {
            return Err(AppError::invalid_value(field, "must be a number"));
        }
        if strict && value <= 0.0 {
            return Err(AppError::invalid_value(field, "must be a positive number"));
        }
    }

    let bmr = calculate_mifflin_st_jeor(
        input.weight_kg,
        input.height_cm,
        input.age_years,
        input.sex,
        &config.bmr,
    );
    let multiplier = activity_multiplier(input.activity_level, &config.activity_factors);
    let calories = round_half_up(bmr * multiplier)?;

    debug!(bmr, multiplier, calories, activity = %input.activity_level, "Daily calories estimated");

    Ok(CalorieEstimate {
        bmr,
        activity_multiplier: multiplier,
        calories,
    })
}

/// Round to the nearest integer, ties towards positive infinity
fn round_half_up(value: f64) -> AppResult<i64> {
    let rounded = (value + 0.5).floor();
    // i64::MAX is not exactly representable; compare against 2^63
    if rounded >= -9_223_372_036_854_775_808.0 && rounded < 9_223_372_036_854_775_808.0 {
        Ok(rounded as i64)
    } else {
        Err(AppError::internal(format!(
            "Calorie estimate {value} is out of range"
        )))
    }
}
