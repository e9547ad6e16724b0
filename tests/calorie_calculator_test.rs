// ABOUTME: Integration tests for the Mifflin-St Jeor daily calorie estimator
// ABOUTME: Covers both sexes, every activity tier, rounding and the input policy toggle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Daily calorie estimator tests
//!
//! Reference values are computed by hand from
//! BMR = 10 x weight + 6.25 x height - 5 x age + (5 | -161).

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriwise::calorie_calculator::{
    activity_multiplier, calculate_mifflin_st_jeor, estimate_daily_calories, CalorieInput,
};
use nutriwise::errors::ErrorCode;
use nutriwise::handlers::CaloriePanel;
use nutriwise::models::{CalorieActivityLevel, Sex};
use nutriwise_intelligence::config::BmrConfig;
use nutriwise_intelligence::NutritionConfig;

mod common;

fn reference_input(sex: Sex, activity_level: CalorieActivityLevel) -> CalorieInput {
    CalorieInput {
        age_years: 30.0,
        sex,
        weight_kg: 70.0,
        height_cm: 170.0,
        activity_level,
    }
}

// ============================================================================
// BMR - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_bmr_male_reference() {
    let bmr = calculate_mifflin_st_jeor(70.0, 170.0, 30.0, Sex::Male, &BmrConfig::default());
    assert!((bmr - 1617.5).abs() < 1e-9);
}

#[test]
fn test_bmr_female_reference() {
    let bmr = calculate_mifflin_st_jeor(70.0, 170.0, 30.0, Sex::Female, &BmrConfig::default());
    assert!((bmr - 1451.5).abs() < 1e-9);
}

#[test]
fn test_bmr_sex_difference_is_constant() {
    let config = BmrConfig::default();
    let male = calculate_mifflin_st_jeor(82.0, 181.0, 47.0, Sex::Male, &config);
    let female = calculate_mifflin_st_jeor(82.0, 181.0, 47.0, Sex::Female, &config);
    assert!((male - female - 166.0).abs() < 1e-9);
}

// ============================================================================
// DAILY ESTIMATE
// ============================================================================

#[test]
fn test_male_moderate_estimate() {
    common::init_test_logging();
    let estimate = estimate_daily_calories(
        &reference_input(Sex::Male, CalorieActivityLevel::Moderate),
        &NutritionConfig::default(),
    )
    .unwrap();

    assert!((estimate.activity_multiplier - 1.55).abs() < f64::EPSILON);
    assert_eq!(estimate.calories, 2507);
}

#[test]
fn test_default_panel_is_female_moderate() {
    common::init_test_logging();
    let mut panel = CaloriePanel::new();

    let estimate = panel.submit(&NutritionConfig::default()).unwrap();

    assert!((estimate.bmr - 1451.5).abs() < 1e-9);
    assert_eq!(estimate.calories, 2250);
    assert_eq!(panel.estimate().map(|e| e.calories), Some(2250));
}

#[test]
fn test_every_activity_tier() {
    let config = NutritionConfig::default();
    let expected = [
        (CalorieActivityLevel::Sedentary, 1.2, 1941),
        (CalorieActivityLevel::Light, 1.375, 2224),
        (CalorieActivityLevel::Moderate, 1.55, 2507),
        (CalorieActivityLevel::Active, 1.725, 2790),
        (CalorieActivityLevel::VeryActive, 1.9, 3073),
    ];

    for (level, multiplier, calories) in expected {
        assert!(
            (activity_multiplier(level, &config.activity_factors) - multiplier).abs()
                < f64::EPSILON,
            "multiplier for {level}"
        );
        let estimate =
            estimate_daily_calories(&reference_input(Sex::Male, level), &config).unwrap();
        assert_eq!(estimate.calories, calories, "calories for {level}");
    }
}

#[test]
fn test_custom_activity_factor_is_used() {
    let mut config = NutritionConfig::default();
    config.activity_factors.moderately_active = 1.5;

    let estimate = estimate_daily_calories(
        &reference_input(Sex::Female, CalorieActivityLevel::Moderate),
        &config,
    )
    .unwrap();

    // 1451.5 x 1.5 = 2177.25
    assert_eq!(estimate.calories, 2177);
}

// ============================================================================
// INPUT POLICY
// ============================================================================

#[test]
fn test_negative_age_rejected_by_default() {
    let mut panel = CaloriePanel::new();
    panel.form.age = "-5".to_owned();

    let error = panel.submit(&NutritionConfig::default()).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidValue);
    assert_eq!(error.context.field.as_deref(), Some("age"));
    assert!(panel.estimate().is_none());
}

#[test]
fn test_lenient_policy_computes_anything_finite() {
    let mut config = NutritionConfig::default();
    config.calorie_estimator.require_positive_inputs = false;
    let input = CalorieInput {
        age_years: -5.0,
        ..reference_input(Sex::Female, CalorieActivityLevel::Sedentary)
    };

    let estimate = estimate_daily_calories(&input, &config).unwrap();

    // 700 + 1062.5 + 25 - 161 = 1626.5; x 1.2 = 1951.8
    assert!((estimate.bmr - 1626.5).abs() < 1e-9);
    assert_eq!(estimate.calories, 1952);
}

#[test]
fn test_non_finite_input_rejected_even_when_lenient() {
    let mut config = NutritionConfig::default();
    config.calorie_estimator.require_positive_inputs = false;
    let input = CalorieInput {
        weight_kg: f64::NAN,
        ..reference_input(Sex::Male, CalorieActivityLevel::Light)
    };

    let error = estimate_daily_calories(&input, &config).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidValue);
    assert_eq!(error.context.field.as_deref(), Some("weight"));
}

#[test]
fn test_empty_weight_is_missing() {
    let mut panel = CaloriePanel::new();
    panel.form.weight = "  ".to_owned();

    let error = panel.submit(&NutritionConfig::default()).unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.context.field.as_deref(), Some("weight"));
}

#[test]
fn test_unknown_sex_rejected() {
    let mut panel = CaloriePanel::new();
    panel.form.sex = "other".to_owned();

    let error = panel.submit(&NutritionConfig::default()).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.context.field.as_deref(), Some("sex"));
}
