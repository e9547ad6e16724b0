// ABOUTME: Tests for environment-driven configuration loading and validation
// ABOUTME: Covers nutrition overrides, chat delay parsing and invariant violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Environment variables are process-wide, so every test that touches them is serial.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriwise::config::{AppConfig, ConfigError, Environment, NutritionConfig};
use nutriwise_intelligence::config::MAX_DISPLAY_PRECISION;
use nutriwise::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;
use std::time::Duration;

mod common;

const NUTRITION_VARS: [&str; 7] = [
    "NUTRITION_BMI_OVERWEIGHT_FROM",
    "NUTRITION_BMI_OBESITY_FROM",
    "NUTRITION_BMI_DISPLAY_PRECISION",
    "NUTRITION_ACTIVITY_EXTRA_ACTIVE",
    "NUTRITION_ACTIVITY_MODERATELY_ACTIVE",
    "NUTRITION_REQUIRE_POSITIVE_INPUTS",
    "NUTRITION_DV_PROTEIN_G",
];

fn clear_env() {
    for var in NUTRITION_VARS {
        env::remove_var(var);
    }
    env::remove_var("NUTRIWISE_CHAT_REPLY_DELAY_MS");
    env::remove_var("NUTRIWISE_ENVIRONMENT");
}

// ============================================================================
// DEFAULTS
// ============================================================================

#[test]
fn test_default_config_validation() {
    let config = NutritionConfig::default();

    assert!(config.validate().is_ok());
    assert!(config.calorie_estimator.require_positive_inputs);
    assert!((config.bmi.overweight_from - 25.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_app_config_defaults() {
    clear_env();

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.chat.reply_delay, Duration::from_millis(1000));
    assert_eq!(config.nutrition, NutritionConfig::default());
    assert!(config.summary().contains("Chat Reply Delay: 1000 ms"));
}

// ============================================================================
// ENVIRONMENT OVERRIDES
// ============================================================================

#[test]
#[serial]
fn test_environment_variable_override() {
    common::init_test_logging();
    clear_env();
    env::set_var("NUTRITION_BMI_OVERWEIGHT_FROM", "26");
    env::set_var("NUTRITION_ACTIVITY_MODERATELY_ACTIVE", " 1.6 ");
    env::set_var("NUTRITION_REQUIRE_POSITIVE_INPUTS", "false");
    env::set_var("NUTRITION_DV_PROTEIN_G", "60");

    let config = NutritionConfig::load().unwrap();

    assert!((config.bmi.overweight_from - 26.0).abs() < f64::EPSILON);
    assert!((config.activity_factors.moderately_active - 1.6).abs() < f64::EPSILON);
    assert!(!config.calorie_estimator.require_positive_inputs);
    assert!((config.daily_values.protein_g - 60.0).abs() < f64::EPSILON);

    clear_env();
}

#[test]
#[serial]
fn test_chat_delay_and_environment_override() {
    clear_env();
    env::set_var("NUTRIWISE_CHAT_REPLY_DELAY_MS", "250");
    env::set_var("NUTRIWISE_ENVIRONMENT", "prod");

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.chat.reply_delay, Duration::from_millis(250));
    assert!(config.environment.is_production());

    clear_env();
}

// ============================================================================
// INVALID VALUES
// ============================================================================

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    clear_env();
    env::set_var("NUTRITION_BMI_OVERWEIGHT_FROM", "twenty-five");

    let error = NutritionConfig::load().unwrap_err();

    assert!(matches!(error, ConfigError::Parse(_)));

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);

    clear_env();
}

#[test]
#[serial]
fn test_misordered_thresholds_are_rejected() {
    clear_env();
    env::set_var("NUTRITION_BMI_OBESITY_FROM", "24");

    let error = NutritionConfig::load().unwrap_err();

    assert!(matches!(error, ConfigError::InvalidRange(_)));

    clear_env();
}

#[test]
#[serial]
fn test_bad_chat_delay_is_config_error() {
    clear_env();
    env::set_var("NUTRIWISE_CHAT_REPLY_DELAY_MS", "soon");

    let error = AppConfig::from_env().unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("NUTRIWISE_CHAT_REPLY_DELAY_MS"));

    clear_env();
}

#[test]
#[serial]
fn test_nan_threshold_is_rejected() {
    clear_env();
    env::set_var("NUTRITION_BMI_OBESITY_FROM", "NaN");

    let error = NutritionConfig::load().unwrap_err();

    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));

    clear_env();
}

#[test]
#[serial]
fn test_infinite_activity_factor_is_rejected() {
    clear_env();
    env::set_var("NUTRITION_ACTIVITY_EXTRA_ACTIVE", "inf");

    let error = NutritionConfig::load().unwrap_err();

    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));

    clear_env();
}

#[test]
#[serial]
fn test_display_precision_is_capped() {
    clear_env();
    env::set_var("NUTRITION_BMI_DISPLAY_PRECISION", "400");

    let error = NutritionConfig::load().unwrap_err();
    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));

    env::set_var(
        "NUTRITION_BMI_DISPLAY_PRECISION",
        MAX_DISPLAY_PRECISION.to_string(),
    );
    let config = NutritionConfig::load().unwrap();
    assert_eq!(config.bmi.display_precision, MAX_DISPLAY_PRECISION);

    clear_env();
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_override_is_env_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_env();
    env::set_var(
        "NUTRITION_BMI_OVERWEIGHT_FROM",
        OsStr::from_bytes(&[0x32, 0x35, 0xff]),
    );

    let error = NutritionConfig::load().unwrap_err();

    assert!(matches!(error, ConfigError::EnvVar(_)));

    clear_env();
}

#[test]
fn test_non_ascending_factors_fail_validation() {
    let mut config = NutritionConfig::default();
    config.activity_factors.very_active = 1.5;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange(_))
    ));
}
