// ABOUTME: Nutrition calculation engine crate root
// ABOUTME: Exposes BMI, calorie and food analysis calculators plus their configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriWise` Intelligence
//!
//! Pure calculation functions used by the form handlers. Every calculator takes an
//! already-parsed input struct plus the relevant slice of [`config::NutritionConfig`] and
//! returns a result struct or an [`nutriwise_core::errors::AppError`].

/// BMI computation, classification and recommendation assembly
pub mod bmi_calculator;
/// Mifflin-St Jeor BMR and activity-scaled daily calorie estimate
pub mod calorie_calculator;
/// Tunable coefficients, thresholds and reference intakes
pub mod config;
/// Chart data and daily-value percentages for food records
pub mod food_analysis;

pub use bmi_calculator::{assess_bmi, BmiAssessment, BmiInput};
pub use calorie_calculator::{estimate_daily_calories, CalorieEstimate, CalorieInput};
pub use config::NutritionConfig;
