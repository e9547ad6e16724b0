// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, prefilled forms and small catalog builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutriwise`
//!
//! Each integration test binary compiles this module separately, so not every
//! helper is used everywhere.

use nutriwise::forms::BmiForm;
use nutriwise::handlers::BmiPanel;
use nutriwise::models::{DayMeals, MealPlan};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test)
/// Set `TEST_LOG=DEBUG` for verbose output when debugging a failure
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// BMI form with the three numeric fields filled and default selectors
pub fn bmi_form(height: &str, weight: &str, age: &str) -> BmiForm {
    BmiForm {
        height: height.to_owned(),
        weight: weight.to_owned(),
        age: age.to_owned(),
        ..BmiForm::default()
    }
}

/// BMI panel prefilled with the given numbers
pub fn bmi_panel(height: &str, weight: &str, age: &str) -> BmiPanel {
    let mut panel = BmiPanel::new();
    panel.form = bmi_form(height, weight, age);
    panel
}

/// Minimal one-day plan for catalog tests
pub fn sample_plan(title: &str) -> MealPlan {
    MealPlan {
        title: title.to_owned(),
        description: format!("{title} for tests"),
        meals: vec![DayMeals {
            day: "Monday".to_owned(),
            breakfast: "Oats".to_owned(),
            lunch: "Lentil soup".to_owned(),
            dinner: "Tofu stir-fry".to_owned(),
            snack: "Apple".to_owned(),
        }],
        tips: vec!["Drink water".to_owned()],
    }
}
