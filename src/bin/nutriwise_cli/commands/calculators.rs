// ABOUTME: BMI and daily calorie subcommands
// ABOUTME: Feed raw argument strings through the same form parsing the panels use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use nutriwise::config::AppConfig;
use nutriwise::errors::AppResult;
use nutriwise::forms::{BmiForm, CalorieForm};
use nutriwise::handlers::{BmiPanel, CaloriePanel};

/// Run the BMI calculator once
pub fn bmi(config: &AppConfig, form: BmiForm, json: bool) -> AppResult<()> {
    let mut panel = BmiPanel::new();
    panel.form = form;
    let assessment = panel.submit(&config.nutrition)?;

    if json {
        display::print_json(assessment)
    } else {
        display::print_bmi(assessment);
        Ok(())
    }
}

/// Run the calorie estimator once
pub fn calories(config: &AppConfig, form: CalorieForm, json: bool) -> AppResult<()> {
    let mut panel = CaloriePanel::new();
    panel.form = form;
    let estimate = panel.submit(&config.nutrition)?;

    if json {
        display::print_json(estimate)
    } else {
        display::print_calories(estimate);
        Ok(())
    }
}
