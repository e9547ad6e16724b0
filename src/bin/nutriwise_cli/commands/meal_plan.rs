// ABOUTME: Meal plan subcommand
// ABOUTME: Parses the two selectors and prints the generated plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use nutriwise::errors::AppResult;
use nutriwise::handlers::MealPlannerPanel;
use nutriwise::meal_plans::StaticMealPlanCatalog;
use nutriwise::models::{DietaryPreference, HealthGoal};

/// Generate the plan for a goal and dietary preference
pub fn generate(goal: &str, diet: &str, json: bool) -> AppResult<()> {
    let mut panel = MealPlannerPanel::new();
    panel.health_goal = goal.parse::<HealthGoal>()?;
    panel.dietary_preference = diet.parse::<DietaryPreference>()?;

    let notice = panel.generate(StaticMealPlanCatalog::shared())?;

    if let Some(plan) = panel.selected_plan() {
        if json {
            display::print_json(plan)?;
        } else {
            display::print_notice(&notice);
            display::print_meal_plan(plan);
        }
    }
    Ok(())
}
