// ABOUTME: Meal planner panel handler with selector state and the generate command
// ABOUTME: Selector changes never compute; generate looks the pair up in a catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::meal_plans::{lookup_meal_plan, MealPlanCatalog};
use nutriwise_core::constants::notices;
use nutriwise_core::models::{DietaryPreference, HealthGoal, MealPlan, Notice};
use tracing::{info, warn};

/// Meal planner state
#[derive(Debug, Clone, Default)]
pub struct MealPlannerPanel {
    /// Selected health goal
    pub health_goal: HealthGoal,
    /// Selected dietary preference
    pub dietary_preference: DietaryPreference,
    selected_plan: Option<MealPlan>,
}

impl MealPlannerPanel {
    /// Panel with the default selectors and no plan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan shown after the last successful generate
    #[must_use]
    pub const fn selected_plan(&self) -> Option<&MealPlan> {
        self.selected_plan.as_ref()
    }

    /// Look up the plan for the current selectors
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` and clears the shown plan when the catalog has no
    /// entry for the pair
    pub fn generate(&mut self, catalog: &dyn MealPlanCatalog) -> AppResult<Notice> {
        let goal = self.health_goal;
        let preference = self.dietary_preference;

        match lookup_meal_plan(catalog, goal, preference) {
            Ok(plan) => {
                info!(%goal, %preference, title = %plan.title, "Meal plan generated");
                self.selected_plan = Some(plan.clone());
                Ok(Notice::info(
                    notices::PLAN_GENERATED_TITLE,
                    format!(
                        "Your {preference} plan for {} is ready!",
                        goal.as_str().replacen('-', " ", 1)
                    ),
                ))
            }
            Err(e) => {
                warn!(%goal, %preference, "Meal plan unavailable");
                self.selected_plan = None;
                Err(e)
            }
        }
    }
}
