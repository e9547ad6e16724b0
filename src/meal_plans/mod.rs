// ABOUTME: Meal plan lookup keyed by health goal and dietary preference
// ABOUTME: Defines the MealPlanCatalog seam and the not-found aware lookup helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plans
//!
//! Plans live in a read-only catalog. The shipped catalog covers every selector
//! combination, so the not-found path is only reachable through an injected catalog.

/// Static and in-memory catalog implementations
pub mod catalog;
mod data;

pub use catalog::{InMemoryMealPlanCatalog, StaticMealPlanCatalog};

use crate::errors::{AppError, AppResult};
use nutriwise_core::constants::resources;
use nutriwise_core::models::{DietaryPreference, HealthGoal, MealPlan};
use serde_json::json;
use tracing::debug;

/// Read-only source of meal plans
pub trait MealPlanCatalog: Send + Sync {
    /// Plan for a selector pair, if one exists
    fn find(&self, goal: HealthGoal, preference: DietaryPreference) -> Option<&MealPlan>;
}

/// Look up the plan for a selector pair
///
/// # Errors
///
/// Returns `RESOURCE_NOT_FOUND` with resource "Meal plan" when the catalog has no entry
pub fn lookup_meal_plan(
    catalog: &dyn MealPlanCatalog,
    goal: HealthGoal,
    preference: DietaryPreference,
) -> AppResult<&MealPlan> {
    catalog.find(goal, preference).ok_or_else(|| {
        debug!(%goal, %preference, "No meal plan for selection");
        AppError::not_found(resources::MEAL_PLAN).with_details(json!({
            "health_goal": goal,
            "dietary_preference": preference,
        }))
    })
}
