// ABOUTME: MealPlanCatalog implementations backed by the shipped table or a HashMap
// ABOUTME: The shipped catalog is built once per process and shared
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::data::shipped_plans;
use super::MealPlanCatalog;
use nutriwise_core::models::{DietaryPreference, HealthGoal, MealPlan};
use std::collections::HashMap;
use std::sync::OnceLock;

static SHIPPED_CATALOG: OnceLock<StaticMealPlanCatalog> = OnceLock::new();

/// The nine plans shipped with the application
#[derive(Debug)]
pub struct StaticMealPlanCatalog {
    plans: HashMap<(HealthGoal, DietaryPreference), MealPlan>,
}

impl StaticMealPlanCatalog {
    /// Process-wide shared instance
    pub fn shared() -> &'static Self {
        SHIPPED_CATALOG.get_or_init(|| Self {
            plans: shipped_plans()
                .map(|(goal, preference, plan)| ((goal, preference), plan))
                .collect(),
        })
    }

    /// Number of plans
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether the catalog has no plans
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl MealPlanCatalog for StaticMealPlanCatalog {
    fn find(&self, goal: HealthGoal, preference: DietaryPreference) -> Option<&MealPlan> {
        self.plans.get(&(goal, preference))
    }
}

/// Mutable catalog for injected tables
#[derive(Debug, Default, Clone)]
pub struct InMemoryMealPlanCatalog {
    plans: HashMap<(HealthGoal, DietaryPreference), MealPlan>,
}

impl InMemoryMealPlanCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the plan for a selector pair
    pub fn insert(&mut self, goal: HealthGoal, preference: DietaryPreference, plan: MealPlan) {
        self.plans.insert((goal, preference), plan);
    }
}

impl MealPlanCatalog for InMemoryMealPlanCatalog {
    fn find(&self, goal: HealthGoal, preference: DietaryPreference) -> Option<&MealPlan> {
        self.plans.get(&(goal, preference))
    }
}
