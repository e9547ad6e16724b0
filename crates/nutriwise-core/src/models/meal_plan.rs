// ABOUTME: Meal planner lookup keys and plan records
// ABOUTME: HealthGoal, DietaryPreference, MealPlan and per-day DayMeals entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Health goal selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthGoal {
    /// Sustainable weight loss
    #[default]
    WeightLoss,
    /// Cardiovascular health
    HeartHealth,
    /// Blood sugar management
    Diabetes,
}

impl HealthGoal {
    /// All goals in selector order
    pub const ALL: [Self; 3] = [Self::WeightLoss, Self::HeartHealth, Self::Diabetes];

    /// Option value used by input widgets
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::HeartHealth => "heart-health",
            Self::Diabetes => "diabetes",
        }
    }
}

impl FromStr for HealthGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == wanted)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown health goal '{wanted}'")))
    }
}

impl fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary preference selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryPreference {
    /// No meat, fish or poultry
    #[default]
    Vegetarian,
    /// No animal products
    Vegan,
    /// Includes meat and fish
    NonVegetarian,
}

impl DietaryPreference {
    /// All preferences in selector order
    pub const ALL: [Self; 3] = [Self::Vegetarian, Self::Vegan, Self::NonVegetarian];

    /// Option value used by input widgets
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::NonVegetarian => "non-vegetarian",
        }
    }
}

impl FromStr for DietaryPreference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|preference| preference.as_str() == wanted)
            .ok_or_else(|| {
                AppError::invalid_input(format!("Unknown dietary preference '{wanted}'"))
            })
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meals suggested for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMeals {
    /// Day name, e.g. "Monday"
    pub day: String,
    /// Breakfast suggestion
    pub breakfast: String,
    /// Lunch suggestion
    pub lunch: String,
    /// Dinner suggestion
    pub dinner: String,
    /// Snack suggestion
    pub snack: String,
}

/// Multi-day meal plan for one goal/preference combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Plan title, e.g. "Vegan Weight Loss Plan"
    pub title: String,
    /// One-line summary
    pub description: String,
    /// Per-day entries in order
    pub meals: Vec<DayMeals>,
    /// Practical tips in order
    pub tips: Vec<String>,
}
