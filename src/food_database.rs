// ABOUTME: Built-in nutrition database and name/category search
// ABOUTME: Ten common foods with per-serving macro and micro nutrient amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Database
//!
//! A linear scan over a small table. An empty query is not a search and returns
//! [`FoodSearchOutcome::Idle`]; a search with no hits is an outcome, not an error.

use crate::errors::{AppError, AppResult};
use nutriwise_core::constants::resources;
use nutriwise_core::models::{FoodCategory, FoodRecord};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

struct FoodSeed {
    name: &'static str,
    calories: f64,
    carbs_g: f64,
    protein_g: f64,
    fat_g: f64,
    fiber_g: f64,
    sugar_g: f64,
    category: FoodCategory,
    serving_size: &'static str,
}

#[rustfmt::skip]
const BUILTIN_FOODS: [FoodSeed; 10] = [
    FoodSeed { name: "Apple", calories: 52.0, carbs_g: 14.0, protein_g: 0.3, fat_g: 0.2, fiber_g: 2.4, sugar_g: 10.3, category: FoodCategory::Fruit, serving_size: "1 medium (182g)" },
    FoodSeed { name: "Banana", calories: 89.0, carbs_g: 23.0, protein_g: 1.1, fat_g: 0.3, fiber_g: 2.6, sugar_g: 12.2, category: FoodCategory::Fruit, serving_size: "1 medium (118g)" },
    FoodSeed { name: "Chicken Breast", calories: 165.0, carbs_g: 0.0, protein_g: 31.0, fat_g: 3.6, fiber_g: 0.0, sugar_g: 0.0, category: FoodCategory::Meat, serving_size: "100g (cooked)" },
    FoodSeed { name: "Salmon", calories: 206.0, carbs_g: 0.0, protein_g: 22.0, fat_g: 13.0, fiber_g: 0.0, sugar_g: 0.0, category: FoodCategory::Fish, serving_size: "100g (cooked)" },
    FoodSeed { name: "Brown Rice", calories: 112.0, carbs_g: 24.0, protein_g: 2.3, fat_g: 0.8, fiber_g: 1.8, sugar_g: 0.4, category: FoodCategory::Grain, serving_size: "100g (cooked)" },
    FoodSeed { name: "Broccoli", calories: 31.0, carbs_g: 6.0, protein_g: 2.5, fat_g: 0.3, fiber_g: 2.4, sugar_g: 1.5, category: FoodCategory::Vegetable, serving_size: "100g (raw)" },
    FoodSeed { name: "Egg", calories: 72.0, carbs_g: 0.4, protein_g: 6.3, fat_g: 5.0, fiber_g: 0.0, sugar_g: 0.4, category: FoodCategory::DairyAndEggs, serving_size: "1 large (50g)" },
    FoodSeed { name: "Avocado", calories: 160.0, carbs_g: 8.5, protein_g: 2.0, fat_g: 14.7, fiber_g: 6.7, sugar_g: 0.7, category: FoodCategory::Fruit, serving_size: "100g (raw)" },
    FoodSeed { name: "Quinoa", calories: 120.0, carbs_g: 21.3, protein_g: 4.4, fat_g: 1.9, fiber_g: 2.8, sugar_g: 0.9, category: FoodCategory::Grain, serving_size: "100g (cooked)" },
    FoodSeed { name: "Sweet Potato", calories: 86.0, carbs_g: 20.1, protein_g: 1.6, fat_g: 0.1, fiber_g: 3.0, sugar_g: 4.2, category: FoodCategory::Vegetable, serving_size: "100g (baked)" },
];

impl FoodSeed {
    fn to_record(&self) -> FoodRecord {
        FoodRecord {
            name: self.name.to_owned(),
            calories: self.calories,
            carbs_g: self.carbs_g,
            protein_g: self.protein_g,
            fat_g: self.fat_g,
            fiber_g: self.fiber_g,
            sugar_g: self.sugar_g,
            category: self.category,
            serving_size: self.serving_size.to_owned(),
        }
    }
}

/// Result of a search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FoodSearchOutcome<'a> {
    /// Blank query; nothing to show
    Idle,
    /// Matching foods in table order
    Matches {
        /// Matching records
        foods: Vec<&'a FoodRecord>,
    },
    /// Non-blank query with no hits
    NoResults {
        /// Trimmed query as typed
        query: String,
    },
}

impl FoodSearchOutcome<'_> {
    /// Inline message shown when nothing matched
    #[must_use]
    pub fn no_results_message(&self) -> Option<String> {
        match self {
            Self::NoResults { query } => Some(format!("No foods found matching \"{query}\"")),
            Self::Idle | Self::Matches { .. } => None,
        }
    }
}

/// Read-only table of foods
#[derive(Debug, Clone, PartialEq)]
pub struct FoodDatabase {
    foods: Vec<FoodRecord>,
}

impl FoodDatabase {
    /// Database over an arbitrary table
    #[must_use]
    pub fn new(foods: Vec<FoodRecord>) -> Self {
        Self { foods }
    }

    /// The ten foods shipped with the application
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_FOODS.iter().map(FoodSeed::to_record).collect())
    }

    /// All foods in table order
    #[must_use]
    pub fn foods(&self) -> &[FoodRecord] {
        &self.foods
    }

    /// Case-insensitive substring search over name and category label
    #[must_use]
    pub fn search(&self, query: &str) -> FoodSearchOutcome<'_> {
        let query = query.trim();
        if query.is_empty() {
            return FoodSearchOutcome::Idle;
        }

        let needle = query.to_lowercase();
        let foods: Vec<&FoodRecord> = self
            .foods
            .iter()
            .filter(|food| {
                food.name.to_lowercase().contains(&needle)
                    || food.category.label().to_lowercase().contains(&needle)
            })
            .collect();

        debug!(query, hits = foods.len(), "Food search");

        if foods.is_empty() {
            FoodSearchOutcome::NoResults {
                query: query.to_owned(),
            }
        } else {
            FoodSearchOutcome::Matches { foods }
        }
    }

    /// Exact, case-insensitive lookup by name
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no food has that name
    pub fn find(&self, name: &str) -> AppResult<&FoodRecord> {
        let name = name.trim();
        self.foods
            .iter()
            .find(|food| food.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::not_found(resources::FOOD).with_details(json!({ "name": name })))
    }
}
