// ABOUTME: Nutrition database record types
// ABOUTME: FoodRecord with macro/micro nutrient amounts and its FoodCategory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Food group used for search and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    /// Fresh fruit
    Fruit,
    /// Meat and poultry
    Meat,
    /// Fish and seafood
    Fish,
    /// Grains and cereals
    Grain,
    /// Vegetables and tubers
    Vegetable,
    /// Dairy products and eggs
    #[serde(rename = "Dairy & Eggs")]
    DairyAndEggs,
}

impl FoodCategory {
    /// Display label, also used for category search
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fruit => "Fruit",
            Self::Meat => "Meat",
            Self::Fish => "Fish",
            Self::Grain => "Grain",
            Self::Vegetable => "Vegetable",
            Self::DairyAndEggs => "Dairy & Eggs",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Nutrition facts for one serving of a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Food name
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Dietary fiber (grams)
    pub fiber_g: f64,
    /// Sugars (grams)
    pub sugar_g: f64,
    /// Food group
    pub category: FoodCategory,
    /// Human-readable serving description, e.g. "100g (cooked)"
    pub serving_size: String,
}
