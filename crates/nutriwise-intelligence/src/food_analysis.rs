// ABOUTME: Nutrient breakdowns and percent-of-daily-value figures for a single food
// ABOUTME: Produces chart data only; rendering is left to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::DailyValuesConfig;
use nutriwise_core::models::FoodRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrient shown in the breakdown charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Total carbohydrate
    Carbs,
    /// Protein
    Protein,
    /// Total fat
    Fat,
    /// Dietary fiber
    Fiber,
    /// Sugars
    Sugar,
}

impl Nutrient {
    /// Chart label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Carbs => "Carbs",
            Self::Protein => "Protein",
            Self::Fat => "Fat",
            Self::Fiber => "Fiber",
            Self::Sugar => "Sugar",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One slice or bar of a chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientAmount {
    /// Which nutrient
    pub nutrient: Nutrient,
    /// Amount per serving in grams
    pub grams: f64,
}

/// Percent of the reference daily intake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyValueShare {
    /// Rounded percentage, may exceed 100
    pub percent: f64,
    /// Progress bar fill, capped at 100
    pub bar_fill: f64,
}

impl DailyValueShare {
    fn of(amount: f64, reference: f64) -> Self {
        let percent = (amount / reference * 100.0).round();
        Self {
            percent,
            bar_fill: percent.min(100.0),
        }
    }
}

/// Daily value shares for the five tracked quantities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyValuePercentages {
    /// Energy
    pub calories: DailyValueShare,
    /// Total carbohydrate
    pub carbs: DailyValueShare,
    /// Protein
    pub protein: DailyValueShare,
    /// Total fat
    pub fat: DailyValueShare,
    /// Dietary fiber
    pub fiber: DailyValueShare,
}

/// Macronutrient pie data: carbs, protein, fat, fiber
#[must_use]
pub fn macro_breakdown(food: &FoodRecord) -> Vec<NutrientAmount> {
    vec![
        NutrientAmount {
            nutrient: Nutrient::Carbs,
            grams: food.carbs_g,
        },
        NutrientAmount {
            nutrient: Nutrient::Protein,
            grams: food.protein_g,
        },
        NutrientAmount {
            nutrient: Nutrient::Fat,
            grams: food.fat_g,
        },
        NutrientAmount {
            nutrient: Nutrient::Fiber,
            grams: food.fiber_g,
        },
    ]
}

/// Nutrient bar data: the macro breakdown followed by sugar
#[must_use]
pub fn nutrient_profile(food: &FoodRecord) -> Vec<NutrientAmount> {
    let mut profile = macro_breakdown(food);
    profile.push(NutrientAmount {
        nutrient: Nutrient::Sugar,
        grams: food.sugar_g,
    });
    profile
}

/// Share of each reference intake covered by one serving
#[must_use]
pub fn daily_value_percentages(
    food: &FoodRecord,
    reference: &DailyValuesConfig,
) -> DailyValuePercentages {
    DailyValuePercentages {
        calories: DailyValueShare::of(food.calories, reference.calories),
        carbs: DailyValueShare::of(food.carbs_g, reference.carbs_g),
        protein: DailyValueShare::of(food.protein_g, reference.protein_g),
        fat: DailyValueShare::of(food.fat_g, reference.fat_g),
        fiber: DailyValueShare::of(food.fiber_g, reference.fiber_g),
    }
}
