// ABOUTME: Food search, food detail and recommended-foods subcommands
// ABOUTME: Uses the built-in food table, the configured daily reference intakes and the recommendations catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use nutriwise::config::AppConfig;
use nutriwise::errors::AppResult;
use nutriwise::food_analysis::{daily_value_percentages, macro_breakdown, nutrient_profile};
use nutriwise::food_database::FoodDatabase;
use nutriwise::models::CategoryFilter;
use nutriwise::recommendations::RecommendationCatalog;
use serde_json::json;

/// Search by name or category
pub fn search(query: &str, json: bool) -> AppResult<()> {
    let database = FoodDatabase::builtin();
    let outcome = database.search(query);

    if json {
        display::print_json(&outcome)
    } else {
        display::print_search(&outcome);
        Ok(())
    }
}

/// Show one food's nutrition breakdown
pub fn show(config: &AppConfig, name: &str, json: bool) -> AppResult<()> {
    let database = FoodDatabase::builtin();
    let food = database.find(name)?;

    let breakdown = macro_breakdown(food);
    let profile = nutrient_profile(food);
    let daily = daily_value_percentages(food, &config.nutrition.daily_values);

    if json {
        display::print_json(&json!({
            "food": food,
            "macro_breakdown": breakdown,
            "nutrient_profile": profile,
            "daily_values": daily,
        }))
    } else {
        display::print_food(food, &breakdown, &profile, &daily);
        Ok(())
    }
}

/// List recommended foods under a category tab
pub fn recommend(category: &str, json: bool) -> AppResult<()> {
    let filter = category.parse::<CategoryFilter>()?;
    let foods = RecommendationCatalog::shared().by_category(filter);

    if json {
        display::print_json(&foods)
    } else {
        display::print_recommendations(filter, &foods);
        Ok(())
    }
}
