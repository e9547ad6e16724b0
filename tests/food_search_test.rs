// ABOUTME: Integration tests for the food database search and per-serving analysis
// ABOUTME: Covers idle/match/no-result outcomes, name lookup and daily value shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriwise::constants::resources;
use nutriwise::errors::ErrorCode;
use nutriwise::food_analysis::{
    daily_value_percentages, macro_breakdown, nutrient_profile, Nutrient,
};
use nutriwise::food_database::{FoodDatabase, FoodSearchOutcome};
use nutriwise::models::FoodCategory;
use nutriwise_intelligence::config::DailyValuesConfig;

mod common;

fn names(outcome: &FoodSearchOutcome<'_>) -> Vec<String> {
    match outcome {
        FoodSearchOutcome::Matches { foods } => foods.iter().map(|f| f.name.clone()).collect(),
        other => panic!("expected matches, got {other:?}"),
    }
}

// ============================================================================
// SEARCH
// ============================================================================

#[test]
fn test_blank_query_is_idle() {
    let db = FoodDatabase::builtin();

    assert_eq!(db.search(""), FoodSearchOutcome::Idle);
    assert_eq!(db.search("   "), FoodSearchOutcome::Idle);
    assert_eq!(db.search("").no_results_message(), None);
}

#[test]
fn test_category_search_keeps_table_order() {
    common::init_test_logging();
    let db = FoodDatabase::builtin();

    let outcome = db.search("fruit");

    assert_eq!(names(&outcome), ["Apple", "Banana", "Avocado"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let db = FoodDatabase::builtin();

    assert_eq!(names(&db.search("SALMON")), ["Salmon"]);
    assert_eq!(names(&db.search("rice")), ["Brown Rice"]);
}

#[test]
fn test_name_and_category_hit_once() {
    let db = FoodDatabase::builtin();

    let outcome = db.search("egg");

    assert_eq!(names(&outcome), ["Egg"]);
}

#[test]
fn test_partial_category_match() {
    let db = FoodDatabase::builtin();

    assert_eq!(names(&db.search("veg")), ["Broccoli", "Sweet Potato"]);
}

#[test]
fn test_no_results_is_an_outcome() {
    let db = FoodDatabase::builtin();

    let outcome = db.search(" pizza ");

    assert_eq!(
        outcome,
        FoodSearchOutcome::NoResults {
            query: "pizza".to_owned()
        }
    );
    assert_eq!(
        outcome.no_results_message().as_deref(),
        Some("No foods found matching \"pizza\"")
    );
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let db = FoodDatabase::builtin();

    let json = serde_json::to_value(db.search("xyz")).unwrap();

    assert_eq!(json["status"], "no_results");
    assert_eq!(json["query"], "xyz");
}

// ============================================================================
// LOOKUP
// ============================================================================

#[test]
fn test_find_by_exact_name() {
    let db = FoodDatabase::builtin();

    let food = db.find("sweet potato").unwrap();

    assert_eq!(food.name, "Sweet Potato");
    assert_eq!(food.category, FoodCategory::Vegetable);
    assert_eq!(food.serving_size, "100g (baked)");
}

#[test]
fn test_find_unknown_food() {
    let db = FoodDatabase::builtin();

    let error = db.find("pizza").unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.context.resource.as_deref(), Some(resources::FOOD));
    assert_eq!(error.context.details["name"], "pizza");
}

#[test]
fn test_find_requires_full_name() {
    let db = FoodDatabase::builtin();

    assert!(db.find("sweet").is_err());
}

// ============================================================================
// ANALYSIS
// ============================================================================

#[test]
fn test_macro_breakdown_and_profile() {
    let db = FoodDatabase::builtin();
    let avocado = db.find("Avocado").unwrap();

    let breakdown = macro_breakdown(avocado);
    let nutrients: Vec<Nutrient> = breakdown.iter().map(|n| n.nutrient).collect();
    assert_eq!(
        nutrients,
        [Nutrient::Carbs, Nutrient::Protein, Nutrient::Fat, Nutrient::Fiber]
    );
    assert!((breakdown[2].grams - 14.7).abs() < f64::EPSILON);

    let profile = nutrient_profile(avocado);
    assert_eq!(profile.len(), 5);
    assert_eq!(profile[4].nutrient, Nutrient::Sugar);
    assert!((profile[4].grams - 0.7).abs() < f64::EPSILON);
}

#[test]
fn test_daily_values_for_salmon() {
    let db = FoodDatabase::builtin();
    let salmon = db.find("Salmon").unwrap();

    let dv = daily_value_percentages(salmon, &DailyValuesConfig::default());

    assert!((dv.calories.percent - 10.0).abs() < f64::EPSILON);
    assert!((dv.protein.percent - 44.0).abs() < f64::EPSILON);
    assert!((dv.fat.percent - 20.0).abs() < f64::EPSILON);
    assert!(dv.carbs.percent.abs() < f64::EPSILON);
    assert!(dv.fiber.percent.abs() < f64::EPSILON);
}

#[test]
fn test_bar_fill_is_capped() {
    let db = FoodDatabase::builtin();
    let chicken = db.find("Chicken Breast").unwrap();
    let reference = DailyValuesConfig {
        protein_g: 20.0,
        ..DailyValuesConfig::default()
    };

    let dv = daily_value_percentages(chicken, &reference);

    assert!((dv.protein.percent - 155.0).abs() < f64::EPSILON);
    assert!((dv.protein.bar_fill - 100.0).abs() < f64::EPSILON);
}
