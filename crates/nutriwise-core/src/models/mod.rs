// ABOUTME: Core data models and types for the NutriWise engine
// ABOUTME: Re-exports anthropometric enums, food records, meal plans, chat messages, and notices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain, serializable data structures shared by the calculation engine and the
//! application layer. Selector enums parse from (and display as) the kebab-case
//! option values used by the input widgets, e.g. `"lightly-active"`.
//!
//! ## Core Models
//!
//! - `Sex`, `ActivityLevel`, `CalorieActivityLevel`, `BmiCategory`: calculator inputs/outputs
//! - `HealthGoal`, `DietaryPreference`, `MealPlan`: meal planner lookup keys and records
//! - `FoodRecord`, `FoodCategory`: nutrition database entries
//! - `RecommendedFood`, `DietGuide`: recommended-foods catalog and diet guides
//! - `ChatMessage`, `ChatRole`: chat transcript entries
//! - `Notice`: user-visible notification produced by command handlers

mod anthropometrics;
mod chat;
mod food;
mod guidance;
mod meal_plan;
mod notice;

pub use anthropometrics::{ActivityLevel, BmiCategory, CalorieActivityLevel, Sex};
pub use chat::{ChatMessage, ChatRole};
pub use food::{FoodCategory, FoodRecord};
pub use guidance::{
    CategoryFilter, DietGuide, DietGuideKind, RecommendationCategory, RecommendedFood,
};
pub use meal_plan::{DayMeals, DietaryPreference, HealthGoal, MealPlan};
pub use notice::{Notice, NoticeSeverity};
