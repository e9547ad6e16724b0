// ABOUTME: Main library entry point for the NutriWise nutrition guidance engine
// ABOUTME: Wires forms, panel handlers, meal plans, food search and chat over the core crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriWise`
//!
//! Application layer of a nutrition guidance product:
//!
//! - **BMI calculator**: classifies a BMI into four bands and assembles advice
//! - **Calorie estimator**: Mifflin-St Jeor BMR scaled by an activity multiplier
//! - **Meal planner**: static plans keyed by health goal and dietary preference
//! - **Food search**: substring search over a small nutrition table
//! - **Recommendations**: featured foods by category and dietary preference/restriction guides
//! - **Chat**: keyword-matched canned replies delivered after a short delay
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriwise::config::NutritionConfig;
//! use nutriwise::errors::AppResult;
//! use nutriwise::handlers::BmiPanel;
//!
//! fn main() -> AppResult<()> {
//!     let mut panel = BmiPanel::new();
//!     panel.form.height = "170".into();
//!     panel.form.weight = "70".into();
//!     panel.form.age = "30".into();
//!
//!     let assessment = panel.submit(NutritionConfig::global())?;
//!     println!("BMI {} ({})", assessment.bmi, assessment.category);
//!     Ok(())
//! }
//! ```

/// Canned-response chat assistant
pub mod chat;

/// Environment configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Built-in food table and search
pub mod food_database;

/// Raw form parsing
pub mod forms;

/// Panel command handlers
pub mod handlers;

/// Structured logging setup
pub mod logging;

/// Meal plan catalog and lookup
pub mod meal_plans;

/// Recommended foods and diet guides
pub mod recommendations;

pub use nutriwise_core::{constants, models};
pub use nutriwise_intelligence::{bmi_calculator, calorie_calculator, food_analysis};
