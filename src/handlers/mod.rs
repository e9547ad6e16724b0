// ABOUTME: Command handlers that own each calculator panel's input and result state
// ABOUTME: Failures are returned to the caller and leave the panel ready to resubmit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Panel Handlers
//!
//! Each panel is independent and owns its own form and last result. A submit either
//! stores a new result or returns an [`AppError`](crate::errors::AppError) whose
//! [`notice`](crate::errors::AppError::notice) is what the user sees.

/// BMI calculator panel
pub mod bmi;
/// Daily calorie estimator panel
pub mod calories;
/// Meal planner panel
pub mod meal_planner;

pub use bmi::BmiPanel;
pub use calories::CaloriePanel;
pub use meal_planner::MealPlannerPanel;
