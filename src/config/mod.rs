// ABOUTME: Configuration module for the NutriWise application layer
// ABOUTME: Environment-only settings plus re-exports of the nutrition calculator config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable driven application settings
pub mod environment;

pub use environment::{AppConfig, ChatConfig, Environment};
pub use nutriwise_intelligence::config::{ConfigError, NutritionConfig};
