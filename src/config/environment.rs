// ABOUTME: Environment configuration management for the NutriWise application
// ABOUTME: Reads deployment mode and chat reply delay, and loads the nutrition calculator config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration. There are no config files; every setting has a
//! default and can be overridden with an environment variable.

use crate::errors::{AppError, AppResult};
use nutriwise_core::constants::chat;
use nutriwise_intelligence::config::NutritionConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::info;

/// Environment variable for the chat reply delay in milliseconds
pub const CHAT_REPLY_DELAY_ENV: &str = "NUTRIWISE_CHAT_REPLY_DELAY_MS";
/// Environment variable for the deployment mode
pub const ENVIRONMENT_ENV: &str = "NUTRIWISE_ENVIRONMENT";

/// Deployment mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment (default)
    #[default]
    Development,
    /// Production environment
    Production,
    /// Testing environment for automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Chat widget settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Delay before a canned reply is appended
    pub reply_delay: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(chat::DEFAULT_REPLY_DELAY_MS),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment mode
    pub environment: Environment,
    /// Chat widget settings
    pub chat: ChatConfig,
    /// Calculator coefficients, thresholds and reference intakes
    pub nutrition: NutritionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a variable holds an unparsable value or the nutrition
    /// config fails validation
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let environment =
            Environment::from_str_or_default(&env_var_or(ENVIRONMENT_ENV, "development"));

        let delay_ms = env_var_or(CHAT_REPLY_DELAY_ENV, &chat::DEFAULT_REPLY_DELAY_MS.to_string());
        let delay_ms: u64 = delay_ms.trim().parse().map_err(|_| {
            AppError::config(format!(
                "{CHAT_REPLY_DELAY_ENV} must be a whole number of milliseconds, got '{delay_ms}'"
            ))
        })?;

        let nutrition = NutritionConfig::load()?;

        Ok(Self {
            environment,
            chat: ChatConfig {
                reply_delay: Duration::from_millis(delay_ms),
            },
            nutrition,
        })
    }

    /// Human-readable summary of the effective configuration
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "NutriWise Configuration:\n\
             - Environment: {}\n\
             - Chat Reply Delay: {} ms\n\
             - BMI Bands: <{} / <{} / <{} / above\n\
             - Calorie Inputs Must Be Positive: {}\n\
             - Daily Reference Energy: {} kcal",
            self.environment,
            self.chat.reply_delay.as_millis(),
            self.nutrition.bmi.underweight_below,
            self.nutrition.bmi.overweight_from,
            self.nutrition.bmi.obesity_from,
            self.nutrition.calorie_estimator.require_positive_inputs,
            self.nutrition.daily_values.calories,
        )
    }

    /// Log the effective configuration
    pub fn log_summary(&self) {
        info!("{}", self.summary());
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
