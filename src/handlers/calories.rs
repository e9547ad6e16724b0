// ABOUTME: Daily calorie estimator panel handler
// ABOUTME: Parses the raw form and stores the latest estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::forms::CalorieForm;
use nutriwise_intelligence::{estimate_daily_calories, CalorieEstimate, NutritionConfig};
use tracing::{info, warn};

/// Calorie estimator state
#[derive(Debug, Clone, Default)]
pub struct CaloriePanel {
    /// Raw field values, prefilled with sample inputs
    pub form: CalorieForm,
    estimate: Option<CalorieEstimate>,
}

impl CaloriePanel {
    /// Panel with the default sample inputs and no result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successful estimate
    #[must_use]
    pub const fn estimate(&self) -> Option<&CalorieEstimate> {
        self.estimate.as_ref()
    }

    /// Validate the form and compute a new estimate
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; the previous estimate is kept
    pub fn submit(&mut self, config: &NutritionConfig) -> AppResult<&CalorieEstimate> {
        let outcome = self
            .form
            .parse()
            .map_err(AppError::from)
            .and_then(|input| estimate_daily_calories(&input, config));

        match outcome {
            Ok(estimate) => {
                info!(calories = estimate.calories, "Daily calories estimated");
                Ok(self.estimate.insert(estimate))
            }
            Err(e) => {
                warn!(code = ?e.code, field = ?e.context.field, "Calorie submission rejected: {e}");
                Err(e)
            }
        }
    }
}
