// ABOUTME: BMI panel handler with submit and reset commands
// ABOUTME: Parses the raw form, assesses it and keeps the last successful assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::forms::BmiForm;
use nutriwise_intelligence::{assess_bmi, BmiAssessment, NutritionConfig};
use tracing::{info, warn};

/// BMI calculator state
#[derive(Debug, Clone, Default)]
pub struct BmiPanel {
    /// Raw field values
    pub form: BmiForm,
    assessment: Option<BmiAssessment>,
}

impl BmiPanel {
    /// Panel with empty fields and no result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successful assessment
    #[must_use]
    pub const fn assessment(&self) -> Option<&BmiAssessment> {
        self.assessment.as_ref()
    }

    /// Validate the form and compute a new assessment
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; the previous assessment is kept
    pub fn submit(&mut self, config: &NutritionConfig) -> AppResult<&BmiAssessment> {
        let outcome = self
            .form
            .parse()
            .map_err(AppError::from)
            .and_then(|input| assess_bmi(&input, &config.bmi));

        match outcome {
            Ok(assessment) => {
                info!(
                    bmi = assessment.bmi,
                    category = %assessment.category,
                    "BMI calculated"
                );
                Ok(self.assessment.insert(assessment))
            }
            Err(e) => {
                warn!(code = ?e.code, field = ?e.context.field, "BMI submission rejected: {e}");
                Err(e)
            }
        }
    }

    /// Clear every field and the result
    pub fn reset(&mut self) {
        self.form = BmiForm::default();
        self.assessment = None;
    }
}
