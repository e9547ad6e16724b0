// ABOUTME: Nutrition configuration for the BMI and calorie calculators and food analysis
// ABOUTME: Mifflin-St Jeor coefficients, activity factors, BMI bands and daily reference intakes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration Module
//!
//! All values can be overridden via environment variables with the `NUTRITION_` prefix.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - BMI bands: WHO adult classification (underweight < 18.5, overweight >= 25, obese >= 30)
//! - Daily values: FDA reference amounts for a 2,000 kcal diet

/// Configuration error type
pub mod error;

pub use error::ConfigError;

use nutriwise_core::models::CalorieActivityLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Largest supported number of decimal places for the displayed BMI
pub const MAX_DISPLAY_PRECISION: u32 = 6;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

// ============================================================================
// Main Configuration
// ============================================================================

/// Nutrition configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) equation coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for the daily calorie estimate
    pub activity_factors: ActivityFactorsConfig,
    /// BMI category thresholds and display precision
    pub bmi: BmiConfig,
    /// Calorie estimator input policy
    pub calorie_estimator: CalorieEstimatorConfig,
    /// Reference daily intakes for percent-of-daily-value figures
    pub daily_values: DailyValuesConfig,
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bmi = &self.bmi;
        if ![bmi.underweight_below, bmi.overweight_from, bmi.obesity_from]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange("bmi thresholds must be finite"));
        }
        if bmi.underweight_below <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "bmi underweight_below must be > 0",
            ));
        }
        if bmi.underweight_below >= bmi.overweight_from || bmi.overweight_from >= bmi.obesity_from
        {
            return Err(ConfigError::InvalidRange(
                "bmi thresholds must be strictly ascending",
            ));
        }
        if bmi.display_precision > MAX_DISPLAY_PRECISION {
            return Err(ConfigError::ValueOutOfRange(
                "bmi display_precision must be at most 6",
            ));
        }

        let bmr = &self.bmr;
        if ![
            bmr.msj_weight_coef,
            bmr.msj_height_coef,
            bmr.msj_age_coef,
            bmr.msj_male_constant,
            bmr.msj_female_constant,
        ]
        .iter()
        .all(|value| value.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange("bmr coefficients must be finite"));
        }

        let factors = self.activity_factors.as_array();
        if !factors.iter().all(|factor| factor.is_finite()) {
            return Err(ConfigError::ValueOutOfRange("activity factors must be finite"));
        }
        if factors[0] <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("activity factors must be > 0"));
        }
        if factors.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must be strictly ascending",
            ));
        }

        let dv = &self.daily_values;
        if ![dv.calories, dv.carbs_g, dv.protein_g, dv.fat_g, dv.fiber_g]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "daily values must be finite and > 0",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(error @ env::VarError::NotUnicode(_)) => Err(ConfigError::EnvVar(error)),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // BMI bands
        Self::apply_env_var(
            "NUTRITION_BMI_UNDERWEIGHT_BELOW",
            &mut self.bmi.underweight_below,
        )?;
        Self::apply_env_var(
            "NUTRITION_BMI_OVERWEIGHT_FROM",
            &mut self.bmi.overweight_from,
        )?;
        Self::apply_env_var("NUTRITION_BMI_OBESITY_FROM", &mut self.bmi.obesity_from)?;
        Self::apply_env_var(
            "NUTRITION_BMI_DISPLAY_PRECISION",
            &mut self.bmi.display_precision,
        )?;

        // Activity factors
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_LIGHTLY_ACTIVE",
            &mut self.activity_factors.lightly_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_MODERATELY_ACTIVE",
            &mut self.activity_factors.moderately_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_EXTRA_ACTIVE",
            &mut self.activity_factors.extra_active,
        )?;

        // Calorie estimator
        Self::apply_env_var(
            "NUTRITION_REQUIRE_POSITIVE_INPUTS",
            &mut self.calorie_estimator.require_positive_inputs,
        )?;

        // Daily values
        Self::apply_env_var("NUTRITION_DV_CALORIES", &mut self.daily_values.calories)?;
        Self::apply_env_var("NUTRITION_DV_CARBS_G", &mut self.daily_values.carbs_g)?;
        Self::apply_env_var("NUTRITION_DV_PROTEIN_G", &mut self.daily_values.protein_g)?;
        Self::apply_env_var("NUTRITION_DV_FAT_G", &mut self.daily_values.fat_g)?;
        Self::apply_env_var("NUTRITION_DV_FIBER_G", &mut self.daily_values.fiber_g)?;

        Ok(self)
    }
}

// ============================================================================
// Sub-Configurations
// ============================================================================

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for the daily calorie estimate
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (intense daily exercise): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Factors in ascending tier order
    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [
            self.sedentary,
            self.lightly_active,
            self.moderately_active,
            self.very_active,
            self.extra_active,
        ]
    }

    /// Factor for a calorie estimator tier; tiers map onto the table in order
    #[must_use]
    pub const fn factor_for(&self, level: CalorieActivityLevel) -> f64 {
        match level {
            CalorieActivityLevel::Sedentary => self.sedentary,
            CalorieActivityLevel::Light => self.lightly_active,
            CalorieActivityLevel::Moderate => self.moderately_active,
            CalorieActivityLevel::Active => self.very_active,
            CalorieActivityLevel::VeryActive => self.extra_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

/// BMI classification bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiConfig {
    /// Values below this are Underweight
    pub underweight_below: f64,
    /// Values from this (inclusive) are Overweight
    pub overweight_from: f64,
    /// Values from this (inclusive) are Obesity
    pub obesity_from: f64,
    /// Decimal places of the displayed BMI
    pub display_precision: u32,
}

impl Default for BmiConfig {
    fn default() -> Self {
        Self {
            underweight_below: 18.5,
            overweight_from: 25.0,
            obesity_from: 30.0,
            display_precision: 1,
        }
    }
}

/// Calorie estimator input policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieEstimatorConfig {
    /// Reject zero or negative age, weight and height with `INVALID_VALUE`.
    /// When false, any finite number is fed to the formula unchanged.
    pub require_positive_inputs: bool,
}

impl Default for CalorieEstimatorConfig {
    fn default() -> Self {
        Self {
            require_positive_inputs: true,
        }
    }
}

/// Reference daily intakes for a 2,000 kcal diet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyValuesConfig {
    /// Energy (kcal)
    pub calories: f64,
    /// Total carbohydrate (g)
    pub carbs_g: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Total fat (g)
    pub fat_g: f64,
    /// Dietary fiber (g)
    pub fiber_g: f64,
}

impl Default for DailyValuesConfig {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            carbs_g: 300.0,
            protein_g: 50.0,
            fat_g: 65.0,
            fiber_g: 25.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_bmi_thresholds_rejected() {
        let mut config = NutritionConfig::default();
        config.bmi.overweight_from = 31.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_calorie_tiers_map_in_order() {
        let factors = ActivityFactorsConfig::default();
        let mapped: Vec<f64> = CalorieActivityLevel::ALL
            .into_iter()
            .map(|level| factors.factor_for(level))
            .collect();

        assert_eq!(mapped, factors.as_array().to_vec());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let mut config = NutritionConfig::default();
        config.bmi.obesity_from = f64::NAN;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_infinite_bmr_coefficient_rejected() {
        let mut config = NutritionConfig::default();
        config.bmr.msj_height_coef = f64::INFINITY;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_daily_value_rejected() {
        let mut config = NutritionConfig::default();
        config.daily_values.fiber_g = 0.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
