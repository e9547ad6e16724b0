// ABOUTME: Boundary parsing of raw calculator form fields into typed calculator inputs
// ABOUTME: Empty, non-numeric and unknown-option fields become FormError values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form values arrive as the strings the input widgets hold. Parsing stops at the
//! first failing field so a submit produces at most one notice.

use crate::errors::FormError;
use nutriwise_core::constants::forms;
use nutriwise_core::models::{ActivityLevel, CalorieActivityLevel, Sex};
use nutriwise_intelligence::{BmiInput, CalorieInput};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw BMI calculator fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmiForm {
    /// Height in centimeters
    pub height: String,
    /// Weight in kilograms
    pub weight: String,
    /// Age in years
    pub age: String,
    /// "male" or "female"
    pub sex: String,
    /// One of the five BMI activity tiers
    pub activity_level: String,
}

impl Default for BmiForm {
    fn default() -> Self {
        Self {
            height: String::new(),
            weight: String::new(),
            age: String::new(),
            sex: Sex::default().as_str().to_owned(),
            activity_level: ActivityLevel::default().as_str().to_owned(),
        }
    }
}

impl BmiForm {
    /// Parse into a typed input
    ///
    /// # Errors
    ///
    /// `MissingField` for the first empty number (height, weight, age in that order), then
    /// `InvalidValue` for the first unparsable number, then `UnknownOption` for sex or
    /// activity level
    pub fn parse(&self) -> Result<BmiInput, FormError> {
        let form = forms::BMI;
        let fields = [
            ("height", self.height.as_str()),
            ("weight", self.weight.as_str()),
            ("age", self.age.as_str()),
        ];
        require_all(form, &fields)?;

        Ok(BmiInput {
            height_cm: parse_number(form, "height", &self.height)?,
            weight_kg: parse_number(form, "weight", &self.weight)?,
            age_years: parse_number(form, "age", &self.age)?,
            sex: parse_option(form, "sex", &self.sex)?,
            activity_level: parse_option(form, "activity_level", &self.activity_level)?,
        })
    }
}

/// Raw daily calorie estimator fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieForm {
    /// Age in years
    pub age: String,
    /// "male" or "female"
    pub sex: String,
    /// Weight in kilograms
    pub weight: String,
    /// Height in centimeters
    pub height: String,
    /// One of the five calorie activity tiers
    pub activity_level: String,
}

impl Default for CalorieForm {
    fn default() -> Self {
        Self {
            age: "30".to_owned(),
            sex: Sex::Female.as_str().to_owned(),
            weight: "70".to_owned(),
            height: "170".to_owned(),
            activity_level: CalorieActivityLevel::Moderate.as_str().to_owned(),
        }
    }
}

impl CalorieForm {
    /// Parse into a typed input
    ///
    /// # Errors
    ///
    /// Same ordering as [`BmiForm::parse`] over age, weight, height
    pub fn parse(&self) -> Result<CalorieInput, FormError> {
        let form = forms::CALORIES;
        let fields = [
            ("age", self.age.as_str()),
            ("weight", self.weight.as_str()),
            ("height", self.height.as_str()),
        ];
        require_all(form, &fields)?;

        let age_years = parse_number(form, "age", &self.age)?;
        let weight_kg = parse_number(form, "weight", &self.weight)?;
        let height_cm = parse_number(form, "height", &self.height)?;

        Ok(CalorieInput {
            age_years,
            sex: parse_option(form, "sex", &self.sex)?,
            weight_kg,
            height_cm,
            activity_level: parse_option(form, "activity_level", &self.activity_level)?,
        })
    }
}

fn require_all(form: &'static str, fields: &[(&'static str, &str)]) -> Result<(), FormError> {
    fields
        .iter()
        .find(|(_, raw)| raw.trim().is_empty())
        .map_or(Ok(()), |&(field, _)| {
            Err(FormError::missing_field(form, field))
        })
}

fn parse_number(form: &'static str, field: &'static str, raw: &str) -> Result<f64, FormError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormError::invalid_value(
            form,
            field,
            format!("'{}' is not a number", raw.trim()),
        )),
    }
}

fn parse_option<T: FromStr>(
    form: &'static str,
    field: &'static str,
    raw: &str,
) -> Result<T, FormError> {
    raw.parse()
        .map_err(|_| FormError::unknown_option(form, field, raw.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_reported_before_invalid() {
        let form = BmiForm {
            height: "abc".to_owned(),
            weight: String::new(),
            age: "30".to_owned(),
            ..BmiForm::default()
        };

        assert_eq!(
            form.parse(),
            Err(FormError::missing_field(forms::BMI, "weight"))
        );
    }

    #[test]
    fn test_infinity_is_not_a_number() {
        let form = CalorieForm {
            weight: "inf".to_owned(),
            ..CalorieForm::default()
        };

        assert!(matches!(
            form.parse(),
            Err(FormError::InvalidValue { field: "weight", .. })
        ));
    }

    #[test]
    fn test_calorie_defaults_parse() {
        let input = CalorieForm::default().parse().unwrap();

        assert_eq!(input.sex, Sex::Female);
        assert_eq!(input.activity_level, CalorieActivityLevel::Moderate);
        assert!((input.age_years - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_activity_option() {
        let form = BmiForm {
            height: "170".to_owned(),
            weight: "70".to_owned(),
            age: "30".to_owned(),
            activity_level: "moderate".to_owned(),
            ..BmiForm::default()
        };

        assert!(matches!(
            form.parse(),
            Err(FormError::UnknownOption {
                field: "activity_level",
                ..
            })
        ));
    }
}
