// ABOUTME: Form-specific validation errors raised while parsing raw widget input
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Form Error Types
//!
//! Provides structured error types for boundary parsing of calculator forms:
//! - `FormError` - Which form and field failed and why
//! - Conversion to `AppError` with the matching validation code

use super::{AppError, ErrorCode};
use std::error::Error;
use std::fmt;

/// Errors raised while turning raw form strings into typed inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Required field is empty or whitespace
    MissingField {
        /// Form identifier (e.g. "bmi")
        form: &'static str,
        /// Name of the empty field
        field: &'static str,
    },
    /// Numeric field is not a number or not strictly positive
    InvalidValue {
        /// Form identifier
        form: &'static str,
        /// Name of the invalid field
        field: &'static str,
        /// Reason the value was rejected
        reason: String,
    },
    /// Selector value is not one of the allowed options
    UnknownOption {
        /// Form identifier
        form: &'static str,
        /// Name of the selector
        field: &'static str,
        /// Value that was received
        value: String,
    },
}

impl FormError {
    /// Create a "missing field" error
    #[must_use]
    pub const fn missing_field(form: &'static str, field: &'static str) -> Self {
        Self::MissingField { form, field }
    }

    /// Create an "invalid value" error
    #[must_use]
    pub fn invalid_value(form: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            form,
            field,
            reason: reason.into(),
        }
    }

    /// Create an "unknown option" error
    #[must_use]
    pub fn unknown_option(form: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownOption {
            form,
            field,
            value: value.into(),
        }
    }

    /// Get the form associated with this error
    #[must_use]
    pub const fn form(&self) -> &'static str {
        match self {
            Self::MissingField { form, .. }
            | Self::InvalidValue { form, .. }
            | Self::UnknownOption { form, .. } => form,
        }
    }

    /// Get the field associated with this error
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. }
            | Self::InvalidValue { field, .. }
            | Self::UnknownOption { field, .. } => field,
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { form, field } => {
                write!(f, "Missing required field '{field}' in {form} form")
            }
            Self::InvalidValue {
                form,
                field,
                reason,
            } => {
                write!(f, "Invalid value for '{field}' in {form} form: {reason}")
            }
            Self::UnknownOption { form, field, value } => {
                write!(f, "Unknown option '{value}' for '{field}' in {form} form")
            }
        }
    }
}

impl Error for FormError {}

impl From<FormError> for AppError {
    fn from(error: FormError) -> Self {
        let code = match error {
            FormError::MissingField { .. } => ErrorCode::MissingRequiredField,
            FormError::InvalidValue { .. } => ErrorCode::InvalidValue,
            FormError::UnknownOption { .. } => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string())
            .with_resource(error.form())
            .with_field(error.field())
    }
}
