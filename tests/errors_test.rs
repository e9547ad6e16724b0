// ABOUTME: Tests for error codes, form error mapping and user-visible notices
// ABOUTME: Verifies each failure kind renders the notice copy the panels show
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriwise::constants::{forms, notices, resources};
use nutriwise::errors::{AppError, ErrorCode, ErrorResponse, FormError};
use nutriwise::models::NoticeSeverity;

// ============================================================================
// FORM ERROR MAPPING
// ============================================================================

#[test]
fn test_missing_field_maps_to_missing_required_field() {
    let error = AppError::from(FormError::missing_field(forms::BMI, "weight"));

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.context.resource.as_deref(), Some(forms::BMI));
    assert_eq!(error.context.field.as_deref(), Some("weight"));
    assert_eq!(error.http_status(), 400);
}

#[test]
fn test_invalid_value_maps_to_invalid_value() {
    let form_error = FormError::invalid_value(forms::CALORIES, "age", "'abc' is not a number");
    assert_eq!(
        form_error.to_string(),
        "Invalid value for 'age' in calories form: 'abc' is not a number"
    );

    let error = AppError::from(form_error);

    assert_eq!(error.code, ErrorCode::InvalidValue);
    assert_eq!(error.context.field.as_deref(), Some("age"));
}

#[test]
fn test_unknown_option_maps_to_invalid_input() {
    let error = AppError::from(FormError::unknown_option(forms::BMI, "sex", "robot"));

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("robot"));
}

// ============================================================================
// NOTICES
// ============================================================================

#[test]
fn test_validation_notices_use_form_copy() {
    let missing = AppError::missing_field("height").notice();
    assert_eq!(missing.title, notices::MISSING_FIELD_TITLE);
    assert_eq!(missing.description, notices::MISSING_FIELD_BODY);

    let invalid = AppError::invalid_value("height", "must be a positive number").notice();
    assert_eq!(invalid.title, notices::INVALID_VALUE_TITLE);
    assert_eq!(invalid.description, notices::INVALID_VALUE_BODY);
    assert_eq!(invalid.severity, NoticeSeverity::Destructive);
}

#[test]
fn test_only_meal_plan_not_found_is_plan_unavailable() {
    let plan = AppError::not_found(resources::MEAL_PLAN).notice();
    assert_eq!(plan.title, notices::PLAN_UNAVAILABLE_TITLE);
    assert_eq!(plan.description, notices::PLAN_UNAVAILABLE_BODY);

    let food = AppError::not_found(resources::FOOD).notice();
    assert_eq!(food.title, ErrorCode::ResourceNotFound.description());
    assert_eq!(food.description, "Food not found");
}

#[test]
fn test_internal_error_notice_carries_message() {
    let notice = AppError::internal("reply task failed").notice();

    assert_eq!(notice.title, ErrorCode::InternalError.description());
    assert_eq!(notice.description, "reply task failed");
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn test_error_response_shape() {
    let response = ErrorResponse::from(AppError::missing_field("age"));

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert_eq!(json["error"]["field"], "age");
    assert_eq!(json["error"]["message"], "'age' is required");
}

#[test]
fn test_serde_json_error_converts() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    let error = AppError::from(parse_error);

    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(std::error::Error::source(&error).is_some());
}
