// ABOUTME: Re-exports the unified error system from nutriwise-core
// ABOUTME: Application code imports errors from here rather than reaching into the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use nutriwise_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails, FormError,
};
