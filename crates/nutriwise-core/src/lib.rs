// ABOUTME: Core types and constants for the NutriWise nutrition guidance engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriWise` Core
//!
//! Foundation crate providing shared types and constants for the `NutriWise`
//! nutrition guidance engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and form validation errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Domain models (anthropometric enums, foods, meal plans, chat messages, notices)

/// Unified error handling system with standard error codes and user-facing notices
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (activity tiers, foods, meal plans, chat messages)
pub mod models;
