// ABOUTME: Command implementations for nutriwise-cli
// ABOUTME: One module per top-level subcommand group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calculators;
pub mod chat;
pub mod diet;
pub mod food;
pub mod meal_plan;
