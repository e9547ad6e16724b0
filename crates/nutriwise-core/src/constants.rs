// ABOUTME: Application-wide constants for the NutriWise engine
// ABOUTME: Service names, notice copy, and default form values shared across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name of the library/service in log output
    pub const NUTRIWISE: &str = "nutriwise";
    /// Name of the command-line binary
    pub const NUTRIWISE_CLI: &str = "nutriwise-cli";
}

/// Copy shown in user-visible notices
pub mod notices {
    /// Title for a submission with an empty required field
    pub const MISSING_FIELD_TITLE: &str = "Missing Information";
    /// Body for a submission with an empty required field
    pub const MISSING_FIELD_BODY: &str = "Please fill in all required fields.";
    /// Title for a submission with a non-positive or unparsable number
    pub const INVALID_VALUE_TITLE: &str = "Invalid Values";
    /// Body for a submission with a non-positive or unparsable number
    pub const INVALID_VALUE_BODY: &str = "Please enter positive values for height, weight, and age.";
    /// Title when a goal/preference combination has no meal plan
    pub const PLAN_UNAVAILABLE_TITLE: &str = "Plan Unavailable";
    /// Body when a goal/preference combination has no meal plan
    pub const PLAN_UNAVAILABLE_BODY: &str =
        "This specific combination is not available yet. Please try a different selection.";
    /// Title when a meal plan was found
    pub const PLAN_GENERATED_TITLE: &str = "Meal Plan Generated";
}

/// Resource names used in `RESOURCE_NOT_FOUND` errors
pub mod resources {
    /// Meal plan lookup
    pub const MEAL_PLAN: &str = "Meal plan";
    /// Food database lookup
    pub const FOOD: &str = "Food";
    /// Diet preference or restriction guide lookup
    pub const DIET_GUIDE: &str = "Diet guide";
}

/// Form identifiers attached to validation errors
pub mod forms {
    /// BMI calculator form
    pub const BMI: &str = "bmi";
    /// Daily calorie estimator form
    pub const CALORIES: &str = "calories";
}

/// Chat widget defaults
pub mod chat {
    /// Artificial delay before a canned reply is appended (milliseconds)
    pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
    /// Assistant greeting that seeds every transcript
    pub const GREETING: &str = "Hi there! I'm your NutriWise assistant. How can I help you with your nutrition or diet questions today?";
}
