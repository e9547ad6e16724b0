// ABOUTME: NutriWise CLI - command-line front end for the nutrition guidance engine
// ABOUTME: BMI, daily calories, meal plans, food lookup, diet guides and the canned-response chat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # BMI with activity-based advice
//! nutriwise-cli bmi --height 180 --weight 95 --age 40 --activity very-active
//!
//! # Daily calories (defaults: 30 year old female, 70 kg, 170 cm, moderate)
//! nutriwise-cli calories --sex male
//!
//! # Meal plan for a goal and diet
//! nutriwise-cli meal-plan --goal weight-loss --diet vegan
//!
//! # Food search and detail
//! nutriwise-cli food search fruit
//! nutriwise-cli food show salmon
//!
//! # Recommended foods and diet guides
//! nutriwise-cli food recommend --category fruits
//! nutriwise-cli diet guide gluten-free
//!
//! # Chat (scripted or interactive)
//! nutriwise-cli chat -m "how much protein do I need?"
//! nutriwise-cli chat
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutriwise::config::AppConfig;
use nutriwise::constants::service_names;
use nutriwise::errors::AppResult;
use nutriwise::forms::{BmiForm, CalorieForm};
use nutriwise::logging::LoggingConfig;
use std::process::ExitCode;
use tracing::{debug, error};

use helpers::display;

#[derive(Parser)]
#[command(
    name = "nutriwise-cli",
    about = "NutriWise nutrition guidance CLI",
    long_about = "Calculate BMI and daily calorie needs, browse meal plans, look up foods, and chat with the NutriWise assistant."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate BMI and get diet recommendations
    Bmi {
        /// Height in centimeters
        #[arg(long, default_value = "")]
        height: String,

        /// Weight in kilograms
        #[arg(long, default_value = "")]
        weight: String,

        /// Age in years
        #[arg(long, default_value = "")]
        age: String,

        /// male or female
        #[arg(long, default_value = "male")]
        sex: String,

        /// sedentary, lightly-active, moderately-active, very-active or extra-active
        #[arg(long, default_value = "sedentary")]
        activity: String,
    },

    /// Estimate daily calorie needs (Mifflin-St Jeor)
    Calories {
        /// Age in years
        #[arg(long, default_value = "30")]
        age: String,

        /// male or female
        #[arg(long, default_value = "female")]
        sex: String,

        /// Weight in kilograms
        #[arg(long, default_value = "70")]
        weight: String,

        /// Height in centimeters
        #[arg(long, default_value = "170")]
        height: String,

        /// sedentary, light, moderate, active or very-active
        #[arg(long, default_value = "moderate")]
        activity: String,
    },

    /// Show a three-day meal plan
    MealPlan {
        /// weight-loss, heart-health or diabetes
        #[arg(long, default_value = "weight-loss")]
        goal: String,

        /// vegetarian, vegan or non-vegetarian
        #[arg(long, default_value = "vegetarian")]
        diet: String,
    },

    /// Food database commands
    Food {
        #[command(subcommand)]
        action: FoodCommand,
    },

    /// Dietary preference and restriction guides
    Diet {
        #[command(subcommand)]
        action: DietCommand,
    },

    /// Chat with the nutrition assistant
    Chat {
        /// Message to send; repeat for several. Omit for an interactive session
        #[arg(long = "message", short = 'm')]
        messages: Vec<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FoodCommand {
    /// Search foods by name or category
    Search {
        /// Text to look for
        query: String,
    },

    /// Show nutrition details for one food
    Show {
        /// Exact food name (case-insensitive)
        name: String,
    },

    /// List recommended nutrient-rich foods
    Recommend {
        /// all, fruits, vegetables, proteins, grains or dairy
        #[arg(long, default_value = "all")]
        category: String,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum DietCommand {
    /// List every preference and restriction guide
    List,

    /// Show one guide, e.g. vegan or gluten-free
    Guide {
        /// Guide id or name (case-insensitive)
        name: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = LoggingConfig::from_env().with_level(level).init() {
        eprintln!("Failed to initialize logging: {e}");
    }
    debug!("{} starting", service_names::NUTRIWISE_CLI);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            display::print_notice(&e.notice());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = AppConfig::from_env()?;
    debug!("{}", config.summary());

    let json = cli.json;
    match cli.command {
        Command::Bmi {
            height,
            weight,
            age,
            sex,
            activity,
        } => {
            let form = BmiForm {
                height,
                weight,
                age,
                sex,
                activity_level: activity,
            };
            commands::calculators::bmi(&config, form, json)
        }
        Command::Calories {
            age,
            sex,
            weight,
            height,
            activity,
        } => {
            let form = CalorieForm {
                age,
                sex,
                weight,
                height,
                activity_level: activity,
            };
            commands::calculators::calories(&config, form, json)
        }
        Command::MealPlan { goal, diet } => commands::meal_plan::generate(&goal, &diet, json),
        Command::Food { action } => match action {
            FoodCommand::Search { query } => commands::food::search(&query, json),
            FoodCommand::Show { name } => commands::food::show(&config, &name, json),
            FoodCommand::Recommend { category } => commands::food::recommend(&category, json),
        },
        Command::Diet { action } => match action {
            DietCommand::List => commands::diet::list(json),
            DietCommand::Guide { name } => commands::diet::guide(&name, json),
        },
        Command::Chat { messages } => {
            if messages.is_empty() {
                commands::chat::interactive(&config).await
            } else {
                commands::chat::scripted(&config, &messages, json).await
            }
        }
    }
}
