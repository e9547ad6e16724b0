// ABOUTME: Output formatting helpers for nutriwise-cli
// ABOUTME: Human-readable renderings of results and notices, plus a JSON printer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriwise::bmi_calculator::BmiAssessment;
use nutriwise::calorie_calculator::CalorieEstimate;
use nutriwise::errors::AppResult;
use nutriwise::food_analysis::{DailyValuePercentages, DailyValueShare, NutrientAmount};
use nutriwise::food_database::FoodSearchOutcome;
use nutriwise::models::{
    CategoryFilter, ChatMessage, ChatRole, DietGuide, DietGuideKind, FoodRecord, MealPlan, Notice,
    NoticeSeverity, RecommendedFood,
};
use serde::Serialize;

/// Print any result as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a user-visible notice; failures go to stderr
pub fn print_notice(notice: &Notice) {
    match notice.severity {
        NoticeSeverity::Info => println!("{}: {}", notice.title, notice.description),
        NoticeSeverity::Destructive => eprintln!("{}: {}", notice.title, notice.description),
    }
}

/// Display a BMI assessment
pub fn print_bmi(assessment: &BmiAssessment) {
    println!("\nYour BMI: {:.1}", assessment.bmi);
    println!("Category: {}", assessment.category);
    println!("{}", "=".repeat(50));
    println!("Recommendations:");
    for line in &assessment.recommendations {
        println!("  • {line}");
    }
}

/// Display a daily calorie estimate
pub fn print_calories(estimate: &CalorieEstimate) {
    println!("\nDaily Calorie Needs: {} calories", estimate.calories);
    println!("   BMR: {:.1} kcal", estimate.bmr);
    println!("   Activity multiplier: {}", estimate.activity_multiplier);
}

/// Display a meal plan day by day
pub fn print_meal_plan(plan: &MealPlan) {
    println!("\n{}", plan.title);
    println!("{}", plan.description);
    println!("{}", "=".repeat(60));
    for day in &plan.meals {
        println!("{}:", day.day);
        println!("   Breakfast: {}", day.breakfast);
        println!("   Lunch:     {}", day.lunch);
        println!("   Dinner:    {}", day.dinner);
        println!("   Snack:     {}", day.snack);
    }
    println!("\nTips:");
    for tip in &plan.tips {
        println!("  • {tip}");
    }
}

/// Display search hits or the inline no-results message
pub fn print_search(outcome: &FoodSearchOutcome<'_>) {
    match outcome {
        FoodSearchOutcome::Idle => println!("Enter a food name or category to search."),
        FoodSearchOutcome::Matches { foods } => {
            for food in foods {
                println!(
                    "{:<16} {:>5} kcal   {} · {}",
                    food.name, food.calories, food.category, food.serving_size
                );
            }
        }
        FoodSearchOutcome::NoResults { .. } => {
            if let Some(message) = outcome.no_results_message() {
                println!("{message}");
            }
        }
    }
}

/// Display one food with its chart data and daily value shares
pub fn print_food(
    food: &FoodRecord,
    breakdown: &[NutrientAmount],
    profile: &[NutrientAmount],
    daily: &DailyValuePercentages,
) {
    println!("\n{}  ({} kcal)", food.name, food.calories);
    println!("{} · {}", food.category, food.serving_size);
    println!("{}", "=".repeat(50));

    println!("Macronutrients:");
    for amount in breakdown {
        println!("   {:<8} {}g", amount.nutrient.label(), amount.grams);
    }

    println!("Nutrient profile:");
    for amount in profile {
        println!("   {:<8} {}g", amount.nutrient.label(), amount.grams);
    }

    println!("Daily values:");
    print_share("Calories", daily.calories);
    print_share("Carbs", daily.carbs);
    print_share("Protein", daily.protein);
    print_share("Fat", daily.fat);
    print_share("Fiber", daily.fiber);
}

fn print_share(label: &str, share: DailyValueShare) {
    let filled = (share.bar_fill / 5.0).round() as usize;
    println!(
        "   {label:<8} {:>4}%  [{}{}]",
        share.percent,
        "#".repeat(filled),
        " ".repeat(20_usize.saturating_sub(filled))
    );
}

/// Display the recommended foods of one category tab
pub fn print_recommendations(filter: CategoryFilter, foods: &[&RecommendedFood]) {
    println!("\nRecommended foods ({filter})");
    println!("{}", "=".repeat(60));
    if foods.is_empty() {
        println!("No foods in this category yet.");
    }
    for food in foods {
        println!("{} [{}]", food.name, food.category);
        println!("   Nutrients: {}", food.nutrients.join(", "));
        println!("   {}", food.benefits);
    }
}

/// Display a dietary preference or restriction guide
pub fn print_diet_guide(guide: &DietGuide) {
    println!("\n{}", guide.name);
    println!("{}", guide.description);
    println!("{}", "=".repeat(60));

    let foods_heading = match guide.kind {
        DietGuideKind::Preference => "Recommended Foods",
        DietGuideKind::Restriction => "Safe Foods",
    };
    print_list(foods_heading, &guide.foods);
    print_list("Tips", &guide.tips);
    print_list("Benefits", &guide.benefits);
    print_list("Foods to Avoid", &guide.avoid);
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{heading}:");
    for item in items {
        println!("  • {item}");
    }
}

/// Display one transcript message
pub fn print_message(message: &ChatMessage) {
    let speaker = match message.role {
        ChatRole::User => "You",
        ChatRole::Bot => "NutriWise",
    };
    println!(
        "[{}] {speaker}: {}",
        message.timestamp.format("%H:%M"),
        message.content
    );
}
