// ABOUTME: Criterion benchmarks for the calculators, chat matcher and food search
// ABOUTME: Measures batch BMI assessment, calorie estimation and per-keystroke search cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the NutriWise calculators.
//!
//! Inputs are generated deterministically so runs are comparable.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriwise::bmi_calculator::{assess_bmi, BmiInput};
use nutriwise::calorie_calculator::{estimate_daily_calories, CalorieInput};
use nutriwise::chat::respond;
use nutriwise::food_database::FoodDatabase;
use nutriwise::forms::BmiForm;
use nutriwise::models::{ActivityLevel, CalorieActivityLevel, Sex};
use nutriwise_intelligence::NutritionConfig;

const BATCH_SIZES: [usize; 3] = [10, 100, 1000];

#[allow(clippy::cast_precision_loss)]
fn generate_bmi_inputs(count: usize) -> Vec<BmiInput> {
    (0..count)
        .map(|index| BmiInput {
            height_cm: 150.0 + ((index * 7) % 50) as f64,
            weight_kg: 45.0 + ((index * 13) % 70) as f64,
            age_years: 18.0 + ((index * 3) % 60) as f64,
            sex: if index % 2 == 0 { Sex::Male } else { Sex::Female },
            activity_level: ActivityLevel::ALL[index % ActivityLevel::ALL.len()],
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn generate_calorie_inputs(count: usize) -> Vec<CalorieInput> {
    (0..count)
        .map(|index| CalorieInput {
            age_years: 18.0 + ((index * 3) % 60) as f64,
            sex: if index % 3 == 0 { Sex::Female } else { Sex::Male },
            weight_kg: 45.0 + ((index * 13) % 70) as f64,
            height_cm: 150.0 + ((index * 7) % 50) as f64,
            activity_level: CalorieActivityLevel::ALL[index % CalorieActivityLevel::ALL.len()],
        })
        .collect()
}

fn bench_bmi_assessment(c: &mut Criterion) {
    let mut group = c.benchmark_group("bmi");
    let config = NutritionConfig::default();

    for count in BATCH_SIZES {
        let inputs = generate_bmi_inputs(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("assess_bmi", count),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    inputs
                        .iter()
                        .filter_map(|input| assess_bmi(black_box(input), &config.bmi).ok())
                        .count()
                });
            },
        );
    }

    group.finish();
}

fn bench_bmi_form_parsing(c: &mut Criterion) {
    let form = BmiForm {
        height: "172.5".to_owned(),
        weight: "68.2".to_owned(),
        age: "41".to_owned(),
        sex: "female".to_owned(),
        activity_level: "moderately-active".to_owned(),
    };

    c.bench_function("bmi_form_parse", |b| b.iter(|| black_box(&form).parse()));
}

fn bench_calorie_estimation(c: &mut Criterion) {
    let mut group = c.benchmark_group("calories");
    let config = NutritionConfig::default();

    for count in BATCH_SIZES {
        let inputs = generate_calorie_inputs(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("estimate_daily_calories", count),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    inputs
                        .iter()
                        .filter_map(|input| estimate_daily_calories(black_box(input), &config).ok())
                        .map(|estimate| estimate.calories)
                        .sum::<i64>()
                });
            },
        );
    }

    group.finish();
}

fn bench_chat_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("chat_matcher");
    let inputs = [
        ("first_group", "hello there"),
        ("last_group", "thank you so much"),
        ("no_match", "what about sodium and potassium levels"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::new("respond", name), input, |b, input| {
            b.iter(|| respond(black_box(input)));
        });
    }

    group.finish();
}

fn bench_food_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("food_search");
    let db = FoodDatabase::builtin();

    // Each keystroke of a typed query triggers a search
    let query = "sweet potato";
    let prefixes: Vec<&str> = (1..=query.len()).map(|end| &query[..end]).collect();

    group.throughput(Throughput::Elements(prefixes.len() as u64));
    group.bench_function("search_per_keystroke", |b| {
        b.iter(|| {
            prefixes
                .iter()
                .map(|prefix| db.search(black_box(prefix)))
                .filter(|outcome| outcome.no_results_message().is_none())
                .count()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_bmi_assessment,
    bench_bmi_form_parsing,
    bench_calorie_estimation,
    bench_chat_matcher,
    bench_food_search,
);
criterion_main!(benches);
