// ABOUTME: The shipped recommended foods and dietary preference/restriction guides
// ABOUTME: Six featured foods across five category tabs, four preferences and three restrictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriwise_core::models::{DietGuide, DietGuideKind, RecommendationCategory, RecommendedFood};

struct FoodSeed {
    name: &'static str,
    category: RecommendationCategory,
    nutrients: [&'static str; 3],
    benefits: &'static str,
}

struct GuideSeed {
    id: &'static str,
    name: &'static str,
    kind: DietGuideKind,
    description: &'static str,
    foods: &'static [&'static str],
    tips: &'static [&'static str],
    benefits: &'static [&'static str],
    avoid: &'static [&'static str],
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

impl FoodSeed {
    fn to_food(&self) -> RecommendedFood {
        RecommendedFood {
            name: self.name.to_owned(),
            category: self.category,
            nutrients: owned(&self.nutrients),
            benefits: self.benefits.to_owned(),
        }
    }
}

impl GuideSeed {
    fn to_guide(&self) -> DietGuide {
        DietGuide {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            kind: self.kind,
            description: self.description.to_owned(),
            foods: owned(self.foods),
            tips: owned(self.tips),
            benefits: owned(self.benefits),
            avoid: owned(self.avoid),
        }
    }
}

pub(super) fn recommended_foods() -> Vec<RecommendedFood> {
    FOODS.iter().map(FoodSeed::to_food).collect()
}

pub(super) fn diet_guides() -> Vec<DietGuide> {
    GUIDES.iter().map(GuideSeed::to_guide).collect()
}

#[rustfmt::skip]
const FOODS: [FoodSeed; 6] = [
    FoodSeed { name: "Avocado", category: RecommendationCategory::Fruits, nutrients: ["Healthy Fats", "Fiber", "Vitamin E"], benefits: "Supports heart health and provides essential fatty acids" },
    FoodSeed { name: "Salmon", category: RecommendationCategory::Proteins, nutrients: ["Omega-3", "Protein", "Vitamin D"], benefits: "Reduces inflammation and supports brain health" },
    FoodSeed { name: "Quinoa", category: RecommendationCategory::Grains, nutrients: ["Complete Protein", "Fiber", "Magnesium"], benefits: "Provides all essential amino acids and supports digestion" },
    FoodSeed { name: "Spinach", category: RecommendationCategory::Vegetables, nutrients: ["Iron", "Vitamin K", "Antioxidants"], benefits: "Supports bone health and provides essential nutrients" },
    FoodSeed { name: "Blueberries", category: RecommendationCategory::Fruits, nutrients: ["Antioxidants", "Vitamin C", "Fiber"], benefits: "Protects against oxidative stress and inflammation" },
    FoodSeed { name: "Greek Yogurt", category: RecommendationCategory::Dairy, nutrients: ["Protein", "Probiotics", "Calcium"], benefits: "Supports gut health and provides high-quality protein" },
];

const GUIDES: [GuideSeed; 7] = [
    GuideSeed {
        id: "vegetarian",
        name: "Vegetarian",
        kind: DietGuideKind::Preference,
        description: "Plant-based diet excluding meat, fish, and poultry",
        foods: &["Vegetables", "Fruits", "Grains", "Legumes", "Nuts & Seeds", "Dairy", "Eggs (optional)"],
        tips: &[
            "Ensure adequate protein through beans, lentils, tofu, and dairy",
            "Include iron-rich foods like spinach and fortified cereals",
            "Consider B12 supplements if avoiding dairy and eggs",
            "Focus on complete proteins by combining different plant proteins",
        ],
        benefits: &[
            "Reduced risk of heart disease",
            "Lower blood pressure",
            "Better weight management",
            "Lower risk of certain cancers",
        ],
        avoid: &[],
    },
    GuideSeed {
        id: "vegan",
        name: "Vegan",
        kind: DietGuideKind::Preference,
        description: "Plant-based diet excluding all animal products",
        foods: &["Vegetables", "Fruits", "Grains", "Legumes", "Nuts & Seeds", "Plant-based milks", "Meat alternatives"],
        tips: &[
            "Supplement with vitamin B12",
            "Include calcium-rich foods like fortified plant milks",
            "Incorporate omega-3 sources like flaxseeds and walnuts",
            "Ensure adequate protein from legumes, tofu, and seitan",
        ],
        benefits: &[
            "Lowest environmental impact",
            "May reduce risk of chronic diseases",
            "Can help manage weight",
            "Lower saturated fat intake",
        ],
        avoid: &[],
    },
    GuideSeed {
        id: "eggetarian",
        name: "Eggetarian",
        kind: DietGuideKind::Preference,
        description: "Vegetarian diet that includes eggs but excludes meat",
        foods: &["Vegetables", "Fruits", "Grains", "Legumes", "Nuts & Seeds", "Dairy", "Eggs"],
        tips: &[
            "Eggs provide complete protein and essential nutrients",
            "Consider organic or free-range eggs for ethical concerns",
            "Incorporate a variety of plant proteins alongside eggs",
            "Balance egg consumption with plenty of plant foods",
        ],
        benefits: &[
            "Complete protein source from eggs",
            "Rich in vitamin B12 and D",
            "Good source of choline for brain health",
            "More flexible than strict vegetarian diets",
        ],
        avoid: &[],
    },
    GuideSeed {
        id: "non-vegetarian",
        name: "Non-Vegetarian",
        kind: DietGuideKind::Preference,
        description: "Diet that includes animal products including meat",
        foods: &["Meat", "Poultry", "Fish", "Seafood", "Dairy", "Eggs", "All plant foods"],
        tips: &[
            "Focus on lean protein sources",
            "Include fatty fish rich in omega-3s",
            "Balance meals with plenty of vegetables",
            "Limit processed meats and red meat consumption",
        ],
        benefits: &[
            "Complete proteins readily available",
            "Rich in iron, zinc, and B12",
            "No need for certain supplements",
            "Wide variety of food choices",
        ],
        avoid: &[],
    },
    GuideSeed {
        id: "gluten-free",
        name: "Gluten-Free",
        kind: DietGuideKind::Restriction,
        description: "Diet excluding gluten, a protein found in wheat, barley, and rye",
        foods: &["Rice", "Corn", "Quinoa", "Buckwheat", "Certified gluten-free oats", "Fruits", "Vegetables", "Meat", "Fish", "Dairy"],
        tips: &[],
        benefits: &[],
        avoid: &[
            "Wheat",
            "Barley",
            "Rye",
            "Triticale",
            "Regular oats (due to cross-contamination)",
            "Most breads, pastas, and baked goods",
            "Many processed foods",
        ],
    },
    GuideSeed {
        id: "dairy-free",
        name: "Dairy-Free",
        kind: DietGuideKind::Restriction,
        description: "Diet excluding milk and milk products",
        foods: &["Plant-based milks", "Coconut yogurt", "Vegan cheese alternatives", "All fruits and vegetables", "Grains", "Meat", "Fish"],
        tips: &[],
        benefits: &[],
        avoid: &["Milk", "Cheese", "Yogurt", "Butter", "Ice cream", "Many baked goods", "Some processed foods"],
    },
    GuideSeed {
        id: "nut-free",
        name: "Nut-Free",
        kind: DietGuideKind::Restriction,
        description: "Diet excluding all tree nuts and peanuts",
        foods: &["Fruits", "Vegetables", "Meat", "Fish", "Dairy", "Grains", "Seeds (if not cross-contaminated)"],
        tips: &[],
        benefits: &[],
        avoid: &[
            "Peanuts",
            "Tree nuts (almonds, walnuts, cashews, etc.)",
            "Nut butters",
            "Marzipan",
            "Many desserts",
            "Some vegetarian protein sources",
        ],
    },
];
