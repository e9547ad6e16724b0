// ABOUTME: The nine shipped meal plans, one per health goal and dietary preference pair
// ABOUTME: Three days of meals and four practical tips per plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriwise_core::models::{DayMeals, DietaryPreference, HealthGoal, MealPlan};

/// Compile-time form of a plan; days are `[day, breakfast, lunch, dinner, snack]`
struct PlanSeed {
    goal: HealthGoal,
    preference: DietaryPreference,
    title: &'static str,
    description: &'static str,
    days: [[&'static str; 5]; 3],
    tips: [&'static str; 4],
}

impl PlanSeed {
    fn to_plan(&self) -> MealPlan {
        MealPlan {
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            meals: self
                .days
                .iter()
                .map(|[day, breakfast, lunch, dinner, snack]| DayMeals {
                    day: (*day).to_owned(),
                    breakfast: (*breakfast).to_owned(),
                    lunch: (*lunch).to_owned(),
                    dinner: (*dinner).to_owned(),
                    snack: (*snack).to_owned(),
                })
                .collect(),
            tips: self.tips.iter().map(|tip| (*tip).to_owned()).collect(),
        }
    }
}

/// Every shipped plan keyed by its selector pair
pub(super) fn shipped_plans() -> impl Iterator<Item = (HealthGoal, DietaryPreference, MealPlan)> {
    SEEDS
        .iter()
        .map(|seed| (seed.goal, seed.preference, seed.to_plan()))
}

const SEEDS: [PlanSeed; 9] = [
    PlanSeed {
        goal: HealthGoal::WeightLoss,
        preference: DietaryPreference::Vegetarian,
        title: "Vegetarian Weight Loss Plan",
        description: "A balanced vegetarian meal plan designed for sustainable weight loss.",
        days: [
            [
                "Monday",
                "Greek yogurt with berries and a tablespoon of honey",
                "Quinoa salad with mixed vegetables and feta cheese",
                "Lentil soup with a side of steamed vegetables",
                "Apple slices with almond butter",
            ],
            [
                "Tuesday",
                "Vegetable omelette with whole grain toast",
                "Spinach and chickpea curry with brown rice",
                "Stuffed bell peppers with quinoa and black beans",
                "Carrot sticks with hummus",
            ],
            [
                "Wednesday",
                "Overnight oats with chia seeds and berries",
                "Mediterranean vegetable wrap with tzatziki",
                "Vegetable stir-fry with tofu and brown rice",
                "Mixed nuts and dried fruits (small portion)",
            ],
        ],
        tips: [
            "Focus on protein at every meal to maintain muscle mass while losing weight",
            "Choose complex carbohydrates over simple carbs",
            "Use herbs and spices to add flavor without extra calories",
            "Stay hydrated by drinking at least 8 glasses of water daily",
        ],
    },
    PlanSeed {
        goal: HealthGoal::WeightLoss,
        preference: DietaryPreference::Vegan,
        title: "Vegan Weight Loss Plan",
        description: "A plant-based meal plan to help you lose weight healthily.",
        days: [
            [
                "Monday",
                "Smoothie with spinach, banana, berries and plant-based protein powder",
                "Buddha bowl with roasted vegetables, quinoa and tahini dressing",
                "Lentil and vegetable soup with a side salad",
                "Rice cakes with avocado",
            ],
            [
                "Tuesday",
                "Tofu scramble with vegetables and whole grain toast",
                "Chickpea and vegetable salad with lemon-tahini dressing",
                "Zucchini noodles with marinara sauce and nutritional yeast",
                "Edamame beans",
            ],
            [
                "Wednesday",
                "Chia seed pudding made with almond milk and topped with fruits",
                "Sweet potato and black bean wrap",
                "Cauliflower and chickpea curry with brown rice",
                "Apple slices with peanut butter",
            ],
        ],
        tips: [
            "Include a source of plant-based protein in every meal",
            "Consider B12 supplements which are essential for vegans",
            "Incorporate a variety of colorful vegetables for essential nutrients",
            "Watch portion sizes of calorie-dense foods like nuts and seeds",
        ],
    },
    PlanSeed {
        goal: HealthGoal::WeightLoss,
        preference: DietaryPreference::NonVegetarian,
        title: "Non-Vegetarian Weight Loss Plan",
        description: "A protein-rich meal plan with lean meats for effective weight loss.",
        days: [
            [
                "Monday",
                "Egg white omelette with vegetables and whole grain toast",
                "Grilled chicken salad with mixed greens and olive oil dressing",
                "Baked salmon with steamed broccoli and quinoa",
                "Greek yogurt with berries",
            ],
            [
                "Tuesday",
                "Protein smoothie with whey protein, banana, and almond milk",
                "Turkey and vegetable wrap with whole grain tortilla",
                "Lean beef stir-fry with vegetables and brown rice",
                "Hard-boiled egg with cherry tomatoes",
            ],
            [
                "Wednesday",
                "Cottage cheese with fruit and a sprinkle of nuts",
                "Tuna salad with mixed greens and light dressing",
                "Grilled shrimp with zucchini noodles and tomato sauce",
                "Sliced turkey breast with cucumber",
            ],
        ],
        tips: [
            "Choose lean protein sources like chicken breast, fish, and lean cuts of beef",
            "Control portion sizes, especially for protein and carbohydrates",
            "Include vegetables in every meal for fiber and nutrients",
            "Limit added oils and opt for grilling or baking instead of frying",
        ],
    },
    PlanSeed {
        goal: HealthGoal::HeartHealth,
        preference: DietaryPreference::Vegetarian,
        title: "Heart-Healthy Vegetarian Plan",
        description: "A vegetarian meal plan designed to support cardiovascular health.",
        days: [
            [
                "Monday",
                "Steel-cut oatmeal with berries, flaxseeds and a drizzle of honey",
                "Mediterranean salad with chickpeas, olives, tomatoes and feta",
                "Eggplant and lentil stew with a side of quinoa",
                "Handful of unsalted almonds",
            ],
            [
                "Tuesday",
                "Whole grain toast with avocado and a boiled egg",
                "Vegetable soup with a whole grain roll",
                "Portobello mushroom \"steak\" with roasted sweet potatoes and steamed greens",
                "Orange slices with a small piece of dark chocolate",
            ],
            [
                "Wednesday",
                "Yogurt parfait with low-fat yogurt, granola and berries",
                "Spinach and bean burrito with salsa",
                "Vegetable curry with brown rice",
                "Celery sticks with hummus",
            ],
        ],
        tips: [
            "Include heart-healthy fats like olive oil, avocados, and nuts",
            "Choose whole grains over refined carbohydrates",
            "Limit sodium by using herbs and spices for flavor",
            "Include sources of omega-3 fatty acids like flaxseeds and walnuts",
        ],
    },
    PlanSeed {
        goal: HealthGoal::HeartHealth,
        preference: DietaryPreference::Vegan,
        title: "Heart-Healthy Vegan Plan",
        description: "A plant-based meal plan focused on cardiovascular health optimization.",
        days: [
            [
                "Monday",
                "Overnight oats with chia seeds, almond milk and berries",
                "Kale and quinoa salad with lemon-tahini dressing",
                "Bean and vegetable chili with avocado slices",
                "Walnuts and dried cranberries",
            ],
            [
                "Tuesday",
                "Whole grain toast with almond butter and banana slices",
                "Lentil soup with whole grain bread",
                "Stuffed bell peppers with quinoa, black beans and vegetables",
                "Apple slices with cinnamon",
            ],
            [
                "Wednesday",
                "Green smoothie with spinach, banana, berries and flaxseeds",
                "Chickpea and vegetable wrap with tahini sauce",
                "Tofu and vegetable stir-fry with brown rice",
                "Roasted chickpeas with spices",
            ],
        ],
        tips: [
            "Incorporate plant-based sources of omega-3s like flaxseeds, chia seeds, and walnuts",
            "Choose whole food sources of plant protein",
            "Include plenty of fiber-rich foods for heart health",
            "Consider supplementing with vitamin B12",
        ],
    },
    PlanSeed {
        goal: HealthGoal::HeartHealth,
        preference: DietaryPreference::NonVegetarian,
        title: "Heart-Healthy Non-Vegetarian Plan",
        description: "A balanced meal plan with lean proteins to support heart health.",
        days: [
            [
                "Monday",
                "Oatmeal with berries and a tablespoon of ground flaxseeds",
                "Grilled chicken salad with olive oil and vinegar dressing",
                "Baked salmon with quinoa and steamed vegetables",
                "Handful of unsalted almonds",
            ],
            [
                "Tuesday",
                "Whole grain toast with avocado and a poached egg",
                "Turkey and vegetable soup with a whole grain roll",
                "Lean beef stir-fry with vegetables and brown rice (small portion)",
                "Greek yogurt with berries",
            ],
            [
                "Wednesday",
                "Greek yogurt parfait with fruits and a sprinkle of nuts",
                "Tuna salad (made with olive oil) on whole grain bread",
                "Grilled fish with roasted vegetables and quinoa",
                "Carrot sticks with hummus",
            ],
        ],
        tips: [
            "Choose fatty fish like salmon at least twice a week for omega-3s",
            "Limit red meat to once a week and choose lean cuts",
            "Choose skinless poultry and trim visible fat from meat",
            "Avoid processed meats high in sodium and preservatives",
        ],
    },
    PlanSeed {
        goal: HealthGoal::Diabetes,
        preference: DietaryPreference::Vegetarian,
        title: "Diabetes-Friendly Vegetarian Plan",
        description: "A vegetarian meal plan designed to help manage blood sugar levels.",
        days: [
            [
                "Monday",
                "Greek yogurt with a small amount of berries and chopped nuts",
                "Chickpea and vegetable salad with olive oil dressing",
                "Lentil curry with cauliflower rice",
                "Celery sticks with almond butter",
            ],
            [
                "Tuesday",
                "Vegetable omelette with a slice of whole grain toast",
                "Bean soup with a side salad",
                "Stir-fried tofu with non-starchy vegetables",
                "Small handful of mixed nuts",
            ],
            [
                "Wednesday",
                "Chia seed pudding made with unsweetened almond milk",
                "Quinoa bowl with roasted vegetables and feta cheese",
                "Stuffed bell peppers with cottage cheese and vegetables",
                "Hard-boiled egg",
            ],
        ],
        tips: [
            "Focus on low glycemic index foods to help manage blood sugar",
            "Control portion sizes, especially for carbohydrates",
            "Distribute carbohydrate intake evenly throughout the day",
            "Include protein and healthy fats with carbs to slow absorption",
        ],
    },
    PlanSeed {
        goal: HealthGoal::Diabetes,
        preference: DietaryPreference::Vegan,
        title: "Diabetes-Friendly Vegan Plan",
        description: "A plant-based approach to managing diabetes through diet.",
        days: [
            [
                "Monday",
                "Tofu scramble with spinach and nutritional yeast",
                "Lentil and vegetable soup",
                "Tempeh stir-fry with low-carb vegetables",
                "Cucumber slices with guacamole",
            ],
            [
                "Tuesday",
                "Chia seed pudding with unsweetened plant milk and cinnamon",
                "Chickpea salad with olive oil dressing",
                "Zucchini noodles with lentil bolognese",
                "Small handful of walnuts",
            ],
            [
                "Wednesday",
                "Green smoothie with plant protein, spinach, and avocado (no added sugar)",
                "Mexican-style cauliflower rice bowl with beans and guacamole",
                "Tofu and vegetable curry with minimal rice",
                "Olives",
            ],
        ],
        tips: [
            "Choose low glycemic index carbohydrates like beans and lentils",
            "Be careful with fruit intake and choose lower-sugar options",
            "Read labels carefully as many vegan products can be high in carbs",
            "Include plenty of fiber to help manage blood sugar",
        ],
    },
    PlanSeed {
        goal: HealthGoal::Diabetes,
        preference: DietaryPreference::NonVegetarian,
        title: "Diabetes-Friendly Non-Vegetarian Plan",
        description: "A protein-focused meal plan to help manage diabetes.",
        days: [
            [
                "Monday",
                "Scrambled eggs with spinach",
                "Grilled chicken salad with olive oil dressing",
                "Baked fish with roasted non-starchy vegetables",
                "Small piece of cheese with cucumber slices",
            ],
            [
                "Tuesday",
                "Greek yogurt with a sprinkle of nuts and cinnamon",
                "Turkey lettuce wraps with avocado",
                "Beef and vegetable stir-fry (minimal sauce)",
                "Hard-boiled egg",
            ],
            [
                "Wednesday",
                "Protein smoothie with unsweetened almond milk and berries",
                "Tuna salad on a bed of greens",
                "Roast chicken with cauliflower mash and greens",
                "Beef jerky (no added sugar)",
            ],
        ],
        tips: [
            "Focus on protein and healthy fats to help maintain stable blood sugar",
            "Limit carbohydrates and choose low glycemic index options",
            "Be cautious with sauces and marinades that may contain hidden sugars",
            "Include regular meals and snacks to prevent blood sugar fluctuations",
        ],
    },
];
