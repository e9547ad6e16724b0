// ABOUTME: Ordered keyword-group matcher that picks a canned nutrition reply
// ABOUTME: First matching group in declaration order wins; otherwise a default reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic of a keyword group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatTopic {
    /// hello, hi
    Greeting,
    /// vegetarian, vegan
    PlantBasedDiet,
    /// protein
    Protein,
    /// carb, carbohydrate
    Carbohydrates,
    /// fat
    Fat,
    /// calorie, calories
    Calories,
    /// diabetes
    Diabetes,
    /// heart
    HeartHealth,
    /// bmi
    Bmi,
    /// thank
    Thanks,
}

impl fmt::Display for ChatTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Greeting => "greeting",
            Self::PlantBasedDiet => "plant_based_diet",
            Self::Protein => "protein",
            Self::Carbohydrates => "carbohydrates",
            Self::Fat => "fat",
            Self::Calories => "calories",
            Self::Diabetes => "diabetes",
            Self::HeartHealth => "heart_health",
            Self::Bmi => "bmi",
            Self::Thanks => "thanks",
        };
        f.write_str(name)
    }
}

/// A topic, the substrings that select it, and its reply
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    /// Topic
    pub topic: ChatTopic,
    /// Lowercase substrings; any one selects the group
    pub keywords: &'static [&'static str],
    /// Canned reply
    pub response: &'static str,
}

impl KeywordGroup {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Reply when no group matches
pub const DEFAULT_RESPONSE: &str = "That's an interesting nutrition question. For more specific and personalized advice, please try our diet planning tools or nutritional analysis features.";

/// Keyword groups in match priority order
pub const KEYWORD_GROUPS: [KeywordGroup; 10] = [
    KeywordGroup {
        topic: ChatTopic::Greeting,
        keywords: &["hello", "hi"],
        response: "Hello! How can I help you with your nutrition needs today?",
    },
    KeywordGroup {
        topic: ChatTopic::PlantBasedDiet,
        keywords: &["vegetarian", "vegan"],
        response: "For vegetarian and vegan diets, focus on plant-based proteins like beans, lentils, tofu, and seitan. Make sure to include B12 supplements for vegans!",
    },
    KeywordGroup {
        topic: ChatTopic::Protein,
        keywords: &["protein"],
        response: "Good protein sources include lean meats, fish, eggs, dairy, beans, lentils, nuts, and seeds. An average adult needs about 0.8g of protein per kg of body weight daily.",
    },
    KeywordGroup {
        topic: ChatTopic::Carbohydrates,
        keywords: &["carb", "carbohydrate"],
        response: "Healthy carbohydrates come from whole grains, fruits, vegetables, and legumes. They should make up about 45-65% of your daily calories.",
    },
    KeywordGroup {
        topic: ChatTopic::Fat,
        keywords: &["fat"],
        response: "Healthy fats are essential for your diet. Focus on unsaturated fats from olive oil, avocados, nuts, and fatty fish. Limit saturated fats and avoid trans fats.",
    },
    KeywordGroup {
        topic: ChatTopic::Calories,
        keywords: &["calorie", "calories"],
        response: "Your calorie needs depend on age, weight, height, gender, and activity level. Use our calculator to determine your specific needs.",
    },
    KeywordGroup {
        topic: ChatTopic::Diabetes,
        keywords: &["diabetes"],
        response: "For diabetes management, focus on low glycemic index foods, controlled carbohydrate intake, and regular meals. Consider exploring our personalized meal plans for diabetic-friendly options.",
    },
    KeywordGroup {
        topic: ChatTopic::HeartHealth,
        keywords: &["heart"],
        response: "Heart-healthy diets emphasize fruits, vegetables, whole grains, lean proteins, and limit sodium, added sugars, and unhealthy fats. The DASH or Mediterranean diets are great options.",
    },
    KeywordGroup {
        topic: ChatTopic::Bmi,
        keywords: &["bmi"],
        response: "BMI (Body Mass Index) is a measure of body fat based on height and weight. Check out our BMI calculator to determine yours and get customized diet recommendations.",
    },
    KeywordGroup {
        topic: ChatTopic::Thanks,
        keywords: &["thank"],
        response: "You're welcome! Feel free to ask if you have any other nutrition questions.",
    },
];

/// Selected reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CannedReply {
    /// Matched topic, `None` for the default reply
    pub topic: Option<ChatTopic>,
    /// Reply text
    pub text: &'static str,
}

/// Pick the reply for free text. Matching is plain substring search on the
/// lowercased input, so "this" selects the greeting through "hi".
#[must_use]
pub fn respond(input: &str) -> CannedReply {
    let lowered = input.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|group| group.matches(&lowered))
        .map_or(
            CannedReply {
                topic: None,
                text: DEFAULT_RESPONSE,
            },
            |group| CannedReply {
                topic: Some(group.topic),
                text: group.response,
            },
        )
}
