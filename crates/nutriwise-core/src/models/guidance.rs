// ABOUTME: Recommended-food and diet-guide records with their selector enums
// ABOUTME: RecommendationCategory tabs, DietGuideKind, RecommendedFood and DietGuide entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category tab of the recommended-foods catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationCategory {
    /// Fresh fruit
    Fruits,
    /// Vegetables and leafy greens
    Vegetables,
    /// Fish, meat and other protein sources
    Proteins,
    /// Whole grains and seeds
    Grains,
    /// Milk products
    Dairy,
}

impl RecommendationCategory {
    /// All categories in tab order
    pub const ALL: [Self; 5] = [
        Self::Fruits,
        Self::Vegetables,
        Self::Proteins,
        Self::Grains,
        Self::Dairy,
    ];

    /// Option value used by input widgets
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fruits => "fruits",
            Self::Vegetables => "vegetables",
            Self::Proteins => "proteins",
            Self::Grains => "grains",
            Self::Dairy => "dairy",
        }
    }
}

impl FromStr for RecommendationCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown food category '{wanted}'")))
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tab selection: every food, or one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    /// The "all" tab
    #[default]
    All,
    /// A single category tab
    Only(RecommendationCategory),
}

impl CategoryFilter {
    /// Whether a category is shown under this tab
    #[must_use]
    pub fn includes(&self, category: RecommendationCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

/// A food highlighted for its nutritional benefits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedFood {
    /// Food name
    pub name: String,
    /// Catalog tab the food appears under
    pub category: RecommendationCategory,
    /// Headline nutrients, e.g. "Omega-3"
    pub nutrients: Vec<String>,
    /// One-sentence health benefit
    pub benefits: String,
}

/// Whether a guide describes an eating pattern or an exclusion diet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietGuideKind {
    /// Dietary preference such as vegan
    Preference,
    /// Dietary restriction such as gluten-free
    Restriction,
}

impl fmt::Display for DietGuideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Preference => "preference",
            Self::Restriction => "restriction",
        })
    }
}

/// Guide to one dietary preference or restriction
///
/// Preferences carry `tips` and `benefits`; restrictions carry `avoid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietGuide {
    /// Kebab-case identifier, e.g. "gluten-free"
    pub id: String,
    /// Display name, e.g. "Gluten-Free"
    pub name: String,
    /// Preference or restriction
    pub kind: DietGuideKind,
    /// One-line summary
    pub description: String,
    /// Recommended (preferences) or safe (restrictions) foods
    pub foods: Vec<String>,
    /// Practical tips
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tips: Vec<String>,
    /// Health benefits
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    /// Foods to avoid
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_parses_all_and_categories() {
        assert_eq!(" ALL ".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Dairy".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(RecommendationCategory::Dairy)
        );
        assert!("snacks".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_all_filter_includes_every_category() {
        assert!(RecommendationCategory::ALL
            .into_iter()
            .all(|category| CategoryFilter::All.includes(category)));
        assert!(!CategoryFilter::Only(RecommendationCategory::Fruits)
            .includes(RecommendationCategory::Grains));
    }
}
