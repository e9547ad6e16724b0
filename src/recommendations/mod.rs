// ABOUTME: Recommended-foods catalog with category tabs and dietary preference/restriction guides
// ABOUTME: Read-only tables shared per process, filtered by category or looked up by guide name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendations
//!
//! Two small static tables: nutrient-rich foods grouped into category tabs, and
//! guides for dietary preferences (vegetarian, vegan, ...) and restrictions
//! (gluten-free, dairy-free, nut-free). A tab with no foods is an empty list.

mod data;

use crate::errors::{AppError, AppResult};
use nutriwise_core::constants::resources;
use nutriwise_core::models::{
    CategoryFilter, DietGuide, DietGuideKind, DietaryPreference, RecommendedFood,
};
use serde_json::json;
use std::sync::OnceLock;
use tracing::debug;

static SHIPPED_RECOMMENDATIONS: OnceLock<RecommendationCatalog> = OnceLock::new();

/// Recommended foods and diet guides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationCatalog {
    foods: Vec<RecommendedFood>,
    guides: Vec<DietGuide>,
}

impl RecommendationCatalog {
    /// Catalog over arbitrary tables
    #[must_use]
    pub fn new(foods: Vec<RecommendedFood>, guides: Vec<DietGuide>) -> Self {
        Self { foods, guides }
    }

    /// Process-wide shared instance of the shipped tables
    pub fn shared() -> &'static Self {
        SHIPPED_RECOMMENDATIONS
            .get_or_init(|| Self::new(data::recommended_foods(), data::diet_guides()))
    }

    /// All recommended foods in catalog order
    #[must_use]
    pub fn foods(&self) -> &[RecommendedFood] {
        &self.foods
    }

    /// Foods shown under a category tab, in catalog order
    #[must_use]
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&RecommendedFood> {
        let foods: Vec<&RecommendedFood> = self
            .foods
            .iter()
            .filter(|food| filter.includes(food.category))
            .collect();
        debug!(%filter, hits = foods.len(), "Recommended foods");
        foods
    }

    /// Guides of one kind, or every guide
    #[must_use]
    pub fn diet_guides(&self, kind: Option<DietGuideKind>) -> Vec<&DietGuide> {
        self.guides
            .iter()
            .filter(|guide| kind.is_none_or(|wanted| guide.kind == wanted))
            .collect()
    }

    /// Look up a guide by id or display name
    ///
    /// Matching ignores case, surrounding whitespace, and treats spaces and
    /// underscores as hyphens, so "Gluten Free" finds "gluten-free".
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` with resource "Diet guide" if nothing matches
    pub fn diet_guide(&self, name: &str) -> AppResult<&DietGuide> {
        let wanted = normalize_guide_name(name);
        self.guides
            .iter()
            .find(|guide| guide.id == wanted || normalize_guide_name(&guide.name) == wanted)
            .ok_or_else(|| {
                AppError::not_found(resources::DIET_GUIDE)
                    .with_details(json!({ "name": name.trim() }))
            })
    }

    /// Guide matching a meal planner preference
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if the catalog has no guide for the preference
    pub fn preference_guide(&self, preference: DietaryPreference) -> AppResult<&DietGuide> {
        self.diet_guide(preference.as_str())
    }
}

fn normalize_guide_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_guide_name() {
        assert_eq!(normalize_guide_name("  Gluten Free "), "gluten-free");
        assert_eq!(normalize_guide_name("NON_VEGETARIAN"), "non-vegetarian");
    }

    #[test]
    fn test_shared_catalog_is_built_once() {
        let first = RecommendationCatalog::shared();
        let second = RecommendationCatalog::shared();

        assert!(std::ptr::eq(first, second));
    }
}
