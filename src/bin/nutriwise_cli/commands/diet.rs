// ABOUTME: Dietary preference and restriction guide subcommands
// ABOUTME: Lists the shipped guides or prints one guide by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display;
use nutriwise::errors::AppResult;
use nutriwise::recommendations::RecommendationCatalog;

/// List every guide, preferences first
pub fn list(json: bool) -> AppResult<()> {
    let guides = RecommendationCatalog::shared().diet_guides(None);

    if json {
        return display::print_json(&guides);
    }
    for guide in guides {
        println!("{:<16} {:<12} {}", guide.id, guide.kind, guide.description);
    }
    Ok(())
}

/// Show one guide
pub fn guide(name: &str, json: bool) -> AppResult<()> {
    let guide = RecommendationCatalog::shared().diet_guide(name)?;

    if json {
        display::print_json(guide)
    } else {
        display::print_diet_guide(guide);
        Ok(())
    }
}
