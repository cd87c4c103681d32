// ABOUTME: Report rendering for per-serving recipe nutrition
// ABOUTME: Produces the plain-text listing and a serializable JSON view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;

use nutrition_core::constants::defaults::REFERENCE_QUANTITY_KEY;
use serde::Serialize;

use crate::nutrition::Nutrition;
use crate::recipes::Recipe;
use crate::units::{format_significant, Quantity};

/// One quantity as shown in reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityReport {
    /// Raw value
    pub value: f64,
    /// Canonical unit, `1` when dimensionless
    pub unit: String,
    /// Value rounded to significant figures, followed by the unit
    pub display: String,
}

impl QuantityReport {
    /// Render `quantity` with `figures` significant figures
    #[must_use]
    pub fn new(quantity: &Quantity, figures: usize) -> Self {
        let value = format_significant(quantity.value(), figures);
        let display = if quantity.is_dimensionless() {
            value
        } else {
            format!("{value}{}", quantity.unit())
        };
        Self {
            value: quantity.value(),
            unit: quantity.unit().canonical(),
            display,
        }
    }
}

/// Named nutrient line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientReport {
    /// Nutrient name from the catalog
    pub name: String,
    /// Rendered quantity
    #[serde(flatten)]
    pub quantity: QuantityReport,
}

/// Nutrition of one recipe serving
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeReport {
    /// Recipe key
    pub key: String,
    /// Recipe name
    pub name: String,
    /// Reference quantity of the serving
    pub quantity: QuantityReport,
    /// Nutrients in catalog order
    pub nutrients: Vec<NutrientReport>,
}

impl RecipeReport {
    /// Build the report for `recipe` from its per-serving nutrition
    #[must_use]
    pub fn new(recipe: &Recipe, nutrition: &Nutrition, figures: usize) -> Self {
        let nutrients = nutrition
            .values()
            .iter()
            .filter(|(name, _)| *name != REFERENCE_QUANTITY_KEY)
            .map(|(name, quantity)| NutrientReport {
                name: name.to_owned(),
                quantity: QuantityReport::new(quantity, figures),
            })
            .collect();

        Self {
            key: recipe.key.clone(),
            name: recipe.name.clone(),
            quantity: QuantityReport::new(nutrition.quantity(), figures),
            nutrients,
        }
    }

    /// Plain-text listing: a header, the reference quantity, then one line
    /// per nutrient
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", self.name);
        let _ = writeln!(out, "Quantity: {}", self.quantity.display);
        for nutrient in &self.nutrients {
            let _ = writeln!(out, "{}: {}", nutrient.name, nutrient.quantity.display);
        }
        out
    }
}

/// Pretty-printed JSON array of reports
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(reports: &[RecipeReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
