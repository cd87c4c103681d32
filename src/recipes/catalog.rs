// ABOUTME: JSON catalog loading for ingredients and recipes
// ABOUTME: Parses `{"items": [...]}` documents into typed models, naming the offending item on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog loading.
//!
//! Both catalogs are JSON documents holding an `items` array. Items are
//! decoded one at a time so a failure can name the item's key. Object order
//! is preserved, so nutrients and recipe lines keep their file order.

use std::fs;
use std::path::Path;

use nutrition_core::{AlgebraError, AlgebraResult};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use super::models::{FoodGroup, Ingredient, IngredientCatalog, Recipe, RecipeIngredient};
use crate::nutrition::{NutrientMap, Nutrition};
use crate::units::{Quantity, QuantitySpec};

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IngredientEntry {
    key: String,
    name: String,
    #[serde(default)]
    group: FoodGroup,
    unit_quantity: QuantitySpec,
    variants: Vec<VariantEntry>,
}

#[derive(Debug, Deserialize)]
struct VariantEntry {
    nutrition: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeEntry {
    key: String,
    name: String,
    #[serde(default)]
    description: String,
    ingredients: Map<String, Value>,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    is_liquid: bool,
    #[serde(default)]
    service_size: Option<QuantitySpec>,
}

/// Read an ingredient catalog file
///
/// # Errors
///
/// Returns `AlgebraError::CatalogIo` when the file cannot be read and
/// `AlgebraError::CatalogFormat` when its content is invalid.
pub fn load_ingredients(path: &Path) -> AlgebraResult<IngredientCatalog> {
    let text = read_catalog(path)?;
    let catalog = parse_ingredients(&text, &path.display().to_string())?;
    info!(path = %path.display(), count = catalog.len(), "loaded ingredient catalog");
    Ok(catalog)
}

/// Read a recipe catalog file
///
/// # Errors
///
/// Returns `AlgebraError::CatalogIo` when the file cannot be read and
/// `AlgebraError::CatalogFormat` when its content is invalid.
pub fn load_recipes(path: &Path) -> AlgebraResult<Vec<Recipe>> {
    let text = read_catalog(path)?;
    let recipes = parse_recipes(&text, &path.display().to_string())?;
    info!(path = %path.display(), count = recipes.len(), "loaded recipe catalog");
    Ok(recipes)
}

/// Parse an ingredient catalog document. `source` names the document in
/// errors that cannot be attributed to a single item.
///
/// Duplicate keys are allowed; the later entry replaces the earlier one.
///
/// # Errors
///
/// Returns `AlgebraError::CatalogFormat` naming the first invalid item.
pub fn parse_ingredients(json: &str, source: &str) -> AlgebraResult<IngredientCatalog> {
    let mut catalog = IngredientCatalog::new();

    for (index, item) in parse_document(json, source)?.into_iter().enumerate() {
        let label = item_label(&item, index);
        let entry: IngredientEntry = serde_json::from_value(item)
            .map_err(|e| AlgebraError::catalog_format(&label, e.to_string()))?;
        let ingredient = ingredient_from_entry(entry)?;

        if let Some(previous) = catalog.insert(ingredient.key.clone(), ingredient) {
            warn!(key = %previous.key, "duplicate ingredient key, keeping the later entry");
        }
    }

    Ok(catalog)
}

/// Parse a recipe catalog document, keeping file order
///
/// # Errors
///
/// Returns `AlgebraError::CatalogFormat` naming the first invalid item.
pub fn parse_recipes(json: &str, source: &str) -> AlgebraResult<Vec<Recipe>> {
    parse_document(json, source)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let label = item_label(&item, index);
            let entry: RecipeEntry = serde_json::from_value(item)
                .map_err(|e| AlgebraError::catalog_format(&label, e.to_string()))?;
            recipe_from_entry(entry)
        })
        .collect()
}

fn read_catalog(path: &Path) -> AlgebraResult<String> {
    fs::read_to_string(path).map_err(|e| AlgebraError::CatalogIo {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn parse_document(json: &str, source: &str) -> AlgebraResult<Vec<Value>> {
    serde_json::from_str::<CatalogDocument>(json)
        .map(|document| document.items)
        .map_err(|e| AlgebraError::catalog_format(source, e.to_string()))
}

fn item_label(item: &Value, index: usize) -> String {
    item.get("key")
        .and_then(Value::as_str)
        .map_or_else(|| format!("item #{index}"), ToOwned::to_owned)
}

fn ingredient_from_entry(entry: IngredientEntry) -> AlgebraResult<Ingredient> {
    let unit_quantity = quantity_for(&entry.key, "unitQuantity", &entry.unit_quantity)?;

    let variant = entry
        .variants
        .into_iter()
        .next()
        .ok_or_else(|| AlgebraError::catalog_format(&entry.key, "ingredient has no variants"))?;
    let values = quantity_map(&entry.key, variant.nutrition)?;
    let nutrition = Nutrition::create(Some(values), false)
        .map_err(|e| AlgebraError::catalog_format(&entry.key, e.to_string()))?;

    Ok(
        Ingredient::new(entry.key, entry.name, unit_quantity, nutrition)
            .with_group(entry.group),
    )
}

fn recipe_from_entry(entry: RecipeEntry) -> AlgebraResult<Recipe> {
    let ingredients = quantity_map(&entry.key, entry.ingredients)?
        .iter()
        .map(|(key, amount)| RecipeIngredient::new(key, amount.clone()))
        .collect();
    let service_size = entry
        .service_size
        .as_ref()
        .map(|spec| quantity_for(&entry.key, "serviceSize", spec))
        .transpose()?;

    Ok(Recipe {
        key: entry.key,
        name: entry.name,
        description: entry.description,
        is_liquid: entry.is_liquid,
        service_size,
        ingredients,
        instructions: entry.instructions,
    })
}

fn quantity_map(item: &str, values: Map<String, Value>) -> AlgebraResult<NutrientMap> {
    values
        .into_iter()
        .map(|(name, value)| {
            let spec: QuantitySpec = serde_json::from_value(value).map_err(|e| {
                AlgebraError::catalog_format(item, format!("'{name}': {e}"))
            })?;
            let quantity = quantity_for(item, &name, &spec)?;
            Ok((name, quantity))
        })
        .collect()
}

fn quantity_for(item: &str, field: &str, spec: &QuantitySpec) -> AlgebraResult<Quantity> {
    Quantity::from_spec(spec)
        .map_err(|e| AlgebraError::catalog_format(item, format!("'{field}': {e}")))
}
