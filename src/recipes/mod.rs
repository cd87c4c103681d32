// ABOUTME: Recipe domain: catalog models, JSON loading and nutrition aggregation
// ABOUTME: Builds per-recipe and per-serving nutrition on top of the unit algebra
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! - **models**: `Ingredient`, `Recipe`, `FoodGroup` and the ingredient catalog
//! - **catalog**: loading both catalogs from JSON files
//! - **aggregator**: recipe totals and per-serving scaling

/// Recipe nutrition aggregation
pub mod aggregator;
/// JSON catalog loading
pub mod catalog;
/// Ingredient and recipe models
pub mod models;

pub use aggregator::{
    calculate_nutrition, calculate_per_serving, contribution_ratio, per_serving, resolve_serving,
};
pub use catalog::{load_ingredients, load_recipes, parse_ingredients, parse_recipes};
pub use models::{FoodGroup, Ingredient, IngredientCatalog, Recipe, RecipeIngredient};
