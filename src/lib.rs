// ABOUTME: Main library entry point for the recipe nutrition calculator
// ABOUTME: Dimensional quantity algebra, nutrition records and recipe aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Nutrition
//!
//! Computes per-serving nutrition for recipes built from a catalog of
//! ingredients measured in mixed units (mass, volume, percentages, counts).
//!
//! ## Architecture
//!
//! - **units**: `Unit` exponent vectors, `Quantity` arithmetic and the
//!   `UnitRegistry` of scale equivalences used to convert and simplify
//! - **nutrition**: `Nutrition` records and their merge/scale operations
//! - **recipes**: catalog models, JSON loading and aggregation
//! - **report**: text and JSON rendering of per-serving results
//! - **config** / **logging**: environment-driven settings
//!
//! The registry is built once and passed by reference into every operation
//! that may convert units; there is no hidden global table.
//!
//! ## Example Usage
//!
//! ```rust
//! use recipe_nutrition::nutrition::{NutrientMap, Nutrition};
//! use recipe_nutrition::recipes::{calculate_nutrition, Ingredient, IngredientCatalog, Recipe};
//! use recipe_nutrition::units::{Quantity, UnitRegistry};
//!
//! let registry = UnitRegistry::standard();
//! let oats = Nutrition::from_parts(
//!     Quantity::of(100.0, "g"),
//!     [("calories", Quantity::of(389.0, "kcal"))].into_iter().collect::<NutrientMap>(),
//! );
//! let mut catalog = IngredientCatalog::new();
//! catalog.insert(
//!     "oats".into(),
//!     Ingredient::new("oats", "Rolled oats", Quantity::of(40.0, "g"), oats),
//! );
//!
//! let recipe = Recipe::new("porridge", "Porridge").with_ingredient("oats", Quantity::of(50.0, "g"));
//! let total = calculate_nutrition(&recipe, &catalog, &registry).unwrap();
//! assert!((total.get("calories").unwrap().value() - 194.5).abs() < 1e-9);
//! ```

/// Calculator configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Nutrition records built on quantities
pub mod nutrition;

/// Catalog models, loading and aggregation
pub mod recipes;

/// Report rendering
pub mod report;

/// Dimensional quantity algebra
pub mod units;

pub use nutrition_core::{constants, errors};
pub use nutrition_core::{AlgebraError, AlgebraResult, ErrorCode, ErrorResponse};
