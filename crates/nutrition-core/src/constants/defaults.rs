// ABOUTME: Default configuration values for the nutrition calculator
// ABOUTME: Used when no environment override or CLI flag is supplied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service name used in structured logs
pub const SERVICE_NAME: &str = "recipe-nutrition";

/// Maximum substitution steps a single simplification may take
pub const MAX_SIMPLIFY_STEPS: usize = 64;

/// Servings a recipe is divided into when nothing else is declared
pub const DEFAULT_SERVINGS: f64 = 10.0;

/// Significant figures used when rendering quantities
pub const SIGNIFICANT_FIGURES: usize = 3;

/// Ingredient catalog path relative to the working directory
pub const INGREDIENTS_PATH: &str = "ingredients.json";

/// Recipe catalog path relative to the working directory
pub const RECIPES_PATH: &str = "recipes.json";

/// Key of the reference quantity inside a nutrition record
pub const REFERENCE_QUANTITY_KEY: &str = "quantity";
