// ABOUTME: Environment variable names for configuration overrides
// ABOUTME: Centralized so loaders and tests agree on spelling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Override for the simplification step budget
pub const MAX_SIMPLIFY_STEPS: &str = "NUTRITION_MAX_SIMPLIFY_STEPS";

/// Override for the default number of servings
pub const DEFAULT_SERVINGS: &str = "NUTRITION_DEFAULT_SERVINGS";

/// Override for rendered significant figures
pub const SIGNIFICANT_FIGURES: &str = "NUTRITION_SIGNIFICANT_FIGURES";

/// Override for the ingredient catalog path
pub const INGREDIENTS_PATH: &str = "NUTRITION_INGREDIENTS_PATH";

/// Override for the recipe catalog path
pub const RECIPES_PATH: &str = "NUTRITION_RECIPES_PATH";

/// Log level filter
pub const RUST_LOG: &str = "RUST_LOG";

/// Log output format (`json`, `compact`, anything else is pretty)
pub const LOG_FORMAT: &str = "LOG_FORMAT";

/// Include file and line in log records when set
pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";

/// Service name attached to log records
pub const SERVICE_NAME: &str = "SERVICE_NAME";
