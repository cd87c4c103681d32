// ABOUTME: Calculator configuration with defaults and NUTRITION_* environment overrides
// ABOUTME: Step budget, default servings, rendering precision and catalog paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator Configuration Module
//!
//! Defaults come from `nutrition_core::constants::defaults`; every value can be
//! overridden through the environment variables in
//! `nutrition_core::constants::env_config`.

/// Configuration error types
pub mod error;

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

use nutrition_core::constants::{defaults, env_config};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub use error::ConfigError;

use crate::units::UnitRegistry;

/// Global configuration singleton
static CALCULATOR_CONFIG: OnceLock<CalculatorConfig> = OnceLock::new();

/// Upper bound on rendered significant figures
const MAX_SIGNIFICANT_FIGURES: usize = 17;

/// Settings for aggregation and reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Substitution budget for a single unit simplification
    pub max_simplify_steps: usize,
    /// Servings per recipe when neither the caller nor the recipe says otherwise
    pub default_servings: f64,
    /// Significant figures used when rendering quantities
    pub significant_figures: usize,
    /// Ingredient catalog location
    pub ingredients_path: PathBuf,
    /// Recipe catalog location
    pub recipes_path: PathBuf,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_simplify_steps: defaults::MAX_SIMPLIFY_STEPS,
            default_servings: defaults::DEFAULT_SERVINGS,
            significant_figures: defaults::SIGNIFICANT_FIGURES,
            ingredients_path: PathBuf::from(defaults::INGREDIENTS_PATH),
            recipes_path: PathBuf::from(defaults::RECIPES_PATH),
        }
    }
}

impl CalculatorConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load calculator config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_simplify_steps == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_simplify_steps must be > 0",
            ));
        }

        if !self.default_servings.is_finite() || self.default_servings <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_servings must be a positive number",
            ));
        }

        if !(1..=MAX_SIGNIFICANT_FIGURES).contains(&self.significant_figures) {
            return Err(ConfigError::ValueOutOfRange(
                "significant_figures must be between 1 and 17",
            ));
        }

        if self.ingredients_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("ingredients_path"));
        }

        if self.recipes_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("recipes_path"));
        }

        Ok(())
    }

    /// Registry with the standard conversion ladder and this step budget
    #[must_use]
    pub fn registry(&self) -> UnitRegistry {
        UnitRegistry::builder()
            .with_standard_ladder()
            .max_simplify_steps(self.max_simplify_steps)
            .build()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::MAX_SIMPLIFY_STEPS,
            &mut self.max_simplify_steps,
        )?;
        Self::apply_env_var(env_config::DEFAULT_SERVINGS, &mut self.default_servings)?;
        Self::apply_env_var(
            env_config::SIGNIFICANT_FIGURES,
            &mut self.significant_figures,
        )?;

        // Paths
        Self::apply_env_var(env_config::INGREDIENTS_PATH, &mut self.ingredients_path)?;
        Self::apply_env_var(env_config::RECIPES_PATH, &mut self.recipes_path)?;

        Ok(self)
    }
}
