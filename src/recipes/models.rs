// ABOUTME: Data models for catalog ingredients and recipes
// ABOUTME: Defines FoodGroup, Ingredient, RecipeIngredient, Recipe and the ingredient catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::nutrition::Nutrition;
use crate::units::Quantity;

/// Food group an ingredient belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoodGroup {
    /// Fresh or dried fruit
    Fruit,
    /// Vegetables, legumes and herbs
    Vegetable,
    /// Meat, poultry, fish and eggs
    Meat,
    /// Milk and milk products
    Dairy,
    /// Anything else (grains, oils, sugar, ...)
    #[default]
    Other,
}

impl FoodGroup {
    /// Lowercase name as it appears in catalog files
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fruit => "fruit",
            Self::Vegetable => "vegetable",
            Self::Meat => "meat",
            Self::Dairy => "dairy",
            Self::Other => "other",
        }
    }
}

impl Display for FoodGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog ingredient with its nutrition record
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    /// Catalog key referenced by recipes
    pub key: String,
    /// Display name
    pub name: String,
    /// Food group
    pub group: FoodGroup,
    /// Physical amount of one catalog unit (one egg, one clove, ...)
    pub unit_quantity: Quantity,
    /// Nutrients per `nutrition.quantity()`
    pub nutrition: Nutrition,
}

impl Ingredient {
    /// Create an ingredient in the `other` food group
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        unit_quantity: Quantity,
        nutrition: Nutrition,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            group: FoodGroup::default(),
            unit_quantity,
            nutrition,
        }
    }

    /// Set the food group
    #[must_use]
    pub const fn with_group(mut self, group: FoodGroup) -> Self {
        self.group = group;
        self
    }
}

/// Ingredients keyed by catalog key
pub type IngredientCatalog = HashMap<String, Ingredient>;

/// Amount of one catalog ingredient used by a recipe
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    /// Catalog key of the ingredient
    pub key: String,
    /// Physical amount, or a dimensionless count of catalog units
    pub amount: Quantity,
}

impl RecipeIngredient {
    /// Create a recipe ingredient line
    #[must_use]
    pub fn new(key: impl Into<String>, amount: Quantity) -> Self {
        Self {
            key: key.into(),
            amount,
        }
    }
}

/// A recipe with its ingredient amounts and serving size
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Unique recipe key
    pub key: String,
    /// Recipe name
    pub name: String,
    /// Recipe description
    pub description: String,
    /// Liquid recipes aggregate against millilitres instead of grams
    pub is_liquid: bool,
    /// Declared serving size: a count of servings or a physical amount
    pub service_size: Option<Quantity>,
    /// Ingredient lines in recipe order
    pub ingredients: Vec<RecipeIngredient>,
    /// Cooking instructions (ordered steps)
    pub instructions: Vec<String>,
}

impl Recipe {
    /// Create a solid recipe with no ingredients
    #[must_use]
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: String::new(),
            is_liquid: false,
            service_size: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    /// Add a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the recipe as liquid
    #[must_use]
    pub const fn with_liquid(mut self, is_liquid: bool) -> Self {
        self.is_liquid = is_liquid;
        self
    }

    /// Set the serving size
    #[must_use]
    pub fn with_service_size(mut self, service_size: Quantity) -> Self {
        self.service_size = Some(service_size);
        self
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, key: impl Into<String>, amount: Quantity) -> Self {
        self.ingredients.push(RecipeIngredient::new(key, amount));
        self
    }

    /// Add instruction steps
    #[must_use]
    pub fn with_instructions(mut self, instructions: Vec<String>) -> Self {
        self.instructions.extend(instructions);
        self
    }
}
