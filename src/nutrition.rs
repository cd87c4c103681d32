// ABOUTME: Nutrition records: a reference quantity plus an ordered map of nutrient quantities
// ABOUTME: Supports merging records through the unit registry and proportional scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition vectors built on the quantity algebra.
//!
//! A [`Nutrition`] says "per `quantity`, the food carries these nutrients".
//! Nutrient units are independent of each other (kcal next to g next to %);
//! only same-named nutrients are ever combined.

use std::mem;

use nutrition_core::constants::defaults::REFERENCE_QUANTITY_KEY;
use nutrition_core::constants::units::{GRAM, MILLILITER};
use nutrition_core::{AlgebraError, AlgebraResult};

use crate::units::{Quantity, UnitRegistry};

/// Nutrient quantities keyed by name, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientMap {
    entries: Vec<(String, Quantity)>,
}

impl NutrientMap {
    /// Empty map
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Quantity stored under `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Quantity> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, quantity)| quantity)
    }

    /// Insert or replace `name`. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, quantity: Quantity) -> Option<Quantity> {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            return Some(mem::replace(&mut slot.1, quantity));
        }
        self.entries.push((name, quantity));
        None
    }

    /// Whether `name` is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Quantity)> {
        self.entries
            .iter()
            .map(|(name, quantity)| (name.as_str(), quantity))
    }

    /// Nutrient names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of nutrients
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no nutrients are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn try_map<F>(&self, f: F) -> AlgebraResult<Self>
    where
        F: Fn(&Quantity) -> AlgebraResult<Quantity>,
    {
        let entries = self
            .entries
            .iter()
            .map(|(name, quantity)| Ok((name.clone(), f(quantity)?)))
            .collect::<AlgebraResult<Vec<_>>>()?;
        Ok(Self { entries })
    }
}

impl<S: Into<String>> FromIterator<(S, Quantity)> for NutrientMap {
    fn from_iter<T: IntoIterator<Item = (S, Quantity)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, quantity) in iter {
            map.insert(name, quantity);
        }
        map
    }
}

/// Nutrient values defined against a reference quantity
#[derive(Debug, Clone, PartialEq)]
pub struct Nutrition {
    quantity: Quantity,
    values: NutrientMap,
}

impl Nutrition {
    /// Build a record from raw catalog values.
    ///
    /// Without values the record is empty, with a zero reference of `0 g`
    /// (or `0 ml` when `is_liquid`). With values, the `quantity` entry
    /// becomes the reference and every other entry a nutrient.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::Parse` when values are given without a
    /// `quantity` entry.
    pub fn create(values: Option<NutrientMap>, is_liquid: bool) -> AlgebraResult<Self> {
        let Some(values) = values else {
            return Ok(Self::empty(is_liquid));
        };

        let quantity = values.get(REFERENCE_QUANTITY_KEY).cloned().ok_or_else(|| {
            AlgebraError::parse(
                values.names().collect::<Vec<_>>().join(", "),
                format!("nutrition values need a '{REFERENCE_QUANTITY_KEY}' entry"),
            )
        })?;
        let nutrients = values
            .iter()
            .filter(|(name, _)| *name != REFERENCE_QUANTITY_KEY)
            .map(|(name, value)| (name.to_owned(), value.clone()))
            .collect();

        Ok(Self::from_parts(quantity, nutrients))
    }

    /// Empty record with a zero reference in grams, or millilitres for liquids
    #[must_use]
    pub fn empty(is_liquid: bool) -> Self {
        let symbol = if is_liquid { MILLILITER } else { GRAM };
        Self::from_parts(Quantity::of(0.0, symbol), NutrientMap::new())
    }

    /// Record from an already separated reference and nutrient map
    #[must_use]
    pub const fn from_parts(quantity: Quantity, values: NutrientMap) -> Self {
        Self { quantity, values }
    }

    /// Reference quantity the nutrients are defined against
    #[must_use]
    pub const fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    /// Nutrient quantities in catalog order
    #[must_use]
    pub const fn values(&self) -> &NutrientMap {
        &self.values
    }

    /// Nutrient quantity by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Quantity> {
        self.values.get(name)
    }

    /// True for a zero reference with no nutrients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantity.value() == 0.0 && self.values.is_empty()
    }

    /// Merge two records. Shared nutrients are summed in the left record's
    /// units; the rest pass through unchanged.
    ///
    /// An empty left record is an identity: `other` is returned in the empty
    /// record's reference unit when it converts, and as is otherwise, so a
    /// record referenced by a count can seed a total.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::IncompatibleUnits` when the reference quantities
    /// or a shared nutrient cannot be summed.
    pub fn add(&self, other: &Self, registry: &UnitRegistry) -> AlgebraResult<Self> {
        if self.is_empty() {
            return match other.quantity.convert_to(self.quantity.unit(), registry) {
                Ok(quantity) => Ok(Self::from_parts(quantity, other.values.clone())),
                Err(AlgebraError::IncompatibleUnits { .. }) => Ok(other.clone()),
                Err(e) => Err(e),
            };
        }
        if !Quantity::are_valid_units(&self.quantity, &other.quantity, registry) {
            return Err(AlgebraError::incompatible(
                self.quantity.unit().canonical(),
                other.quantity.unit().canonical(),
            ));
        }
        let quantity = self.quantity.add(&other.quantity, registry)?;

        let mut values = self.values.clone();
        for (name, value) in other.values.iter() {
            let merged = match values.get(name) {
                Some(existing) => existing.add(value, registry)?,
                None => value.clone(),
            };
            values.insert(name, merged);
        }

        Ok(Self::from_parts(quantity, values))
    }

    /// Scale the reference and every nutrient by a scalar
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::InvalidScaleFactor` for a non-finite factor.
    pub fn scale_by(&self, factor: f64) -> AlgebraResult<Self> {
        if !factor.is_finite() {
            return Err(AlgebraError::invalid_scale(
                factor.to_string(),
                "scale factor must be finite",
            ));
        }
        Ok(Self::from_parts(
            self.quantity.scale(factor),
            self.values.try_map(|value| Ok(value.scale(factor)))?,
        ))
    }

    /// Scale by a dimensionless quantity
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::InvalidScaleFactor` when `factor` carries a unit.
    pub fn scale_by_quantity(&self, factor: &Quantity) -> AlgebraResult<Self> {
        Self::require_dimensionless(factor)?;
        self.scale_by(factor.value())
    }

    /// Divide the reference and every nutrient by a scalar
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DivisionByZero` when `divisor` is zero and
    /// `AlgebraError::InvalidScaleFactor` when it is not finite.
    pub fn divide_by(&self, divisor: f64) -> AlgebraResult<Self> {
        if !divisor.is_finite() {
            return Err(AlgebraError::invalid_scale(
                divisor.to_string(),
                "divisor must be finite",
            ));
        }
        Ok(Self::from_parts(
            self.quantity.divide_scalar(divisor)?,
            self.values.try_map(|value| value.divide_scalar(divisor))?,
        ))
    }

    /// Divide by a dimensionless quantity
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::InvalidScaleFactor` when `divisor` carries a unit
    /// and `AlgebraError::DivisionByZero` when it is zero.
    pub fn divide_by_quantity(&self, divisor: &Quantity) -> AlgebraResult<Self> {
        Self::require_dimensionless(divisor)?;
        self.divide_by(divisor.value())
    }

    fn require_dimensionless(factor: &Quantity) -> AlgebraResult<()> {
        if factor.is_dimensionless() {
            Ok(())
        } else {
            Err(AlgebraError::invalid_scale(
                factor.to_string(),
                "nutrition can only be scaled by a dimensionless factor",
            ))
        }
    }
}
