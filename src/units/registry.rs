// ABOUTME: Table of registered scale equivalences between units
// ABOUTME: Built once, immutable afterwards, and passed explicitly into the algebra
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unit equivalence registry.
//!
//! Entries are keyed by canonical unit strings. `scales[a][b]` holds the
//! quantity "`a` per one `b`" (for `1 g = 1000 mg`, `scales["g"]["mg"]` is
//! `0.001 g/mg` and `scales["mg"]["g"]` is `1000 mg/g`). Registration is
//! always symmetric.
//!
//! The registry is assembled through [`UnitRegistryBuilder`] and never mutated
//! afterwards, so a built registry can be shared freely between threads.

use std::collections::BTreeMap;

use nutrition_core::constants::defaults::MAX_SIMPLIFY_STEPS;
use nutrition_core::constants::units::{ASSUMED_GRAMS_PER_ML, GRAM, LADDER, MILLILITER};
use nutrition_core::{AlgebraError, AlgebraResult};
use tracing::debug;

use super::quantity::Quantity;
use super::unit::Unit;

/// Immutable table of unit equivalences
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    scales: BTreeMap<String, BTreeMap<String, Quantity>>,
    max_simplify_steps: usize,
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl UnitRegistry {
    /// Start assembling a registry
    #[must_use]
    pub fn builder() -> UnitRegistryBuilder {
        UnitRegistryBuilder::new()
    }

    /// Registry with no equivalences; only identical units combine
    #[must_use]
    pub fn empty() -> Self {
        UnitRegistryBuilder::new().build()
    }

    /// Registry holding the shipped conversion ladder:
    /// `1 mg = 1000 ug`, `1 g = 1000 mg`, `1 kg = 1000 g`, `1 L = 1000 ml`,
    /// plus the `1 ml = 1 g` density bridge
    #[must_use]
    pub fn standard() -> Self {
        UnitRegistryBuilder::new().with_standard_ladder().build()
    }

    /// Substitution budget for a single simplification
    #[must_use]
    pub const fn max_simplify_steps(&self) -> usize {
        self.max_simplify_steps
    }

    /// Number of units with at least one registered equivalence
    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// True when nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Directly registered scale: `to` per one `from`, by canonical string
    #[must_use]
    pub fn direct(&self, to: &str, from: &str) -> Option<&Quantity> {
        self.scales.get(to).and_then(|targets| targets.get(from))
    }

    /// Scale converting `from` into `to`: a direct entry, or a path through
    /// one intermediate unit composed without simplification
    #[must_use]
    pub fn scale_factor(&self, to: &Unit, from: &Unit) -> Option<Quantity> {
        let to_key = to.canonical();
        let from_key = from.canonical();

        if let Some(direct) = self.direct(&to_key, &from_key) {
            return Some(direct.clone());
        }

        self.scales.get(&to_key)?.iter().find_map(|(via, to_per_via)| {
            self.direct(via, &from_key).map(|via_per_from| {
                debug!(from = %from_key, to = %to_key, via = %via, "one-hop unit conversion");
                Quantity::new(
                    to_per_via.value() * via_per_from.value(),
                    to_per_via.unit() * via_per_from.unit(),
                )
            })
        })
    }

    /// First substitution applicable to `unit`: a symbol in `unit` whose
    /// entry targets another symbol also in `unit`. Returns the symbol to
    /// eliminate and the scale "source per target".
    #[must_use]
    pub fn find_substitution(&self, unit: &Unit) -> Option<(&str, &Quantity)> {
        unit.powers().keys().find_map(|source| {
            self.scales.get(source)?.iter().find_map(|(target, scale)| {
                (target != source && unit.contains(target)).then_some((target.as_str(), scale))
            })
        })
    }
}

/// Builder for [`UnitRegistry`]
#[derive(Debug, Clone)]
pub struct UnitRegistryBuilder {
    scales: BTreeMap<String, BTreeMap<String, Quantity>>,
    max_simplify_steps: usize,
}

impl Default for UnitRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitRegistryBuilder {
    /// Empty builder with the default step budget
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scales: BTreeMap::new(),
            max_simplify_steps: MAX_SIMPLIFY_STEPS,
        }
    }

    /// Set the simplification step budget
    #[must_use]
    pub const fn max_simplify_steps(mut self, steps: usize) -> Self {
        self.max_simplify_steps = steps;
        self
    }

    /// Add the metric mass/volume ladder and the volume-to-mass bridge.
    ///
    /// The bridge assumes every ingredient has the density of water. It is a
    /// known approximation kept until ingredients carry their own densities.
    #[must_use]
    pub fn with_standard_ladder(mut self) -> Self {
        for (larger, smaller, smaller_per_larger) in LADDER {
            self.insert_pair(
                &Quantity::of(1.0, larger),
                &Quantity::of(smaller_per_larger, smaller),
            );
        }
        self.insert_pair(
            &Quantity::of(1.0, MILLILITER),
            &Quantity::of(ASSUMED_GRAMS_PER_ML, GRAM),
        );
        debug!(
            grams_per_ml = ASSUMED_GRAMS_PER_ML,
            "registered volume-to-mass bridge at water density"
        );
        self
    }

    /// Register `a` and `b` as the same amount, in both directions
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::InvalidScaleFactor` when either side is
    /// dimensionless or both share a unit, and `AlgebraError::DivisionByZero`
    /// when either value is zero.
    pub fn register(mut self, a: &Quantity, b: &Quantity) -> AlgebraResult<Self> {
        if a.is_dimensionless() || b.is_dimensionless() {
            return Err(AlgebraError::invalid_scale(
                format!("{a} = {b}"),
                "equivalences need a unit on both sides",
            ));
        }
        if a.unit() == b.unit() {
            return Err(AlgebraError::invalid_scale(
                format!("{a} = {b}"),
                "both sides share a unit",
            ));
        }
        if a.value() == 0.0 || b.value() == 0.0 {
            return Err(AlgebraError::DivisionByZero {
                dividend: format!("{a} = {b}"),
            });
        }
        self.insert_pair(a, b);
        Ok(self)
    }

    fn insert_pair(&mut self, a: &Quantity, b: &Quantity) {
        let a_key = a.unit().canonical();
        let b_key = b.unit().canonical();

        let a_per_b = Quantity::new(a.value() / b.value(), a.unit() / b.unit());
        let b_per_a = Quantity::new(b.value() / a.value(), b.unit() / a.unit());

        self.scales
            .entry(a_key.clone())
            .or_default()
            .insert(b_key.clone(), a_per_b);
        self.scales.entry(b_key).or_default().insert(a_key, b_per_a);
    }

    /// Freeze the registry
    #[must_use]
    pub fn build(self) -> UnitRegistry {
        UnitRegistry {
            scales: self.scales,
            max_simplify_steps: self.max_simplify_steps,
        }
    }
}
