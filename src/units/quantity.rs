// ABOUTME: Scalar values tagged with units, with dimension-preserving arithmetic
// ABOUTME: Addition through registered conversions, composition, powers and simplification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Quantities: a value paired with a [`Unit`].
//!
//! Scalar scaling and quantity composition are separate operations. Every
//! operation that composes units simplifies the result against the
//! [`UnitRegistry`] it is given, and every operation that might need a
//! conversion takes the registry explicitly.

use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use nutrition_core::constants::defaults::SIGNIFICANT_FIGURES;
use nutrition_core::{AlgebraError, AlgebraResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::format::format_significant;
use super::registry::UnitRegistry;
use super::unit::Unit;

/// `[<] number unit`, where number may carry an exponent and unit is one or
/// two slash-separated tokens. Unit tokens never start with a digit, so the
/// number cannot lose trailing digits to the unit. A reciprocal unit (`1/ml`)
/// must be separated from the number by whitespace.
/// Stored as Option so a compilation failure surfaces as a parse error
static QUANTITY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^<?\s*(?P<value>\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)",
        r"(?:\s*(?P<unit>(?:[^\W\d]\w*|%)(?:/(?:[^\W\d]\w*|%))?)",
        r"|\s+(?P<inverse>1/(?:[^\W\d]\w*|%)))$",
    ))
    .ok()
});

/// Quantity as it appears in catalog documents: unit text or a bare count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantitySpec {
    /// Bare number, read as a dimensionless count
    Number(f64),
    /// Quantity text such as `"100g"` or `"<0.5mg"`
    Text(String),
}

/// A scalar value paired with a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    /// Create a quantity
    #[must_use]
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Quantity with no unit (a count or a ratio)
    #[must_use]
    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Unit::dimensionless())
    }

    /// Quantity of a single symbol, e.g. `Quantity::of(5.0, "g")`
    #[must_use]
    pub fn of(value: f64, symbol: &str) -> Self {
        Self::new(value, Unit::symbol(symbol))
    }

    /// Parse quantity text such as `"5g"`, `"<0.1mg"` or `"250 ml"`.
    ///
    /// A leading `<` is accepted and ignored; "less than" values are treated
    /// as exact. The unit may be a single token or `num/den`.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::Parse` when the text is not a number followed by
    /// a unit.
    pub fn parse(text: &str) -> AlgebraResult<Self> {
        let trimmed = text.trim();
        let captures = QUANTITY_PATTERN
            .as_ref()
            .and_then(|pattern| pattern.captures(trimmed))
            .ok_or_else(|| AlgebraError::parse(text, "expected a number followed by a unit"))?;

        let value = captures["value"]
            .parse::<f64>()
            .map_err(|e| AlgebraError::parse(text, e.to_string()))?;
        let unit_text = captures
            .name("unit")
            .or_else(|| captures.name("inverse"))
            .map_or("", |m| m.as_str());
        let unit = Unit::parse(unit_text)?;

        Ok(Self::new(value, unit))
    }

    /// Build a quantity from catalog input
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::Parse` if text input does not parse.
    pub fn from_spec(spec: &QuantitySpec) -> AlgebraResult<Self> {
        match spec {
            QuantitySpec::Number(value) => Ok(Self::dimensionless(*value)),
            QuantitySpec::Text(text) => Self::parse(text),
        }
    }

    /// Scalar value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Unit of this quantity
    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// True when the unit is dimensionless
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    /// Whether two values agree within `tolerance` and share a unit
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.unit == other.unit && (self.value - other.value).abs() <= tolerance
    }

    /// Multiply the value by a scalar; the unit is unchanged
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.value * factor, self.unit.clone())
    }

    /// Divide the value by a scalar; the unit is unchanged
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DivisionByZero` when `divisor` is zero.
    pub fn divide_scalar(&self, divisor: f64) -> AlgebraResult<Self> {
        if divisor == 0.0 {
            return Err(AlgebraError::DivisionByZero {
                dividend: self.to_string(),
            });
        }
        Ok(Self::new(self.value / divisor, self.unit.clone()))
    }

    /// Add two quantities.
    ///
    /// Equal units sum directly. Otherwise `other` is converted into this
    /// quantity's unit through the registry, and the sum keeps this unit.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::IncompatibleUnits` when no conversion path
    /// exists; units are never coerced.
    pub fn add(&self, other: &Self, registry: &UnitRegistry) -> AlgebraResult<Self> {
        if self.unit == other.unit {
            return Ok(Self::new(self.value + other.value, self.unit.clone()));
        }

        let converted = other.convert_to(&self.unit, registry).map_err(|e| match e {
            AlgebraError::IncompatibleUnits { .. } => {
                AlgebraError::incompatible(self.unit.canonical(), other.unit.canonical())
            }
            other_error => other_error,
        })?;
        Ok(Self::new(self.value + converted.value, self.unit.clone()))
    }

    /// Express this quantity in `target` using a registered conversion
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::IncompatibleUnits` when the registry has no
    /// direct or one-hop path between the units.
    pub fn convert_to(&self, target: &Unit, registry: &UnitRegistry) -> AlgebraResult<Self> {
        if self.unit == *target {
            return Ok(self.clone());
        }

        let incompatible =
            || AlgebraError::incompatible(self.unit.canonical(), target.canonical());
        let scale = registry
            .scale_factor(target, &self.unit)
            .ok_or_else(incompatible)?;
        let converted = self.multiply(&scale, registry)?;

        if converted.unit == *target {
            debug!(from = %self, to = %converted, "converted quantity");
            Ok(converted)
        } else {
            Err(incompatible())
        }
    }

    /// Multiply two quantities, composing and then simplifying their units
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::UnresolvableUnit` if simplification exhausts the
    /// registry's step budget.
    pub fn multiply(&self, other: &Self, registry: &UnitRegistry) -> AlgebraResult<Self> {
        Self::new(self.value * other.value, &self.unit * &other.unit).simplify(registry)
    }

    /// Divide two quantities, composing and then simplifying their units
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DivisionByZero` for a zero-valued divisor and
    /// `AlgebraError::UnresolvableUnit` if simplification does not settle.
    pub fn divide(&self, other: &Self, registry: &UnitRegistry) -> AlgebraResult<Self> {
        if other.value == 0.0 {
            return Err(AlgebraError::DivisionByZero {
                dividend: self.to_string(),
            });
        }
        Self::new(self.value / other.value, &self.unit / &other.unit).simplify(registry)
    }

    /// Raise value and unit to an integer power, then simplify
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::UnresolvableUnit` if simplification does not settle.
    pub fn pow(&self, exponent: i32, registry: &UnitRegistry) -> AlgebraResult<Self> {
        Self::new(self.value.powi(exponent), self.unit.pow(exponent)).simplify(registry)
    }

    /// Substitute equivalent dimensions until no registered substitution applies.
    ///
    /// Each step picks a symbol whose registry entry targets another symbol
    /// already in the unit, and replaces the target with the source while
    /// rescaling the value. A step always removes the target symbol, so the
    /// shipped ladder reaches a fixed point quickly; the registry's step
    /// budget bounds any other configuration.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::UnresolvableUnit` when the budget is exhausted.
    pub fn simplify(&self, registry: &UnitRegistry) -> AlgebraResult<Self> {
        let budget = registry.max_simplify_steps();
        let mut current = self.clone();
        let mut steps = 0;

        while !current.unit.is_dimensionless() {
            let Some((target, scale)) = registry.find_substitution(&current.unit) else {
                break;
            };
            if steps >= budget {
                return Err(AlgebraError::UnresolvableUnit {
                    unit: current.unit.canonical(),
                    steps: budget,
                });
            }

            let power = current.unit.power_of(target);
            trace!(unit = %current.unit, eliminated = %target, power, "simplification step");
            current = Self::new(
                current.value * scale.value.powi(power),
                &current.unit * &scale.unit.pow(power),
            );
            steps += 1;
        }

        Ok(current)
    }

    /// Whether `a` and `b` may be summed: identical units, either side
    /// dimensionless, or a direct or one-hop registry path between them.
    #[must_use]
    pub fn are_valid_units(a: &Self, b: &Self, registry: &UnitRegistry) -> bool {
        a.unit == b.unit
            || a.is_dimensionless()
            || b.is_dimensionless()
            || registry.scale_factor(&a.unit, &b.unit).is_some()
    }
}

/// Renders `{value}{unit}` with three significant figures by default; a
/// precision (`{:.5}`) selects a different number of figures. Dimensionless
/// quantities render the bare value; a reciprocal unit is set off by a space
/// (`0.04 1/g`).
impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let figures = f.precision().unwrap_or(SIGNIFICANT_FIGURES);
        let value = format_significant(self.value, figures);
        if self.unit.is_dimensionless() {
            return f.write_str(&value);
        }
        let unit = self.unit.canonical();
        if unit.starts_with("1/") {
            write!(f, "{value} {unit}")
        } else {
            write!(f, "{value}{unit}")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_less_than_prefix() {
        let quantity = Quantity::parse("<0.5mg").unwrap();
        assert!(quantity.approx_eq(&Quantity::of(0.5, "mg"), 1e-12));
    }

    #[test]
    fn test_parse_percent_and_composite() {
        assert_eq!(Quantity::parse("12%").unwrap(), Quantity::of(12.0, "%"));
        assert_eq!(
            Quantity::parse("4kcal/g").unwrap(),
            Quantity::new(4.0, Unit::parse("kcal/g").unwrap())
        );
        assert_eq!(Quantity::parse("250 ml").unwrap(), Quantity::of(250.0, "ml"));
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for text in [
            "", "g", "5", "-5g", "five g", "5g extra", "<", "5g/ml/L", "100", "11", "12", "51/ml",
            "5 2g",
        ] {
            assert!(Quantity::parse(text).is_err(), "'{text}' should not parse");
        }
    }

    #[test]
    fn test_parse_keeps_every_digit_of_the_value() {
        assert_eq!(Quantity::parse("100g").unwrap(), Quantity::of(100.0, "g"));
        assert_eq!(Quantity::parse("12 kcal").unwrap(), Quantity::of(12.0, "kcal"));
        assert_eq!(Quantity::parse("1e3mg").unwrap(), Quantity::of(1000.0, "mg"));
    }

    #[test]
    fn test_reciprocal_unit_is_set_off_by_a_space() {
        let per_gram = Quantity::new(0.04, Unit::parse("1/g").unwrap());

        assert_eq!(per_gram.to_string(), "0.04 1/g");
        assert_eq!(Quantity::parse("0.04 1/g").unwrap(), per_gram);
    }

    #[test]
    fn test_display_uses_significant_figures() {
        assert_eq!(Quantity::of(5.5, "g").to_string(), "5.5g");
        assert_eq!(Quantity::of(1234.0, "mg").to_string(), "1.23e+03mg");
        assert_eq!(format!("{:.5}", Quantity::of(1234.0, "mg")), "1234mg");
        assert_eq!(Quantity::dimensionless(2.0).to_string(), "2");
    }

    #[test]
    fn test_divide_scalar_rejects_zero() {
        let err = Quantity::of(1.0, "g").divide_scalar(0.0).unwrap_err();
        assert!(matches!(err, AlgebraError::DivisionByZero { .. }));
    }
}
