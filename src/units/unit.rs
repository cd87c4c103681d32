// ABOUTME: Exponent-vector unit representation over named dimension symbols
// ABOUTME: Multiplication, division, integer powers, parsing and canonical rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Units as exponent vectors.
//!
//! A [`Unit`] maps dimension symbols (`g`, `ml`, `kcal`, `%`) to nonzero
//! integer powers. Zero powers are dropped by every constructor and operator,
//! so an empty map is exactly the dimensionless unit.
//!
//! Equality and hashing go through the canonical rendering: positive powers
//! sorted by symbol, then `/` and the negative powers, with `^n` only when the
//! magnitude exceeds one (`g`, `g/ml`, `g^2/ml`, `1/ml`).

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul};

use nutrition_core::constants::units::DIMENSIONLESS_TOKEN;
use nutrition_core::{AlgebraError, AlgebraResult};
use serde::{Deserialize, Serialize};

/// Exponent vector over dimension symbols
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Unit {
    powers: BTreeMap<String, i32>,
}

impl Unit {
    /// The dimensionless unit
    #[must_use]
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// A single symbol raised to the first power
    #[must_use]
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self::from_powers([(symbol.into(), 1)])
    }

    /// Build a unit from `(symbol, power)` pairs.
    ///
    /// Repeated symbols have their powers summed; zero totals are dropped.
    #[must_use]
    pub fn from_powers<S, I>(powers: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, i32)>,
    {
        let mut map = BTreeMap::new();
        for (symbol, power) in powers {
            *map.entry(symbol.into()).or_insert(0) += power;
        }
        map.retain(|_, power| *power != 0);
        Self { powers: map }
    }

    /// Parse unit text of the form `num`, `num/den` or `1/den`.
    ///
    /// Each side is a single token: a word of letters, digits and underscores,
    /// or `%`. A `1` on either side contributes no dimension. Embedded `^`
    /// exponents are not accepted.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::Parse` for empty tokens, more than one `/`, or
    /// tokens containing other characters.
    pub fn parse(text: &str) -> AlgebraResult<Self> {
        let mut parts = text.split('/');
        let numerator = parts.next().unwrap_or_default();
        let denominator = parts.next();
        if parts.next().is_some() {
            return Err(AlgebraError::parse(
                text,
                "expected at most one '/' separator",
            ));
        }

        let numerator = Self::parse_token(text, numerator)?;
        match denominator {
            None => Ok(numerator),
            Some(token) => Ok(&numerator / &Self::parse_token(text, token)?),
        }
    }

    fn parse_token(text: &str, token: &str) -> AlgebraResult<Self> {
        if token == DIMENSIONLESS_TOKEN {
            return Ok(Self::dimensionless());
        }
        if !is_valid_token(token) {
            return Err(AlgebraError::parse(
                text,
                format!("invalid unit token '{token}'"),
            ));
        }
        Ok(Self::symbol(token))
    }

    /// Dimension powers, keyed by symbol in sorted order
    #[must_use]
    pub const fn powers(&self) -> &BTreeMap<String, i32> {
        &self.powers
    }

    /// Power of `symbol`, zero when absent
    #[must_use]
    pub fn power_of(&self, symbol: &str) -> i32 {
        self.powers.get(symbol).copied().unwrap_or(0)
    }

    /// Whether `symbol` appears with a nonzero power
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.powers.contains_key(symbol)
    }

    /// True when no dimension remains
    #[must_use]
    pub fn is_dimensionless(&self) -> bool {
        self.powers.is_empty()
    }

    /// Raise every power by `exponent`; `pow(0)` is always dimensionless
    #[must_use]
    pub fn pow(&self, exponent: i32) -> Self {
        Self::from_powers(
            self.powers
                .iter()
                .map(|(symbol, power)| (symbol.clone(), power * exponent)),
        )
    }

    /// Canonical rendering used for equality, hashing and registry keys.
    ///
    /// The dimensionless unit renders as `1`.
    #[must_use]
    pub fn canonical(&self) -> String {
        let positive = render_powers(self.powers.iter().filter(|(_, p)| **p > 0));
        let negative = render_powers(self.powers.iter().filter(|(_, p)| **p < 0));

        let numerator = if positive.is_empty() {
            DIMENSIONLESS_TOKEN.to_owned()
        } else {
            positive
        };

        if negative.is_empty() {
            numerator
        } else {
            format!("{numerator}/{negative}")
        }
    }

    fn combine(&self, other: &Self, sign: i32) -> Self {
        Self::from_powers(
            self.powers
                .iter()
                .map(|(symbol, power)| (symbol.clone(), *power))
                .chain(
                    other
                        .powers
                        .iter()
                        .map(|(symbol, power)| (symbol.clone(), power * sign)),
                ),
        )
    }
}

fn is_valid_token(token: &str) -> bool {
    token == "%" || (!token.is_empty() && token.chars().all(|c| c.is_alphanumeric() || c == '_'))
}

fn render_powers<'a>(powers: impl Iterator<Item = (&'a String, &'a i32)>) -> String {
    powers
        .map(|(symbol, power)| match power.abs() {
            1 => symbol.clone(),
            magnitude => format!("{symbol}^{magnitude}"),
        })
        .collect()
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl TryFrom<String> for Unit {
    type Error = AlgebraError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.canonical()
    }
}

impl Mul for &Unit {
    type Output = Unit;

    fn mul(self, rhs: Self) -> Unit {
        self.combine(rhs, 1)
    }
}

impl Mul for Unit {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Div for &Unit {
    type Output = Unit;

    fn div(self, rhs: Self) -> Unit {
        self.combine(rhs, -1)
    }
}

impl Div for Unit {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        &self / &rhs
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_rendering() {
        let unit = Unit::from_powers([("ml", -1), ("g", 2), ("kcal", 1), ("L", -2)]);
        assert_eq!(unit.canonical(), "g^2kcal/L^2ml");
        assert_eq!(Unit::from_powers([("ml", -1)]).canonical(), "1/ml");
        assert_eq!(Unit::dimensionless().canonical(), "1");
    }

    #[test]
    fn test_zero_powers_removed() {
        let unit = Unit::from_powers([("g", 1), ("ml", 0), ("g", -1)]);
        assert!(unit.is_dimensionless());
        assert!(unit.powers().is_empty());
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(Unit::parse("g").unwrap(), Unit::symbol("g"));
        assert_eq!(
            Unit::parse("g/ml").unwrap(),
            Unit::from_powers([("g", 1), ("ml", -1)])
        );
        assert_eq!(Unit::parse("1/ml").unwrap(), Unit::from_powers([("ml", -1)]));
        assert_eq!(Unit::parse("%").unwrap(), Unit::symbol("%"));
        assert!(Unit::parse("1").unwrap().is_dimensionless());
        assert!(Unit::parse("g/g").unwrap().is_dimensionless());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for text in ["", "g/", "/ml", "g/ml/L", "g^2", "g ml", "g-1"] {
            assert!(Unit::parse(text).is_err(), "'{text}' should not parse");
        }
    }

    #[test]
    fn test_serde_as_canonical_string() {
        let unit = Unit::parse("kcal/g").unwrap();
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, "\"kcal/g\"");
        let back: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unit);
    }
}
