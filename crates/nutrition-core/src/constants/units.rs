// ABOUTME: Unit symbols and physical conversion ladder constants
// ABOUTME: Mass and volume steps plus the fixed volume-to-mass density bridge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Micrograms
pub const MICROGRAM: &str = "ug";
/// Milligrams
pub const MILLIGRAM: &str = "mg";
/// Grams
pub const GRAM: &str = "g";
/// Kilograms
pub const KILOGRAM: &str = "kg";
/// Milliliters
pub const MILLILITER: &str = "ml";
/// Liters
pub const LITER: &str = "L";

/// Numerator token meaning "no positive dimension" in unit text
pub const DIMENSIONLESS_TOKEN: &str = "1";

/// Each step of the metric ladder is a factor of one thousand
pub const METRIC_STEP: f64 = 1000.0;

/// Grams per milliliter assumed when bridging volume to mass.
///
/// This is the density of water. It is an approximation for every other
/// ingredient and stays one until per-ingredient densities exist.
pub const ASSUMED_GRAMS_PER_ML: f64 = 1.0;

/// `(larger, smaller, smaller-per-larger)` steps registered at startup
pub const LADDER: [(&str, &str, f64); 4] = [
    (MILLIGRAM, MICROGRAM, METRIC_STEP),
    (GRAM, MILLIGRAM, METRIC_STEP),
    (KILOGRAM, GRAM, METRIC_STEP),
    (LITER, MILLILITER, METRIC_STEP),
];
