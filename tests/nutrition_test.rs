// ABOUTME: Integration tests for Nutrition records
// ABOUTME: Tests creation from catalog values, merging through the registry and scaling rules
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_nutrition::nutrition::{NutrientMap, Nutrition};
use recipe_nutrition::units::{Quantity, UnitRegistry};
use recipe_nutrition::{AlgebraError, ErrorCode};

fn oats() -> Nutrition {
    let values: NutrientMap = [
        ("quantity", Quantity::of(100.0, "g")),
        ("calories", Quantity::of(389.0, "kcal")),
        ("protein", Quantity::of(16.9, "g")),
        ("sodium", Quantity::of(2.0, "mg")),
    ]
    .into_iter()
    .collect();
    Nutrition::create(Some(values), false).unwrap()
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn test_create_without_values() {
    let solid = Nutrition::create(None, false).unwrap();
    assert_eq!(solid.quantity(), &Quantity::of(0.0, "g"));
    assert!(solid.values().is_empty());

    let liquid = Nutrition::create(None, true).unwrap();
    assert_eq!(liquid.quantity(), &Quantity::of(0.0, "ml"));
}

#[test]
fn test_create_splits_reference_from_nutrients() {
    let nutrition = oats();

    assert_eq!(nutrition.quantity(), &Quantity::of(100.0, "g"));
    assert_eq!(
        nutrition.values().names().collect::<Vec<_>>(),
        vec!["calories", "protein", "sodium"]
    );
    assert!(nutrition.get("quantity").is_none());
}

#[test]
fn test_create_requires_reference() {
    let values: NutrientMap = [("calories", Quantity::of(1.0, "kcal"))]
        .into_iter()
        .collect();

    let err = Nutrition::create(Some(values), false).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ParseError);
}

// ============================================================================
// Addition
// ============================================================================

#[test]
fn test_add_merges_nutrients() {
    let registry = UnitRegistry::standard();
    let salt: NutrientMap = [
        ("quantity", Quantity::of(1.0, "g")),
        ("sodium", Quantity::of(0.39, "g")),
    ]
    .into_iter()
    .collect();
    let salt = Nutrition::create(Some(salt), false).unwrap();

    let total = oats().add(&salt, &registry).unwrap();

    assert!(total.quantity().approx_eq(&Quantity::of(101.0, "g"), 1e-9));
    // shared nutrient summed in the left record's unit
    assert!(total
        .get("sodium")
        .unwrap()
        .approx_eq(&Quantity::of(392.0, "mg"), 1e-9));
    assert_eq!(total.get("calories"), Some(&Quantity::of(389.0, "kcal")));
    assert_eq!(total.values().len(), 3);
}

#[test]
fn test_add_to_empty_record_passes_nutrients_through() {
    let registry = UnitRegistry::standard();

    let total = Nutrition::empty(false).add(&oats(), &registry).unwrap();

    assert_eq!(total, oats());
}

#[test]
fn test_empty_record_adopts_count_reference() {
    let registry = UnitRegistry::standard();
    let per_egg = Nutrition::from_parts(
        Quantity::dimensionless(1.0),
        [("calories", Quantity::of(72.0, "kcal"))].into_iter().collect(),
    );

    let total = Nutrition::empty(false).add(&per_egg, &registry).unwrap();
    assert_eq!(total, per_egg);

    let err = oats().add(&per_egg, &registry).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IncompatibleUnits);
}

#[test]
fn test_add_liquid_and_solid_through_density_bridge() {
    let registry = UnitRegistry::standard();

    let total = Nutrition::empty(true).add(&oats(), &registry).unwrap();

    assert!(total.quantity().approx_eq(&Quantity::of(100.0, "ml"), 1e-9));
}

#[test]
fn test_add_rejects_incompatible_references() {
    let per_serving = Nutrition::from_parts(Quantity::of(1.0, "kcal"), NutrientMap::new());

    let err = oats()
        .add(&per_serving, &UnitRegistry::standard())
        .unwrap_err();

    assert_eq!(
        err,
        AlgebraError::IncompatibleUnits {
            left: "g".into(),
            right: "kcal".into(),
        }
    );
}

#[test]
fn test_add_rejects_incompatible_nutrients() {
    let registry = UnitRegistry::standard();
    let odd: NutrientMap = [
        ("quantity", Quantity::of(10.0, "g")),
        ("calories", Quantity::of(5.0, "g")),
    ]
    .into_iter()
    .collect();
    let odd = Nutrition::create(Some(odd), false).unwrap();

    let err = oats().add(&odd, &registry).unwrap_err();
    assert_eq!(err.code(), ErrorCode::IncompatibleUnits);
}

// ============================================================================
// Scaling
// ============================================================================

#[test]
fn test_scale_by_scalar_and_dimensionless_quantity() {
    let doubled = oats().scale_by(2.0).unwrap();
    assert_eq!(doubled.quantity(), &Quantity::of(200.0, "g"));
    assert_eq!(doubled.get("calories"), Some(&Quantity::of(778.0, "kcal")));

    let halved = oats()
        .scale_by_quantity(&Quantity::dimensionless(0.5))
        .unwrap();
    assert_eq!(halved.quantity(), &Quantity::of(50.0, "g"));
}

#[test]
fn test_scale_by_unit_bearing_quantity_is_rejected() {
    let err = oats()
        .scale_by_quantity(&Quantity::of(2.0, "g"))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidScaleFactor);

    let err = oats().scale_by(f64::NAN).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidScaleFactor);
}

#[test]
fn test_divide_by() {
    let tenth = oats().divide_by(10.0).unwrap();
    assert!(tenth.quantity().approx_eq(&Quantity::of(10.0, "g"), 1e-12));
    assert!(tenth
        .get("calories")
        .unwrap()
        .approx_eq(&Quantity::of(38.9, "kcal"), 1e-12));

    let err = oats().divide_by(0.0).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DivisionByZero);

    let err = oats()
        .divide_by_quantity(&Quantity::of(2.0, "ml"))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidScaleFactor);
}
