// ABOUTME: Recipe nutrition aggregation over catalog ingredients
// ABOUTME: Converts ingredient amounts into ratios of each nutrition record, sums, and scales per serving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe nutrition aggregator.
//!
//! Each recipe line is turned into a dimensionless ratio "how many nutrition
//! references of this ingredient", the ingredient's record is scaled by that
//! ratio, and the scaled records are summed into one aggregate. All keys are
//! resolved before any arithmetic, so an unknown ingredient never yields a
//! partial total.

use nutrition_core::{AlgebraError, AlgebraResult};
use tracing::debug;

use super::models::{Ingredient, IngredientCatalog, Recipe};
use crate::nutrition::Nutrition;
use crate::units::{Quantity, UnitRegistry};

/// Ratio of `amount` to the ingredient's nutrition reference.
///
/// Counts and physical amounts meet the record in three ways:
///
/// - a record referenced by a count (`quantity: 1` per egg) divides the
///   number of catalog units in `amount` by that count;
/// - a count of an ingredient whose `unit_quantity` is itself a count takes
///   one catalog unit as one whole record, so two eggs scale by two;
/// - otherwise a count goes through the physical `unit_quantity`, and the
///   physical amount is expressed in the reference's unit when the registry
///   allows it, then divided by the reference.
///
/// # Errors
///
/// Returns `AlgebraError::DivisionByZero` for a zero reference and
/// `AlgebraError::UnresolvableUnit` if simplification does not settle.
pub fn contribution_ratio(
    ingredient: &Ingredient,
    amount: &Quantity,
    registry: &UnitRegistry,
) -> AlgebraResult<Quantity> {
    let reference = ingredient.nutrition.quantity();
    let unit_quantity = &ingredient.unit_quantity;

    if reference.is_dimensionless() {
        return catalog_units(amount, unit_quantity, registry)?.divide(reference, registry);
    }

    if amount.is_dimensionless() && unit_quantity.is_dimensionless() {
        return amount.multiply(unit_quantity, registry);
    }

    let physical = if amount.is_dimensionless() {
        amount.multiply(unit_quantity, registry)?
    } else {
        amount.clone()
    };

    aligned_to(&physical, reference, registry)?.divide(reference, registry)
}

/// Number of catalog units in `amount`
fn catalog_units(
    amount: &Quantity,
    unit_quantity: &Quantity,
    registry: &UnitRegistry,
) -> AlgebraResult<Quantity> {
    match (amount.is_dimensionless(), unit_quantity.is_dimensionless()) {
        (true, true) => amount.multiply(unit_quantity, registry),
        (true, false) => Ok(amount.clone()),
        (false, _) => aligned_to(amount, unit_quantity, registry)?.divide(unit_quantity, registry),
    }
}

/// `quantity` in the unit of `target` when a registry path exists, unchanged otherwise
fn aligned_to(
    quantity: &Quantity,
    target: &Quantity,
    registry: &UnitRegistry,
) -> AlgebraResult<Quantity> {
    match quantity.convert_to(target.unit(), registry) {
        Ok(converted) => Ok(converted),
        Err(AlgebraError::IncompatibleUnits { .. }) => Ok(quantity.clone()),
        Err(e) => Err(e),
    }
}

/// Total nutrition of a recipe.
///
/// # Errors
///
/// Returns `AlgebraError::UnknownIngredient` when a line references a key
/// missing from the catalog, `AlgebraError::InvalidScaleFactor` when a line's
/// amount cannot be reduced to a dimensionless ratio, and
/// `AlgebraError::IncompatibleUnits` when ingredient records cannot be summed.
pub fn calculate_nutrition(
    recipe: &Recipe,
    catalog: &IngredientCatalog,
    registry: &UnitRegistry,
) -> AlgebraResult<Nutrition> {
    let resolved = recipe
        .ingredients
        .iter()
        .map(|line| {
            catalog
                .get(&line.key)
                .map(|ingredient| (ingredient, &line.amount))
                .ok_or_else(|| AlgebraError::unknown_ingredient(&recipe.key, &line.key))
        })
        .collect::<AlgebraResult<Vec<_>>>()?;

    resolved.into_iter().try_fold(
        Nutrition::empty(recipe.is_liquid),
        |total, (ingredient, amount)| {
            let ratio = contribution_ratio(ingredient, amount, registry)?;
            debug!(
                recipe = %recipe.key,
                ingredient = %ingredient.key,
                %amount,
                %ratio,
                "ingredient contribution"
            );
            let scaled = ingredient.nutrition.scale_by_quantity(&ratio)?;
            total.add(&scaled, registry)
        },
    )
}

/// Scale an aggregate to one serving.
///
/// A dimensionless `serving` is a number of servings and divides the
/// aggregate. A physical `serving` is a serving size, and the aggregate is
/// scaled by `serving / aggregate.quantity()`.
///
/// # Errors
///
/// Returns `AlgebraError::DivisionByZero` for a zero serving count or an
/// empty aggregate, and `AlgebraError::InvalidScaleFactor` when the serving
/// size cannot be related to the aggregate's reference.
pub fn per_serving(
    aggregate: &Nutrition,
    serving: &Quantity,
    registry: &UnitRegistry,
) -> AlgebraResult<Nutrition> {
    if serving.is_dimensionless() {
        return aggregate.divide_by_quantity(serving);
    }

    let reference = aggregate.quantity();
    let ratio = aligned_to(serving, reference, registry)?.divide(reference, registry)?;
    aggregate.scale_by_quantity(&ratio)
}

/// Serving used for a recipe: an explicit count wins, then the recipe's
/// declared serving size, then `default_servings`.
#[must_use]
pub fn resolve_serving(
    recipe: &Recipe,
    servings_override: Option<f64>,
    default_servings: f64,
) -> Quantity {
    servings_override.map_or_else(
        || {
            recipe
                .service_size
                .clone()
                .unwrap_or_else(|| Quantity::dimensionless(default_servings))
        },
        Quantity::dimensionless,
    )
}

/// Aggregate a recipe and scale it to one serving
///
/// # Errors
///
/// Propagates errors from [`calculate_nutrition`] and [`per_serving`].
pub fn calculate_per_serving(
    recipe: &Recipe,
    catalog: &IngredientCatalog,
    registry: &UnitRegistry,
    serving: &Quantity,
) -> AlgebraResult<Nutrition> {
    let aggregate = calculate_nutrition(recipe, catalog, registry)?;
    per_serving(&aggregate, serving, registry)
}
