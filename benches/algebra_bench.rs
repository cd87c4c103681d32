// ABOUTME: Criterion benchmarks for the quantity algebra and recipe aggregation
// ABOUTME: Measures parsing, simplification and aggregation over growing recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the quantity algebra.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipe_nutrition::nutrition::{NutrientMap, Nutrition};
use recipe_nutrition::recipes::{calculate_nutrition, Ingredient, IngredientCatalog, Recipe};
use recipe_nutrition::units::{Quantity, Unit, UnitRegistry};

const SYMBOLS: [&str; 4] = ["mg", "g", "ml", "L"];

fn catalog_and_recipe(size: usize) -> (IngredientCatalog, Recipe) {
    let mut catalog = IngredientCatalog::new();
    let mut recipe = Recipe::new("bench", "Benchmark recipe");

    for index in 0..size {
        let key = format!("ingredient_{index}");
        let values: NutrientMap = [
            ("calories", Quantity::of(50.0 + index as f64, "kcal")),
            ("protein", Quantity::of(1.5, "g")),
            ("sodium", Quantity::of(12.0, "mg")),
        ]
        .into_iter()
        .collect();
        let nutrition = Nutrition::from_parts(Quantity::of(100.0, "g"), values);
        catalog.insert(
            key.clone(),
            Ingredient::new(&key, &key, Quantity::of(30.0, "g"), nutrition),
        );

        let amount = if index % 3 == 0 {
            Quantity::dimensionless(2.0)
        } else {
            Quantity::of(25.0, SYMBOLS[index % SYMBOLS.len()])
        };
        recipe = recipe.with_ingredient(key, amount);
    }

    (catalog, recipe)
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for text in ["100g", "<0.5mg", "4kcal/g", "1.23e+03ug"] {
        group.bench_with_input(BenchmarkId::new("quantity", text), &text, |b, text| {
            b.iter(|| Quantity::parse(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_simplify(c: &mut Criterion) {
    let registry = UnitRegistry::standard();
    let mixed = Quantity::new(
        3.0,
        Unit::from_powers([("g", 1), ("kg", 1), ("mg", 1), ("ml", -1)]),
    );

    c.bench_function("simplify/mixed_mass_volume", |b| {
        b.iter(|| black_box(&mixed).simplify(&registry).unwrap());
    });
}

#[allow(clippy::cast_possible_truncation)]
fn bench_aggregation(c: &mut Criterion) {
    let registry = UnitRegistry::standard();
    let mut group = c.benchmark_group("aggregation");

    for size in [5_usize, 50, 500] {
        let (catalog, recipe) = catalog_and_recipe(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("calculate_nutrition", size),
            &(catalog, recipe),
            |b, (catalog, recipe)| {
                b.iter(|| calculate_nutrition(black_box(recipe), catalog, &registry).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_simplify, bench_aggregation);
criterion_main!(benches);
