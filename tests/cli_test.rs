// ABOUTME: End-to-end tests for the recipe-nutrition binary
// ABOUTME: Runs the CLI against temporary catalogs and checks output and exit status
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const INGREDIENTS: &str = r#"{"items": [
  {"key": "milk", "name": "Milk", "group": "dairy", "unitQuantity": "250ml",
   "variants": [{"nutrition": {"quantity": "100ml", "calories": "61kcal"}}]},
  {"key": "flour", "name": "Flour", "unitQuantity": "100g",
   "variants": [{"nutrition": {"quantity": "100g", "calories": "364kcal"}}]},
  {"key": "egg", "name": "Egg", "group": "meat", "unitQuantity": "50g",
   "variants": [{"nutrition": {"quantity": "100g", "calories": "143kcal"}}]}
]}"#;

const RECIPES: &str = r#"{"items": [
  {"key": "pancakes", "name": "Pancakes", "description": "",
   "ingredients": {"milk": "300ml", "flour": "150g", "egg": 2}, "serviceSize": 4},
  {"key": "mystery", "name": "Mystery", "description": "",
   "ingredients": {"unobtainium": "1g"}}
]}"#;

fn run(dir: &Path, args: &[&str]) -> Output {
    let ingredients = dir.join("ingredients.json");
    let recipes = dir.join("recipes.json");
    fs::write(&ingredients, INGREDIENTS).unwrap();
    fs::write(&recipes, RECIPES).unwrap();

    Command::new(env!("CARGO_BIN_EXE_recipe-nutrition"))
        .arg("--ingredients")
        .arg(&ingredients)
        .arg("--recipes")
        .arg(&recipes)
        .args(args)
        .env("RUST_LOG", "off")
        .env_remove("NUTRITION_DEFAULT_SERVINGS")
        .env_remove("NUTRITION_SIGNIFICANT_FIGURES")
        .output()
        .unwrap()
}

#[test]
fn test_selected_recipe_succeeds() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--recipe", "pancakes"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("== Pancakes ==\n"));
    // (183 + 546 + 143) kcal over the recipe's 4 servings
    assert!(stdout.contains("calories: 218kcal\n"));
}

#[test]
fn test_failing_recipe_sets_exit_status_after_others_print() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &[]);

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stdout.contains("== Pancakes =="));
    assert!(!stdout.contains("Mystery"));
    assert!(stderr.contains("mystery: unknown ingredient 'unobtainium'"));
}

#[test]
fn test_servings_override_and_json_output() {
    let dir = TempDir::new().unwrap();

    let output = run(
        dir.path(),
        &["--recipe", "pancakes", "--servings", "2", "--format", "json"],
    );

    assert!(output.status.success());
    let reports: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[0]["key"], "pancakes");
    assert_eq!(reports[0]["nutrients"][0]["display"], "436kcal");
}

#[test]
fn test_unknown_recipe_key_fails() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--recipe", "waffles"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("waffles: recipe not found in catalog"));
}

#[test]
fn test_rejects_non_positive_servings() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &["--servings", "0"]);

    assert!(!output.status.success());
}
