// ABOUTME: recipe-nutrition CLI - per-serving nutrition for every recipe in a catalog
// ABOUTME: Loads both catalogs, aggregates each recipe and prints text or JSON reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Every recipe, ten servings each unless a recipe says otherwise
//! recipe-nutrition --ingredients ingredients.json --recipes recipes.json
//!
//! # Two recipes, four servings, JSON output
//! recipe-nutrition --recipe pancakes --recipe omelette --servings 4 --format json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use recipe_nutrition::config::CalculatorConfig;
use recipe_nutrition::logging::LoggingConfig;
use recipe_nutrition::recipes::{
    calculate_per_serving, load_ingredients, load_recipes, resolve_serving, Recipe,
};
use recipe_nutrition::report::{render_json, RecipeReport};
use recipe_nutrition::{AlgebraError, ErrorResponse};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "recipe-nutrition",
    about = "Per-serving nutrition for catalog recipes",
    long_about = "Aggregates recipe nutrition from an ingredient catalog, converting between mass and volume units, and prints one report per recipe."
)]
struct Cli {
    /// Ingredient catalog (defaults to NUTRITION_INGREDIENTS_PATH or ingredients.json)
    #[arg(long)]
    ingredients: Option<PathBuf>,

    /// Recipe catalog (defaults to NUTRITION_RECIPES_PATH or recipes.json)
    #[arg(long)]
    recipes: Option<PathBuf>,

    /// Number of servings, overriding each recipe's serving size
    #[arg(long)]
    servings: Option<f64>,

    /// Only report these recipe keys (repeatable)
    #[arg(long = "recipe", value_name = "KEY")]
    recipe_keys: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain-text listing
    Text,
    /// JSON array of reports
    Json,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    LoggingConfig::from_env().with_verbose(cli.verbose).init()?;

    if let Some(servings) = cli.servings {
        ensure!(
            servings.is_finite() && servings > 0.0,
            "--servings must be a positive number, got {servings}"
        );
    }

    let config = CalculatorConfig::global();
    let registry = config.registry();

    let ingredients_path = cli
        .ingredients
        .unwrap_or_else(|| config.ingredients_path.clone());
    let recipes_path = cli.recipes.unwrap_or_else(|| config.recipes_path.clone());

    let catalog = load_ingredients(&ingredients_path)?;
    let recipes = load_recipes(&recipes_path)?;

    let mut failures = 0_usize;
    let selected = select_recipes(&recipes, &cli.recipe_keys, &mut failures);

    let mut reports = Vec::with_capacity(selected.len());
    for recipe in selected {
        let serving = resolve_serving(recipe, cli.servings, config.default_servings);
        match calculate_per_serving(recipe, &catalog, &registry, &serving) {
            Ok(nutrition) => {
                reports.push(RecipeReport::new(
                    recipe,
                    &nutrition,
                    config.significant_figures,
                ));
            }
            Err(e) => {
                failures += 1;
                report_failure(&recipe.key, &e, cli.format);
            }
        }
    }

    match cli.format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report.render_text());
            }
        }
        OutputFormat::Json => println!("{}", render_json(&reports)?),
    }

    info!(
        reported = reports.len(),
        failed = failures,
        "finished recipe reports"
    );

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn select_recipes<'a>(
    recipes: &'a [Recipe],
    keys: &[String],
    failures: &mut usize,
) -> Vec<&'a Recipe> {
    if keys.is_empty() {
        return recipes.iter().collect();
    }

    keys.iter()
        .filter_map(|key| {
            let found = recipes.iter().find(|recipe| recipe.key == *key);
            if found.is_none() {
                *failures += 1;
                error!(recipe = %key, "recipe not found in catalog");
                eprintln!("{key}: recipe not found in catalog");
            }
            found
        })
        .collect()
}

fn report_failure(key: &str, err: &AlgebraError, format: OutputFormat) {
    error!(recipe = %key, error = %err, "recipe failed");
    match format {
        OutputFormat::Text => eprintln!("{key}: {err}"),
        OutputFormat::Json => {
            let response = ErrorResponse::from(err).with_item(key);
            match serde_json::to_string(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{key}: {err}"),
            }
        }
    }
}
