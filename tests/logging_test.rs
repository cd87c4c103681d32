// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment handling and verbosity adjustments
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use recipe_nutrition::constants::env_config;
use recipe_nutrition::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

fn clear_env() {
    for var in [
        env_config::RUST_LOG,
        env_config::LOG_FORMAT,
        env_config::LOG_INCLUDE_LOCATION,
        env_config::SERVICE_NAME,
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var(env_config::RUST_LOG, "debug");
    env::set_var(env_config::LOG_FORMAT, "json");
    env::set_var(env_config::LOG_INCLUDE_LOCATION, "1");
    env::set_var(env_config::SERVICE_NAME, "test-service");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.service_name, "test-service");
}

#[test]
#[serial]
fn test_logging_config_defaults_from_empty_env() {
    clear_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "recipe-nutrition");
}

#[test]
fn test_verbose_raises_default_level_only() {
    let verbose = LoggingConfig::default().with_verbose(true);
    assert_eq!(verbose.level, "debug");

    let quiet = LoggingConfig::default().with_verbose(false);
    assert_eq!(quiet.level, "info");

    let explicit = LoggingConfig {
        level: "warn".into(),
        ..LoggingConfig::default()
    };
    assert_eq!(explicit.with_verbose(true).level, "warn");
}

#[test]
#[serial]
fn test_compact_format() {
    clear_env();
    env::set_var(env_config::LOG_FORMAT, "compact");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Compact);
}
