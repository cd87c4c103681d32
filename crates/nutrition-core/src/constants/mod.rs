// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for unit conversion, defaults and environment names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Default values for configuration and the CLI
pub mod defaults;
/// Environment variable names recognized by configuration loaders
pub mod env_config;
/// Unit symbols and the shipped conversion ladder
pub mod units;
