// ABOUTME: Core types and constants for recipe nutrition calculation
// ABOUTME: Foundation crate with error handling and application-wide constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared error types and constants for the recipe
//! nutrition workspace. It changes rarely, so the algebra and CLI crates can
//! recompile independently of it.
//!
//! ## Modules
//!
//! - **errors**: `AlgebraError`, `ErrorCode` and the serializable `ErrorResponse`
//! - **constants**: environment variable names, defaults and the conversion ladder

/// Unified error handling with stable error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

pub use errors::{AlgebraError, AlgebraResult, ErrorCode, ErrorResponse};
