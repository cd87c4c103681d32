// ABOUTME: Dimensional quantity algebra: units, quantities and equivalence registry
// ABOUTME: Re-exports the public types used by nutrition and recipe aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Units Module
//!
//! A small dimensional algebra. [`Unit`] tracks integer powers of dimension
//! symbols, [`Quantity`] pairs a value with a unit, and [`UnitRegistry`]
//! records the scale equivalences that let quantities in related units be
//! added and simplified.
//!
//! ```rust
//! use recipe_nutrition::units::{Quantity, UnitRegistry};
//!
//! let registry = UnitRegistry::standard();
//! let total = Quantity::of(5.0, "g")
//!     .add(&Quantity::of(500.0, "mg"), &registry)
//!     .unwrap();
//! assert_eq!(total.to_string(), "5.5g");
//! ```

/// Significant-figure rendering
pub mod format;
/// Scalar values tagged with units
pub mod quantity;
/// Registered equivalences between units
pub mod registry;
/// Exponent-vector units
pub mod unit;

pub use format::format_significant;
pub use quantity::{Quantity, QuantitySpec};
pub use registry::{UnitRegistry, UnitRegistryBuilder};
pub use unit::Unit;
