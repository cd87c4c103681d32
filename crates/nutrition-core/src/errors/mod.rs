// ABOUTME: Error types for the dimensional quantity algebra and recipe aggregation
// ABOUTME: Maps every failure kind to a stable, serializable error code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every failure in the algebra is fatal to the computation in progress: the
//! caller gets an [`AlgebraError`] and no partial result. Each variant maps to
//! an [`ErrorCode`] so that reports can carry a machine-readable kind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Input (3000-3999)
    #[serde(rename = "PARSE_ERROR")]
    ParseError = 3000,

    // Algebra (4000-4999)
    #[serde(rename = "INCOMPATIBLE_UNITS")]
    IncompatibleUnits = 4000,
    #[serde(rename = "UNRESOLVABLE_UNIT")]
    UnresolvableUnit = 4001,
    #[serde(rename = "INVALID_SCALE_FACTOR")]
    InvalidScaleFactor = 4002,
    #[serde(rename = "DIVISION_BY_ZERO")]
    DivisionByZero = 4003,

    // Catalog (5000-5999)
    #[serde(rename = "UNKNOWN_INGREDIENT")]
    UnknownIngredient = 5000,
    #[serde(rename = "CATALOG_IO")]
    CatalogIo = 5001,
    #[serde(rename = "CATALOG_FORMAT")]
    CatalogFormat = 5002,
}

impl ErrorCode {
    /// Numeric value of this code
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ParseError => "Malformed quantity or unit text",
            Self::IncompatibleUnits => "Units have no direct or registered conversion path",
            Self::UnresolvableUnit => "Unit simplification did not reach a fixed point",
            Self::InvalidScaleFactor => "Scale factor must be a finite dimensionless value",
            Self::DivisionByZero => "Division by a zero-valued quantity",
            Self::UnknownIngredient => "Recipe references an ingredient missing from the catalog",
            Self::CatalogIo => "Catalog file could not be read",
            Self::CatalogFormat => "Catalog document is malformed",
        }
    }
}

/// Errors raised by unit parsing, quantity arithmetic and recipe aggregation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AlgebraError {
    /// Quantity or unit text has an unsupported shape
    #[error("cannot parse '{input}': {reason}")]
    Parse {
        /// The offending text
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// Addition between units with no conversion path
    #[error("cannot combine quantities with units '{left}' and '{right}'")]
    IncompatibleUnits {
        /// Canonical rendering of the left-hand unit
        left: String,
        /// Canonical rendering of the right-hand unit
        right: String,
    },

    /// Simplification exhausted its step budget
    #[error("unit '{unit}' did not simplify within {steps} steps")]
    UnresolvableUnit {
        /// Unit at the point the budget ran out
        unit: String,
        /// Budget that was exhausted
        steps: usize,
    },

    /// Recipe references an ingredient key absent from the catalog
    #[error("unknown ingredient '{ingredient}' in recipe '{recipe}'")]
    UnknownIngredient {
        /// Recipe key
        recipe: String,
        /// Missing ingredient key
        ingredient: String,
    },

    /// Nutrition scaled by a unit-bearing or non-finite factor
    #[error("invalid scale factor {factor}: {reason}")]
    InvalidScaleFactor {
        /// Rendering of the rejected factor
        factor: String,
        /// Why it was rejected
        reason: String,
    },

    /// Division by a zero-valued scalar or quantity
    #[error("division of '{dividend}' by zero")]
    DivisionByZero {
        /// Rendering of the dividend
        dividend: String,
    },

    /// Catalog file could not be read
    #[error("cannot read catalog '{path}': {reason}")]
    CatalogIo {
        /// File path
        path: String,
        /// Underlying I/O error message
        reason: String,
    },

    /// Catalog document is structurally invalid
    #[error("invalid catalog entry '{item}': {reason}")]
    CatalogFormat {
        /// Item key, or the file path when no item could be identified
        item: String,
        /// What was wrong with it
        reason: String,
    },
}

impl AlgebraError {
    /// Create a parse error
    #[must_use]
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an incompatible units error
    #[must_use]
    pub fn incompatible(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::IncompatibleUnits {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create an unknown ingredient error
    #[must_use]
    pub fn unknown_ingredient(recipe: impl Into<String>, ingredient: impl Into<String>) -> Self {
        Self::UnknownIngredient {
            recipe: recipe.into(),
            ingredient: ingredient.into(),
        }
    }

    /// Create an invalid scale factor error
    #[must_use]
    pub fn invalid_scale(factor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidScaleFactor {
            factor: factor.into(),
            reason: reason.into(),
        }
    }

    /// Create a catalog format error
    #[must_use]
    pub fn catalog_format(item: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CatalogFormat {
            item: item.into(),
            reason: reason.into(),
        }
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Parse { .. } => ErrorCode::ParseError,
            Self::IncompatibleUnits { .. } => ErrorCode::IncompatibleUnits,
            Self::UnresolvableUnit { .. } => ErrorCode::UnresolvableUnit,
            Self::UnknownIngredient { .. } => ErrorCode::UnknownIngredient,
            Self::InvalidScaleFactor { .. } => ErrorCode::InvalidScaleFactor,
            Self::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            Self::CatalogIo { .. } => ErrorCode::CatalogIo,
            Self::CatalogFormat { .. } => ErrorCode::CatalogFormat,
        }
    }
}

/// Result type alias for convenience
pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Serializable error report, used when failures are emitted as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Item the failure belongs to (recipe key), if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

impl ErrorResponse {
    /// Attach the key of the item that failed
    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }
}

impl From<&AlgebraError> for ErrorResponse {
    fn from(error: &AlgebraError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            item: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AlgebraError::incompatible("g", "kcal").code(),
            ErrorCode::IncompatibleUnits
        );
        assert_eq!(
            AlgebraError::unknown_ingredient("cake", "flour").code(),
            ErrorCode::UnknownIngredient
        );
        assert_eq!(ErrorCode::ParseError.as_u16(), 3000);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AlgebraError::unknown_ingredient("cake", "flour");
        let response = ErrorResponse::from(&error).with_item("cake");

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("UNKNOWN_INGREDIENT"));
        assert!(json.contains("flour"));
        assert!(json.contains("\"item\":\"cake\""));
    }
}
