// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for route table construction and route input conversion

use thiserror::Error;

/// Result type alias for routing operations
pub type Result<T> = std::result::Result<T, RouteError>;

/// Errors that can occur while building or reading routes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Malformed path pattern
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Two patterns with the same shape would resolve ambiguously
    #[error("Route pattern '{pattern}' overlaps already registered '{existing}'")]
    DuplicatePattern { pattern: String, existing: String },

    /// Matched route did not capture a parameter the view needs
    #[error("Route '{route}' has no parameter named '{name}'")]
    MissingParam { route: String, name: String },

    /// Matched route renders a different view
    #[error("Route '{route}' renders {actual}, expected {expected}")]
    WrongView {
        route: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Barcode value cannot be used as a route parameter
    #[error("Invalid barcode '{value}': {reason}")]
    InvalidBarcode { value: String, reason: String },
}

impl RouteError {
    /// Create a new pattern error
    pub fn pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        RouteError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a new barcode error
    pub fn barcode(value: impl Into<String>, reason: impl Into<String>) -> Self {
        RouteError::InvalidBarcode {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
