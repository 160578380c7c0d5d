//! # Validation Module
//!
//! Identifier parsing for values that arrive over the wire.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: gRPC handler                                                 │
//! │  └── THIS MODULE: every id/user_id must parse as a UUID                │
//! │           │                                                             │
//! │           ▼  (rejected requests stop here, storage is never touched)   │
//! │  Layer 2: Database (PostgreSQL)                                        │
//! │  ├── PRIMARY KEY on id                                                 │
//! │  └── CHECK (price >= 0)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Names, descriptions and prices are passed through as given.

use uuid::Uuid;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a wire identifier into a [`Uuid`].
///
/// ## Rules
/// - Surrounding whitespace is not trimmed
/// - Any format accepted by [`Uuid::parse_str`] is allowed
///
/// ## Example
/// ```rust
/// use product_core::validation::parse_id;
///
/// assert!(parse_id("id", "11111111-1111-1111-1111-111111111111").is_ok());
/// assert!(parse_id("id", "not-a-uuid").is_err());
/// ```
pub fn parse_id(field: &str, raw: &str) -> ValidationResult<Uuid> {
    if raw.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "value is empty".to_string(),
        });
    }

    Uuid::parse_str(raw).map_err(|e| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
