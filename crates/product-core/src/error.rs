//! # Error Types
//!
//! Domain-specific error types for product-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  product-core errors (this file)                                       │
//! │  └── ValidationError  - Malformed input at the boundary                │
//! │                                                                         │
//! │  product-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  product-api errors (in app)                                           │
//! │  └── ApiError         - What the gRPC client sees (Status)             │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │        DbError ─────────┴─► ApiError → tonic::Status → client          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any storage access, so a request carrying one of these never
/// reaches the repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Invalid format (e.g., a string that is not a UUID).
    ///
    /// ## When This Occurs
    /// - `id` or `user_id` on the wire is empty
    /// - The value is not a hyphenated/simple UUID
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
