//! Contract error types for the coupons module
//!
//! These errors are transport-agnostic and used for inter-module communication.

use thiserror::Error;

/// Coupons domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponsError {
    /// Request failed field validation
    #[error("{message}")]
    Validation {
        /// First violation message
        message: String,
    },

    /// No coupon with the given id
    #[error("Coupon with identifier '{id}' not found.")]
    NotFound {
        /// Requested identifier
        id: i32,
    },

    /// Another coupon already uses this name
    #[error("The coupon with the name '{name}' already exists")]
    Conflict {
        /// Conflicting name
        name: String,
    },

    /// Storage or other unexpected failure
    #[error("An unexpected error occurred")]
    Internal,
}
