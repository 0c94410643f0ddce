//! Card error types.
//!
//! Missing optional data is never an error in this crate; it resolves to an
//! omitted block. The one hard precondition is that the product record
//! carries an identifier, which the card id and analytics key are built from.

use thiserror::Error;

/// Errors that can occur when composing a product card.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// The product record has no identifier (caller contract violation).
    #[error("product record has no identifier")]
    MissingProductId,
}
