//! Typed errors for the CRM API
//!
//! Two categories, kept apart on purpose:
//!
//! - [`Rejection`]: expected mutation failures (malformed input, uniqueness
//!   conflicts, unresolvable references). These are returned to API callers
//!   as data inside the result envelope, never as protocol-level faults.
//! - [`StoreError`]: storage-layer faults. Single-record mutations let these
//!   propagate to the transport as generic API errors; the bulk path catches
//!   them per row.

use thiserror::Error;

/// An expected mutation failure with its exact user-facing message.
///
/// The `Display` form of each variant is the message callers see in the
/// result envelope.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// Another customer already uses this email address.
    #[error("Email already exists.")]
    DuplicateEmail { email: String },

    /// Phone did not match `+` + 10-15 digits or `NNN-NNN-NNNN`.
    #[error("Invalid phone format.")]
    InvalidPhone,

    #[error("Price must be positive.")]
    NonPositivePrice,

    #[error("Stock cannot be negative.")]
    NegativeStock,

    /// The customer id did not resolve to a stored customer.
    #[error("Invalid customer ID.")]
    UnknownCustomer,

    #[error("At least one product must be selected.")]
    NoProducts,

    /// A product id did not resolve; carries the id as the caller sent it.
    #[error("Invalid product ID: {0}")]
    UnknownProduct(String),
}

/// A fault in the storage backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A row the operation depends on does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A uniqueness constraint was violated at write or commit time.
    ///
    /// This is the backstop against races that slip past the service-level
    /// pre-check; see the concurrency notes in DESIGN.md.
    #[error("unique constraint violated: {entity}.{field} = '{value}'")]
    UniqueViolation {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// The backend itself failed (connection loss, poisoned lock, ...).
    #[error("storage backend error: {0}")]
    Backend(String),
}
