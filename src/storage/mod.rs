//! Gateway traits over the persistence layer
//!
//! The mutation layer is agnostic to the underlying storage mechanism and
//! talks to it exclusively through these traits. [`in_memory`] provides the
//! reference backend; a SQL-backed implementation would slot in the same way.

pub mod in_memory;

pub use in_memory::InMemoryStore;

use crate::core::entity::{Customer, Order};
use crate::core::error::StoreError;
use async_trait::async_trait;
use uuid::Uuid;

/// Generic gateway for records of one entity type
///
/// Implementations provide lookups and writes for a specific entity type;
/// specialized surfaces (uniqueness checks, relations, transactions) live in
/// the per-entity extension traits below.
#[async_trait]
pub trait EntityStore<T>: Send + Sync {
    /// Look up a record by id. A miss is `Ok(None)`, not an error.
    async fn get(&self, id: &Uuid) -> Result<Option<T>, StoreError>;

    /// Persist a new record.
    async fn insert(&self, entity: T) -> Result<T, StoreError>;

    /// List all records (unfiltered, unsorted).
    async fn list(&self) -> Result<Vec<T>, StoreError>;
}

/// Customer gateway: adds the uniqueness pre-check and the atomic scope
/// used by bulk creation.
#[async_trait]
pub trait CustomerStore: EntityStore<Customer> {
    /// Check whether any stored customer already uses this email.
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;

    /// Open an atomic scope for multi-row customer writes.
    async fn begin(&self) -> Result<Box<dyn CustomerTransaction>, StoreError>;
}

/// Unit of work over customer records.
///
/// Rows inserted here are visible to `email_exists` within the same scope
/// but only become durable on [`commit`](Self::commit). Dropping the
/// transaction without committing discards them.
#[async_trait]
pub trait CustomerTransaction: Send + Sync {
    /// Check the email against committed rows and rows staged in this scope.
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;

    /// Stage a new customer row.
    ///
    /// Backends enforce email uniqueness here as the backstop against races
    /// that slip past the caller's pre-check, returning
    /// [`StoreError::UniqueViolation`].
    async fn insert(&self, customer: Customer) -> Result<Customer, StoreError>;

    /// Make every row staged in this scope durable, atomically.
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;

    /// Discard every row staged in this scope.
    async fn rollback(self: Box<Self>) -> Result<(), StoreError>;
}

/// Order gateway: adds the order→products relation.
#[async_trait]
pub trait OrderStore: EntityStore<Order> {
    /// Replace the order's product relation with the given set and return
    /// the updated row. Replaces, never merges.
    async fn set_products(
        &self,
        order_id: &Uuid,
        product_ids: &[Uuid],
    ) -> Result<Order, StoreError>;
}
