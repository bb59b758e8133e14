//! Shared test harness for service and schema tests
//!
//! Provides wiring helpers over the in-memory store plus a fault-injecting
//! customer gateway for driving the storage-error paths.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod harness;
//! use harness::*;
//! ```

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crm_api::core::entity::Customer;
use crm_api::core::error::StoreError;
use crm_api::core::service::{CrmService, NewCustomer};
use crm_api::server::{CrmSchema, build_schema};
use crm_api::storage::{
    CustomerStore, CustomerTransaction, EntityStore, InMemoryStore,
};

/// Build a service over one shared in-memory store.
pub fn crm_service(store: &InMemoryStore) -> CrmService {
    CrmService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    )
}

/// Build a schema over one shared in-memory store.
pub fn crm_schema(store: &InMemoryStore) -> CrmSchema {
    build_schema(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    )
}

/// Build a schema whose customer gateway is a [`FaultyCustomerStore`].
pub fn crm_schema_with_faulty_customers(
    store: &InMemoryStore,
    poison_email: &str,
) -> CrmSchema {
    build_schema(
        Arc::new(FaultyCustomerStore::new(store.clone(), poison_email)),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
    )
}

pub fn new_customer(name: &str, email: &str, phone: Option<&str>) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// FaultyCustomerStore — fails writes for one chosen email
// ---------------------------------------------------------------------------

/// Customer gateway wrapper that fails any insert of `poison_email` with a
/// backend error, simulating a mid-batch connection loss on one row.
#[derive(Clone)]
pub struct FaultyCustomerStore {
    inner: InMemoryStore,
    poison_email: String,
}

impl FaultyCustomerStore {
    pub fn new(inner: InMemoryStore, poison_email: &str) -> Self {
        Self {
            inner,
            poison_email: poison_email.to_string(),
        }
    }

    fn fault(&self) -> StoreError {
        StoreError::Backend("connection reset by peer".to_string())
    }
}

#[async_trait]
impl EntityStore<Customer> for FaultyCustomerStore {
    async fn get(&self, id: &Uuid) -> Result<Option<Customer>, StoreError> {
        self.inner.get(id).await
    }

    async fn insert(&self, customer: Customer) -> Result<Customer, StoreError> {
        if customer.email == self.poison_email {
            return Err(self.fault());
        }
        self.inner.insert(customer).await
    }

    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        self.inner.list().await
    }
}

#[async_trait]
impl CustomerStore for FaultyCustomerStore {
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        self.inner.email_exists(email).await
    }

    async fn begin(&self) -> Result<Box<dyn CustomerTransaction>, StoreError> {
        Ok(Box::new(FaultyCustomerTransaction {
            inner: self.inner.begin().await?,
            poison_email: self.poison_email.clone(),
        }))
    }
}

struct FaultyCustomerTransaction {
    inner: Box<dyn CustomerTransaction>,
    poison_email: String,
}

#[async_trait]
impl CustomerTransaction for FaultyCustomerTransaction {
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        self.inner.email_exists(email).await
    }

    async fn insert(&self, customer: Customer) -> Result<Customer, StoreError> {
        if customer.email == self.poison_email {
            return Err(StoreError::Backend("connection reset by peer".to_string()));
        }
        self.inner.insert(customer).await
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.inner.commit().await
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        self.inner.rollback().await
    }
}
