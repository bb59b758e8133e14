//! In-memory implementation of the gateway traits for testing and development

use crate::core::entity::{Customer, Order, Product};
use crate::core::error::StoreError;
use crate::storage::{CustomerStore, CustomerTransaction, EntityStore, OrderStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

fn lock_error<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::Backend(format!("failed to acquire lock: {e}"))
}

/// In-memory store backing all three entity gateways
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// clones share the same underlying maps.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    customers: Arc<RwLock<HashMap<Uuid, Customer>>>,
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore<Customer> for InMemoryStore {
    async fn get(&self, id: &Uuid) -> Result<Option<Customer>, StoreError> {
        let customers = self.customers.read().map_err(lock_error)?;

        Ok(customers.get(id).cloned())
    }

    async fn insert(&self, customer: Customer) -> Result<Customer, StoreError> {
        let mut customers = self.customers.write().map_err(lock_error)?;

        if customers.values().any(|c| c.email == customer.email) {
            return Err(StoreError::UniqueViolation {
                entity: "customer",
                field: "email",
                value: customer.email,
            });
        }

        customers.insert(customer.id, customer.clone());

        Ok(customer)
    }

    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        let customers = self.customers.read().map_err(lock_error)?;

        Ok(customers.values().cloned().collect())
    }
}

#[async_trait]
impl CustomerStore for InMemoryStore {
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let customers = self.customers.read().map_err(lock_error)?;

        Ok(customers.values().any(|c| c.email == email))
    }

    async fn begin(&self) -> Result<Box<dyn CustomerTransaction>, StoreError> {
        Ok(Box::new(InMemoryCustomerTransaction {
            store: self.clone(),
            staged: RwLock::new(Vec::new()),
        }))
    }
}

/// Staged customer writes against an [`InMemoryStore`]
///
/// Inserts land in a private buffer that `commit` merges into the parent
/// map under a single write lock, after re-verifying uniqueness. Dropping
/// the transaction without committing discards the buffer.
pub struct InMemoryCustomerTransaction {
    store: InMemoryStore,
    staged: RwLock<Vec<Customer>>,
}

#[async_trait]
impl CustomerTransaction for InMemoryCustomerTransaction {
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        {
            let staged = self.staged.read().map_err(lock_error)?;
            if staged.iter().any(|c| c.email == email) {
                return Ok(true);
            }
        }

        self.store.email_exists(email).await
    }

    async fn insert(&self, customer: Customer) -> Result<Customer, StoreError> {
        if self.email_exists(&customer.email).await? {
            return Err(StoreError::UniqueViolation {
                entity: "customer",
                field: "email",
                value: customer.email,
            });
        }

        let mut staged = self.staged.write().map_err(lock_error)?;
        staged.push(customer.clone());

        Ok(customer)
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        let staged = self.staged.into_inner().map_err(lock_error)?;
        let mut customers = self.store.customers.write().map_err(lock_error)?;

        // Re-verify every staged row before touching the map, so a lost race
        // rolls the whole batch back instead of half-committing.
        for customer in &staged {
            if customers.values().any(|c| c.email == customer.email) {
                return Err(StoreError::UniqueViolation {
                    entity: "customer",
                    field: "email",
                    value: customer.email.clone(),
                });
            }
        }

        for customer in staged {
            customers.insert(customer.id, customer);
        }

        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        let mut staged = self.staged.write().map_err(lock_error)?;
        staged.clear();

        Ok(())
    }
}

#[async_trait]
impl EntityStore<Product> for InMemoryStore {
    async fn get(&self, id: &Uuid) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().map_err(lock_error)?;

        Ok(products.get(id).cloned())
    }

    async fn insert(&self, product: Product) -> Result<Product, StoreError> {
        let mut products = self.products.write().map_err(lock_error)?;

        products.insert(product.id, product.clone());

        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.products.read().map_err(lock_error)?;

        Ok(products.values().cloned().collect())
    }
}

#[async_trait]
impl EntityStore<Order> for InMemoryStore {
    async fn get(&self, id: &Uuid) -> Result<Option<Order>, StoreError> {
        let orders = self.orders.read().map_err(lock_error)?;

        Ok(orders.get(id).cloned())
    }

    async fn insert(&self, order: Order) -> Result<Order, StoreError> {
        let mut orders = self.orders.write().map_err(lock_error)?;

        orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read().map_err(lock_error)?;

        Ok(orders.values().cloned().collect())
    }
}

#[async_trait]
impl OrderStore for InMemoryStore {
    async fn set_products(
        &self,
        order_id: &Uuid,
        product_ids: &[Uuid],
    ) -> Result<Order, StoreError> {
        let mut orders = self.orders.write().map_err(lock_error)?;

        let order = orders.get_mut(order_id).ok_or_else(|| StoreError::NotFound {
            entity: "order",
            id: order_id.to_string(),
        })?;

        order.product_ids = product_ids.to_vec();

        Ok(order.clone())
    }
}
