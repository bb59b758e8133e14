//! Statically declared GraphQL types for the API surface
//!
//! One explicit output wrapper per entity, the named input object for bulk
//! creation, and the payload envelopes every mutation returns.

use crate::core::entity::{Customer, Order, Product};
use crate::core::service::NewCustomer;
use crate::storage::{CustomerStore, EntityStore};
use async_graphql::{Context, ID, InputObject, Object, Result, SimpleObject};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// GraphQL view of a stored customer.
pub struct CustomerType(pub Customer);

#[Object(name = "Customer")]
impl CustomerType {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn phone(&self) -> Option<&str> {
        self.0.phone.as_deref()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }
}

/// GraphQL view of a stored product.
pub struct ProductType(pub Product);

#[Object(name = "Product")]
impl ProductType {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn price(&self) -> f64 {
        self.0.price
    }

    async fn stock(&self) -> i32 {
        self.0.stock
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }
}

/// GraphQL view of a stored order.
///
/// The customer and product fields resolve through the gateways held in the
/// schema context, so callers see full records rather than bare ids.
pub struct OrderType(pub Order);

#[Object(name = "Order")]
impl OrderType {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn order_date(&self) -> DateTime<Utc> {
        self.0.order_date
    }

    async fn total_amount(&self) -> f64 {
        self.0.total_amount
    }

    async fn customer(&self, ctx: &Context<'_>) -> Result<Option<CustomerType>> {
        let customers = ctx.data::<Arc<dyn CustomerStore>>()?;
        Ok(customers.get(&self.0.customer_id).await?.map(CustomerType))
    }

    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<ProductType>> {
        let products = ctx.data::<Arc<dyn EntityStore<Product>>>()?;
        let mut out = Vec::with_capacity(self.0.product_ids.len());
        for id in &self.0.product_ids {
            if let Some(product) = products.get(id).await? {
                out.push(ProductType(product));
            }
        }
        Ok(out)
    }
}

/// Input row for `bulkCreateCustomers`.
#[derive(InputObject, Clone)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<CustomerInput> for NewCustomer {
    fn from(input: CustomerInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            phone: input.phone,
        }
    }
}

/// Envelope for `createCustomer`: customer on success, message either way.
#[derive(SimpleObject)]
pub struct CreateCustomerPayload {
    pub customer: Option<CustomerType>,
    pub success: bool,
    pub message: String,
}

/// Envelope for `bulkCreateCustomers`.
///
/// Partial success is first-class: both lists can be non-empty in the same
/// response, and there is no single pass/fail flag.
#[derive(SimpleObject)]
pub struct BulkCreateCustomersPayload {
    pub created_customers: Vec<CustomerType>,
    pub errors: Vec<String>,
}

/// Envelope for `createProduct`.
#[derive(SimpleObject)]
pub struct CreateProductPayload {
    pub product: Option<ProductType>,
    pub success: bool,
    pub message: String,
}

/// Envelope for `createOrder`.
#[derive(SimpleObject)]
pub struct CreateOrderPayload {
    pub order: Option<OrderType>,
    pub success: bool,
    pub message: String,
}
