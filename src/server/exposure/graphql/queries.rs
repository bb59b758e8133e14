//! Root query type

use crate::core::entity::Product;
use crate::storage::{CustomerStore, EntityStore, OrderStore};
use async_graphql::{Context, Object, Result};
use std::sync::Arc;

use super::types::{CustomerType, OrderType, ProductType};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Static greeting, doubling as a liveness probe for the API layer.
    async fn hello(&self) -> &'static str {
        "Hello, GraphQL!"
    }

    async fn customers(&self, ctx: &Context<'_>) -> Result<Vec<CustomerType>> {
        let customers = ctx.data::<Arc<dyn CustomerStore>>()?;
        Ok(customers.list().await?.into_iter().map(CustomerType).collect())
    }

    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<ProductType>> {
        let products = ctx.data::<Arc<dyn EntityStore<Product>>>()?;
        Ok(products.list().await?.into_iter().map(ProductType).collect())
    }

    async fn orders(&self, ctx: &Context<'_>) -> Result<Vec<OrderType>> {
        let orders = ctx.data::<Arc<dyn OrderStore>>()?;
        Ok(orders.list().await?.into_iter().map(OrderType).collect())
    }
}
