//! Schema assembly with injected gateway dependencies

use crate::core::entity::Product;
use crate::core::service::CrmService;
use crate::storage::{CustomerStore, EntityStore, OrderStore};
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

use super::mutations::MutationRoot;
use super::queries::QueryRoot;

/// The complete GraphQL schema
pub type CrmSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over the given entity gateways.
///
/// The gateways are injected rather than reached through globals, so tests
/// can hand in doubles for the data store.
pub fn build_schema(
    customers: Arc<dyn CustomerStore>,
    products: Arc<dyn EntityStore<Product>>,
    orders: Arc<dyn OrderStore>,
) -> CrmSchema {
    let service = Arc::new(CrmService::new(
        customers.clone(),
        products.clone(),
        orders.clone(),
    ));

    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .data(customers)
        .data(products)
        .data(orders)
        .finish()
}
