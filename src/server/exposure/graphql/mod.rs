//! GraphQL API exposure
//!
//! Routing and handlers for the GraphQL endpoint. This module is
//! transport-only: the mutation logic lives in [`crate::core::service`] and
//! reaches the router exclusively through the schema built in [`schema`].

mod mutations;
mod queries;
mod schema;
mod types;

pub use mutations::MutationRoot;
pub use queries::QueryRoot;
pub use schema::{CrmSchema, build_schema};
pub use types::{
    BulkCreateCustomersPayload, CreateCustomerPayload, CreateOrderPayload, CreateProductPayload,
    CustomerInput, CustomerType, OrderType, ProductType,
};

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::Extension,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the Axum router serving the schema.
    ///
    /// Routes:
    /// - `POST /graphql` - query/mutation endpoint
    /// - `GET /graphql/playground` - playground UI (when enabled)
    /// - `GET /health` - liveness probe
    pub fn build_router(schema: CrmSchema, playground: bool) -> Router {
        let mut router = Router::new()
            .route("/graphql", post(graphql_handler))
            .route("/health", get(health));

        if playground {
            router = router.route("/graphql/playground", get(graphql_playground));
        }

        router
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .layer(Extension(schema))
    }
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    Extension(schema): Extension<CrmSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Handler for the GraphQL playground UI
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
