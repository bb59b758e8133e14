//! CRM GraphQL API server
//!
//! Binds the in-memory store to the GraphQL schema and serves it over HTTP.
//! Set `CRM_CONFIG` to a YAML file path to override the default
//! configuration.

use anyhow::Result;
use crm_api::config::ServerConfig;
use crm_api::server::{GraphQLExposure, build_schema, serve};
use crm_api::storage::InMemoryStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::var("CRM_CONFIG") {
        Ok(path) => ServerConfig::from_yaml_file(&path)?,
        Err(_) => ServerConfig::default(),
    };

    let store = InMemoryStore::new();
    let schema = build_schema(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store),
    );
    let app = GraphQLExposure::build_router(schema, config.playground);

    if config.playground {
        tracing::info!(
            "GraphQL playground at http://{}/graphql/playground",
            config.bind_addr()
        );
    }

    serve(&config, app).await
}
