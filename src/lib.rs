//! # CRM GraphQL API
//!
//! A typed GraphQL layer over three related business entities — customers,
//! products and orders — backed by a pluggable data store.
//!
//! ## Features
//!
//! - **Statically Declared Schema**: explicit output/input types per entity,
//!   no runtime type derivation
//! - **Boundary Validation**: phone format, price and stock rules checked
//!   before any write, with stable user-facing messages
//! - **Uniform Result Envelopes**: every mutation returns
//!   `{payload, success, message}` data; expected failures never surface as
//!   protocol faults
//! - **Bulk Creation**: whole-batch atomic scope with first-class partial
//!   success (per-row "Row N: ..." errors alongside created rows)
//! - **Pluggable Storage**: gateway traits with an in-memory reference
//!   backend; schema construction takes the gateways as parameters
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crm_api::prelude::*;
//! use std::sync::Arc;
//!
//! let store = InMemoryStore::new();
//! let schema = build_schema(
//!     Arc::new(store.clone()),
//!     Arc::new(store.clone()),
//!     Arc::new(store),
//! );
//! let app = GraphQLExposure::build_router(schema, true);
//! crm_api::server::serve(&ServerConfig::default(), app).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::entity::{Customer, Order, Product};
    pub use crate::core::error::{Rejection, StoreError};
    pub use crate::core::service::{BulkReport, CrmService, NewCustomer, Outcome};
    pub use crate::core::validation;

    // === Storage ===
    pub use crate::storage::{
        CustomerStore, CustomerTransaction, EntityStore, InMemoryStore, OrderStore,
    };

    // === Server ===
    pub use crate::config::ServerConfig;
    pub use crate::server::exposure::graphql::{
        CrmSchema, CustomerInput, GraphQLExposure, MutationRoot, QueryRoot, build_schema,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
