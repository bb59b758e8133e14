//! Core domain logic: entities, validation rules, errors and the mutation
//! service.

pub mod entity;
pub mod error;
pub mod service;
pub mod validation;

pub use entity::{Customer, Order, Product};
pub use error::{Rejection, StoreError};
pub use service::{BulkReport, CrmService, NewCustomer, Outcome};
