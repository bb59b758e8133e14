//! Transport-specific API exposures
//!
//! Each submodule turns the framework-agnostic core into one wire surface.
//! GraphQL is the only exposure this crate ships.

pub mod graphql;
