//! Service layer of the contacts application.
//!
//! The domain module holds the models, the hexagonal ports and the
//! service implementations; adapters provide Postgres, in-memory and
//! avatar-provider backends for the outbound ports.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod factory;
