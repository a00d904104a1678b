//! Postgres implementations of the outbound ports.
//!
//! Queries are runtime-checked so the crate builds without a database at
//! hand; schema lives with the surrounding application.

mod activity;
mod contact;
mod contact_field;

pub use activity::PostgresActivityRepository;
pub use contact::PostgresContactRepository;
pub use contact_field::PostgresContactFieldLookup;
