//! In-memory adapters backed by `HashMap`s, for tests and local tooling.

mod activity;
mod contact;

pub use activity::InMemoryActivityRepository;
pub use contact::InMemoryContactStore;
