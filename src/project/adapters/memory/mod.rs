//! In-memory adapter for tests and local use.

mod store;

pub use store::InMemoryProjectStore;
