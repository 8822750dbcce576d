//! Storage implementations

pub mod in_memory;

pub use in_memory::{InMemoryStore, MAX_SEED_ID};
