//! Store trait for ordered, append-only entity collections

use crate::core::entity::{Entity, EntityId};

/// An ordered collection of records that only grows.
///
/// Implementations assign identifiers on insert and keep records in
/// insertion order. There is no update or removal.
pub trait EntityStore<T: Entity> {
    /// Assign an identifier to the draft, append it, and return the stored record
    ///
    /// Insertion is total: every well-formed draft is accepted.
    fn insert(&mut self, draft: T::Draft) -> T;

    /// All records in insertion order
    fn all(&self) -> &[T];

    /// Look up a record by identifier
    fn get(&self, id: EntityId) -> Option<&T> {
        self.all().iter().find(|record| record.id() == id)
    }

    /// Number of records held
    fn len(&self) -> usize {
        self.all().len()
    }

    /// Whether the store holds no records
    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
