//! In-memory implementation of EntityStore

use crate::core::entity::{Entity, EntityId};
use crate::core::error::EntityError;
use crate::core::store::EntityStore;
use std::collections::HashSet;

/// Largest identifier a seed record may carry.
///
/// Everything above it is reserved for identifiers the store hands out, so
/// the counter cannot run past `EntityId::MAX` and repeat itself.
pub const MAX_SEED_ID: EntityId = i64::MAX as EntityId;

/// In-memory entity store
///
/// Records live in a `Vec` in insertion order. Identifiers are handed out
/// from a counter that always sits one past the largest identifier the store
/// has ever held, so a new record can never collide with a seeded one.
#[derive(Debug, Clone)]
pub struct InMemoryStore<T: Entity> {
    records: Vec<T>,
    next_id: EntityId,
}

impl<T: Entity> InMemoryStore<T> {
    /// Create an empty store; the first record gets id 1
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding seed records, in the given order
    ///
    /// Fails if two seed records share an identifier, or if an identifier is
    /// above [`MAX_SEED_ID`].
    pub fn with_seed(records: Vec<T>) -> Result<Self, EntityError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            let id = record.id();
            if id > MAX_SEED_ID {
                return Err(EntityError::IdOutOfRange {
                    entity_type: T::resource_name_singular().to_string(),
                    id,
                    max: MAX_SEED_ID,
                });
            }
            if !seen.insert(id) {
                return Err(EntityError::AlreadyExists {
                    entity_type: T::resource_name_singular().to_string(),
                    id,
                });
            }
        }

        let next_id = records.iter().map(Entity::id).max().map_or(1, |max| max + 1);

        tracing::debug!(
            entity_type = T::resource_name(),
            count = records.len(),
            next_id,
            "Seeded store"
        );

        Ok(Self { records, next_id })
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    fn insert(&mut self, draft: T::Draft) -> T {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);

        let record = T::from_draft(id, draft);
        self.records.push(record.clone());

        tracing::debug!(
            entity_type = T::resource_name_singular(),
            id,
            total = self.records.len(),
            "Record inserted"
        );

        record
    }

    fn all(&self) -> &[T] {
        &self.records
    }
}
