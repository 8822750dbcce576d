//! Macro-generated test suite for `EntityStore<T>` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//!
//! use store_harness::*;
//!
//! entity_store_tests!(lead_store, Lead, sample_leads(), lead_draft);
//! ```
//!
//! # Generated Tests
//!
//! - `test_empty_store`: a new store holds nothing
//! - `test_first_id_is_one`: ids start at 1 on an empty store
//! - `test_ids_unique_and_increasing`: every insert gets a fresh, larger id
//! - `test_insertion_order`: `all()` returns records in insertion order
//! - `test_get`: lookup by id, unknown ids give `None`
//! - `test_seed_preserved`: seed records keep their ids and order
//! - `test_insert_after_seed`: new ids never collide with seeded ones
//! - `test_duplicate_seed_rejected`: repeated seed ids are an error
//! - `test_search_by_name`: inserted records are reachable via the search box

/// Generate an `EntityStore` conformance suite for one record type.
///
/// - `$module`: name of the generated test module
/// - `$entity`: the record type
/// - `$seed`: expression producing a `Vec<$entity>` with distinct ids
/// - `$draft`: `fn(usize) -> <$entity as Entity>::Draft`
#[macro_export]
macro_rules! entity_store_tests {
    ($module:ident, $entity:ty, $seed:expr, $draft:expr) => {
        mod $module {
            use super::*;
            use leadflow::core::entity::{Data, Entity};
            use leadflow::core::query::SearchTerm;
            use leadflow::core::store::EntityStore;
            use leadflow::storage::InMemoryStore;

            fn empty() -> InMemoryStore<$entity> {
                InMemoryStore::new()
            }

            fn seeded() -> InMemoryStore<$entity> {
                InMemoryStore::with_seed($seed).unwrap()
            }

            #[test]
            fn test_empty_store() {
                let store = empty();
                assert!(store.is_empty());
                assert_eq!(store.len(), 0);
                assert!(store.all().is_empty());
            }

            #[test]
            fn test_first_id_is_one() {
                let mut store = empty();
                let record = store.insert($draft(0));
                assert_eq!(record.id(), 1);
            }

            #[test]
            fn test_ids_unique_and_increasing() {
                let mut store = empty();
                let ids: Vec<_> = (0..5).map(|n| store.insert($draft(n)).id()).collect();

                assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
                assert_eq!(store.len(), 5);
            }

            #[test]
            fn test_insertion_order() {
                let mut store = empty();
                let inserted: Vec<$entity> = (0..3).map(|n| store.insert($draft(n))).collect();

                assert_eq!(store.all(), inserted.as_slice());
            }

            #[test]
            fn test_get() {
                let mut store = empty();
                let record = store.insert($draft(0));

                assert_eq!(store.get(record.id()), Some(&record));
                assert_eq!(store.get(record.id() + 100), None);
            }

            #[test]
            fn test_seed_preserved() {
                let seed: Vec<$entity> = $seed;
                let store = seeded();

                assert_eq!(store.all(), seed.as_slice());
            }

            #[test]
            fn test_insert_after_seed() {
                let mut store = seeded();
                let max_seeded = store.all().iter().map(Entity::id).max().unwrap();

                let record = store.insert($draft(9));
                assert_eq!(record.id(), max_seeded + 1);

                let mut ids: Vec<_> = store.all().iter().map(Entity::id).collect();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), store.len());
                assert_eq!(store.all().last(), Some(&record));
            }

            #[test]
            fn test_duplicate_seed_rejected() {
                let mut seed: Vec<$entity> = $seed;
                let first = seed[0].clone();
                seed.push(first);

                let err = InMemoryStore::with_seed(seed).unwrap_err();
                assert_eq!(err.error_code(), "ENTITY_ALREADY_EXISTS");
                assert!(err.to_string().contains(<$entity>::resource_name_singular()));
            }

            #[test]
            fn test_search_by_name() {
                let mut store = empty();
                let record = store.insert($draft(7));
                store.insert($draft(8));

                let term = SearchTerm::new(record.name().to_uppercase());
                let found = term.filter(store.all());
                assert_eq!(found, vec![&record]);
            }
        }
    };
}
