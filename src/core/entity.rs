//! Entity traits defining the core abstraction for pipeline records

use crate::core::field::FieldValue;

/// Identifier assigned to a record by its store.
pub type EntityId = u64;

/// Base trait for every record kept in an entity store.
///
/// A record is created from a `Draft` (the same record without its
/// identifier). The store owns identifier assignment; nothing else
/// constructs a record with an identifier except seed loading.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The record without its identifier, as produced by form intake
    type Draft: Clone + Send + Sync;

    /// The plural resource name (e.g., "leads", "orders")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "lead", "order")
    fn resource_name_singular() -> &'static str;

    /// Get the identifier of this record
    fn id(&self) -> EntityId;

    /// Attach an identifier to a draft
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;
}

/// Trait for records that can be searched by the query view.
///
/// Data records extend the base Entity with:
/// - name: A human-readable name
/// - indexed_fields: Fields matched by the search box
/// - field_value: Dynamic field access
pub trait Data: Entity {
    /// Get the display name of this record
    fn name(&self) -> &str;

    /// Fields matched (with logical OR) by a search term
    fn indexed_fields() -> &'static [&'static str];

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Whether any indexed field contains the already-lowercased needle
    fn matches(&self, needle: &str) -> bool {
        Self::indexed_fields().iter().any(|field| {
            self.field_value(field)
                .is_some_and(|value| value.contains_lowercase(needle))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Contact {
        id: EntityId,
        name: String,
        city: String,
    }

    #[derive(Clone, Debug)]
    struct ContactDraft {
        name: String,
        city: String,
    }

    impl Entity for Contact {
        type Draft = ContactDraft;

        fn resource_name() -> &'static str {
            "contacts"
        }

        fn resource_name_singular() -> &'static str {
            "contact"
        }

        fn id(&self) -> EntityId {
            self.id
        }

        fn from_draft(id: EntityId, draft: ContactDraft) -> Self {
            Self {
                id,
                name: draft.name,
                city: draft.city,
            }
        }
    }

    impl Data for Contact {
        fn name(&self) -> &str {
            &self.name
        }

        fn indexed_fields() -> &'static [&'static str] {
            &["name"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "name" => Some(FieldValue::String(self.name.clone())),
                "city" => Some(FieldValue::String(self.city.clone())),
                _ => None,
            }
        }
    }

    #[test]
    fn test_from_draft_keeps_fields() {
        let contact = Contact::from_draft(
            7,
            ContactDraft {
                name: "Ada".to_string(),
                city: "London".to_string(),
            },
        );
        assert_eq!(contact.id(), 7);
        assert_eq!(contact.name(), "Ada");
        assert_eq!(Contact::resource_name(), "contacts");
        assert_eq!(Contact::resource_name_singular(), "contact");
    }

    #[test]
    fn test_matches_only_indexed_fields() {
        let contact = Contact::from_draft(
            1,
            ContactDraft {
                name: "Ada Lovelace".to_string(),
                city: "London".to_string(),
            },
        );
        assert!(contact.matches("lovelace"));
        // city is readable but not indexed
        assert!(!contact.matches("london"));
    }
}
