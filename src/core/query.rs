//! Search term handling and text filtering

use crate::core::entity::Data;
use serde::{Deserialize, Serialize};

/// A search box value.
///
/// Keeps what the user typed for display and the lowercased form used for
/// matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchTerm {
    raw: String,
    needle: String,
}

impl SearchTerm {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The text as typed
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// An empty term matches every record
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether a record has the term in any indexed field
    pub fn matches<T: Data>(&self, record: &T) -> bool {
        self.is_empty() || record.matches(&self.needle)
    }

    /// Keep the records matching this term, in their original order
    pub fn filter<'a, T, I>(&self, records: I) -> Vec<&'a T>
    where
        T: Data,
        I: IntoIterator<Item = &'a T>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(*record))
            .collect()
    }
}

impl From<String> for SearchTerm {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for SearchTerm {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<SearchTerm> for String {
    fn from(term: SearchTerm) -> Self {
        term.raw
    }
}

/// Case-insensitive substring filter over a record's indexed fields.
///
/// A record is kept when any indexed field contains `term`. An empty term
/// keeps everything. Order is preserved.
pub fn filter<'a, T, I>(records: I, term: &str) -> Vec<&'a T>
where
    T: Data,
    I: IntoIterator<Item = &'a T>,
{
    SearchTerm::new(term).filter(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::{Entity, EntityId};
    use crate::core::field::FieldValue;

    #[derive(Clone, Debug, PartialEq)]
    struct Company {
        id: EntityId,
        name: String,
        sector: String,
    }

    impl Entity for Company {
        type Draft = (String, String);

        fn resource_name() -> &'static str {
            "companies"
        }

        fn resource_name_singular() -> &'static str {
            "company"
        }

        fn id(&self) -> EntityId {
            self.id
        }

        fn from_draft(id: EntityId, (name, sector): (String, String)) -> Self {
            Self { id, name, sector }
        }
    }

    impl Data for Company {
        fn name(&self) -> &str {
            &self.name
        }

        fn indexed_fields() -> &'static [&'static str] {
            &["name", "sector"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "name" => Some(FieldValue::from(self.name.as_str())),
                "sector" => Some(FieldValue::from(self.sector.as_str())),
                _ => None,
            }
        }
    }

    fn companies() -> Vec<Company> {
        vec![
            Company::from_draft(1, ("Acme Corp".into(), "Manufacturing".into())),
            Company::from_draft(2, ("Globex".into(), "Energy".into())),
            Company::from_draft(3, ("Initech".into(), "Software".into())),
        ]
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let all = companies();
        let kept = filter(&all, "");
        assert_eq!(kept, all.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_case_insensitive() {
        let all = companies();
        assert_eq!(filter(&all, "acme"), filter(&all, "ACME"));
        assert_eq!(filter(&all, "aCmE").len(), 1);
    }

    #[test]
    fn test_matches_any_indexed_field() {
        let all = companies();
        let ids: Vec<_> = filter(&all, "soft").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3]);

        let ids: Vec<_> = filter(&all, "e").iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = companies();
        let once = filter(&all, "gl");
        let twice = filter(once.iter().copied(), "gl");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_match() {
        let all = companies();
        assert!(filter(&all, "umbrella").is_empty());
    }

    #[test]
    fn test_search_term_keeps_raw_text() {
        let term = SearchTerm::from("Acme");
        assert_eq!(term.as_str(), "Acme");
        assert!(!term.is_empty());
        assert_eq!(String::from(term), "Acme");
    }
}
