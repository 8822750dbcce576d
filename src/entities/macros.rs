//! Macros for reducing boilerplate when defining pipeline records

/// Implement `Entity` and `Data` for a record type and its draft.
///
/// The draft type must carry every field of the record except `id`.
/// Fields listed under `text` (anything with an `as_str()`) are exposed
/// through `Data::field_value` under their camelCase names; `indexed` picks
/// the ones the search box matches.
///
/// # Example
///
/// ```rust,ignore
/// impl_pipeline_entity!(
///     Lead, LeadDraft, "lead", "leads",
///     name: name,
///     indexed: ["name", "company"],
///     text: { "name" => name, "company" => company },
///     build: |id, draft| Lead { id, name: draft.name, company: draft.company },
/// );
/// ```
#[macro_export]
macro_rules! impl_pipeline_entity {
    (
        $type:ident, $draft:ident, $singular:expr, $plural:expr,
        name: $name_field:ident,
        indexed: [ $( $indexed:literal ),* $(,)? ],
        text: { $( $key:literal => $field:ident ),* $(,)? },
        build: |$id:ident, $d:ident| $build:expr $(,)?
    ) => {
        impl $crate::core::entity::Entity for $type {
            type Draft = $draft;

            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> $crate::core::entity::EntityId {
                self.id
            }

            fn from_draft($id: $crate::core::entity::EntityId, $d: $draft) -> Self {
                $build
            }
        }

        impl $crate::core::entity::Data for $type {
            fn name(&self) -> &str {
                &self.$name_field
            }

            fn indexed_fields() -> &'static [&'static str] {
                &[ $( $indexed ),* ]
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    "id" => i64::try_from(self.id)
                        .ok()
                        .map($crate::core::field::FieldValue::Integer),
                    $( $key => Some($crate::core::field::FieldValue::from(self.$field.as_str())), )*
                    _ => None,
                }
            }
        }
    };
}

/// Declare a fixed set of pipeline labels as an enum.
///
/// Each variant maps to its display label. Labels outside the set are kept
/// verbatim in an `Other` variant so records carrying them survive a
/// round-trip; `is_listed()` tells the two apart. Serialized as the label.
///
/// # Example
///
/// ```rust,ignore
/// label_enum! {
///     pub enum Priority {
///         High => "High",
///         Low => "Low",
///     }
/// }
///
/// assert_eq!(Priority::parse("High"), Priority::High);
/// assert_eq!(Priority::parse("Urgent"), Priority::Other("Urgent".into()));
/// ```
#[macro_export]
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A label outside the fixed set, kept verbatim
            Other(String),
        }

        impl $name {
            /// The fixed labels, in declared order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The display label
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $label, )+
                    $name::Other(label) => label.as_str(),
                }
            }

            /// Map a label to its variant; unknown labels become `Other`
            pub fn parse(label: &str) -> Self {
                match label {
                    $( $label => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }

            /// Whether this is one of the fixed labels
            pub fn is_listed(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self::parse(&label)
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                Self::parse(label)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(label) => label,
                    listed => listed.as_str().to_string(),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
