//! Core module containing fundamental traits and types

pub mod currency;
pub mod entity;
pub mod error;
pub mod events;
pub mod field;
pub mod query;
pub mod store;

pub use currency::{format_currency, parse_currency};
pub use entity::{Data, Entity, EntityId};
pub use error::{CrmError, CurrencyError, EntityError, IntakeError};
pub use events::{CrmEvent, EventBus, EventEnvelope};
pub use field::FieldValue;
pub use query::{SearchTerm, filter};
pub use store::EntityStore;
