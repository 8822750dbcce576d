//! Pipeline record types

pub mod lead;
pub mod macros;
pub mod order;
pub mod seed;

pub use lead::{Lead, LeadDraft, LeadStage};
pub use order::{DispatchDetails, Order, OrderDraft, OrderStatus};
