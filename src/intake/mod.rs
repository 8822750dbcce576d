//! Form intake
//!
//! Forms hold the values a user is typing, turn them into drafts, and hand
//! the drafts to an entity store. Each form clears itself after a successful
//! submission.

pub mod lead_form;
pub mod order_form;

pub use lead_form::LeadForm;
pub use order_form::{INITIAL_PROGRESS, OrderForm, today};
