//! Derived pipeline views: kanban columns for leads, status totals for orders

pub mod kanban;
pub mod overview;

pub use kanban::KanbanBoard;
pub use overview::{StatusOverview, StatusTotals};
