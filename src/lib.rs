//! # leadflow
//!
//! State management for a small sales pipeline: leads moving through stages
//! and orders moving through fulfilment.
//!
//! ## Features
//!
//! - **Typed records**: leads and orders with fixed stage/status labels
//! - **Form intake**: required-field checks before anything reaches a store
//! - **Search**: case-insensitive substring filtering over indexed fields
//! - **Derived views**: kanban columns per stage, count and value per status
//! - **Events**: every added record is broadcast on a tokio channel
//! - **Configuration-Based**: catalog, limits and seed records from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leadflow::prelude::*;
//!
//! let mut dashboard = Dashboard::new()?;
//!
//! dashboard
//!     .leads_mut()
//!     .form_mut()
//!     .set_name("Priya Das")
//!     .set_company("Orbital")
//!     .set_email("priya@orbital.io")
//!     .set_phone("+44-20-5550-0101")
//!     .set_follow_up_date("2024-07-02");
//! let lead = dashboard.leads_mut().submit()?;
//!
//! dashboard.leads_mut().set_search_term("orbital");
//! if let LeadView::Kanban(board) = dashboard.leads().view() {
//!     println!("{} new leads", board.column(&LeadStage::New).len());
//! }
//! ```

pub mod config;
pub mod core;
pub mod dashboard;
pub mod entities;
pub mod intake;
pub mod pipeline;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        currency::{format_currency, parse_currency},
        entity::{Data, Entity, EntityId},
        error::{CrmError, CurrencyError, EntityError, IntakeError},
        events::{CrmEvent, EventBus, EventEnvelope},
        field::FieldValue,
        query::SearchTerm,
        store::EntityStore,
    };

    // === Macros ===
    pub use crate::{impl_pipeline_entity, label_enum};

    // === Records ===
    pub use crate::entities::{
        DispatchDetails, Lead, LeadDraft, LeadStage, Order, OrderDraft, OrderStatus,
    };

    // === Intake ===
    pub use crate::intake::{LeadForm, OrderForm};

    // === Views ===
    pub use crate::pipeline::{KanbanBoard, StatusOverview, StatusTotals};

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::{CrmConfig, ProductCatalog};

    // === Dashboard ===
    pub use crate::dashboard::{
        Dashboard, DashboardSummary, EmptyState, LeadBoard, LeadView, OrderBoard, ViewMode,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}
