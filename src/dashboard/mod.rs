//! The dashboard: both boards sharing one event bus, plus headline figures

pub mod leads;
pub mod orders;

pub use leads::{LeadBoard, LeadView, ViewMode};
pub use orders::{EmptyState, OrderBoard};

use crate::config::{CrmConfig, ProductCatalog};
use crate::core::currency::format_currency;
use crate::core::error::CrmError;
use crate::core::events::{EventBus, EventEnvelope};
use crate::core::store::EntityStore;
use crate::entities::lead::{Lead, LeadStage};
use crate::entities::order::Order;
use crate::pipeline::StatusOverview;
use crate::storage::InMemoryStore;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::Path;
use tokio::sync::broadcast;

/// Headline figures over every record, ignoring the search boxes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_leads: usize,
    /// Orders not yet dispatched
    pub active_orders: usize,
    /// Won leads as a percentage of all leads, one decimal place
    pub conversion_rate: f64,
    /// Sum of every parseable order value
    pub pipeline_value: Decimal,
    /// Newest leads first
    pub recent_leads: Vec<Lead>,
    /// Newest orders first
    pub recent_orders: Vec<Order>,
}

impl DashboardSummary {
    pub fn formatted_pipeline_value(&self) -> String {
        format_currency(self.pipeline_value)
    }
}

/// Lead and order boards wired to one event bus
#[derive(Debug)]
pub struct Dashboard {
    leads: LeadBoard,
    orders: OrderBoard,
    events: EventBus,
    catalog: ProductCatalog,
    recent_limit: usize,
}

impl Dashboard {
    /// Build the dashboard with the built-in configuration and sample records
    pub fn new() -> Result<Self, CrmError> {
        Self::from_config(CrmConfig::default_config())
    }

    /// Build the dashboard from a YAML configuration file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CrmError> {
        let config =
            CrmConfig::from_yaml_file(path).map_err(|err| CrmError::Config(format!("{err:#}")))?;
        Self::from_config(config)
    }

    /// Build the dashboard from a loaded configuration
    ///
    /// Fails when the seed records repeat an identifier, carry one above
    /// the seed range, or hold an order whose progress is over 100.
    pub fn from_config(config: CrmConfig) -> Result<Self, CrmError> {
        let CrmConfig {
            catalog,
            events,
            dashboard,
            seed,
        } = config;

        if let Some(order) = seed.orders.iter().find(|order| order.progress > 100) {
            return Err(CrmError::Config(format!(
                "order {} has progress {}, expected 0 to 100",
                order.id, order.progress
            )));
        }

        let bus = EventBus::new(events.capacity);
        let lead_store = InMemoryStore::with_seed(seed.leads)?;
        let order_store = InMemoryStore::with_seed(seed.orders)?;

        tracing::info!(
            leads = lead_store.all().len(),
            orders = order_store.all().len(),
            capacity = events.capacity,
            "Dashboard initialized"
        );

        Ok(Self {
            leads: LeadBoard::new(lead_store, bus.clone()),
            orders: OrderBoard::new(order_store, bus.clone()),
            events: bus,
            catalog,
            recent_limit: dashboard.recent_limit,
        })
    }

    pub fn leads(&self) -> &LeadBoard {
        &self.leads
    }

    pub fn leads_mut(&mut self) -> &mut LeadBoard {
        &mut self.leads
    }

    pub fn orders(&self) -> &OrderBoard {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut OrderBoard {
        &mut self.orders
    }

    /// Product names offered by the forms
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Receive every lead and order added from now on
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.events.subscribe()
    }

    pub fn summary(&self) -> DashboardSummary {
        let leads = self.leads.leads();
        let orders = self.orders.orders();

        let won = leads
            .iter()
            .filter(|lead| lead.stage == LeadStage::Won)
            .count();

        DashboardSummary {
            total_leads: leads.len(),
            active_orders: orders.iter().filter(|order| order.is_active()).count(),
            conversion_rate: conversion_rate(won, leads.len()),
            pipeline_value: StatusOverview::aggregate(orders).grand_total(),
            recent_leads: leads.iter().rev().take(self.recent_limit).cloned().collect(),
            recent_orders: orders
                .iter()
                .rev()
                .take(self.recent_limit)
                .cloned()
                .collect(),
        }
    }
}

fn conversion_rate(won: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (won as f64 * 1000.0 / total as f64).round() / 10.0
}
