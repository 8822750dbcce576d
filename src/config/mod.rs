//! Configuration loading and management

use crate::entities::seed::{sample_leads, sample_orders};
use crate::entities::{Lead, Order};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Product names the forms offer.
///
/// Advisory only: records store whatever text was chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCatalog {
    /// Options for a lead's product interest
    #[serde(default = "default_lead_products")]
    pub lead_products: Vec<String>,

    /// Options for an order's product type
    #[serde(default = "default_order_products")]
    pub order_products: Vec<String>,
}

fn default_lead_products() -> Vec<String> {
    [
        "CRM Software",
        "Automation Tools",
        "Full Suite",
        "Basic Plan",
        "Enterprise",
    ]
    .map(String::from)
    .to_vec()
}

fn default_order_products() -> Vec<String> {
    [
        "CRM Software",
        "Automation Tools",
        "Full Suite",
        "Basic Plan",
        "Enterprise Package",
        "Custom Solution",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self {
            lead_products: default_lead_products(),
            order_products: default_order_products(),
        }
    }
}

/// Event bus settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Broadcast buffer size
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    256
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

/// Dashboard summary settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// How many leads/orders the "recent" lists show
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_recent_limit() -> usize {
    4
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

/// Records loaded into the stores at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "sample_leads")]
    pub leads: Vec<Lead>,

    #[serde(default = "sample_orders")]
    pub orders: Vec<Order>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            leads: sample_leads(),
            orders: sample_orders(),
        }
    }
}

/// Complete configuration of a dashboard
///
/// Every section is optional in YAML; missing sections fall back to the
/// built-in defaults, including the sample seed records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrmConfig {
    #[serde(default)]
    pub catalog: ProductCatalog,

    #[serde(default)]
    pub events: EventsConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub seed: SeedConfig,
}

impl CrmConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            leads = config.seed.leads.len(),
            orders = config.seed.orders.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Built-in configuration: default catalog and the sample records
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Same settings with no seed records
    pub fn without_seed(mut self) -> Self {
        self.seed.leads.clear();
        self.seed.orders.clear();
        self
    }
}
