//! Order records and fulfilment statuses

use crate::core::currency::parse_currency;
use crate::core::entity::EntityId;
use crate::core::error::CurrencyError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

crate::label_enum! {
    /// Fulfilment status of an order
    pub enum OrderStatus {
        OrderReceived => "Order Received",
        InDevelopment => "In Development",
        ReadyToDispatch => "Ready to Dispatch",
        Dispatched => "Dispatched",
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::OrderReceived
    }
}

/// Shipping information for a dispatched order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchDetails {
    pub courier: String,
    pub tracking_number: String,
    pub dispatch_date: String,
}

/// An order placed by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: EntityId,
    /// Lead the order came from; not checked against the lead store
    #[serde(default)]
    pub lead_id: Option<EntityId>,
    pub client_name: String,
    pub client_company: String,
    pub status: OrderStatus,
    pub order_date: String,
    pub expected_delivery: String,
    /// Only present in seed data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatch_details: Option<DispatchDetails>,
    /// Percent complete, 0 to 100
    pub progress: u8,
    /// Currency text as entered, e.g. `$15,000`
    pub order_value: String,
    pub product_type: String,
}

impl Order {
    /// The order value as a number
    pub fn value(&self) -> Result<Decimal, CurrencyError> {
        parse_currency(&self.order_value)
    }

    /// Orders count as active until dispatched
    pub fn is_active(&self) -> bool {
        self.status != OrderStatus::Dispatched
    }
}

/// An order before the store has assigned its identifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub lead_id: Option<EntityId>,
    pub client_name: String,
    pub client_company: String,
    pub status: OrderStatus,
    pub order_date: String,
    pub expected_delivery: String,
    pub progress: u8,
    pub order_value: String,
    pub product_type: String,
}

crate::impl_pipeline_entity!(
    Order, OrderDraft, "order", "orders",
    name: client_name,
    indexed: ["clientName", "clientCompany", "productType"],
    text: {
        "clientName" => client_name,
        "clientCompany" => client_company,
        "status" => status,
        "orderDate" => order_date,
        "expectedDelivery" => expected_delivery,
        "orderValue" => order_value,
        "productType" => product_type,
    },
    build: |id, draft| Order {
        id,
        lead_id: draft.lead_id,
        client_name: draft.client_name,
        client_company: draft.client_company,
        status: draft.status,
        order_date: draft.order_date,
        expected_delivery: draft.expected_delivery,
        dispatch_details: None,
        progress: draft.progress,
        order_value: draft.order_value,
        product_type: draft.product_type,
    },
);
