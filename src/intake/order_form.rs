//! Working fields of the "Create Order" form

use crate::core::entity::EntityId;
use crate::core::error::IntakeError;
use crate::core::store::EntityStore;
use crate::entities::order::{Order, OrderDraft, OrderStatus};
use chrono::Utc;
use validator::{Validate, ValidationError};

/// Progress a fresh order starts at
pub const INITIAL_PROGRESS: u8 = 10;

/// Today's UTC date as `YYYY-MM-DD`
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// The order form's working state
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct OrderForm {
    lead_id: Option<EntityId>,
    #[validate(length(min = 1))]
    client_name: String,
    #[validate(length(min = 1))]
    client_company: String,
    #[validate(custom(function = "listed_status"))]
    status: OrderStatus,
    #[validate(length(min = 1))]
    order_date: String,
    #[validate(length(min = 1))]
    expected_delivery: String,
    #[validate(range(max = 100))]
    progress: u8,
    #[validate(length(min = 1))]
    order_value: String,
    #[validate(length(min = 1))]
    product_type: String,
}

fn listed_status(status: &OrderStatus) -> Result<(), ValidationError> {
    if status.is_listed() {
        Ok(())
    } else {
        Err(ValidationError::new("unlisted_status"))
    }
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            lead_id: None,
            client_name: String::new(),
            client_company: String::new(),
            status: OrderStatus::default(),
            order_date: today(),
            expected_delivery: String::new(),
            progress: INITIAL_PROGRESS,
            order_value: String::new(),
            product_type: String::new(),
        }
    }
}

impl OrderForm {
    /// A blank form: Order Received, dated today, 10% progress
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_lead_id(&mut self, lead_id: Option<EntityId>) -> &mut Self {
        self.lead_id = lead_id;
        self
    }

    pub fn set_client_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.client_name = value.into();
        self
    }

    pub fn set_client_company(&mut self, value: impl Into<String>) -> &mut Self {
        self.client_company = value.into();
        self
    }

    pub fn set_status(&mut self, status: OrderStatus) -> &mut Self {
        self.status = status;
        self
    }

    pub fn set_order_date(&mut self, value: impl Into<String>) -> &mut Self {
        self.order_date = value.into();
        self
    }

    pub fn set_expected_delivery(&mut self, value: impl Into<String>) -> &mut Self {
        self.expected_delivery = value.into();
        self
    }

    pub fn set_progress(&mut self, progress: u8) -> &mut Self {
        self.progress = progress;
        self
    }

    pub fn set_order_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.order_value = value.into();
        self
    }

    pub fn set_product_type(&mut self, value: impl Into<String>) -> &mut Self {
        self.product_type = value.into();
        self
    }

    pub fn lead_id(&self) -> Option<EntityId> {
        self.lead_id
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn client_company(&self) -> &str {
        &self.client_company
    }

    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    pub fn order_date(&self) -> &str {
        &self.order_date
    }

    pub fn expected_delivery(&self) -> &str {
        &self.expected_delivery
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn order_value(&self) -> &str {
        &self.order_value
    }

    pub fn product_type(&self) -> &str {
        &self.product_type
    }

    pub fn to_draft(&self) -> OrderDraft {
        OrderDraft {
            lead_id: self.lead_id,
            client_name: self.client_name.clone(),
            client_company: self.client_company.clone(),
            status: self.status.clone(),
            order_date: self.order_date.clone(),
            expected_delivery: self.expected_delivery.clone(),
            progress: self.progress,
            order_value: self.order_value.clone(),
            product_type: self.product_type.clone(),
        }
    }

    /// Check the required fields, insert the order, and clear the form.
    ///
    /// On rejection nothing is inserted and the fields are left as they were.
    pub fn submit<S: EntityStore<Order>>(&mut self, store: &mut S) -> Result<Order, IntakeError> {
        if let Err(errors) = self.validate() {
            let err = IntakeError::from_validation("order", &errors);
            tracing::warn!(fields = ?err.fields(), "Order form rejected");
            return Err(err);
        }

        let order = store.insert(self.to_draft());
        self.reset();

        tracing::info!(
            order_id = order.id,
            status = %order.status,
            value = %order.order_value,
            "Order added"
        );
        Ok(order)
    }

    /// Back to a blank form dated today
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
