//! Order management board

use crate::core::error::IntakeError;
use crate::core::events::{CrmEvent, EventBus};
use crate::core::query::SearchTerm;
use crate::core::store::EntityStore;
use crate::entities::order::Order;
use crate::intake::OrderForm;
use crate::pipeline::StatusOverview;
use crate::storage::InMemoryStore;

/// Why the order list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// No search text and no orders
    NoOrders,
    /// Nothing matches the search box
    NoMatches,
}

impl EmptyState {
    /// Hint shown in place of the list
    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoOrders => "Create your first order to get started.",
            EmptyState::NoMatches => "Try adjusting your search criteria.",
        }
    }
}

/// State behind the order management page: the order store, the
/// create-order form and the search box.
#[derive(Debug)]
pub struct OrderBoard {
    store: InMemoryStore<Order>,
    form: OrderForm,
    search: SearchTerm,
    events: EventBus,
}

impl OrderBoard {
    pub fn new(store: InMemoryStore<Order>, events: EventBus) -> Self {
        Self {
            store,
            form: OrderForm::new(),
            search: SearchTerm::default(),
            events,
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search = SearchTerm::new(term);
        tracing::debug!(term = self.search.as_str(), "Order search changed");
    }

    pub fn search_term(&self) -> &str {
        self.search.as_str()
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    /// Submit the create-order form and announce the new order
    pub fn submit(&mut self) -> Result<Order, IntakeError> {
        let order = self.form.submit(&mut self.store)?;
        self.events.publish(CrmEvent::OrderAdded {
            order_id: order.id,
            status: order.status.to_string(),
            order_value: order.order_value.clone(),
        });
        Ok(order)
    }

    /// Every order in insertion order, ignoring the search box
    pub fn orders(&self) -> &[Order] {
        self.store.all()
    }

    /// Orders matching the search box, in insertion order
    pub fn filtered(&self) -> Vec<&Order> {
        self.search.filter(self.store.all())
    }

    /// Count and value per status over the matching orders
    pub fn status_overview(&self) -> StatusOverview {
        let overview = StatusOverview::aggregate(self.filtered());
        tracing::debug!(
            term = self.search.as_str(),
            total = %overview.grand_total(),
            "Order overview recomputed"
        );
        overview
    }

    /// Set when the filtered list is empty; any search text means `NoMatches`
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.filtered().is_empty() {
            None
        } else if self.search.is_empty() {
            Some(EmptyState::NoOrders)
        } else {
            Some(EmptyState::NoMatches)
        }
    }
}
