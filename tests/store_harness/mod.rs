//! Shared test harness for entity store testing
//!
//! Provides draft builders for both record types and the
//! `entity_store_tests!` contract suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//! use store_harness::*;
//! ```

#![allow(dead_code)]

pub mod entity_store_tests;

use leadflow::entities::{LeadDraft, LeadStage, OrderDraft, OrderStatus};
use leadflow::intake::{LeadForm, OrderForm};

// ---------------------------------------------------------------------------
// Draft builders
// ---------------------------------------------------------------------------

/// A lead draft with every required field set; `n` keeps names distinct
pub fn lead_draft(n: usize) -> LeadDraft {
    LeadDraft {
        name: format!("Lead {n}"),
        contact: format!("lead{n}@example.com"),
        company: format!("Company {n}"),
        stage: LeadStage::New,
        follow_up_date: "2024-06-01".to_string(),
        notes: String::new(),
        product_interest: "Basic Plan".to_string(),
        email: format!("lead{n}@example.com"),
        phone: format!("+1-555-{n:04}"),
    }
}

/// An order draft with every required field set; `n` keeps names distinct
pub fn order_draft(n: usize) -> OrderDraft {
    OrderDraft {
        lead_id: None,
        client_name: format!("Client {n}"),
        client_company: format!("Client Co {n}"),
        status: OrderStatus::OrderReceived,
        order_date: "2024-06-01".to_string(),
        expected_delivery: "2024-06-30".to_string(),
        progress: 10,
        order_value: format!("${},000", n + 1),
        product_type: "CRM Software".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Form helpers
// ---------------------------------------------------------------------------

/// Fill every required lead field
pub fn fill_lead_form(form: &mut LeadForm, name: &str, company: &str, email: &str) {
    form.set_name(name)
        .set_company(company)
        .set_email(email)
        .set_phone("+1-555-0199")
        .set_follow_up_date("2024-06-15");
}

/// Fill every required order field
pub fn fill_order_form(form: &mut OrderForm, client: &str, company: &str, value: &str) {
    form.set_client_name(client)
        .set_client_company(company)
        .set_expected_delivery("2024-07-01")
        .set_order_value(value)
        .set_product_type("Full Suite");
}
