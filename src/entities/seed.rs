//! Built-in sample records loaded when no seed is configured

use crate::entities::lead::{Lead, LeadStage};
use crate::entities::order::{DispatchDetails, Order, OrderStatus};

#[allow(clippy::too_many_arguments)]
fn lead(
    id: u64,
    name: &str,
    email: &str,
    company: &str,
    stage: LeadStage,
    follow_up_date: &str,
    notes: &str,
    product_interest: &str,
    phone: &str,
) -> Lead {
    Lead {
        id,
        name: name.to_string(),
        contact: email.to_string(),
        company: company.to_string(),
        stage,
        follow_up_date: follow_up_date.to_string(),
        notes: notes.to_string(),
        product_interest: product_interest.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

/// The four sample leads
pub fn sample_leads() -> Vec<Lead> {
    vec![
        lead(
            1,
            "John Smith",
            "john@acmecorp.com",
            "Acme Corp",
            LeadStage::Qualified,
            "2024-05-28",
            "Interested in enterprise solution",
            "CRM Software",
            "+1-555-0123",
        ),
        lead(
            2,
            "Sarah Johnson",
            "sarah@techsol.com",
            "Tech Solutions",
            LeadStage::Contacted,
            "2024-05-30",
            "Needs demo next week",
            "Automation Tools",
            "+1-555-0124",
        ),
        lead(
            3,
            "Mike Wilson",
            "mike@globalinc.com",
            "Global Inc",
            LeadStage::ProposalSent,
            "2024-05-25",
            "Waiting for approval from board",
            "Full Suite",
            "+1-555-0125",
        ),
        lead(
            4,
            "Lisa Chen",
            "lisa@startupxyz.com",
            "StartupXYZ",
            LeadStage::New,
            "2024-05-26",
            "Initial inquiry about pricing",
            "Basic Plan",
            "+1-555-0126",
        ),
    ]
}

/// The four sample orders; the last one is dispatched with shipping details
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            lead_id: Some(1),
            client_name: "John Smith".to_string(),
            client_company: "Acme Corp".to_string(),
            status: OrderStatus::InDevelopment,
            order_date: "2024-05-20".to_string(),
            expected_delivery: "2024-06-15".to_string(),
            dispatch_details: None,
            progress: 65,
            order_value: "$15,000".to_string(),
            product_type: "CRM Software".to_string(),
        },
        Order {
            id: 2,
            lead_id: Some(2),
            client_name: "Sarah Johnson".to_string(),
            client_company: "Tech Solutions".to_string(),
            status: OrderStatus::ReadyToDispatch,
            order_date: "2024-05-18".to_string(),
            expected_delivery: "2024-05-30".to_string(),
            dispatch_details: None,
            progress: 90,
            order_value: "$8,500".to_string(),
            product_type: "Automation Tools".to_string(),
        },
        Order {
            id: 3,
            lead_id: Some(3),
            client_name: "Mike Wilson".to_string(),
            client_company: "Global Inc".to_string(),
            status: OrderStatus::OrderReceived,
            order_date: "2024-05-22".to_string(),
            expected_delivery: "2024-06-20".to_string(),
            dispatch_details: None,
            progress: 25,
            order_value: "$25,000".to_string(),
            product_type: "Full Suite".to_string(),
        },
        Order {
            id: 4,
            lead_id: Some(4),
            client_name: "David Chen".to_string(),
            client_company: "Future Tech".to_string(),
            status: OrderStatus::Dispatched,
            order_date: "2024-05-15".to_string(),
            expected_delivery: "2024-05-25".to_string(),
            dispatch_details: Some(DispatchDetails {
                courier: "FedEx".to_string(),
                tracking_number: "FX123456789".to_string(),
                dispatch_date: "2024-05-24".to_string(),
            }),
            progress: 100,
            order_value: "$12,000".to_string(),
            product_type: "Enterprise Package".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_leads_cover_stages() {
        let leads = sample_leads();
        assert_eq!(leads.len(), 4);
        assert!(leads.iter().all(|l| l.contact == l.email));
        assert!(leads.iter().all(|l| l.stage.is_listed()));
    }

    #[test]
    fn test_only_dispatched_order_has_details() {
        for order in sample_orders() {
            assert_eq!(
                order.dispatch_details.is_some(),
                order.status == OrderStatus::Dispatched
            );
        }
    }
}
