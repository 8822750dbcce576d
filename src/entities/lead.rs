//! Lead records and the sales pipeline stages

use crate::core::entity::EntityId;
use serde::{Deserialize, Serialize};

crate::label_enum! {
    /// Where a lead sits in the sales pipeline
    pub enum LeadStage {
        New => "New",
        Contacted => "Contacted",
        Qualified => "Qualified",
        ProposalSent => "Proposal Sent",
        Won => "Won",
        Lost => "Lost",
    }
}

impl LeadStage {
    /// Won and Lost end the pipeline
    pub fn is_closed(&self) -> bool {
        matches!(self, LeadStage::Won | LeadStage::Lost)
    }
}

impl Default for LeadStage {
    fn default() -> Self {
        LeadStage::New
    }
}

/// A prospective customer tracked through the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: EntityId,
    pub name: String,
    /// Contact address; mirrors `email` for every lead created by the form
    pub contact: String,
    pub company: String,
    pub stage: LeadStage,
    /// ISO date (`YYYY-MM-DD`), stored as typed
    pub follow_up_date: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub product_interest: String,
    pub email: String,
    pub phone: String,
}

/// A lead before the store has assigned its identifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadDraft {
    pub name: String,
    pub contact: String,
    pub company: String,
    pub stage: LeadStage,
    pub follow_up_date: String,
    pub notes: String,
    pub product_interest: String,
    pub email: String,
    pub phone: String,
}

crate::impl_pipeline_entity!(
    Lead, LeadDraft, "lead", "leads",
    name: name,
    indexed: ["name", "company", "contact"],
    text: {
        "name" => name,
        "contact" => contact,
        "company" => company,
        "stage" => stage,
        "followUpDate" => follow_up_date,
        "notes" => notes,
        "productInterest" => product_interest,
        "email" => email,
        "phone" => phone,
    },
    build: |id, draft| Lead {
        id,
        name: draft.name,
        contact: draft.contact,
        company: draft.company,
        stage: draft.stage,
        follow_up_date: draft.follow_up_date,
        notes: draft.notes,
        product_interest: draft.product_interest,
        email: draft.email,
        phone: draft.phone,
    },
);
