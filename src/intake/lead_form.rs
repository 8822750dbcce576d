//! Working fields of the "Add Lead" form

use crate::core::error::IntakeError;
use crate::core::store::EntityStore;
use crate::entities::lead::{Lead, LeadDraft, LeadStage};
use validator::{Validate, ValidationError};

/// The lead form's working state.
///
/// Every field has its own setter. `submit` checks that the required fields
/// are filled in (and that the email looks like one) and that the stage is
/// one of the six pipeline stages, hands a draft to the store, and clears
/// the form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct LeadForm {
    #[validate(length(min = 1))]
    name: String,
    contact: String,
    #[validate(length(min = 1))]
    company: String,
    #[validate(custom(function = "listed_stage"))]
    stage: LeadStage,
    #[validate(length(min = 1))]
    follow_up_date: String,
    notes: String,
    product_interest: String,
    #[validate(email)]
    email: String,
    #[validate(length(min = 1))]
    phone: String,
}

fn listed_stage(stage: &LeadStage) -> Result<(), ValidationError> {
    if stage.is_listed() {
        Ok(())
    } else {
        Err(ValidationError::new("unlisted_stage"))
    }
}

impl LeadForm {
    /// An empty form with the stage on New
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> &mut Self {
        self.name = value.into();
        self
    }

    /// Free-text contact; replaced by the email address on submit
    pub fn set_contact(&mut self, value: impl Into<String>) -> &mut Self {
        self.contact = value.into();
        self
    }

    pub fn set_company(&mut self, value: impl Into<String>) -> &mut Self {
        self.company = value.into();
        self
    }

    pub fn set_stage(&mut self, stage: LeadStage) -> &mut Self {
        self.stage = stage;
        self
    }

    pub fn set_follow_up_date(&mut self, value: impl Into<String>) -> &mut Self {
        self.follow_up_date = value.into();
        self
    }

    pub fn set_notes(&mut self, value: impl Into<String>) -> &mut Self {
        self.notes = value.into();
        self
    }

    pub fn set_product_interest(&mut self, value: impl Into<String>) -> &mut Self {
        self.product_interest = value.into();
        self
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> &mut Self {
        self.email = value.into();
        self
    }

    pub fn set_phone(&mut self, value: impl Into<String>) -> &mut Self {
        self.phone = value.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn stage(&self) -> &LeadStage {
        &self.stage
    }

    pub fn follow_up_date(&self) -> &str {
        &self.follow_up_date
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn product_interest(&self) -> &str {
        &self.product_interest
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The draft this form would submit right now.
    ///
    /// The email is the single source of truth for the contact address.
    pub fn to_draft(&self) -> LeadDraft {
        LeadDraft {
            name: self.name.clone(),
            contact: self.email.clone(),
            company: self.company.clone(),
            stage: self.stage.clone(),
            follow_up_date: self.follow_up_date.clone(),
            notes: self.notes.clone(),
            product_interest: self.product_interest.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Check the required fields, insert the lead, and clear the form.
    ///
    /// On rejection nothing is inserted and the fields are left as they were.
    pub fn submit<S: EntityStore<Lead>>(&mut self, store: &mut S) -> Result<Lead, IntakeError> {
        if let Err(errors) = self.validate() {
            let err = IntakeError::from_validation("lead", &errors);
            tracing::warn!(fields = ?err.fields(), "Lead form rejected");
            return Err(err);
        }

        let lead = store.insert(self.to_draft());
        self.reset();

        tracing::info!(lead_id = lead.id, stage = %lead.stage, "Lead added");
        Ok(lead)
    }

    /// Back to an empty form with the stage on New
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
