//! Typed error handling for leadflow
//!
//! Each failure category has its own error type so callers can match on the
//! case they care about instead of inspecting a generic `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`EntityError`]: store-level failures (seed identifier collisions and range)
//! - [`IntakeError`]: form submissions missing required fields
//! - [`CurrencyError`]: order values that cannot be read as money
//!
//! # Example
//!
//! ```rust,ignore
//! match board.submit() {
//!     Ok(lead) => println!("Added lead #{}", lead.id),
//!     Err(IntakeError::Rejected { fields, .. }) => {
//!         println!("Please fill in: {}", fields.join(", "));
//!     }
//! }
//! ```

use crate::core::entity::EntityId;
use thiserror::Error;

/// The main error type for leadflow
#[derive(Debug, Error)]
pub enum CrmError {
    /// Entity store errors
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Form intake errors
    #[error(transparent)]
    Intake(#[from] IntakeError),

    /// Currency parsing errors
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CrmError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CrmError::Entity(e) => e.error_code(),
            CrmError::Intake(e) => e.error_code(),
            CrmError::Currency(e) => e.error_code(),
            CrmError::Config(_) => "CONFIG_ERROR",
        }
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity stores
#[derive(Debug, Error, PartialEq)]
pub enum EntityError {
    /// Two records share an identifier
    #[error("{entity_type} with id '{id}' already exists")]
    AlreadyExists { entity_type: String, id: EntityId },

    /// A seed identifier above the range seeds may use
    #[error("{entity_type} id '{id}' is above the largest seed id {max}")]
    IdOutOfRange {
        entity_type: String,
        id: EntityId,
        max: EntityId,
    },
}

impl EntityError {
    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::AlreadyExists { .. } => "ENTITY_ALREADY_EXISTS",
            EntityError::IdOutOfRange { .. } => "ENTITY_ID_OUT_OF_RANGE",
        }
    }
}

// =============================================================================
// Intake Errors
// =============================================================================

/// Errors raised when a form cannot be submitted
#[derive(Debug, Error, PartialEq)]
pub enum IntakeError {
    /// Required fields are missing or malformed
    #[error("{form} form rejected, check fields: {}", fields.join(", "))]
    Rejected {
        form: &'static str,
        fields: Vec<String>,
    },
}

impl IntakeError {
    /// Build a rejection from validator output, field names sorted
    pub fn from_validation(form: &'static str, errors: &validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        IntakeError::Rejected { form, fields }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            IntakeError::Rejected { .. } => "INTAKE_REJECTED",
        }
    }

    /// Names of the fields that blocked the submission
    pub fn fields(&self) -> &[String] {
        match self {
            IntakeError::Rejected { fields, .. } => fields,
        }
    }
}

// =============================================================================
// Currency Errors
// =============================================================================

/// Errors raised while reading a currency string
#[derive(Debug, Error, PartialEq)]
pub enum CurrencyError {
    /// Nothing left once symbols and separators are removed
    #[error("Currency value is empty")]
    Empty,

    /// Not a decimal number
    #[error("Malformed currency value: '{input}'")]
    Malformed { input: String },
}

impl CurrencyError {
    pub fn error_code(&self) -> &'static str {
        match self {
            CurrencyError::Empty => "CURRENCY_EMPTY",
            CurrencyError::Malformed { .. } => "CURRENCY_MALFORMED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_error_display() {
        let err = EntityError::AlreadyExists {
            entity_type: "lead".to_string(),
            id: 4,
        };
        assert_eq!(err.to_string(), "lead with id '4' already exists");
        assert_eq!(err.error_code(), "ENTITY_ALREADY_EXISTS");
    }

    #[test]
    fn test_intake_error_lists_fields() {
        let err = IntakeError::Rejected {
            form: "lead",
            fields: vec!["email".to_string(), "name".to_string()],
        };
        assert_eq!(err.to_string(), "lead form rejected, check fields: email, name");
        assert_eq!(err.fields(), ["email".to_string(), "name".to_string()]);
    }

    #[test]
    fn test_crm_error_codes_delegate() {
        let err: CrmError = CurrencyError::Empty.into();
        assert_eq!(err.error_code(), "CURRENCY_EMPTY");

        let err: CrmError = IntakeError::Rejected {
            form: "order",
            fields: vec![],
        }
        .into();
        assert_eq!(err.error_code(), "INTAKE_REJECTED");

        let err = CrmError::Config("bad yaml".to_string());
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert_eq!(err.to_string(), "Configuration error: bad yaml");
    }

    #[test]
    fn test_transparent_display() {
        let err: CrmError = CurrencyError::Malformed {
            input: "abc".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Malformed currency value: 'abc'");
    }
}
