//! Error codes and messages as seen from outside the crate

use leadflow::core::currency::parse_currency;
use leadflow::core::error::{CrmError, CurrencyError, IntakeError};
use leadflow::dashboard::Dashboard;
use leadflow::entities::seed::sample_orders;
use rust_decimal::Decimal;

#[test]
fn test_intake_rejection_lists_lead_fields() {
    let mut dashboard = Dashboard::new().unwrap();
    dashboard.leads_mut().form_mut().set_name("Only A Name");

    let err = dashboard.leads_mut().submit().unwrap_err();
    assert_eq!(
        err.to_string(),
        "lead form rejected, check fields: company, email, follow_up_date, phone"
    );

    let err: CrmError = err.into();
    assert_eq!(err.error_code(), "INTAKE_REJECTED");
}

#[test]
fn test_currency_errors() {
    assert_eq!(parse_currency("  "), Err(CurrencyError::Empty));
    assert_eq!(parse_currency("$"), Err(CurrencyError::Empty));
    assert_eq!(
        parse_currency("12k").unwrap_err().error_code(),
        "CURRENCY_MALFORMED"
    );
}

#[test]
fn test_order_value_accessor() {
    let orders = sample_orders();
    assert_eq!(orders[0].value(), Ok(Decimal::from(15_000)));

    let mut broken = orders[0].clone();
    broken.order_value = "fifteen".to_string();
    let err: CrmError = broken.value().unwrap_err().into();
    assert_eq!(err.to_string(), "Malformed currency value: 'fifteen'");
}

#[test]
fn test_intake_error_is_matchable() {
    let mut dashboard = Dashboard::new().unwrap();

    match dashboard.orders_mut().submit() {
        Err(IntakeError::Rejected { form, fields }) => {
            assert_eq!(form, "order");
            assert!(fields.contains(&"client_name".to_string()));
            assert!(!fields.contains(&"order_date".to_string()));
        }
        Ok(order) => panic!("blank order accepted: {order:?}"),
    }
}
