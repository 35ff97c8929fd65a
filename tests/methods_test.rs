//! Request builder validation and parameter encoding.

use chrono::{DateTime, FixedOffset};
use money_api_client::{
    error::Error,
    methods::{
        ApiRequest, Parameters,
        account_info::AccountInfoRequest,
        instance_id::InstanceIdRequest,
        operation_history::{FilterType, MAX_RECORDS, MIN_RECORDS, OperationHistoryRequest},
        payment_params::{P2pTransferParams, PaymentParams, PhoneParams},
        process_external_payment::ProcessExternalPaymentRequest,
        request_external_payment::RequestExternalPaymentRequest,
    },
    model::MoneyAmount,
};
use proptest::prelude::*;

fn at(text: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(text).unwrap()
}

fn amount(text: &str) -> MoneyAmount {
    text.parse().unwrap()
}

#[test]
fn test_instance_id_requires_client_id() {
    assert!(matches!(InstanceIdRequest::new(""), Err(Error::Validation(_))));

    let request = InstanceIdRequest::new("app-1").unwrap();
    assert_eq!(request.method_path(), "instance-id");
    assert_eq!(request.parameters().get("client_id"), Some("app-1"));
}

#[test]
fn test_account_info_has_no_parameters() {
    assert_eq!(AccountInfoRequest.method_path(), "account-info");
    assert!(AccountInfoRequest.parameters().is_empty());
}

#[test]
fn test_history_rejects_from_after_till() {
    let err = OperationHistoryRequest::builder()
        .from(at("2024-02-01T00:00:00+00:00"))
        .till(at("2024-01-01T00:00:00+00:00"))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn test_history_equal_bounds_are_accepted() {
    let instant = at("2024-01-01T00:00:00+03:00");
    assert!(OperationHistoryRequest::builder().from(instant).till(instant).build().is_ok());
}

#[test]
fn test_history_empty_filter_sends_empty_type() {
    let params = OperationHistoryRequest::builder().build().unwrap().parameters();
    assert_eq!(params.get("type"), Some(""));
    assert_eq!(params.len(), 1);
}

#[test]
fn test_history_parameters() {
    let request = OperationHistoryRequest::builder()
        .filter_types([FilterType::Payment, FilterType::Deposition])
        .filter_type(FilterType::Payment)
        .label("order-7")
        .from(at("2024-01-01T10:00:00+03:00"))
        .start_record("20")
        .records(5)
        .details(true)
        .build()
        .unwrap();
    assert_eq!(request.types().len(), 2);

    let params = request.parameters();
    assert_eq!(params.get("type"), Some("deposition payment"));
    assert_eq!(params.get("label"), Some("order-7"));
    assert_eq!(params.get("from"), Some("2024-01-01T10:00:00+03:00"));
    assert_eq!(params.get("start_record"), Some("20"));
    assert_eq!(params.get("records"), Some("5"));
    assert_eq!(params.get("details"), Some("true"));
    assert!(!params.contains("till"));
}

#[test]
fn test_phone_payment_parameters() {
    let phone = PhoneParams::new("79001234567", amount("100.00")).unwrap();
    let request = RequestExternalPaymentRequest::from_payment_params("instance", &phone).unwrap();
    assert_eq!(request.pattern_id(), PhoneParams::PATTERN_ID);

    let params = request.parameters();
    let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["instance_id", "pattern_id", "phone-number", "amount"]);
    assert_eq!(params.get("amount"), Some("100.00"));
}

#[test]
fn test_p2p_optional_fields() {
    let transfer = P2pTransferParams::new("4100111", amount("12.5")).unwrap().comment("rent");
    let params = transfer.make_params();
    assert_eq!(transfer.pattern_id(), "p2p");
    assert_eq!(params.get("to"), Some("4100111"));
    assert_eq!(params.get("comment"), Some("rent"));
    assert!(!params.contains("message"));
    assert!(!params.contains("label"));
}

#[test]
fn test_request_payment_validation() {
    assert!(RequestExternalPaymentRequest::new("", "p2p", Parameters::new()).is_err());
    assert!(RequestExternalPaymentRequest::new("instance", "", Parameters::new()).is_err());
    assert!(PhoneParams::new("", amount("1")).is_err());
}

#[test]
fn test_process_payment_requires_redirects() {
    let missing = ProcessExternalPaymentRequest::builder()
        .request_id("r-1")
        .instance_id("instance")
        .ext_auth_success_uri("https://ok")
        .build();
    assert!(matches!(missing, Err(Error::Validation(_))));

    let request = ProcessExternalPaymentRequest::builder()
        .request_id("r-1")
        .instance_id("instance")
        .ext_auth_success_uri("https://ok")
        .ext_auth_fail_uri("https://fail")
        .request_token(true)
        .build()
        .unwrap();
    let params = request.parameters();
    assert_eq!(params.get("request_token"), Some("true"));
    assert!(!params.contains("csc"));
    assert!(!params.contains("money_source_token"));
}

#[test]
fn test_negative_amount_is_rejected() {
    assert!(matches!("-0.01".parse::<MoneyAmount>(), Err(Error::Validation(_))));
}

proptest! {
    #[test]
    fn prop_records_are_clamped(records in any::<i64>()) {
        let request = OperationHistoryRequest::builder().records(records).build().unwrap();
        let clamped = request.records().unwrap();
        prop_assert!((MIN_RECORDS..=MAX_RECORDS).contains(&clamped));
        if (1..=100).contains(&records) {
            prop_assert_eq!(i64::from(clamped), records);
        }
        let expected = clamped.to_string();
        let params = request.parameters();
        prop_assert_eq!(params.get("records"), Some(expected.as_str()));
    }
}
