//! Integration tests against the public API
//!
//! Tests the full flow: raw gateway body → decoded response → accessors,
//! summaries and references for follow-up tagged transactions.

use payeezy_response::error::{NO_RESPONSE_MESSAGE, UNAUTHORIZED_MESSAGE};
use payeezy_response::{
    DataItemLookup, Error, GatewayRequest, PayeezyResponse, TransactionReference, TransactionType,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Gateway Bodies
// ============================================================================

const APPROVED: &str = r#"{
    "transaction_error": 0,
    "transaction_approved": 1,
    "exact_resp_code": "00",
    "exact_message": "Transaction Normal",
    "bank_resp_code": "100",
    "bank_message": "Approved",
    "sequence_no": "000127",
    "retrieval_ref_no": "7682458",
    "transaction_type": "00",
    "amount": 10.0,
    "authorization_num": "ET181147",
    "transaction_tag": 902006933,
    "reference_no": "ORD-1001",
    "transarmor_token": "8938737759041111"
}"#;

const DECLINED: &str = r#"{
    "transaction_error": 0,
    "transaction_approved": 0,
    "exact_resp_code": "00",
    "exact_message": "Transaction Normal",
    "bank_resp_code": "605",
    "bank_message": "Invalid Expiration Date",
    "authorization_num": "",
    "transaction_tag": 902006934
}"#;

const GATEWAY_ERROR: &str = r#"{
    "transaction_error": 1,
    "transaction_approved": 0,
    "exact_resp_code": "22",
    "exact_message": "Invalid Credit Card Number",
    "bank_resp_code": "000",
    "bank_message": ""
}"#;

fn purchase() -> GatewayRequest {
    GatewayRequest::new(TransactionType::Purchase).with_reference_no("ORD-1001")
}

// ============================================================================
// End-to-end Decoding
// ============================================================================

#[test]
fn test_approved_purchase() {
    let response = PayeezyResponse::new(purchase(), APPROVED).unwrap();

    assert!(response.is_successful());
    assert!(!response.is_transaction_error());
    assert_eq!(response.message(), Some(&json!("Approved")));
    assert_eq!(response.code(), Some(&json!("00")));
    assert_eq!(response.bank_code(), Some(&json!("100")));
    assert_eq!(response.transaction_id(), Some(&json!("ORD-1001")));
    assert_eq!(response.sequence_no(), Some(&json!("000127")));
    assert_eq!(response.transaction_reference(), "ET181147::902006933");
    assert_eq!(response.data_item("amount"), Some(&json!(10.0)));
}

#[test]
fn test_declined_purchase() {
    let response = PayeezyResponse::new(purchase(), DECLINED).unwrap();

    assert!(!response.is_successful());
    assert_eq!(response.message(), Some(&json!("Invalid Expiration Date")));
    assert_eq!(response.transaction_reference(), "::902006934");
    assert!(!TransactionReference::from_lookup(&response).is_complete());
}

#[test]
fn test_gateway_error_falls_back_to_exact_message() {
    let response = PayeezyResponse::new(purchase(), GATEWAY_ERROR).unwrap();

    assert!(!response.is_successful());
    assert!(response.is_transaction_error());
    assert_eq!(response.message(), Some(&json!("Invalid Credit Card Number")));
    assert_eq!(response.code(), Some(&json!("22")));
}

#[test]
fn test_every_accessor_matches_decoded_field() {
    let response = PayeezyResponse::new(purchase(), APPROVED).unwrap();
    let data = response.data().clone();

    let pairs: [(&str, Option<&serde_json::Value>); 10] = [
        ("authorization_num", response.authorization_number()),
        ("transaction_tag", response.transaction_tag()),
        ("reference_no", response.transaction_id()),
        ("sequence_no", response.sequence_no()),
        ("transarmor_token", response.card_reference()),
        ("bank_message", response.bank_message()),
        ("exact_message", response.exact_message()),
        ("exact_resp_code", response.code()),
        ("bank_resp_code", response.bank_code()),
        ("ctr", response.customer_receipt()),
    ];
    for (field, value) in pairs {
        assert_eq!(value, data.get(field), "field {field}");
    }
}

// ============================================================================
// Error Paths
// ============================================================================

#[test]
fn test_bad_credentials() {
    let body = serde_json::to_string(UNAUTHORIZED_MESSAGE).unwrap();
    let err = PayeezyResponse::new(purchase(), &body).unwrap_err();

    assert!(matches!(err, Error::Authentication { .. }));
    assert_eq!(err.response_message(), Some(UNAUTHORIZED_MESSAGE));
    assert!(!err.is_retryable());
}

#[test_case("" ; "empty")]
#[test_case("null" ; "null")]
fn test_no_response(body: &str) {
    let err = PayeezyResponse::new(purchase(), body).unwrap_err();
    assert_eq!(err.response_message(), Some(NO_RESPONSE_MESSAGE));
    assert!(err.is_retryable());
}

#[test]
fn test_malformed_response() {
    let err = PayeezyResponse::new(purchase(), "{not json").unwrap_err();
    assert!(matches!(err, Error::InvalidResponse { .. }));
    assert_eq!(err.response_message(), Some("{not json"));
}

// ============================================================================
// Tagged Follow-ups
// ============================================================================

#[test]
fn test_reference_feeds_tagged_refund() {
    let sale = PayeezyResponse::new(purchase(), APPROVED).unwrap();

    let reference: TransactionReference = sale.transaction_reference().parse().unwrap();
    assert!(reference.is_complete());
    assert_eq!(reference.authorization_num, "ET181147");
    assert_eq!(reference.transaction_tag, "902006933");

    let refund_body = json!({
        "transaction_approved": "1",
        "transaction_type": TransactionType::TaggedRefund.code(),
        "authorization_num": reference.authorization_num,
        "transaction_tag": 902006950,
        "bank_message": "Approved"
    })
    .to_string();
    let refund = PayeezyResponse::new(
        GatewayRequest::new(TransactionType::TaggedRefund),
        &refund_body,
    )
    .unwrap();

    assert!(refund.request().transaction_type.is_tagged());
    assert!(refund.is_successful());
    assert_eq!(refund.transaction_type(), Some(&json!("34")));
}

#[test]
fn test_summary_round_trips_through_json() {
    let response = PayeezyResponse::new(purchase(), APPROVED).unwrap();
    let summary = response.summary(true);

    let text = serde_json::to_string(&summary).unwrap();
    let back: payeezy_response::ResponseSummary = serde_json::from_str(&text).unwrap();
    assert_eq!(back, summary);
    assert_eq!(back.card_reference, Some(json!("************1111")));
}
