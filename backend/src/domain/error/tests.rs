//! Tests for error construction and payload shape.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::validation(vec!["first_name is required".to_owned()]), ErrorCode::InvalidRequest)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_the_expected_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn single_messages_serialise_as_a_string() {
    let error = Error::internal("relation \"voters\" does not exist");
    assert_eq!(
        serde_json::to_value(&error).expect("serialise error"),
        json!({ "error": "relation \"voters\" does not exist" })
    );
}

#[rstest]
fn field_messages_serialise_as_an_ordered_list() {
    let error = Error::validation(vec![
        "first_name is required".to_owned(),
        "email must be a valid email address".to_owned(),
    ]);
    assert_eq!(
        serde_json::to_value(&error).expect("serialise error"),
        json!({
            "error": ["first_name is required", "email must be a valid email address"]
        })
    );
}

#[rstest]
fn display_joins_field_messages() {
    let error = Error::validation(vec!["a is required".to_owned(), "b is required".to_owned()]);
    assert_eq!(error.to_string(), "a is required; b is required");
}

#[tokio::test]
async fn captures_the_trace_id_in_scope() {
    let trace_id = TraceId::generate();
    let error = TraceId::scope(trace_id, async { Error::invalid_request("bad") }).await;
    let expected = trace_id.to_string();
    assert_eq!(error.trace_id(), Some(expected.as_str()));
}

#[rstest]
fn trace_id_is_absent_outside_a_request() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
fn trace_id_is_never_serialised() {
    let error = Error::invalid_request("bad").with_trace_id("abc");
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(value, json!({ "error": "bad" }));
}
