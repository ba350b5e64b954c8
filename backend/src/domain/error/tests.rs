//! Construction rules and serde contract of the domain error.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const NIL_TRACE: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn duplicate() -> Error {
    Error::invalid_request("user with id 1 already exists")
}

#[rstest]
#[case(Error::invalid_request("conflict"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::validation_failed("bad age"), ErrorCode::ValidationFailed)]
#[case(Error::internal("poisoned"), ErrorCode::InternalError)]
fn shorthand_constructors_pick_their_code(#[case] err: Error, #[case] code: ErrorCode) {
    assert_eq!(err.code(), code);
}

#[rstest]
#[case("")]
#[case("  \t ")]
fn blank_messages_are_rejected(#[case] message: &str) {
    assert_eq!(
        Error::try_new(ErrorCode::NotFound, message),
        Err(ErrorValidationError::EmptyMessage)
    );
}

#[rstest]
fn blank_trace_ids_are_rejected(duplicate: Error) {
    assert_eq!(
        duplicate.try_with_trace_id(" "),
        Err(ErrorValidationError::EmptyTraceId)
    );
}

#[rstest]
fn no_trace_id_outside_a_request(duplicate: Error) {
    assert!(duplicate.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_bound_inside_a_request() {
    let trace_id: TraceId = NIL_TRACE.parse().expect("valid UUID");
    let err = TraceId::scope(trace_id, async { Error::not_found("user with id 2 not found") }).await;
    assert_eq!(err.trace_id(), Some(NIL_TRACE));
}

#[rstest]
fn serialises_envelope_in_camel_case(duplicate: Error) {
    let err = duplicate
        .with_trace_id(NIL_TRACE)
        .with_details(json!({ "field": "id", "code": "duplicate_id", "value": 1 }));

    assert_eq!(
        serde_json::to_value(&err).expect("serialise error"),
        json!({
            "code": "invalid_request",
            "message": "user with id 1 already exists",
            "traceId": NIL_TRACE,
            "details": { "field": "id", "code": "duplicate_id", "value": 1 },
        })
    );
}

#[rstest]
fn absent_optionals_are_omitted(duplicate: Error) {
    let value = serde_json::to_value(&duplicate).expect("serialise error");
    assert_eq!(
        value,
        json!({ "code": "invalid_request", "message": "user with id 1 already exists" })
    );
}

#[rstest]
#[case(json!({ "code": "not_found", "message": "  " }))]
#[case(json!({ "code": "not_found", "message": "gone", "traceId": "" }))]
#[case(json!({ "code": "not_found", "message": "gone", "extra": true }))]
#[case(json!({ "code": "teapot", "message": "gone" }))]
fn invalid_payloads_fail_to_deserialise(#[case] payload: serde_json::Value) {
    assert!(serde_json::from_value::<Error>(payload).is_err());
}

#[rstest]
fn snake_case_trace_id_is_accepted() {
    let payload = json!({ "code": "validation_failed", "message": "bad", "trace_id": "abc" });
    let err: Error = serde_json::from_value(payload).expect("payload deserialises");
    assert_eq!(err.code(), ErrorCode::ValidationFailed);
    assert_eq!(err.trace_id(), Some("abc"));
}
