//! Handler-level coverage for the users endpoints.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, Error as ActixError, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::Trace;
use crate::domain::TRACE_ID_HEADER;
use crate::inbound::http::configure;
use crate::outbound::memory::InMemoryUserRegistry;

async fn test_app()
-> impl Service<actix_http::Request, Response = ServiceResponse, Error = ActixError> {
    let state = HttpState::from_registry(Arc::new(InMemoryUserRegistry::new()));
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

async fn send<S>(app: &S, request: actix_test::TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = ActixError>,
{
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

fn create(body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post().uri("/user").set_json(body)
}

fn list() -> actix_test::TestRequest {
    actix_test::TestRequest::get().uri("/users")
}

fn urban_user() -> Value {
    json!({ "id": 1, "username": "UrbanUser", "age": 24 })
}

#[rstest]
fn merge_prefers_explicit_overrides() {
    let body = UserRequest {
        id: 3,
        username: "BodyUser".to_owned(),
        age: 40,
    };
    let overrides = ProfileOverrides {
        username: Some("QueryUser".to_owned()),
        age: None,
    };

    let merged = merge_create_request(body, overrides);

    assert_eq!(merged.id, 3);
    assert_eq!(merged.username, "QueryUser");
    assert_eq!(merged.age, 40);
}

#[rstest]
fn merge_without_overrides_keeps_body() {
    let body = UserRequest {
        id: 3,
        username: "BodyUser".to_owned(),
        age: 40,
    };
    let merged = merge_create_request(body, ProfileOverrides::default());
    assert_eq!(merged.username, "BodyUser");
    assert_eq!(merged.age, 40);
}

#[actix_web::test]
async fn list_starts_empty() {
    let app = test_app().await;
    let (status, body) = send(&app, list()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn create_returns_created_user() {
    let app = test_app().await;
    let (status, body) = send(&app, create(urban_user())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, urban_user());
}

#[actix_web::test]
async fn create_applies_query_overrides_before_validation() {
    let app = test_app().await;
    // The body age is out of range; the override makes the request valid.
    let request = actix_test::TestRequest::post()
        .uri("/user?username=QueryUser&age=33")
        .set_json(json!({ "id": 8, "username": "x", "age": 7 }));

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 8, "username": "QueryUser", "age": 33 }));
}

#[actix_web::test]
async fn duplicate_id_is_rejected_with_bad_request() {
    let app = test_app().await;
    send(&app, create(urban_user())).await;

    let (status, body) = send(
        &app,
        create(json!({ "id": 1, "username": "OtherUser", "age": 50 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "duplicate_id");
    let (_, users) = send(&app, list()).await;
    assert_eq!(users, json!([urban_user()]));
}

#[rstest]
#[case(json!({ "id": 1, "username": "abcd", "age": 24 }), "username_too_short")]
#[case(json!({ "id": 1, "username": "a".repeat(21), "age": 24 }), "username_too_long")]
#[case(json!({ "id": 1, "username": "UrbanUser", "age": 17 }), "age_out_of_range")]
#[case(json!({ "id": 1, "username": "UrbanUser", "age": 121 }), "age_out_of_range")]
#[case(json!({ "id": -5, "username": "UrbanUser", "age": 24 }), "negative_id")]
#[case(json!({ "id": 1, "username": "UrbanUser" }), "invalid_body")]
#[case(json!({ "id": "one", "username": "UrbanUser", "age": 24 }), "invalid_body")]
#[case(json!({ "id": 1, "username": "UrbanUser", "age": 24, "role": "x" }), "invalid_body")]
#[actix_web::test]
async fn create_rejects_invalid_payloads(#[case] payload: Value, #[case] code: &str) {
    let app = test_app().await;

    let (status, body) = send(&app, create(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "validation_failed");
    assert_eq!(body["details"]["code"], code);
    let (_, users) = send(&app, list()).await;
    assert_eq!(users, json!([]));
}

#[actix_web::test]
async fn update_replaces_profile() {
    let app = test_app().await;
    send(&app, create(urban_user())).await;

    let (status, body) = send(
        &app,
        actix_test::TestRequest::put().uri("/user/1?username=UpdatedUser&age=30"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 1, "username": "UpdatedUser", "age": 30 }));
}

#[actix_web::test]
async fn update_missing_user_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        actix_test::TestRequest::put().uri("/user/5?username=UpdatedUser&age=30"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["details"]["value"], 5);
}

#[rstest]
#[case("/user/1?username=UpdatedUser", "invalid_query")]
#[case("/user/1?username=abc&age=30", "username_too_short")]
#[case("/user/1?username=UpdatedUser&age=200", "age_out_of_range")]
#[case("/user/-1?username=UpdatedUser&age=30", "negative_id")]
#[case("/user/abc?username=UpdatedUser&age=30", "invalid_path")]
#[actix_web::test]
async fn update_rejects_invalid_input(#[case] uri: &str, #[case] code: &str) {
    let app = test_app().await;
    send(&app, create(urban_user())).await;

    let (status, body) = send(&app, actix_test::TestRequest::put().uri(uri)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["code"], code);
    let (_, users) = send(&app, list()).await;
    assert_eq!(users, json!([urban_user()]));
}

#[actix_web::test]
async fn delete_returns_removed_user_and_preserves_order() {
    let app = test_app().await;
    for id in [1, 2, 3] {
        send(
            &app,
            create(json!({ "id": id, "username": format!("Member{id}"), "age": 20 + id })),
        )
        .await;
    }

    let (status, body) = send(&app, actix_test::TestRequest::delete().uri("/user/2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 2, "username": "Member2", "age": 22 }));
    let (_, users) = send(&app, list()).await;
    let ids: Vec<i64> = users
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|user| user["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[rstest]
#[case("/user/9", StatusCode::NOT_FOUND)]
#[case("/user/-3", StatusCode::UNPROCESSABLE_ENTITY)]
#[actix_web::test]
async fn delete_rejects_missing_or_invalid_ids(#[case] uri: &str, #[case] expected: StatusCode) {
    let app = test_app().await;

    let (status, _) = send(&app, actix_test::TestRequest::delete().uri(uri)).await;

    assert_eq!(status, expected);
}

#[actix_web::test]
async fn error_payload_trace_id_matches_header() {
    let app = test_app().await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri("/user/1").to_request(),
    )
    .await;

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["traceId"], header.as_str());
}
