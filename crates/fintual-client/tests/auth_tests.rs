//! Authentication and authenticated-endpoint behaviour against a mock server

use fintual_client::{Config, Error, FintualClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> FintualClient {
  FintualClient::new(Config::with_base_url(server.uri())).expect("Failed to create client")
}

fn token_response(kind: &str, token: &str) -> serde_json::Value {
  json!({"data": {"id": "", "type": kind, "attributes": {"token": token}}})
}

fn goal_json(id: &str) -> serde_json::Value {
  json!({
    "id": id,
    "type": "goal",
    "attributes": {
      "name": "Retiro",
      "name_without_suffix": "Retiro",
      "nav": 2500000.0,
      "created_at": "2019-01-10T09:00:00.000-03:00",
      "timeframe": 240,
      "deposited": 2000000.0,
      "hidden": false,
      "profit": 500000.0,
      "investments": [{"weight": 1.0, "asset_id": 186}],
      "public_link": null,
      "param_id": 3,
      "goal_type": "retirement",
      "translated_goal_type": "Jubilación",
      "regime": "APV-A",
      "completed": false,
      "has_any_withdrawals": false,
      "eligible_for_deposits": true,
      "eligible_for_internal_mlt": true,
      "monthly_deposit": 100000.0,
      "simulated_deposit": 100000.0,
      "funds_source": null,
      "funds_source_description": null,
      "not_net_deposited": 0.0,
      "withdrawn": 0.0,
      "group_goal_id": null
    }
  })
}

#[tokio::test]
async fn test_authenticate_stores_session() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/access_tokens"))
    .and(header("content-type", "application/json"))
    .and(body_json(json!({"user": {"email": "ana@example.com", "password": "hunter2"}})))
    .respond_with(ResponseTemplate::new(201).set_body_json(token_response("access_token", "abc123")))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  client.authenticate("ana@example.com", "hunter2").await.unwrap();

  assert!(client.is_authenticated().await);
  assert_eq!(client.user_email().await.as_deref(), Some("ana@example.com"));
}

#[tokio::test]
async fn test_authenticate_then_list_goals_sends_credentials() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/access_tokens"))
    .respond_with(ResponseTemplate::new(200).set_body_json(token_response("access_token", "abc123")))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/goals"))
    .and(query_param("user_token", "abc123"))
    .and(query_param("user_email", "ana@example.com"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [goal_json("11"), goal_json("12")]})))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  client.authenticate("ana@example.com", "hunter2").await.unwrap();
  let goals = client.goals().list().await.unwrap();

  assert_eq!(goals.len(), 2);
  assert_eq!(goals[0].id, "11");
  assert_eq!(goals[1].attributes.regime.as_deref(), Some("APV-A"));
}

#[tokio::test]
async fn test_get_goal_with_restored_session() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/goals/12"))
    .and(query_param("user_token", "tok"))
    .and(query_param("user_email", "ana@example.com"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": goal_json("12")})))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);
  client.restore_session("ana@example.com", "tok").await;
  let goal = client.goals().get("12").await.unwrap();

  assert!(goal.is_kind("goal"));
  assert_eq!(goal.attributes.timeframe, 240);
}

#[tokio::test]
async fn test_missing_token_fails_and_keeps_previous_session() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/access_tokens"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_json(json!({"data": {"id": "", "type": "access_token", "attributes": {}}})),
    )
    .mount(&server)
    .await;

  let client = client_for(&server);
  client.restore_session("old@example.com", "old-token").await;

  let result = client.authenticate("ana@example.com", "hunter2").await;
  assert!(matches!(result, Err(Error::AuthenticationFailed(_))));
  assert_eq!(client.user_email().await.as_deref(), Some("old@example.com"));
}

#[tokio::test]
async fn test_wrong_discriminator_fails() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/access_tokens"))
    .respond_with(ResponseTemplate::new(200).set_body_json(token_response("session", "abc123")))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let result = client.authenticate("ana@example.com", "hunter2").await;

  assert!(matches!(result, Err(Error::AuthenticationFailed(_))));
  assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn test_unauthorized_is_authentication_failure() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/access_tokens"))
    .respond_with(
      ResponseTemplate::new(401)
        .set_body_json(json!({"code": 401, "status": "error", "message": "Invalid email or password"})),
    )
    .mount(&server)
    .await;

  let client = client_for(&server);
  let err = client.authenticate("ana@example.com", "wrong").await.unwrap_err();

  match err {
    Error::AuthenticationFailed(message) => assert!(message.contains("Invalid email or password")),
    other => panic!("Expected AuthenticationFailed, got {other:?}"),
  }
  assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn test_other_auth_errors_pass_through() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/access_tokens"))
    .respond_with(
      ResponseTemplate::new(500).set_body_json(json!({"code": 500, "status": "error", "message": "boom"})),
    )
    .mount(&server)
    .await;

  let client = client_for(&server);
  let err = client.authenticate("ana@example.com", "hunter2").await.unwrap_err();

  assert!(matches!(err, Error::Api { http_status: 500, code: 500, .. }));
}

#[tokio::test]
async fn test_unauthorized_status_wins_over_body_code() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/access_tokens"))
    .respond_with(ResponseTemplate::new(401).set_body_json(json!({"code": 0, "status": "error", "message": "nope"})))
    .mount(&server)
    .await;

  let client = client_for(&server);
  let err = client.authenticate("ana@example.com", "wrong").await.unwrap_err();

  assert!(matches!(err, Error::AuthenticationFailed(_)), "got {err:?}");
  assert!(!client.is_authenticated().await);
}

#[tokio::test]
async fn test_body_code_401_on_other_status_is_api_error() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/access_tokens"))
    .respond_with(
      ResponseTemplate::new(422).set_body_json(json!({"code": 401, "status": "error", "message": "bad params"})),
    )
    .mount(&server)
    .await;

  let client = client_for(&server);
  let err = client.authenticate("ana@example.com", "hunter2").await.unwrap_err();

  assert!(matches!(err, Error::Api { http_status: 422, code: 401, .. }), "got {err:?}");
  assert_eq!(err.http_status(), Some(422));
}

#[tokio::test]
async fn test_goals_without_session_send_nothing() {
  let server = MockServer::start().await;
  Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let client = client_for(&server);

  assert!(matches!(client.goals().list().await, Err(Error::Unauthenticated)));
  assert!(matches!(client.goals().get("12").await, Err(Error::Unauthenticated)));
}

#[tokio::test]
async fn test_sign_out_blocks_goals() {
  let server = MockServer::start().await;
  Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let client = client_for(&server);
  client.restore_session("ana@example.com", "tok").await;
  client.sign_out().await;

  assert!(matches!(client.goals().list().await, Err(Error::Unauthenticated)));
}
