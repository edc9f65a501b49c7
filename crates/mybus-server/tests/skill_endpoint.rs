//! Tests for the `POST /` skill endpoint, driven through the router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use mybus_mbta::PredictionsClient;
use mybus_server::{app, AppState};
use mybus_skill::Skill;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt; // for oneshot
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_with_base_url(base_url: &str) -> axum::Router {
    app(AppState {
        skill: Arc::new(Skill::new(PredictionsClient::with_base_url(base_url))),
    })
}

fn post_envelope(request: Value) -> Request<Body> {
    let body = json!({
        "version": "1.0",
        "session": { "new": true, "sessionId": "amzn1.echo-api.session.test" },
        "request": request
    });

    Request::builder()
        .uri("/")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn launch_request_returns_the_welcome_envelope() {
    let app = app_with_base_url("http://127.0.0.1:9");

    let response = app
        .oneshot(post_envelope(json!({ "type": "LaunchRequest" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["version"], "1.0");
    assert_eq!(body["sessionAttributes"], json!({}));
    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        "Welcome to My Bus, ask for next bus"
    );
    assert_eq!(body["response"]["shouldEndSession"], json!(false));
}

#[tokio::test]
async fn next_bus_request_round_trips_through_the_stubbed_api() {
    let server = MockServer::start().await;
    let arrival = Utc::now() + Duration::minutes(5) + Duration::seconds(30);
    Mock::given(method("GET"))
        .and(path("/predictions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "attributes": { "arrival_time": arrival.to_rfc3339() },
                "relationships": {
                    "trip": { "data": { "id": "trip-1" } },
                    "route": { "data": { "id": "87" } }
                }
            }]
        })))
        .mount(&server)
        .await;

    let app = app_with_base_url(&server.uri());
    let response = app
        .oneshot(post_envelope(json!({
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.test",
            "intent": { "name": "GetNextBusIntent" }
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        "The next bus is in 5 minutes. "
    );
    assert_eq!(body["response"]["shouldEndSession"], json!(true));
}

#[tokio::test]
async fn fetch_failure_still_answers_200_with_the_apology() {
    // Closed port: the skill's fetch fails, the endpoint must not 5xx.
    let app = app_with_base_url("http://127.0.0.1:9");

    let response = app
        .oneshot(post_envelope(json!({
            "type": "IntentRequest",
            "intent": { "name": "GetNextBusIntent" }
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        "Sorry, an error occurred."
    );
}

#[tokio::test]
async fn unknown_intent_still_answers_200_with_the_apology() {
    let app = app_with_base_url("http://127.0.0.1:9");

    let response = app
        .oneshot(post_envelope(json!({
            "type": "IntentRequest",
            "intent": { "name": "OrderPizzaIntent" }
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(
        body["response"]["outputSpeech"]["text"],
        "Sorry, an error occurred."
    );
}

#[tokio::test]
async fn session_ended_request_returns_a_bare_envelope() {
    let app = app_with_base_url("http://127.0.0.1:9");

    let response = app
        .oneshot(post_envelope(json!({
            "type": "SessionEndedRequest",
            "reason": "USER_INITIATED"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let inner = body["response"].as_object().unwrap();
    assert!(!inner.contains_key("outputSpeech"));
    assert_eq!(inner["shouldEndSession"], json!(true));
}

#[tokio::test]
async fn can_fulfill_request_answers_yes() {
    let app = app_with_base_url("http://127.0.0.1:9");

    let response = app
        .oneshot(post_envelope(json!({
            "type": "CanFulfillIntentRequest",
            "intent": { "name": "GetNextBusIntent" }
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(
        body["response"]["canFulfillIntent"]["canFulfill"],
        "YES"
    );
}

#[tokio::test]
async fn body_that_is_not_an_envelope_is_rejected() {
    let app = app_with_base_url("http://127.0.0.1:9");

    let request = Request::builder()
        .uri("/")
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from("{\"not\": \"an envelope\"}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}
