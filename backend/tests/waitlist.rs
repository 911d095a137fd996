//! Integration tests for the waitlist API.
//!
//! Each test spawns the real router on an ephemeral port and drives it
//! over HTTP, exactly the way the landing page does.

use serde_json::{json, Value};

use cosmos::{app, WaitlistStore};

struct TestApp {
    base_url: String,
    client: reqwest::Client,
    store: WaitlistStore,
}

impl TestApp {
    async fn spawn() -> Self {
        let store = WaitlistStore::new();
        let router = app(store.clone(), None);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            store,
        }
    }

    async fn post_waitlist(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/waitlist", self.base_url))
            .json(body)
            .send()
            .await
            .expect("request failed")
    }
}

fn ada() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "mission": "Lunar Flyby",
        "message": "",
        "consent": true
    })
}

#[tokio::test]
async fn health_reports_service_info() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/health", app.base_url))
        .send()
        .await
        .expect("request failed");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "cosmos");
}

#[tokio::test]
async fn valid_submission_is_created_with_position() {
    let app = TestApp::spawn().await;

    let response = app.post_waitlist(&ada()).await;

    assert_eq!(response.status(), 201);
    let ack: Value = response.json().await.expect("json body");
    assert_eq!(ack["position"], 1);
    assert!(ack["id"].as_str().is_some());
    assert_eq!(ack["message"], "Welcome aboard, Ada Lovelace!");
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn positions_grow_with_each_registration() {
    let app = TestApp::spawn().await;

    app.post_waitlist(&ada()).await;
    let response = app
        .post_waitlist(&json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "mission": "",
            "message": "Counting down",
            "consent": false
        }))
        .await;

    assert_eq!(response.status(), 201);
    let ack: Value = response.json().await.expect("json body");
    assert_eq!(ack["position"], 2);
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let app = TestApp::spawn().await;

    let mut body = ada();
    body["name"] = json!("   ");
    let response = app.post_waitlist(&body).await;

    assert_eq!(response.status(), 422);
    let error: Value = response.json().await.expect("json body");
    assert!(error["error"].as_str().unwrap().contains("Name"));
    assert_eq!(app.store.len().await, 0);
}

#[tokio::test]
async fn implausible_email_is_rejected() {
    let app = TestApp::spawn().await;

    let mut body = ada();
    body["email"] = json!("not-an-email");
    let response = app.post_waitlist(&body).await;

    assert_eq!(response.status(), 422);
    assert_eq!(app.store.len().await, 0);
}

#[tokio::test]
async fn unknown_mission_is_rejected_but_empty_is_fine() {
    let app = TestApp::spawn().await;

    let mut body = ada();
    body["mission"] = json!("Mars Base");
    let response = app.post_waitlist(&body).await;
    assert_eq!(response.status(), 422);

    body["mission"] = json!("");
    let response = app.post_waitlist(&body).await;
    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn duplicate_email_conflicts_case_insensitively() {
    let app = TestApp::spawn().await;

    app.post_waitlist(&ada()).await;

    let mut body = ada();
    body["name"] = json!("Ada Again");
    body["email"] = json!("Ada@Example.COM");
    let response = app.post_waitlist(&body).await;

    assert_eq!(response.status(), 409);
    let error: Value = response.json().await.expect("json body");
    assert!(error["error"]
        .as_str()
        .unwrap()
        .contains("already on the waitlist"));
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn missing_required_fields_never_reach_the_store() {
    let app = TestApp::spawn().await;

    let response = app.post_waitlist(&json!({"email": "ada@example.com"})).await;

    assert_eq!(response.status(), 422);
    assert_eq!(app.store.len().await, 0);
}
