//! These tests build and launch the `web` binary, so they are opt-in:
//! `cargo test -p e2e -- --ignored`.

use api::test_utils::{StubReply, StubUpstream};
use api::CommandsResponse;
use e2e::test_server::TestServer;
use std::collections::HashMap;

async fn stub_upstream() -> StubUpstream {
    StubUpstream::start(HashMap::from([
        (
            "en-US".to_string(),
            StubReply::json(r#"{"/profile":"View a profile","/abyss":"Spiral Abyss"}"#),
        ),
        (
            "fr".to_string(),
            StubReply::json(r#"{"/profil":"Voir un profil"}"#),
        ),
        ("ja".to_string(), StubReply::status(502)),
    ]))
    .await
    .expect("Failed to start stub upstream")
}

#[tokio::test]
#[ignore = "builds and launches the web server"]
async fn homepage_renders_app_bar() {
    let upstream = stub_upstream().await;
    let server = TestServer::start(&upstream.base_url())
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(
        body.contains("Hoyo Buddy Commands") || body.contains("DOCTYPE"),
        "Should contain HTML"
    );
}

#[tokio::test]
#[ignore = "builds and launches the web server"]
async fn commands_endpoint_proxies_upstream_in_order() {
    let upstream = stub_upstream().await;
    let server = TestServer::start(&upstream.base_url())
        .await
        .expect("Failed to start test server");

    let client = reqwest::Client::new();
    let reply: CommandsResponse = client
        .post(format!("{}/api/commands", server.url()))
        .json(&serde_json::json!({ "locale": "en-US" }))
        .send()
        .await
        .expect("Failed to call /api/commands")
        .json()
        .await
        .expect("Reply should decode as a CommandsResponse");

    let listing = reply.into_result().expect("Upstream listing should come back");
    let names: Vec<&str> = listing.names().collect();
    assert_eq!(names, vec!["/profile", "/abyss"]);
    assert_eq!(listing.get("/abyss"), Some("Spiral Abyss"));
    assert!(upstream
        .requests()
        .contains(&"/commands?locale=en-US".to_string()));
}

#[tokio::test]
#[ignore = "builds and launches the web server"]
async fn upstream_failure_is_reported_with_its_kind() {
    let upstream = stub_upstream().await;
    let server = TestServer::start(&upstream.base_url())
        .await
        .expect("Failed to start test server");

    let reply: serde_json::Value = reqwest::Client::new()
        .post(format!("{}/api/commands", server.url()))
        .json(&serde_json::json!({ "locale": "ja" }))
        .send()
        .await
        .expect("Failed to call /api/commands")
        .json()
        .await
        .expect("Reply should be JSON");

    assert_eq!(reply["status"], "failed");
    assert_eq!(reply["error"]["kind"], "server");
    assert_eq!(reply["error"]["detail"]["status"], 502);
}
