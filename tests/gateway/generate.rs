use super::support::{GatewayTestServer, upstream_delayed, upstream_failing, upstream_replying};
use serde_json::{Value, json};
use std::time::Duration;

const CAMPAIGN_JSON: &str = r#"{
  "Strategy Overview": "Own the morning routine of home baristas.",
  "Recommended Platform": "Instagram",
  "Content Ideas": ["Latte art reels", "Bean origin stories", "Morning rituals"],
  "Ad Copy Variations": ["Cafe quality at home", "Your barista is you", "Brew better"],
  "CTA Suggestions": ["Shop now", "See it brew", "Claim your discount"]
}"#;

#[tokio::test]
async fn campaign_returns_model_sections() {
    let upstream = upstream_replying(CAMPAIGN_JSON).await;
    let server = GatewayTestServer::start(&upstream, Some("gsk_test")).await;

    let payload = server
        .post(
            "/generate_campaign",
            &json!({
                "product": "Espresso Maker",
                "audience": "Home baristas",
                "platform": "Instagram",
                "goal": "Direct Sales"
            }),
        )
        .await;

    assert!(payload.get("error").is_none(), "unexpected error: {payload}");
    assert_eq!(payload["Recommended Platform"], "Instagram");
    assert_eq!(payload["Content Ideas"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn fenced_model_output_is_accepted() {
    let fenced = "```json\n{\"Pitch Content\": \"Hi Dana\", \"Why It Works\": \"Specific\"}\n```";
    let upstream = upstream_replying(fenced).await;
    let server = GatewayTestServer::start(&upstream, Some("gsk_test")).await;

    let payload = server
        .post("/generate_pitch", &json!({"product": "CRM Suite"}))
        .await;
    assert_eq!(payload["Pitch Content"], "Hi Dana");
}

#[tokio::test]
async fn prose_model_output_is_an_error_payload() {
    let upstream = upstream_replying("Absolutely! Here is a lead score of 80.").await;
    let server = GatewayTestServer::start(&upstream, Some("gsk_test")).await;

    let payload = server
        .post("/lead_score", &json!({"name": "Ada", "budget": 5000}))
        .await;
    let message = payload["error"].as_str().expect("error payload expected");
    assert!(message.starts_with("malformed model output"));
}

#[tokio::test]
async fn upstream_failure_is_an_error_payload_without_secrets() {
    let upstream = upstream_failing(500, "upstream exploded, key gsk_should_not_leak").await;
    let server = GatewayTestServer::start(&upstream, Some("gsk_test")).await;

    let payload = server
        .post("/generate_campaign", &json!({"product": "Kettle"}))
        .await;
    let message = payload["error"].as_str().expect("error payload expected");
    assert!(message.contains("500"));
    assert!(!message.contains("gsk_should_not_leak"));
}

#[tokio::test]
async fn missing_credential_is_an_error_payload() {
    let upstream = upstream_replying("{}").await;
    let server = GatewayTestServer::start(&upstream, None).await;

    let health = server.get_json("/health").await;
    assert_eq!(health["credential_configured"], false);

    let payload = server
        .post("/generate_pitch", &json!({"product": "CRM"}))
        .await;
    assert_eq!(
        payload,
        json!({"error": "GROQ_API_KEY not found in environment variables."})
    );
    assert!(upstream.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn malformed_body_is_an_error_payload() {
    let upstream = upstream_replying("{}").await;
    let server = GatewayTestServer::start(&upstream, Some("gsk_test")).await;

    let response = reqwest::Client::new()
        .post(server.url("/generate_campaign"))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("request should complete");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let payload: Value = response.json().await.expect("json body");
    assert!(payload["error"].is_string());

    let payload = server.post("/generate_campaign", &json!(["a", "b"])).await;
    assert!(payload["error"].is_string());
}

#[tokio::test]
async fn slow_upstream_is_cut_off_by_provider_timeout() {
    let upstream = upstream_delayed(r#"{"Score": 90}"#, Duration::from_secs(4)).await;
    let server = GatewayTestServer::start_with(&upstream, Some("gsk_test"), |config, _| {
        config.completion.timeout_secs = 1;
    })
    .await;

    let payload = server
        .post("/lead_score", &json!({"name": "Ada", "budget": 5000}))
        .await;
    let message = payload["error"].as_str().expect("error payload expected");
    assert!(message.starts_with("Groq request failed"), "{message}");

    let stats = server.get_json("/dashboard_stats").await;
    assert_eq!(stats["total_generated"], 0);
}

#[tokio::test]
async fn model_reported_error_object_is_returned_verbatim() {
    let upstream = upstream_replying(r#"{"error": "quota exceeded", "retry_after": 30}"#).await;
    let server = GatewayTestServer::start(&upstream, Some("gsk_test")).await;

    let payload = server
        .post("/generate_pitch", &json!({"product": "CRM"}))
        .await;
    assert_eq!(payload, json!({"error": "quota exceeded", "retry_after": 30}));

    let stats = server.get_json("/dashboard_stats").await;
    assert_eq!(stats["total_generated"], 0);
}
