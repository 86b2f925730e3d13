use super::support::{GatewayTestServer, upstream_failing, upstream_replying};
use serde_json::json;

#[tokio::test]
async fn fresh_dashboard_is_empty() {
    let upstream = upstream_replying("{}").await;
    let server = GatewayTestServer::start(&upstream, Some("gsk_test")).await;

    let stats = server.get_json("/dashboard_stats").await;
    assert_eq!(
        stats,
        json!({"total_generated": 0, "usage_breakdown": {}, "recent_activity": []})
    );
}

#[tokio::test]
async fn successes_are_counted_per_kind_newest_first() {
    let upstream = upstream_replying(r#"{"Score": 70, "Reasoning": "ok"}"#).await;
    let server = GatewayTestServer::start(&upstream, Some("gsk_test")).await;

    server
        .post("/generate_campaign", &json!({"product": "Espresso Maker", "goal": "Direct Sales"}))
        .await;
    server
        .post("/lead_score", &json!({"name": "Ada", "budget": "5000"}))
        .await;
    server
        .post("/lead_score", &json!({"name": "Bob", "budget": 100}))
        .await;

    let stats = server.get_json("/dashboard_stats").await;
    assert_eq!(stats["total_generated"], 3);
    assert_eq!(
        stats["usage_breakdown"],
        json!({"Campaign": 1, "Lead Score": 2})
    );

    let recent = stats["recent_activity"].as_array().unwrap();
    let summaries: Vec<_> = recent
        .iter()
        .map(|row| row["input_summary"].as_str().unwrap())
        .collect();
    assert_eq!(
        summaries,
        ["Bob ($100)", "Ada ($5000)", "Espresso Maker (Direct Sales)"]
    );
    assert_eq!(recent[0]["tool_type"], "Lead Score");
}

#[tokio::test]
async fn failures_are_not_counted() {
    let upstream = upstream_failing(503, "over capacity").await;
    let server = GatewayTestServer::start(&upstream, Some("gsk_test")).await;

    let payload = server
        .post("/generate_pitch", &json!({"product": "CRM"}))
        .await;
    assert!(payload["error"].is_string());

    let stats = server.get_json("/dashboard_stats").await;
    assert_eq!(stats["total_generated"], 0);
}

#[tokio::test]
async fn concurrent_generations_are_all_counted() {
    let upstream = upstream_replying(r#"{"Pitch Content": "Hello"}"#).await;
    let server = GatewayTestServer::start(&upstream, Some("gsk_test")).await;

    let requests = (0..8).map(|n| {
        let url = server.url("/generate_pitch");
        async move {
            reqwest::Client::new()
                .post(url)
                .json(&json!({"product": format!("Product {n}")}))
                .send()
                .await
                .expect("request should complete")
        }
    });
    let mut handles = Vec::new();
    for request in requests {
        handles.push(tokio::spawn(request));
    }
    for handle in handles {
        assert!(handle.await.unwrap().status().is_success());
    }

    let stats = server.get_json("/dashboard_stats").await;
    assert_eq!(stats["total_generated"], 8);
    assert_eq!(stats["usage_breakdown"]["Pitch"], 8);
    assert_eq!(stats["recent_activity"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn pages_are_served() {
    let upstream = upstream_replying("{}").await;
    let server = GatewayTestServer::start(&upstream, Some("gsk_test")).await;

    for path in ["/", "/dashboard"] {
        let response = reqwest::get(server.url(path)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let html = response.text().await.unwrap();
        assert!(html.contains("<html"));
    }
}

#[tokio::test]
async fn unopenable_activity_log_still_serves_generations() {
    let upstream = upstream_replying(r#"{"Score": 70, "Reasoning": "ok"}"#).await;
    let server = GatewayTestServer::start_with(&upstream, Some("gsk_test"), |config, workspace| {
        let blocker = workspace.join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        config.storage.activity_db = blocker.join("marketmind.db");
    })
    .await;

    let payload = server
        .post("/lead_score", &json!({"name": "Ada", "budget": 5000}))
        .await;
    assert_eq!(payload["Score"], 70);

    let stats = server.get_json("/dashboard_stats").await;
    let message = stats["error"].as_str().expect("error payload expected");
    assert!(message.starts_with("activity log unavailable"), "{message}");
}
