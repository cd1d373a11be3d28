//! RestClient behavior against an in-process backend.

use axum::{
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use cinerec_core::{RecommendRequest, SubmitError};
use cinerec_test_utils::{
    history_response_json, recommend_response_json, sample_history_entry, sample_movies,
};
use cinerec_tui::api_client::{RecommendationBackend, RestClient};
use cinerec_tui::config::TuiConfig;
use std::time::Duration;

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn config_for(base: &str) -> TuiConfig {
    TuiConfig {
        api_base_url: base.to_string(),
        history_url: Some(format!("{}/history", base)),
        ..TuiConfig::default()
    }
}

async fn echo_recommend(headers: HeaderMap, Json(body): Json<RecommendRequest>) -> (StatusCode, Json<serde_json::Value>) {
    let json_headers = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok())
        == Some("application/json")
        && headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) == Some("application/json");
    if !json_headers || body.user_input != "  scary movies " {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "message": "unexpected request" })),
        );
    }
    (StatusCode::OK, Json(recommend_response_json(&sample_movies())))
}

#[tokio::test]
async fn recommend_posts_json_and_returns_movies_in_order() {
    let base = spawn_backend(Router::new().route("/recommend", post(echo_recommend))).await;
    let client = RestClient::new(&config_for(&base)).unwrap();

    let outcome = client.recommend("  scary movies ").await;

    assert_eq!(outcome, Ok(sample_movies()));
}

#[tokio::test]
async fn non_2xx_with_message_is_server_error() {
    let router = Router::new().route(
        "/recommend",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": "boom" })),
            )
        }),
    );
    let base = spawn_backend(router).await;
    let client = RestClient::new(&config_for(&base)).unwrap();

    let err = client.recommend("action").await.unwrap_err();

    assert_eq!(err.to_string(), "Server error: 500 - boom");
}

#[tokio::test]
async fn non_2xx_without_message_is_unknown_error() {
    let router = Router::new().route(
        "/recommend",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
    );
    let base = spawn_backend(router).await;
    let client = RestClient::new(&config_for(&base)).unwrap();

    let err = client.recommend("action").await.unwrap_err();

    assert_eq!(err, SubmitError::server(502, None));
    assert_eq!(err.to_string(), "Server error: 502 - Unknown error");
}

#[tokio::test]
async fn slow_recommendation_times_out() {
    let router = Router::new().route(
        "/recommend",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(recommend_response_json(&sample_movies()))
        }),
    );
    let base = spawn_backend(router).await;
    let mut config = config_for(&base);
    config.request_timeout_ms = 150;
    let client = RestClient::new(&config).unwrap();

    let err = client.recommend("action").await.unwrap_err();

    assert_eq!(err, SubmitError::Timeout);
}

#[tokio::test]
async fn history_has_no_timeout() {
    let entries = vec![sample_history_entry(1, "funny")];
    let payload = history_response_json(&entries);
    let router = Router::new().route(
        "/history",
        get(move || {
            let payload = payload.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(400)).await;
                Json(payload)
            }
        }),
    );
    let base = spawn_backend(router).await;
    let mut config = config_for(&base);
    config.request_timeout_ms = 100;
    let client = RestClient::new(&config).unwrap();

    let history = client.history().await.unwrap();

    assert_eq!(history, entries);
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = RestClient::new(&config_for(&format!("http://{}", addr))).unwrap();

    let err = client.recommend("action").await.unwrap_err();

    assert_eq!(err, SubmitError::Network);
}

#[tokio::test]
async fn undecodable_body_is_client_error() {
    let router = Router::new().route("/recommend", post(|| async { "definitely not json" }));
    let base = spawn_backend(router).await;
    let client = RestClient::new(&config_for(&base)).unwrap();

    let err = client.recommend("action").await.unwrap_err();

    assert!(matches!(err, SubmitError::Client(_)));
    assert!(err.to_string().starts_with("Request error: "));
}

#[tokio::test]
async fn malformed_url_is_client_error() {
    let mut config = TuiConfig::default();
    config.api_base_url = "http://bad host".to_string();
    let client = RestClient::new(&config).unwrap();

    let err = client.recommend("action").await.unwrap_err();

    assert!(matches!(err, SubmitError::Client(_)));
}

#[tokio::test]
async fn default_history_url_is_base_plus_history() {
    let entries = vec![sample_history_entry(3, "crime")];
    let payload = history_response_json(&entries);
    let router = Router::new().route("/history", get(move || async move { Json(payload) }));
    let base = spawn_backend(router).await;
    // A trailing slash on the base is what makes the concatenation land on /history.
    let config = TuiConfig {
        api_base_url: format!("{}/", base),
        history_url: None,
        ..TuiConfig::default()
    };
    let client = RestClient::new(&config).unwrap();

    assert_eq!(client.endpoints().history, format!("{}/history", base));
    assert_eq!(client.history().await.unwrap(), entries);
}

#[tokio::test]
async fn health_reports_status() {
    let router = Router::new().route(
        "/health",
        get(|| async { Json(serde_json::json!({ "status": "healthy", "timestamp": "2024-01-01T00:00:00" })) }),
    );
    let base = spawn_backend(router).await;
    let client = RestClient::new(&config_for(&base)).unwrap();

    let health = client.health().await.unwrap();

    assert!(health.is_healthy());
}

#[tokio::test]
async fn history_row_with_unreadable_timestamp_still_loads() {
    let payload = serde_json::json!([
        {
            "id": 1,
            "user_input": "heists",
            "recommended_movies": recommend_response_json(&sample_movies())["recommendations"],
            "timestamp": "2024-03-05 18:07:09"
        },
        {
            "id": 2,
            "user_input": "space operas",
            "recommended_movies": [],
            "timestamp": null
        }
    ]);
    let router = Router::new().route("/history", get(move || async move { Json(payload) }));
    let base = spawn_backend(router).await;
    let client = RestClient::new(&config_for(&base)).unwrap();

    let history = client.history().await.unwrap();

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].recommended_movies, sample_movies());
    assert!(history[0].timestamp.is_some());
    assert_eq!(history[1].user_input, "space operas");
    assert!(history[1].timestamp.is_none());
}
