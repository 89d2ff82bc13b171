//! Integration tests for the HTTP API
//!
//! Exercises the router directly; state is shared across cloned routers,
//! so a full create → frame → status flow runs without a socket.

use aurafit::core::create_router;
use aurafit::core::engine::synthetic_frame;
use aurafit::types::ExerciseKind;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

fn create_test_router(tag: &str) -> axum::Router {
    let dir = std::env::temp_dir().join(format!("aurafit_api_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    create_router(dir.to_string_lossy().into_owned())
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router("health");

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_create_session() {
    let app = create_test_router("create");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/new")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"exercise": "SQUAT"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["session_id"].is_string());
    assert_eq!(json["exercise"], "SQUAT");
    assert!(json["websocket_url"].is_string());
}

#[tokio::test]
async fn test_session_not_found() {
    let app = create_test_router("missing");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/session/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_frame_flow_counts_reps() {
    let app = create_test_router("flow");

    // Create an overhead press session
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/new")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"exercise": "OVERHEAD_PRESS"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    let session_id = body_json(response).await["session_id"]
        .as_str()
        .unwrap()
        .to_string();

    // Press up, then lower: extension frames then contraction frames
    let mut last = Value::Null;
    for angle in [170.0, 170.0, 170.0, 170.0, 170.0, 60.0, 60.0, 60.0, 60.0, 60.0] {
        let frame = synthetic_frame(ExerciseKind::OverheadPress, angle);
        let body = serde_json::to_string(&frame).unwrap();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/session/{}/frame", session_id))
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        last = body_json(response).await;
    }

    assert_eq!(last["rep_count"], 1);
    assert_eq!(last["phase"], "CONTRACTED");

    // Status agrees with the last frame
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/session/{}", session_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = body_json(response).await;
    assert_eq!(status["rep_count"], 1);
    assert_eq!(status["exercise"], "OVERHEAD_PRESS");
    assert_eq!(status["joint_label"], "Shoulder/Elbow");
}

#[tokio::test]
async fn test_reset_endpoint_zeroes_count() {
    let app = create_test_router("reset");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/new")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"exercise": "SQUAT"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    let session_id = body_json(response).await["session_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/session/{}/reset", session_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/session/{}", session_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = body_json(response).await;
    assert_eq!(status["rep_count"], 0);
    assert_eq!(status["feedback"], "Get Ready");
}

#[tokio::test]
async fn test_log_set_persists_history() {
    let app = create_test_router("logset");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/new")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"exercise": "SQUAT"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    let session_id = body_json(response).await["session_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/session/{}/set", session_id))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"weight": 20.0}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let logged = body_json(response).await;
    assert_eq!(logged["reps"], 0);

    // The workout shows up in stored history
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/sessions").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let history = body_json(response).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["id"], session_id.as_str());
}

#[tokio::test]
async fn test_consecutive_sets_get_distinct_ids() {
    let app = create_test_router("set_ids");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session/new")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"exercise": "SQUAT"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    let session_id = body_json(response).await["session_id"]
        .as_str()
        .unwrap()
        .to_string();

    // Two zero-rep sets in a row must still log under different ids
    let mut ids = Vec::new();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/session/{}/set", session_id))
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        ids.push(body_json(response).await["set_id"].as_str().unwrap().to_string());
    }
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn test_history_empty_without_sets() {
    let app = create_test_router("empty_history");

    let response = app
        .oneshot(Request::builder().uri("/sessions").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let history = body_json(response).await;
    assert!(history.as_array().unwrap().is_empty());
}
