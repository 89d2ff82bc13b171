//! HTTP + WebSocket API for driving the rep engine remotely
//!
//! Endpoints:
//! - POST /session/new - Start a tracking session for one exercise
//! - GET /session/{id} - Get session status
//! - POST /session/{id}/frame - Process one pose frame
//! - POST /session/{id}/reset - Reset between sets
//! - POST /session/{id}/set - Log the finished set and reset
//! - GET /sessions - Stored workout history
//! - DELETE /sessions/{id} - Remove a stored workout
//! - WS /ws/{id} - Live per-frame updates
//! - GET /health - Health check

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::core::{RepEngine, SessionStore};
use crate::types::{ExerciseKind, JointSample, SetLog, WorkoutSession};

/// One live tracking session
#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub engine: RepEngine,
    pub log: WorkoutSession,
    pub update_tx: broadcast::Sender<SessionUpdate>,
}

/// Live update message pushed after every processed frame
#[derive(Debug, Clone, Serialize)]
pub struct SessionUpdate {
    pub rep_count: u32,
    pub phase: String,
    pub smoothed_angle: f64,
    pub feedback: String,
    pub is_new_rep: bool,
}

/// App state
pub struct AppState {
    pub sessions: RwLock<HashMap<String, Session>>,
    pub store: SessionStore,
}

/// Start session request
#[derive(Debug, Deserialize)]
pub struct NewSessionRequest {
    pub exercise: ExerciseKind,
}

/// Start session response
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub exercise: String,
    pub guidance: String,
    pub websocket_url: String,
}

/// Session status response
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    pub exercise: String,
    pub phase: String,
    pub rep_count: u32,
    pub smoothed_angle: f64,
    pub feedback: String,
    pub frame_count: u64,
    pub extended_deg: f64,
    pub contracted_deg: f64,
    pub joint_label: String,
}

/// Frame request: the joints of one pose estimate
#[derive(Debug, Deserialize)]
pub struct FrameRequest {
    pub joints: Vec<JointSample>,
}

/// Frame response
#[derive(Debug, Serialize)]
pub struct FrameResponse {
    pub rep_count: u32,
    pub feedback: String,
    pub is_new_rep: bool,
    pub smoothed_angle: f64,
    pub phase: String,
}

/// Log set request
#[derive(Debug, Deserialize, Default)]
pub struct LogSetRequest {
    #[serde(default)]
    pub weight: f64,
}

/// Log set response
#[derive(Debug, Serialize)]
pub struct LogSetResponse {
    pub set_id: String,
    pub reps: u32,
    pub session_total_reps: u32,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
}

/// Create the API router
pub fn create_router(data_dir: String) -> Router {
    let state = Arc::new(AppState {
        sessions: RwLock::new(HashMap::new()),
        store: SessionStore::new(data_dir),
    });

    Router::new()
        .route("/health", get(health))
        .route("/session/new", post(create_session))
        .route("/session/:id", get(get_session))
        .route("/session/:id/frame", post(process_frame))
        .route("/session/:id/reset", post(reset_session))
        .route("/session/:id/set", post(log_set))
        .route("/sessions", get(list_history))
        .route("/sessions/:id", delete(delete_history))
        .route("/ws/:id", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: sessions.len(),
    })
}

/// Start a tracking session
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewSessionRequest>,
) -> Result<Json<NewSessionResponse>, StatusCode> {
    let session_id = generate_session_id();
    let (tx, _) = broadcast::channel(100);

    let session = Session {
        id: session_id.clone(),
        engine: RepEngine::new(req.exercise),
        log: WorkoutSession::start(&session_id),
        update_tx: tx,
    };

    let mut sessions = state.sessions.write().await;
    sessions.insert(session_id.clone(), session);

    Ok(Json(NewSessionResponse {
        session_id: session_id.clone(),
        exercise: req.exercise.to_string(),
        guidance: req.exercise.profile().guidance.to_string(),
        websocket_url: format!("/ws/{}", session_id),
    }))
}

/// Get session status
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;

    let result = session.engine.current_result();
    let profile = session.engine.thresholds();

    Ok(Json(SessionStatusResponse {
        session_id: id,
        exercise: session.engine.kind().to_string(),
        phase: result.phase.to_string(),
        rep_count: result.rep_count,
        smoothed_angle: result.smoothed_angle,
        feedback: result.feedback,
        frame_count: session.engine.frame_count(),
        extended_deg: profile.extended_deg,
        contracted_deg: profile.contracted_deg,
        joint_label: profile.joint_label.to_string(),
    }))
}

/// Process one pose frame
async fn process_frame(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<FrameRequest>,
) -> Result<Json<FrameResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let result = session.engine.process(&req.joints);

    let update = SessionUpdate {
        rep_count: result.rep_count,
        phase: result.phase.to_string(),
        smoothed_angle: result.smoothed_angle,
        feedback: result.feedback.clone(),
        is_new_rep: result.is_new_rep,
    };
    let _ = session.update_tx.send(update);

    Ok(Json(FrameResponse {
        rep_count: result.rep_count,
        feedback: result.feedback,
        is_new_rep: result.is_new_rep,
        smoothed_angle: result.smoothed_angle,
        phase: result.phase.to_string(),
    }))
}

/// Reset the engine between sets without logging anything
async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    session.engine.reset();
    Ok(StatusCode::NO_CONTENT)
}

/// Log the finished set, persist the workout, and reset for the next set
async fn log_set(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<LogSetRequest>,
) -> Result<Json<LogSetResponse>, StatusCode> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;

    let reps = session.engine.rep_count();
    let set_id = generate_set_id();
    session
        .log
        .log_set(session.engine.kind(), SetLog::new(&set_id, reps, req.weight));
    session.engine.reset();

    state
        .store
        .save_session(&session.log)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(LogSetResponse {
        set_id,
        reps,
        session_total_reps: session.log.total_reps(),
    }))
}

/// Stored workout history, newest first
async fn list_history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WorkoutSession>>, StatusCode> {
    let sessions = state
        .store
        .load_sessions()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(Json(sessions))
}

/// Remove a stored workout
async fn delete_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    state
        .store
        .delete_session(&id)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(StatusCode::NO_CONTENT)
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, StatusCode> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    let rx = session.update_tx.subscribe();
    drop(sessions);

    Ok(ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, rx).await;
    }))
}

/// Handle WebSocket connection
async fn handle_websocket(mut socket: WebSocket, mut rx: broadcast::Receiver<SessionUpdate>) {
    while let Ok(update) = rx.recv().await {
        let json = serde_json::to_string(&update).unwrap_or_default();
        if socket.send(Message::Text(json)).await.is_err() {
            break;
        }
    }
}

/// Generate session ID
fn generate_session_id() -> String {
    format!("session_{:x}", unix_nanos())
}

/// Generate set ID
fn generate_set_id() -> String {
    format!("set_{:x}", unix_nanos())
}

fn unix_nanos() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0) as u64
}

/// Run the API server
pub async fn run_server(addr: &str, data_dir: String) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(data_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Aurafit API running on {}", addr);
    println!("  POST /session/new       - Start session");
    println!("  GET  /session/:id       - Get status");
    println!("  POST /session/:id/frame - Process pose frame");
    println!("  POST /session/:id/reset - Reset between sets");
    println!("  POST /session/:id/set   - Log finished set");
    println!("  GET  /sessions          - Workout history");
    println!("  WS   /ws/:id            - Live updates");
    println!("  GET  /health            - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
