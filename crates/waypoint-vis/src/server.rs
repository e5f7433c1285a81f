//! Axum web server exposing the playback boundary surface.
//!
//! The frontend owns drawing and input handling; it drives playback only
//! through these routes and treats every snapshot it receives as read-only.

use std::sync::Arc;

use tokio::sync::{Notify, RwLock};

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use waypoint_engine::Algorithm;
use waypoint_graph::{Graph, NodeId};

use crate::playback::{Playback, PlaybackSnapshot, PlaybackStatus};
use crate::scheduler::PlaybackDriver;
use crate::Result;

/// Shared application state.
pub struct AppState {
    playback: Arc<RwLock<Playback>>,
    wake: Arc<Notify>,
}

/// Visualization server.
pub struct VisServer {
    state: Arc<AppState>,
    driver: PlaybackDriver,
}

impl VisServer {
    /// Create a server with an idle playback.
    pub fn new() -> Self {
        let playback = Arc::new(RwLock::new(Playback::new()));
        let driver = PlaybackDriver::new(playback.clone());
        let state = Arc::new(AppState {
            playback,
            wake: driver.waker(),
        });
        Self { state, driver }
    }

    /// Direct access to the shared playback, for pre-binding a demo run.
    pub fn playback(&self) -> Arc<RwLock<Playback>> {
        self.state.playback.clone()
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            // API routes
            .route("/api/status", get(status_handler))
            .route("/api/run", post(run_handler))
            .route("/api/snapshot", get(snapshot_handler))
            .route("/api/playback", get(playback_status_handler))
            .route("/api/playback/play", post(play_handler))
            .route("/api/playback/pause", post(pause_handler))
            .route("/api/playback/reset", post(reset_handler))
            .route("/api/playback/speed", post(speed_handler))
            .route("/api/playback/step", post(step_handler))
            // WebSocket for real-time control
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server on the given port.
    pub async fn serve(self, port: u16) -> Result<()> {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("visualization server running on http://localhost:{}", port);

        let router = self.router();
        tokio::spawn(self.driver.run());
        axum::serve(listener, router).await?;
        Ok(())
    }
}

impl Default for VisServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Server status response.
#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    state: crate::playback::PlaybackState,
    total_steps: usize,
}

async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let playback = state.playback.read().await;
    Json(StatusResponse {
        status: "ok",
        state: playback.state(),
        total_steps: playback.total_steps(),
    })
}

/// Run an algorithm over a submitted graph and bind the result.
#[derive(Deserialize)]
struct RunRequest {
    algorithm: Algorithm,
    graph: Graph,
    start: NodeId,
    end: NodeId,
}

async fn run_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RunRequest>,
) -> Json<PlaybackStatus> {
    let trace = req.algorithm.run(&req.graph, req.start, req.end);
    tracing::info!(
        algorithm = %req.algorithm,
        nodes = req.graph.node_count(),
        steps = trace.len(),
        "bound new run"
    );

    let mut playback = state.playback.write().await;
    playback.bind(&req.graph, trace, req.start, req.end);
    Json(PlaybackStatus::from(&*playback))
}

async fn snapshot_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackSnapshot> {
    let playback = state.playback.read().await;
    Json(PlaybackSnapshot::from(&*playback))
}

async fn playback_status_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let playback = state.playback.read().await;
    Json(PlaybackStatus::from(&*playback))
}

async fn play_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut playback = state.playback.write().await;
    playback.play();
    state.wake.notify_one();
    Json(PlaybackStatus::from(&*playback))
}

async fn pause_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut playback = state.playback.write().await;
    playback.pause();
    Json(PlaybackStatus::from(&*playback))
}

async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut playback = state.playback.write().await;
    playback.reset();
    Json(PlaybackStatus::from(&*playback))
}

#[derive(Deserialize)]
struct SpeedRequest {
    speed: u8,
}

async fn speed_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeedRequest>,
) -> Json<PlaybackStatus> {
    let mut playback = state.playback.write().await;
    playback.set_speed(req.speed);
    Json(PlaybackStatus::from(&*playback))
}

async fn step_handler(State(state): State<Arc<AppState>>) -> Json<PlaybackStatus> {
    let mut playback = state.playback.write().await;
    playback.step_forward();
    Json(PlaybackStatus::from(&*playback))
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    // Send the current snapshot up front
    let snapshot = {
        let playback = state.playback.read().await;
        PlaybackSnapshot::from(&*playback)
    };
    if let Ok(json) = serde_json::to_string(&WsResponse::Snapshot(snapshot)) {
        let _ = socket.send(Message::Text(json.into())).await;
    }

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                if let Ok(cmd) = serde_json::from_str::<WsCommand>(&text) {
                    let response = handle_ws_command(&state, cmd).await;
                    if let Ok(json) = serde_json::to_string(&response) {
                        let _ = socket.send(Message::Text(json.into())).await;
                    }
                }
            }
            Message::Close(_) => break,
            _ => {}
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum WsCommand {
    #[serde(rename = "get_snapshot")]
    GetSnapshot,
    #[serde(rename = "get_status")]
    GetStatus,
    #[serde(rename = "play")]
    Play,
    #[serde(rename = "pause")]
    Pause,
    #[serde(rename = "reset")]
    Reset,
    #[serde(rename = "set_speed")]
    SetSpeed { speed: u8 },
    #[serde(rename = "step")]
    Step,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum WsResponse {
    #[serde(rename = "snapshot")]
    Snapshot(PlaybackSnapshot),
    #[serde(rename = "status")]
    Status(PlaybackStatus),
}

async fn handle_ws_command(state: &Arc<AppState>, cmd: WsCommand) -> WsResponse {
    match cmd {
        WsCommand::GetSnapshot => {
            let playback = state.playback.read().await;
            WsResponse::Snapshot(PlaybackSnapshot::from(&*playback))
        }
        WsCommand::GetStatus => {
            let playback = state.playback.read().await;
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
        WsCommand::Play => {
            let mut playback = state.playback.write().await;
            playback.play();
            state.wake.notify_one();
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
        WsCommand::Pause => {
            let mut playback = state.playback.write().await;
            playback.pause();
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
        WsCommand::Reset => {
            let mut playback = state.playback.write().await;
            playback.reset();
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
        WsCommand::SetSpeed { speed } => {
            let mut playback = state.playback.write().await;
            playback.set_speed(speed);
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
        WsCommand::Step => {
            let mut playback = state.playback.write().await;
            playback.step_forward();
            WsResponse::Status(PlaybackStatus::from(&*playback))
        }
    }
}
