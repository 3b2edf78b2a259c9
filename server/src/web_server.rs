use std::path::PathBuf;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use common::games::tictactoe::FirstPlayerMode;
use common::log;

use crate::messages::{ErrorResponse, PlaceMarkRequest, ResetRequest, StateResponse};
use crate::session::MatchSession;

#[derive(Clone)]
pub struct WebServerState {
    pub session: MatchSession,
}

pub async fn run_web_server(
    session: MatchSession,
    bind_address: String,
    static_files_path: PathBuf,
) {
    let state = WebServerState { session };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/state", get(get_state))
        .route("/api/move", post(place_mark))
        .route("/api/reset", post(reset_game))
        .route("/api/scores/reset", post(reset_scores))
        .nest_service("/ui", ServeDir::new(&static_files_path))
        .layer(cors)
        .with_state(state);

    log!("Web server listening on {}", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .expect("Failed to bind web server address");

    axum::serve(listener, app).await.expect("Web server error");
}

async fn get_state(State(state): State<WebServerState>) -> Json<StateResponse> {
    let snapshot = state.session.snapshot().await;
    Json(StateResponse::from_snapshot(&snapshot))
}

async fn place_mark(
    State(state): State<WebServerState>,
    Json(request): Json<PlaceMarkRequest>,
) -> Result<Json<StateResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.session.place_human_mark(request.slot).await {
        Ok(snapshot) => Ok(Json(StateResponse::from_snapshot(&snapshot))),
        Err(message) => {
            log!("Rejected move to square {}: {}", request.slot, message);
            Err((StatusCode::BAD_REQUEST, Json(ErrorResponse { message })))
        }
    }
}

async fn reset_game(
    State(state): State<WebServerState>,
    Json(request): Json<ResetRequest>,
) -> Json<StateResponse> {
    let first_player = if request.machine_first {
        FirstPlayerMode::Machine
    } else {
        FirstPlayerMode::Human
    };

    let snapshot = state.session.reset(first_player).await;
    Json(StateResponse::from_snapshot(&snapshot))
}

async fn reset_scores(State(state): State<WebServerState>) -> Json<StateResponse> {
    let snapshot = state.session.reset_scores().await;
    Json(StateResponse::from_snapshot(&snapshot))
}
