// SPDX-License-Identifier: MIT

//! HTTP route handlers.

pub mod aulas;
pub mod graduacao;
pub mod usuarios;

use crate::AppState;
use axum::http::{header, Method};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Generic `{message}` response body shared by the mutation handlers.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Liveness response for the root route.
async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "API de Aulas de Jiu-Jitsu rodando!".to_string(),
    })
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/", get(root))
        .merge(usuarios::routes())
        .merge(aulas::routes())
        .merge(graduacao::routes())
        .nest_service("/assets", ServeDir::new(state.assets.root()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
