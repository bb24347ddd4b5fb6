// SPDX-License-Identifier: MIT

//! Class session ("aula") routes.

use crate::error::Result;
use crate::models::Aula;
use crate::routes::MessageResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/aulas", post(create_aula))
        .route("/aulas/{uid}", get(list_aulas))
}

#[derive(Deserialize)]
pub struct CreateAulaRequest {
    pub uid: String,
    pub data: NaiveDate,
    pub titulo: String,
    #[serde(rename = "faixaEsperada")]
    pub faixa_esperada: String,
}

/// Log a class session for a user.
///
/// The owning UID is not checked against the users collection; a session
/// written under an unknown UID is simply never listed for a real user.
async fn create_aula(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAulaRequest>,
) -> Result<Json<MessageResponse>> {
    let aula = Aula {
        data: payload.data,
        titulo: payload.titulo,
        faixa_esperada: payload.faixa_esperada,
    };

    state.db.create_aula(&payload.uid, &aula).await?;
    tracing::info!(uid = %payload.uid, data = %aula.data, "Aula created");

    Ok(Json(MessageResponse {
        message: "Aula criada com sucesso".to_string(),
    }))
}

/// List all class sessions for a user.
async fn list_aulas(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<Json<Vec<Aula>>> {
    let aulas = state.db.list_aulas(&uid).await?;
    Ok(Json(aulas))
}
