// SPDX-License-Identifier: MIT

//! Legacy graduation endpoints.
//!
//! Early API variants exposed the expected rank through these narrow
//! get/set routes. They are superseded by the general profile operations
//! but kept for client compatibility.

use crate::error::{AppError, Result};
use crate::routes::MessageResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/graduacao/{uid}", get(get_graduacao).put(put_graduacao))
}

#[derive(Serialize)]
pub struct GraduacaoResponse {
    #[serde(rename = "faixaEsperada")]
    pub faixa_esperada: String,
}

/// Get the expected rank for a user.
async fn get_graduacao(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<Json<GraduacaoResponse>> {
    let user = state
        .db
        .get_user(&uid)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

    Ok(Json(GraduacaoResponse {
        faixa_esperada: user.faixa_esperada,
    }))
}

#[derive(Deserialize)]
pub struct PutGraduacaoRequest {
    pub faixa: String,
}

/// Set the expected rank for a user.
async fn put_graduacao(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    Json(payload): Json<PutGraduacaoRequest>,
) -> Result<Json<MessageResponse>> {
    let mut user = state
        .db
        .get_user(&uid)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

    user.faixa_esperada = payload.faixa;
    state.db.set_user(&user).await?;

    Ok(Json(MessageResponse {
        message: "Faixa esperada atualizada com sucesso".to_string(),
    }))
}
