// SPDX-License-Identifier: MIT

//! User account routes: registration, login, profile, photo upload.

use crate::error::{AppError, Result};
use crate::models::User;
use crate::routes::MessageResponse;
use crate::services::password;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/usuarios", post(register).get(list_users))
        .route("/login", post(login))
        .route("/usuarios/{uid}", get(get_profile).put(update_profile))
        .route("/usuarios/{uid}/foto", post(upload_photo))
}

// ─── Registration ────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "nickname é obrigatório"))]
    pub nickname: String,
    #[validate(length(min = 1, message = "senha é obrigatória"))]
    pub senha: String,
    pub nascimento: Option<String>,
    pub peso: Option<f64>,
    pub faixa: Option<String>,
    pub graus: Option<u32>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub uid: String,
}

/// Register a new user.
///
/// Nickname uniqueness is enforced by a pre-check query. The check and the
/// subsequent write are not transactional, so two concurrent registrations
/// with the same nickname can both land; Firestore has no unique constraint
/// on document fields to close that window.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    if state
        .db
        .find_user_by_nickname(&payload.nickname)
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateNickname(payload.nickname));
    }

    let senha_hash = password::hash(&payload.senha).await?;
    let uid = uuid::Uuid::new_v4().to_string();

    let user = User {
        uid: uid.clone(),
        nickname: payload.nickname,
        senha_hash,
        nascimento: payload.nascimento,
        peso: payload.peso.unwrap_or(0.0),
        faixa: payload.faixa.unwrap_or_else(|| "branca".to_string()),
        graus: payload.graus.unwrap_or(0),
        admin: false,
        foto_url: None,
        faixa_esperada: String::new(),
    };

    state.db.create_user(&user).await?;
    tracing::info!(uid = %uid, nickname = %user.nickname, "User registered");

    Ok(Json(RegisterResponse {
        message: "Usuário criado com sucesso".to_string(),
        uid,
    }))
}

// ─── Login ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub nickname: String,
    pub senha: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub uid: String,
    pub nickname: String,
    pub admin: bool,
}

/// Authenticate by nickname and password.
///
/// No session or token is issued; the caller keeps the returned UID.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(credenciais): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = state
        .db
        .find_user_by_nickname(&credenciais.nickname)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

    if !password::verify(&credenciais.senha, &user.senha_hash).await? {
        return Err(AppError::WrongPassword);
    }

    tracing::debug!(uid = %user.uid, "Login succeeded");

    Ok(Json(LoginResponse {
        uid: user.uid,
        nickname: user.nickname,
        admin: user.admin,
    }))
}

// ─── Profile ─────────────────────────────────────────────────

/// Profile projection returned to clients. The password hash never appears
/// here; `fotoURL` is serialized as null when no photo was uploaded.
#[derive(Serialize)]
pub struct ProfileResponse {
    pub uid: String,
    pub nickname: String,
    pub nascimento: Option<String>,
    pub peso: f64,
    pub faixa: String,
    pub graus: u32,
    pub admin: bool,
    #[serde(rename = "fotoURL")]
    pub foto_url: Option<String>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            uid: user.uid,
            nickname: user.nickname,
            nascimento: user.nascimento,
            peso: user.peso,
            faixa: user.faixa,
            graus: user.graus,
            admin: user.admin,
            foto_url: user.foto_url,
        }
    }
}

/// Get a user's profile by UID.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<Json<ProfileResponse>> {
    let user = state
        .db
        .get_user(&uid)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

    Ok(Json(user.into()))
}

// ─── Listing ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct ListQuery {
    /// Case-insensitive substring filter on nickname
    q: Option<String>,
}

#[derive(Serialize)]
pub struct UserSummary {
    pub uid: String,
    pub nickname: String,
    #[serde(rename = "fotoURL")]
    pub foto_url: Option<String>,
}

/// List users, optionally filtered by nickname substring.
///
/// Firestore has no substring query, so the filter runs in-process over a
/// full collection scan. No pagination; store-native order.
async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<UserSummary>>> {
    let users = state.db.list_users().await?;

    let needle = params.q.map(|q| q.to_lowercase());
    let summaries = users
        .into_iter()
        .filter(|u| match &needle {
            Some(q) => u.nickname.to_lowercase().contains(q),
            None => true,
        })
        .map(|u| UserSummary {
            uid: u.uid,
            nickname: u.nickname,
            foto_url: u.foto_url,
        })
        .collect();

    Ok(Json(summaries))
}

// ─── Profile Update ──────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateRequest {
    pub peso: Option<f64>,
    pub senha: Option<String>,
    pub faixa: Option<String>,
    pub graus: Option<u32>,
    pub nascimento: Option<String>,
    pub admin: Option<bool>,
}

impl UpdateRequest {
    fn is_empty(&self) -> bool {
        self.peso.is_none()
            && self.senha.is_none()
            && self.faixa.is_none()
            && self.graus.is_none()
            && self.nascimento.is_none()
            && self.admin.is_none()
    }
}

/// Partially update a user's profile.
///
/// Only fields present in the body are applied; a supplied senha is rehashed
/// before storage. Read-modify-write, matching the store's set semantics.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    Json(payload): Json<UpdateRequest>,
) -> Result<Json<MessageResponse>> {
    let mut user = state
        .db
        .get_user(&uid)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

    if payload.is_empty() {
        // Nothing to apply; skip the write.
        return Ok(Json(MessageResponse {
            message: "Usuário atualizado com sucesso".to_string(),
        }));
    }

    if let Some(peso) = payload.peso {
        user.peso = peso;
    }
    if let Some(senha) = &payload.senha {
        user.senha_hash = password::hash(senha).await?;
    }
    if let Some(faixa) = payload.faixa {
        user.faixa = faixa;
    }
    if let Some(graus) = payload.graus {
        user.graus = graus;
    }
    if let Some(nascimento) = payload.nascimento {
        user.nascimento = Some(nascimento);
    }
    if let Some(admin) = payload.admin {
        user.admin = admin;
    }

    state.db.set_user(&user).await?;
    tracing::info!(uid = %uid, "User profile updated");

    Ok(Json(MessageResponse {
        message: "Usuário atualizado com sucesso".to_string(),
    }))
}

// ─── Photo Upload ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct PhotoRequest {
    pub imagem_base64: String,
}

#[derive(Serialize)]
pub struct PhotoResponse {
    pub message: String,
    #[serde(rename = "fotoURL")]
    pub foto_url: String,
}

/// Upload a profile photo as base64.
///
/// The decoded bytes go to the local asset store keyed by UID, and the
/// resulting URL is written back to the user document.
async fn upload_photo(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
    Json(payload): Json<PhotoRequest>,
) -> Result<Json<PhotoResponse>> {
    let bytes = BASE64
        .decode(payload.imagem_base64.as_bytes())
        .map_err(|_| AppError::BadRequest("imagem_base64 inválida".to_string()))?;

    let mut user = state
        .db
        .get_user(&uid)
        .await?
        .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

    let url = state.assets.save_user_photo(&uid, &bytes).await?;
    user.foto_url = Some(url.clone());
    state.db.set_user(&user).await?;

    tracing::info!(uid = %uid, url = %url, "Photo uploaded");

    Ok(Json(PhotoResponse {
        message: "Foto atualizada com sucesso".to_string(),
        foto_url: url,
    }))
}
