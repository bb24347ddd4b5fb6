// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile storage, keyed by UID)
//! - Aulas (class sessions, a sub-collection under each user)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{Aula, User};
use futures_util::stream::BoxStream;
use futures_util::TryStreamExt;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated
        // connection to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // A dummy JWT keeps gcloud-sdk from looking for real credentials.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by UID.
    pub async fn get_user(&self, uid: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USUARIOS)
            .obj()
            .one(uid)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find the first user whose nickname matches exactly.
    ///
    /// Firestore gives no ordering guarantee if duplicates exist (possible
    /// via the registration race, see the register handler).
    pub async fn find_user_by_nickname(&self, nickname: &str) -> Result<Option<User>, AppError> {
        let nickname = nickname.to_string();
        let matches: Vec<User> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USUARIOS)
            .filter(move |q| q.field("nickname").eq(nickname.clone()))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(matches.into_iter().next())
    }

    /// Create a user document keyed by its UID.
    pub async fn create_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::USUARIOS)
            .document_id(&user.uid)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Store a full user document (create or overwrite).
    ///
    /// Partial updates are done read-modify-write by the caller, so a plain
    /// set is sufficient here.
    pub async fn set_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USUARIOS)
            .document_id(&user.uid)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// List all user documents in store-native order.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let stream: BoxStream<'_, firestore::FirestoreResult<User>> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USUARIOS)
            .obj()
            .stream_query_with_errors()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        stream
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Aula Operations ─────────────────────────────────────────

    /// Create a class session under a user's `aulas` sub-collection.
    ///
    /// The document ID is generated by Firestore. The parent user is not
    /// checked for existence; an invalid UID produces an orphaned document,
    /// matching the original API behavior.
    pub async fn create_aula(&self, uid: &str, aula: &Aula) -> Result<(), AppError> {
        let client = self.get_client()?;
        let parent_path = client
            .parent_path(collections::USUARIOS, uid)
            .map_err(|e| AppError::Database(e.to_string()))?;

        let _: () = client
            .fluent()
            .insert()
            .into(collections::AULAS)
            .generate_document_id()
            .parent(&parent_path)
            .object(aula)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// List all class sessions for a user, in store-native order.
    ///
    /// An unknown UID yields an empty list, not an error.
    pub async fn list_aulas(&self, uid: &str) -> Result<Vec<Aula>, AppError> {
        let client = self.get_client()?;
        let parent_path = client
            .parent_path(collections::USUARIOS, uid)
            .map_err(|e| AppError::Database(e.to_string()))?;

        let stream: BoxStream<'_, firestore::FirestoreResult<Aula>> = client
            .fluent()
            .select()
            .from(collections::AULAS)
            .parent(&parent_path)
            .obj()
            .stream_query_with_errors()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        stream
            .try_collect()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
