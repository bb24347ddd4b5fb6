// SPDX-License-Identifier: MIT

//! File-backed storage for uploaded profile photos.
//!
//! Photos live at `{root}/usuarios/{uid}.png` and are served back under
//! `/assets`. Files are keyed by the immutable UID so nickname changes can
//! never orphan or collide assets. Concurrent uploads for the same UID race
//! with last-write-wins semantics; no locking.

use crate::error::AppError;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Directory under the asset root (and URL prefix) for user photos.
const USER_PHOTO_DIR: &str = "usuarios";

/// Local asset store for user photos.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
    base_url: String,
}

impl AssetStore {
    /// Create an asset store rooted at `root`, building public URLs from
    /// `base_url` (no trailing slash).
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            root: root.into(),
            base_url,
        }
    }

    /// The filesystem directory served under `/assets`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a user's photo and return its public URL.
    pub async fn save_user_photo(&self, uid: &str, bytes: &[u8]) -> Result<String, AppError> {
        let dir = self.root.join(USER_PHOTO_DIR);
        tokio::fs::create_dir_all(&dir)
            .await
            .context("failed to create asset directory")?;

        let path = dir.join(format!("{uid}.png"));
        tokio::fs::write(&path, bytes)
            .await
            .context("failed to write photo")?;

        tracing::debug!(uid, path = %path.display(), size = bytes.len(), "Photo stored");

        Ok(self.user_photo_url(uid))
    }

    /// Public URL for a user's photo.
    pub fn user_photo_url(&self, uid: &str) -> String {
        format!("{}/assets/{}/{}.png", self.base_url, USER_PHOTO_DIR, uid)
    }
}
