// SPDX-License-Identifier: MIT

//! Password hashing with bcrypt.
//!
//! bcrypt is CPU-bound, so both operations run under `spawn_blocking` to
//! keep the async runtime responsive.

use crate::error::AppError;
use anyhow::Context;

/// Hash a plaintext password with the library default cost.
pub async fn hash(senha: &str) -> Result<String, AppError> {
    let senha = senha.to_string();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(&senha, bcrypt::DEFAULT_COST))
        .await
        .context("password hashing task panicked")?
        .context("bcrypt hash failed")?;
    Ok(hashed)
}

/// Verify a plaintext password against a stored bcrypt hash.
pub async fn verify(senha: &str, stored_hash: &str) -> Result<bool, AppError> {
    let senha = senha.to_string();
    let stored_hash = stored_hash.to_string();
    let ok = tokio::task::spawn_blocking(move || bcrypt::verify(&senha, &stored_hash))
        .await
        .context("password verification task panicked")?
        .context("bcrypt verify failed")?;
    Ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_round_trip() {
        let hashed = hash("abc123").await.unwrap();
        assert_ne!(hashed, "abc123");
        assert!(hashed.starts_with("$2"));

        assert!(verify("abc123", &hashed).await.unwrap());
        assert!(!verify("wrong", &hashed).await.unwrap());
    }
}
