// SPDX-License-Identifier: MIT

//! Academia API: account management and class logging for a jiu-jitsu academy.
//!
//! This crate provides the backend for member registration, login, profile
//! management, photo upload, and per-member class ("aula") records, backed
//! by Firestore.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::AssetStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub assets: AssetStore,
}
