//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project ID backing the Firestore database
    pub gcp_project_id: String,
    /// Path to the service-account key file
    pub credentials_path: String,
    /// Public base URL used when building photo URLs
    pub base_url: String,
    /// Directory where uploaded photos are written
    pub assets_dir: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables have defaults suitable for local development.
    /// `FIREBASE_CREDENTIALS_PATH` is exported as
    /// `GOOGLE_APPLICATION_CREDENTIALS` (when unset and the file exists) so
    /// the Firestore client picks it up.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PORT", "must be a port number".to_string()))?;

        let credentials_path = env::var("FIREBASE_CREDENTIALS_PATH")
            .unwrap_or_else(|_| "firebase_credentials.json".to_string());

        if env::var("GOOGLE_APPLICATION_CREDENTIALS").is_err()
            && std::path::Path::new(&credentials_path).exists()
        {
            env::set_var("GOOGLE_APPLICATION_CREDENTIALS", &credentials_path);
        }

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            credentials_path,
            base_url: env::var("BASE_URL").unwrap_or_else(|_| format!("http://localhost:{port}")),
            assets_dir: env::var("ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),
            port,
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            credentials_path: "firebase_credentials.json".to_string(),
            base_url: "http://localhost:8080".to_string(),
            assets_dir: env::temp_dir()
                .join("academia-api-test-assets")
                .to_string_lossy()
                .into_owned(),
            port: 8080,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
