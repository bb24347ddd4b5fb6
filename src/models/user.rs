//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User profile stored in Firestore.
///
/// Every field except `uid`, `nickname`, and `senha_hash` carries a serde
/// default so documents written by earlier variants of the API (which lacked
/// some fields) still deserialize, normalized per the profile contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Server-generated UUID (also used as the document ID)
    pub uid: String,
    /// Unique nickname used for login
    pub nickname: String,
    /// bcrypt hash of the password; never exposed in any response
    pub senha_hash: String,
    /// Birth date (ISO date)
    #[serde(default)]
    pub nascimento: Option<String>,
    /// Weight in kilograms
    #[serde(default)]
    pub peso: f64,
    /// Belt rank
    #[serde(default)]
    pub faixa: String,
    /// Stripe count on the belt
    #[serde(default)]
    pub graus: u32,
    /// Whether the user is an academy administrator
    #[serde(default)]
    pub admin: bool,
    /// URL of the uploaded profile photo
    #[serde(rename = "fotoURL", default)]
    pub foto_url: Option<String>,
    /// Expected rank for graduation (legacy field, see the graduacao routes)
    #[serde(rename = "faixaEsperada", default)]
    pub faixa_esperada: String,
}
