//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USUARIOS: &str = "usuarios";
    /// Sub-collection of `usuarios/{uid}` holding that user's class sessions
    pub const AULAS: &str = "aulas";
}
