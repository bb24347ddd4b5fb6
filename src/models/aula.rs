//! Class session ("aula") model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged or scheduled class, stored in the `aulas` sub-collection of the
/// owning user. Immutable after creation; the document ID is generated by
/// Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aula {
    /// Calendar date of the class (ISO date)
    pub data: NaiveDate,
    /// Class title
    pub titulo: String,
    /// Belt rank expected for this session
    #[serde(rename = "faixaEsperada")]
    pub faixa_esperada: String,
}
