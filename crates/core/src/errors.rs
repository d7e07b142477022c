use thiserror::Error;

/// Unified error type for the entire contribution-graph-core library.
/// Every fallible public function returns `Result<T, GraphError>`.
#[derive(Debug, Error)]
pub enum GraphError {
    // ── Input validation ────────────────────────────────────────────
    #[error("Invalid reference date: {0}")]
    InvalidReferenceDate(String),

    #[error("Invalid color \"{0}\" — expected a 6-hex-digit #RRGGBB literal")]
    InvalidColor(String),

    #[error("Invalid event timestamp: {0}")]
    InvalidTimestamp(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::Serialization(e.to_string())
    }
}
