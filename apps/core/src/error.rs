use thiserror::Error;

/// Engine-wide error type.
///
/// Analysis itself is total over its input domain and never returns an error;
/// only the construction of an analyzer from override lexicons can fail.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Represents data validation errors (e.g., an override lexicon with an
    /// empty phrase list, or malformed override JSON).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for EngineError {
    fn from(err: validator::ValidationErrors) -> Self {
        EngineError::Validation(format!("Validation errors: {}", err))
    }
}
