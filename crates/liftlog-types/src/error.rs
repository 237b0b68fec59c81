use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("No user logged in")]
    NotLoggedIn,

    #[error("No exercises in workout")]
    EmptyWorkout,

    #[error("Failed to create exercise: {name}")]
    ExerciseCreate { name: String, message: String },

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl StoreError {
    /// Validation errors are checked before any side effect and are never
    /// retried automatically.
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::NotLoggedIn | StoreError::EmptyWorkout)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}
