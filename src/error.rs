use serde::Serialize;

/// App-wide error type. Every fallible store operation returns `Result<T, AppError>`.
/// Serializes cleanly so the UI host gets structured error messages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Internal(String),
}

/// Failure of a durable key-value adapter. Always recoverable: the caller may retry.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl AppError {
    /// Stable machine-readable tag, mirrored in the serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidConfiguration(_) => "invalid_configuration",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Persistence(_) => "persistence",
            AppError::Io(_) => "io",
            AppError::Internal(_) => "internal",
        }
    }
}

/// Serialized as `{ error: "...", kind: "..." }` for frontend consumption.
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("AppError", 2)?;
        s.serialize_field("error", &self.to_string())?;
        s.serialize_field("kind", self.kind())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_kind() {
        let err = AppError::InvalidInput("budget must be finite".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "invalid_input");
        assert_eq!(json["error"], "Invalid input: budget must be finite");
    }

    #[test]
    fn test_storage_error_converts_to_persistence() {
        let err: AppError = StorageError::Unavailable("disk full".into()).into();
        assert_eq!(err.kind(), "persistence");
        assert!(err.to_string().contains("disk full"));
    }
}
