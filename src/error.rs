pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("host operation failed: {0}")]
    Host(String),
    #[error("serialization failed: {context}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        context: String,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(message.into())
    }

    pub fn serialization(source: serde_json::Error, context: impl Into<String>) -> Self {
        Self::Serialization {
            source,
            context: context.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn io_error_keeps_context_and_source() {
        let err = AppError::io_with_context(
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            "failed to stat src/lib.rs",
        );
        assert!(matches!(err, AppError::Io { .. }));
        assert_eq!(err.to_string(), "I/O error: failed to stat src/lib.rs");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn host_error_formats_message() {
        let err = AppError::host("editor refused to open document");
        assert_eq!(
            err.to_string(),
            "host operation failed: editor refused to open document"
        );
    }
}
