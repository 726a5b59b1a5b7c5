use axum::http::StatusCode;
use thiserror::Error;

/// Error handed back to callers of the rating service.
///
/// The message is always safe to show; internal details are logged before one
/// of these is built and never end up inside it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CustomError {
    pub message: String,
    pub code: StatusCode,
}

impl CustomError {
    pub fn new(message: impl Into<String>, code: StatusCode) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::UNPROCESSABLE_ENTITY)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND)
    }

    pub fn internal() -> Self {
        Self::new("Something went wrong", StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn invalid_id(raw: &str) -> Self {
        Self::unprocessable(format!("cannot parse id ({}) as UUID", raw))
    }

    pub fn to_response(&self) -> (StatusCode, String) {
        (self.code, self.message.clone())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
