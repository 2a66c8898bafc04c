// src/error.rs
use thiserror::Error;

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to connect to database")]
    Connection(#[source] sqlx::Error),

    #[error("failed to create schema")]
    Schema(#[source] sqlx::Error),

    #[error("database error")]
    Database(#[source] sqlx::Error),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("password hashing failed")]
    Hash(#[from] bcrypt::BcryptError),
}

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    /// Renders the error followed by each underlying cause, `: `-separated.
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            out.push_str(": ");
            out.push_str(&err.to_string());
            cause = err.source();
        }
        out
    }

    /// Maps a failed insert, turning unique violations into `Conflict`.
    pub fn from_insert(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let detail = db_err
                    .constraint()
                    .map(|c| format!("unique constraint {c} violated"))
                    .unwrap_or_else(|| "unique constraint violated".to_string());
                return AppError::conflict(detail);
            }
        }
        AppError::Database(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
