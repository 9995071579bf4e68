use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::quota::guard::QuotaError;
use crate::quota::ledger::LedgerError;
use crate::search::SearchError;

pub const QUOTA_EXCEEDED_MESSAGE: &str = "Daily search quota reached. Try again tomorrow.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Daily search quota of {limit} reached")]
    QuotaExceeded { limit: usize },

    #[error("Search provider error: {0}")]
    Search(#[from] SearchError),

    #[error("Quota ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Quota task failed: {0}")]
    QuotaTask(tokio::task::JoinError),
}

impl From<QuotaError> for AppError {
    fn from(err: QuotaError) -> Self {
        match err {
            QuotaError::Exhausted { limit } => AppError::QuotaExceeded { limit },
            QuotaError::Ledger(e) => AppError::Ledger(e),
            QuotaError::Task(e) => AppError::QuotaTask(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::QuotaExceeded { .. } => {
                (StatusCode::TOO_MANY_REQUESTS, QUOTA_EXCEEDED_MESSAGE)
            }
            AppError::Search(e) => {
                tracing::error!("Search provider error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
            AppError::Ledger(e) => {
                tracing::error!("Quota ledger error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
            AppError::QuotaTask(e) => {
                tracing::error!("Quota task failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
