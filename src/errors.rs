// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every way a read against the Supabase backend can fail.
/// The log-and-null accessor collapses these; the typed routes map each
/// variant to its own HTTP status.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A single row was requested but zero or several rows matched
    #[error("Expected exactly one row: {0}")]
    NotSingleRow(String),

    #[error("Backend rejected credentials: {0}")]
    Unauthorized(String),

    #[error("Backend error {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PortfolioError {
    /// Stable machine-readable code used in JSON error bodies
    pub fn code(&self) -> &'static str {
        match self {
            PortfolioError::NotSingleRow(_) => "NOT_FOUND",
            PortfolioError::Unauthorized(_) => "UPSTREAM_UNAUTHORIZED",
            PortfolioError::Backend { .. } => "BACKEND_ERROR",
            PortfolioError::Transport(_) => "BACKEND_UNREACHABLE",
            PortfolioError::Decode(_) => "BACKEND_DECODE_ERROR",
            PortfolioError::Config(_) => "CONFIG_ERROR",
        }
    }
}

/// Convert PortfolioError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for PortfolioError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PortfolioError::NotSingleRow(_) => StatusCode::NOT_FOUND,
            PortfolioError::Unauthorized(_)
            | PortfolioError::Backend { .. }
            | PortfolioError::Transport(_)
            | PortfolioError::Decode(_) => StatusCode::BAD_GATEWAY,
            PortfolioError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
