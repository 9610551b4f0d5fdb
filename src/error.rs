// src/error.rs

//! Unified error handling for the proxy.

use std::fmt;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Result type alias for proxy operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Message returned to clients when the upstream site cannot be reached.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Falha na requisição ao servidor";

/// Message returned to clients when an upstream page is missing required markup.
pub const EXTRACTION_FAILURE_MESSAGE: &str = "Falha ao processar a resposta do servidor";

/// Message returned to clients when the path or query string cannot be decoded.
pub const MALFORMED_REQUEST_MESSAGE: &str = "Parâmetros da requisição inválidos.";

/// Message returned to clients for any other server-side failure.
pub const INTERNAL_FAILURE_MESSAGE: &str = "Erro interno do servidor";

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Upstream answered with something other than 200 OK
    #[error("Upstream returned {status} for {url}")]
    Upstream { status: u16, url: String },

    /// HTTP request failed before a status was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing or malformed request input
    #[error("{0}")]
    ClientInput(String),

    /// A required listing field was not found in the upstream markup
    #[error("Required field '{field}' not found (selector '{selector}')")]
    Extraction { field: String, selector: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an upstream failure error.
    pub fn upstream(status: u16, url: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            url: url.into(),
        }
    }

    /// Create a client input error. The message is returned to the caller verbatim.
    pub fn client_input(message: impl Into<String>) -> Self {
        Self::ClientInput(message.into())
    }

    /// Create an extraction fault for a required field.
    pub fn extraction(field: impl Into<String>, selector: impl Into<String>) -> Self {
        Self::Extraction {
            field: field.into(),
            selector: selector.into(),
        }
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ClientInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to API clients.
    ///
    /// Upstream and internal details are never exposed.
    pub fn public_message(&self) -> String {
        match self {
            Self::ClientInput(message) => message.clone(),
            Self::Upstream { .. } | Self::Http(_) => UPSTREAM_FAILURE_MESSAGE.to_string(),
            Self::Extraction { .. } => EXTRACTION_FAILURE_MESSAGE.to_string(),
            _ => INTERNAL_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        log::debug!("Query rejected: {}", rejection.body_text());
        Self::client_input(MALFORMED_REQUEST_MESSAGE)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        log::debug!("Path rejected: {}", rejection.body_text());
        Self::client_input(MALFORMED_REQUEST_MESSAGE)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Rejected request: {}", self);
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
