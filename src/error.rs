use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::lookup::IdentityError;

/// Message shown whenever the failure cause must stay hidden from the user.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error occurred";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid Riot ID: {0}")]
    InvalidIdentity(#[from] IdentityError),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Missing query parameters: {0}")]
    MissingParameters(String),

    #[error("No account has been resolved yet")]
    AccountNotResolved,

    #[error("Riot API error: {status} - {message}")]
    RiotApi { status: u16, message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decoding raw response error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status returned to callers of the query layer.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidIdentity(_)
            | Self::InvalidRegion(_)
            | Self::MissingParameters(_)
            | Self::AccountNotResolved => StatusCode::BAD_REQUEST,
            Self::RiotApi { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Http(_) | Self::Decode(_) | Self::Config(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to the end user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidIdentity(_) => "Invalid Riot ID".to_string(),
            Self::RiotApi { status, message } => translate(message, *status),
            Self::InvalidRegion(_) | Self::MissingParameters(_) | Self::AccountNotResolved => {
                self.to_string()
            }
            Self::Http(_) | Self::Decode(_) | Self::Config(_) | Self::Io(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Map a Riot API failure to the message shown to the end user.
///
/// Only called for confirmed failures; any status without a dedicated message
/// passes the service message through unchanged.
pub fn translate(message: &str, status: u16) -> String {
    match status {
        401 => "You do not have permission to perform this request, missing API key".to_string(),
        403 => "You do not have permission to perform this request, invalid API key or URL"
            .to_string(),
        429 => "Too many requests, please wait and try again later".to_string(),
        _ => message.to_string(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "🌐 ❌ Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "🌐 ⚠️ Request rejected");
        }

        let body = Json(json!({
            "success": false,
            "error": self.user_message(),
        }));

        (status, body).into_response()
    }
}
