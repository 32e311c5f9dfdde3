//! Page rendering errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Failures while opening the page session or producing page fragments.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The session framework could not open or validate a context.
    #[error("session error: {0}")]
    Session(String),

    /// The page would require a login, which anonymous pages cannot satisfy.
    #[error("login required for auth mode {0}")]
    LoginRequired(String),

    /// A shared fragment (header, footer, ad slot) failed to render.
    #[error("fragment {fragment} failed: {message}")]
    Fragment {
        /// Fragment name (`top`, `bottom`, or the ad slot).
        fragment: String,
        /// Failure detail.
        message: String,
    },
}

impl PageError {
    /// Build a fragment failure.
    pub fn fragment(fragment: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fragment {
            fragment: fragment.into(),
            message: message.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::LoginRequired(_) => StatusCode::UNAUTHORIZED,
            Self::Session(_) | Self::Fragment { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(error = %self, status = status.as_u16(), "page rendering failed");
        let body = match status {
            StatusCode::UNAUTHORIZED => "login required",
            _ => "internal server error",
        };
        (status, body).into_response()
    }
}

/// Convenience type alias for page results.
pub type Result<T> = std::result::Result<T, PageError>;
