use axum::http::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebshotError {
    #[error("url query parameter is required")]
    MissingUrl,

    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Capture deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    #[error("Browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebshotError {
    /// HTTP status this failure maps to when reported to the caller.
    ///
    /// Only request-validation failures are the caller's fault; everything
    /// else (navigation, deadline, driver faults) is a server-side error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebshotError::MissingUrl => StatusCode::BAD_REQUEST,
            WebshotError::Launch(_)
            | WebshotError::Navigation(_)
            | WebshotError::DeadlineExceeded(_)
            | WebshotError::Browser(_)
            | WebshotError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, WebshotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_maps_to_bad_request() {
        assert_eq!(WebshotError::MissingUrl.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn capture_failures_map_to_server_error() {
        let errors = [
            WebshotError::Launch("no chrome".to_string()),
            WebshotError::Navigation("net::ERR_NAME_NOT_RESOLVED".to_string()),
            WebshotError::DeadlineExceeded(Duration::from_secs(30)),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
