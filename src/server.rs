//! HTTP front door: routing, query parsing, and CORS for the screenshot
//! endpoint.

use crate::capture::{capture, CaptureRequest};
use crate::config::Config;
use crate::error::WebshotError;
use crate::viewport::Viewport;
use axum::extract::{Query, Request, State};
use axum::http::{header, HeaderValue};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Application state shared across routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Raw query parameters for `GET /screenshot`. Everything arrives as
/// optional strings; validation and clamping happen afterwards.
#[derive(Debug, Deserialize)]
struct ScreenshotQuery {
    url: Option<String>,
    width: Option<String>,
    height: Option<String>,
    fullpage: Option<String>,
    networkidle: Option<String>,
}

impl IntoResponse for WebshotError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// Handler for `GET /screenshot`.
async fn screenshot(
    State(state): State<AppState>,
    Query(query): Query<ScreenshotQuery>,
) -> Response {
    let Some(url) = query.url.filter(|url| !url.is_empty()) else {
        return WebshotError::MissingUrl.into_response();
    };

    let request = CaptureRequest {
        url,
        viewport: Viewport::resolve(query.width.as_deref(), query.height.as_deref()),
        full_page: is_true_flag(query.fullpage.as_deref()),
        wait_for_network_idle: is_true_flag(query.networkidle.as_deref()),
    };

    info!(
        url = %request.url,
        viewport = %request.viewport,
        full_page = request.full_page,
        network_idle = request.wait_for_network_idle,
        "capture requested"
    );

    match capture(&request, &state.config).await {
        Ok(image) => ([(header::CONTENT_TYPE, "image/png")], image).into_response(),
        Err(err) => {
            error!(url = %request.url, error = %err, "capture failed");
            err.into_response()
        }
    }
}

/// Boolean query flags are the literal string "true"; anything else is false.
fn is_true_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

async fn allow_all_origins(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}

/// Builds the application router with the screenshot endpoint and CORS layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/screenshot", get(screenshot))
        .layer(middleware::from_fn(allow_all_origins))
        .with_state(state)
}

/// Binds the listener and serves requests until the process exits.
pub async fn serve(addr: SocketAddr, state: AppState) -> crate::error::Result<()> {
    let app = router(state);
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_literal_true_enables_a_flag() {
        assert!(is_true_flag(Some("true")));
        assert!(!is_true_flag(Some("TRUE")));
        assert!(!is_true_flag(Some("1")));
        assert!(!is_true_flag(Some("yes")));
        assert!(!is_true_flag(Some("")));
        assert!(!is_true_flag(None));
    }
}
