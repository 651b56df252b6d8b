//! Per-request capture orchestration.
//!
//! One invocation walks a single pass through launch, navigation, the
//! optional idle wait, and the screenshot, all under one hard wall-clock
//! deadline. The session is released on every exit path, including deadline
//! expiry and step failures.

use crate::config::Config;
use crate::error::{Result, WebshotError};
use crate::idle::wait_for_idle;
use crate::session::BrowserSession;
use crate::viewport::Viewport;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

/// One inbound capture request. Immutable once constructed; owned by a single
/// orchestrator invocation.
#[derive(Debug, Clone)]
pub struct CaptureRequest {
    pub url: String,
    pub viewport: Viewport,
    pub full_page: bool,
    pub wait_for_network_idle: bool,
}

/// Renders the requested page and returns its PNG capture.
///
/// The hard deadline from `config` bounds the entire sequence, not just the
/// idle wait: an idle wait that spends its own budget still leaves time for
/// the screenshot, but the deadline can abort any step, capture included.
/// A single attempt is made per request; there are no retries.
pub async fn capture(request: &CaptureRequest, config: &Config) -> Result<Vec<u8>> {
    if request.url.trim().is_empty() {
        // Rejected before any browser resources exist.
        return Err(WebshotError::MissingUrl);
    }

    let deadline = Instant::now() + config.hard_deadline;

    let mut session = timeout_at(deadline, BrowserSession::launch(request.viewport, config))
        .await
        .map_err(|_| WebshotError::DeadlineExceeded(config.hard_deadline))??;

    let outcome = match timeout_at(deadline, run_steps(&mut session, request, config)).await {
        Ok(result) => result,
        Err(_) => Err(WebshotError::DeadlineExceeded(config.hard_deadline)),
    };

    // Teardown runs on every path: success, step failure, and deadline expiry.
    session.close().await;
    outcome
}

async fn run_steps(
    session: &mut BrowserSession,
    request: &CaptureRequest,
    config: &Config,
) -> Result<Vec<u8>> {
    // The tracker must be bound before navigation starts; requests fired
    // while the page loads are part of the activity being measured.
    let tracker = if request.wait_for_network_idle {
        Some(session.track_network_activity().await?)
    } else {
        None
    };

    session.navigate(&request.url).await?;

    if let Some(tracker) = tracker {
        let waited = wait_for_idle(&tracker, &config.idle).await;
        debug!(url = %request.url, ?waited, "network idle wait finished");
    }

    session.capture(request.full_page).await
}
