//! Session teardown tests that drive a real Chromium.
//!
//! These need a local Chromium install, so they are ignored by default; run
//! with `cargo test -- --ignored` on a machine that has one.

use std::time::Duration;
use webshot_lib::{
    capture, BrowserSession, CaptureRequest, Config, IdleSettings, Viewport, WebshotError,
};

#[tokio::test]
#[ignore = "requires a local Chromium install"]
async fn close_is_idempotent() {
    let mut session = BrowserSession::launch(Viewport::default(), &Config::default())
        .await
        .unwrap();

    session.close().await;
    // A second close must be a no-op, not a fault.
    session.close().await;
}

#[tokio::test]
#[ignore = "requires a local Chromium install"]
async fn navigation_failure_still_tears_the_session_down() {
    let request = CaptureRequest {
        // Nothing listens here; navigation is rejected by the driver.
        url: "http://127.0.0.1:9/unreachable".to_string(),
        viewport: Viewport::default(),
        full_page: false,
        wait_for_network_idle: false,
    };

    let err = capture(&request, &Config::default()).await.unwrap_err();
    assert!(matches!(
        err,
        WebshotError::Navigation(_) | WebshotError::DeadlineExceeded(_)
    ));
    // The session was closed on the failure path; a fresh launch proves no
    // stale browser resources block a follow-up capture.
    let mut session = BrowserSession::launch(Viewport::default(), &Config::default())
        .await
        .unwrap();
    session.close().await;
}

#[tokio::test]
#[ignore = "requires a local Chromium install"]
async fn expired_deadline_reports_deadline_exceeded_and_still_closes() {
    let config = Config {
        // Enough budget to launch, not enough to finish navigating a
        // non-routable address; the deadline fires mid-navigation.
        hard_deadline: Duration::from_secs(8),
        idle: IdleSettings::default(),
        chrome_executable: None,
    };
    let request = CaptureRequest {
        url: "http://10.255.255.1/".to_string(),
        viewport: Viewport::default(),
        full_page: false,
        wait_for_network_idle: true,
    };

    let err = capture(&request, &config).await.unwrap_err();
    assert!(matches!(err, WebshotError::DeadlineExceeded(_)));
}
