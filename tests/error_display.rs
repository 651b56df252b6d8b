use std::time::Duration;
use webshot_lib::WebshotError;

#[test]
fn missing_url_display_matches_response_body() {
    let err = WebshotError::MissingUrl;

    assert_eq!(format!("{}", err), "url query parameter is required");
}

#[test]
fn navigation_error_display_includes_cause() {
    let err = WebshotError::Navigation("net::ERR_NAME_NOT_RESOLVED".to_string());

    assert_eq!(
        format!("{}", err),
        "Navigation failed: net::ERR_NAME_NOT_RESOLVED"
    );
}

#[test]
fn launch_error_display_includes_message() {
    let err = WebshotError::Launch("chromium binary not found".to_string());

    assert_eq!(
        format!("{}", err),
        "Failed to launch browser: chromium binary not found"
    );
}

#[test]
fn deadline_error_display_includes_budget() {
    let err = WebshotError::DeadlineExceeded(Duration::from_secs(30));

    assert_eq!(format!("{}", err), "Capture deadline of 30s exceeded");
}

#[test]
fn io_error_display_wraps_source() {
    let io_err = std::io::Error::other("address in use");
    let err: WebshotError = io_err.into();
    let rendered = format!("{}", err);

    assert!(rendered.starts_with("IO error: "));
    assert!(rendered.contains("address in use"));
}
