//! Webshot Library
//!
//! A library for rendering web pages in a headless Chromium session and
//! returning PNG captures over HTTP. The interesting part is deciding when a
//! page has finished loading enough to be worth capturing: the browser streams
//! network-activity events concurrently with the capture flow, and a bounded
//! idle heuristic decides when to stop waiting.
//!
//! # Module Overview
//!
//! - [`server`] - HTTP routing, query parsing, and CORS for the screenshot endpoint
//! - [`capture`] - Per-request capture orchestration with guaranteed session teardown
//! - [`session`] - Ownership-scoped wrapper around one Chromium automation context
//! - [`tracker`] - Concurrency-safe accounting of in-flight network requests
//! - [`idle`] - Bounded network-idle convergence heuristic
//! - [`viewport`] - Viewport dimension validation and clamping
//! - [`config`] - Named configuration defaults
//!
//! # Example
//!
//! ```no_run
//! use webshot_lib::{capture, CaptureRequest, Config, Viewport};
//!
//! # async fn example() -> webshot_lib::Result<()> {
//! let request = CaptureRequest {
//!     url: "https://example.com".to_string(),
//!     viewport: Viewport::resolve(Some("1280"), Some("720")),
//!     full_page: false,
//!     wait_for_network_idle: true,
//! };
//! let png = capture(&request, &Config::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod config;
pub mod error;
pub mod idle;
pub mod server;
pub mod session;
pub mod tracker;
pub mod viewport;

pub use capture::{capture, CaptureRequest};
pub use config::{Config, DEFAULT_HARD_DEADLINE};
pub use error::{Result, WebshotError};
pub use idle::{
    wait_for_idle, IdleSettings, DEFAULT_ACTIVE_TOLERANCE, DEFAULT_IDLE_DURATION, DEFAULT_MAX_WAIT,
    DEFAULT_POLL_INTERVAL,
};
pub use server::{router, serve, AppState};
pub use session::BrowserSession;
pub use tracker::{ActivityState, ActivityTracker, NetworkEvent};
pub use viewport::{Viewport, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_WIDTH};
