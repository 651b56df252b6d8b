//! Ownership-scoped wrapper around one Chromium automation context.
//!
//! Each capture invocation owns exactly one `BrowserSession`; it is never
//! shared across requests. The session owns the browser process, the CDP
//! handler loop, and (when idle tracking is on) the task that feeds network
//! events into the request's [`ActivityTracker`].

use crate::config::Config;
use crate::error::{Result, WebshotError};
use crate::tracker::{ActivityTracker, NetworkEvent};
use crate::viewport::Viewport;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::{
    EnableParams, EventLoadingFailed, EventLoadingFinished, EventRequestWillBeSent,
};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::handler::viewport::Viewport as EmulatedViewport;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use futures::stream::{self, StreamExt};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub struct BrowserSession {
    browser: Option<Browser>,
    page: Page,
    handler_task: JoinHandle<()>,
    event_feed: Option<JoinHandle<()>>,
}

impl BrowserSession {
    /// Launches a headless Chromium bound to the given viewport and opens a
    /// blank page ready for navigation.
    pub async fn launch(viewport: Viewport, config: &Config) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(viewport.width, viewport.height)
            .viewport(EmulatedViewport {
                width: viewport.width,
                height: viewport.height,
                device_scale_factor: None,
                emulating_mobile: false,
                is_landscape: false,
                has_touch: false,
            });
        if let Some(path) = &config.chrome_executable {
            builder = builder.chrome_executable(path.clone());
        }
        let browser_config = builder.build().map_err(WebshotError::Launch)?;

        let (mut browser, mut handler) = Browser::launch(browser_config).await?;
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(error) = event {
                    debug!(%error, "browser handler reported an error");
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(err) => {
                if let Err(error) = browser.close().await {
                    warn!(%error, "browser close after failed page open returned error");
                }
                handler_task.abort();
                return Err(err.into());
            }
        };

        debug!(%viewport, "browser session launched");
        Ok(Self {
            browser: Some(browser),
            page,
            handler_task,
            event_feed: None,
        })
    }

    /// Enables CDP network-event delivery and binds a fresh tracker to it.
    ///
    /// Must be called before [`navigate`](Self::navigate) so requests fired
    /// during the initial load are counted. The feed task lives until the
    /// session is closed.
    pub async fn track_network_activity(&mut self) -> Result<ActivityTracker> {
        self.page.execute(EnableParams::default()).await?;

        let started = self
            .page
            .event_listener::<EventRequestWillBeSent>()
            .await?
            .map(|_| NetworkEvent::RequestStarted);
        let finished = self
            .page
            .event_listener::<EventLoadingFinished>()
            .await?
            .map(|_| NetworkEvent::RequestFinished);
        let failed = self
            .page
            .event_listener::<EventLoadingFailed>()
            .await?
            .map(|_| NetworkEvent::RequestFailed);
        let mut events = stream::select(started, stream::select(finished, failed));

        let tracker = ActivityTracker::new();
        let feed = tracker.clone();
        self.event_feed = Some(tokio::spawn(async move {
            while let Some(event) = events.next().await {
                feed.on_event(event);
            }
        }));

        Ok(tracker)
    }

    /// Navigates to the URL and waits for the load event.
    pub async fn navigate(&self, url: &str) -> Result<()> {
        self.page
            .goto(url)
            .await
            .map_err(|err| WebshotError::Navigation(err.to_string()))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|err| WebshotError::Navigation(err.to_string()))?;
        Ok(())
    }

    /// Captures a PNG of the viewport, or of the whole page when `full_page`
    /// is set.
    pub async fn capture(&self, full_page: bool) -> Result<Vec<u8>> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(full_page)
            .build();
        Ok(self.page.screenshot(params).await?)
    }

    /// Shuts the session down: stops the event feed and closes the browser.
    ///
    /// Idempotent; safe to call after a failed step or a second time. If the
    /// session is dropped without being closed, the driver still kills the
    /// Chromium child process, so no browser leaks past a panic.
    pub async fn close(&mut self) {
        if let Some(feed) = self.event_feed.take() {
            feed.abort();
        }
        if let Some(mut browser) = self.browser.take() {
            if let Err(error) = browser.close().await {
                warn!(%error, "browser close returned error");
            }
            self.handler_task.abort();
            debug!("browser session closed");
        }
    }
}
