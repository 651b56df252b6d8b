//! Bounded network-idle convergence heuristic.
//!
//! Real pages rarely reach exactly zero in-flight requests: long-poll
//! connections and analytics beacons linger for the lifetime of the page. The
//! policy therefore converges on "few enough requests, quiet for long enough"
//! and silently gives up at `max_wait` rather than erroring or hanging.

use crate::tracker::ActivityTracker;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Quiet time required before the page counts as idle.
pub const DEFAULT_IDLE_DURATION: Duration = Duration::from_millis(500);

/// Upper bound on the whole idle wait.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(2);

/// Interval between tracker snapshots.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// In-flight requests still considered idle.
pub const DEFAULT_ACTIVE_TOLERANCE: u32 = 2;

/// Tuning knobs for [`wait_for_idle`].
#[derive(Debug, Clone)]
pub struct IdleSettings {
    /// How long the network must stay quiet before converging.
    pub idle_duration: Duration,
    /// Give-up bound; the wait never lasts longer than this plus one poll.
    pub max_wait: Duration,
    /// How often the tracker is polled.
    pub poll_interval: Duration,
    /// Highest request count that still counts as idle.
    pub active_tolerance: u32,
}

impl Default for IdleSettings {
    fn default() -> Self {
        Self {
            idle_duration: DEFAULT_IDLE_DURATION,
            max_wait: DEFAULT_MAX_WAIT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            active_tolerance: DEFAULT_ACTIVE_TOLERANCE,
        }
    }
}

/// Polls the tracker until the page looks settled, then returns how long it
/// waited.
///
/// Convergence requires both a request count at or below the tolerance and a
/// quiet period of at least `idle_duration`. If neither holds by `max_wait`
/// the wait stops anyway; giving up is not an error, the capture proceeds
/// with whatever the page looks like.
pub async fn wait_for_idle(tracker: &ActivityTracker, settings: &IdleSettings) -> Duration {
    let started = Instant::now();
    loop {
        let state = tracker.snapshot();
        let quiet_for = state.last_activity.elapsed();

        if state.active_requests <= settings.active_tolerance
            && quiet_for >= settings.idle_duration
        {
            break;
        }
        if started.elapsed() >= settings.max_wait {
            break;
        }

        sleep(settings.poll_interval).await;
    }
    started.elapsed()
}
