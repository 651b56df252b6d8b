//! Concurrency-safe accounting of in-flight network requests.
//!
//! One tracker exists per capture invocation. The session's CDP event feed
//! writes to it while the idle-wait loop reads snapshots; the two only ever
//! meet at the internal mutex.

use std::sync::{Arc, Mutex, PoisonError};
use tokio::time::Instant;

/// A network lifecycle event observed on a capture session.
///
/// CDP delivers these per request identifier, but idle detection only needs
/// to balance starts against terminations, so the identifier is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkEvent {
    RequestStarted,
    RequestFinished,
    RequestFailed,
}

/// A consistent copy of the tracker state at one point in time.
#[derive(Debug, Clone, Copy)]
pub struct ActivityState {
    /// Number of requests started but not yet finished or failed.
    pub active_requests: u32,
    /// When the last event of any kind was observed.
    pub last_activity: Instant,
}

#[derive(Debug, Clone)]
pub struct ActivityTracker {
    state: Arc<Mutex<ActivityState>>,
}

impl ActivityTracker {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ActivityState {
                active_requests: 0,
                last_activity: Instant::now(),
            })),
        }
    }

    /// Records one network event. Callable concurrently with itself and with
    /// [`snapshot`](Self::snapshot).
    ///
    /// A terminal event arriving when the count is already zero is a no-op
    /// decrement; the count never underflows. Every event, including that
    /// no-op, still counts as activity.
    pub fn on_event(&self, event: NetworkEvent) {
        let mut state = self.lock();
        match event {
            NetworkEvent::RequestStarted => {
                state.active_requests += 1;
            }
            NetworkEvent::RequestFinished | NetworkEvent::RequestFailed => {
                if state.active_requests > 0 {
                    state.active_requests -= 1;
                }
            }
        }
        state.last_activity = Instant::now();
    }

    /// Returns a copy of the current state without torn reads.
    pub fn snapshot(&self) -> ActivityState {
        *self.lock()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ActivityState> {
        // No code path panics while holding the lock, so a poisoned guard
        // still carries valid state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ActivityTracker {
    fn default() -> Self {
        Self::new()
    }
}
