use std::path::PathBuf;
use std::time::Duration;

use crate::idle::IdleSettings;

/// Default wall-clock bound on one whole capture, launch through screenshot.
pub const DEFAULT_HARD_DEADLINE: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Config {
    /// Hard deadline for one capture invocation. Bounds every step, not just
    /// the idle wait.
    pub hard_deadline: Duration,
    /// Network-idle convergence tuning.
    pub idle: IdleSettings,
    /// Chromium binary to launch instead of whatever the driver auto-detects.
    pub chrome_executable: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hard_deadline: DEFAULT_HARD_DEADLINE,
            idle: IdleSettings::default(),
            chrome_executable: None,
        }
    }
}
