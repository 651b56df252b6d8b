use serde::{Deserialize, Serialize};

/// Fallback width when the requested one is absent, unparsable, or out of range.
pub const DEFAULT_WIDTH: u32 = 1280;

/// Fallback height when the requested one is absent, unparsable, or out of range.
pub const DEFAULT_HEIGHT: u32 = 720;

/// Largest accepted width (4K UHD).
pub const MAX_WIDTH: u32 = 3840;

/// Largest accepted height (4K UHD).
pub const MAX_HEIGHT: u32 = 2160;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Viewport {
    /// Resolves raw width/height query inputs into a usable viewport.
    ///
    /// Each axis falls back to its default independently: an out-of-range
    /// width does not invalidate a valid height. Never fails.
    pub fn resolve(width: Option<&str>, height: Option<&str>) -> Self {
        Self {
            width: resolve_axis(width, DEFAULT_WIDTH, MAX_WIDTH),
            height: resolve_axis(height, DEFAULT_HEIGHT, MAX_HEIGHT),
        }
    }
}

fn resolve_axis(input: Option<&str>, default: u32, max: u32) -> u32 {
    match input.and_then(|raw| raw.parse::<u32>().ok()) {
        Some(value) if value > 0 && value <= max => value,
        _ => default,
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
