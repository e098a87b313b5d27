//! Sticky primary/degraded source mode
//!
//! The controller starts in [`SourceMode::Primary`]. The first failed read
//! against the primary source moves it to [`SourceMode::Degraded`] for the
//! rest of the process; there is no way back.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use log::warn;

/// Which source reads are served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Reads try the primary API first
    Primary,
    /// Reads go straight to the static fallback
    Degraded,
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Primary => write!(f, "primary"),
            SourceMode::Degraded => write!(f, "degraded"),
        }
    }
}

/// Process-wide degradation flag, injected into every content loader that
/// should share it.
#[derive(Debug, Default)]
pub struct SourceModeController {
    degraded: AtomicBool,
}

impl SourceModeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn state(&self) -> SourceMode {
        if self.is_degraded() {
            SourceMode::Degraded
        } else {
            SourceMode::Primary
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Acquire)
    }

    /// Switch to degraded mode. Returns `true` only for the call that made
    /// the transition.
    pub fn mark_degraded(&self, reason: &str) -> bool {
        let was_degraded = self.degraded.swap(true, Ordering::AcqRel);
        if !was_degraded {
            warn!(
                "Primary content source unavailable ({}); serving static content from now on",
                reason
            );
        }
        !was_degraded
    }
}
