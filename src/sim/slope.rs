//! Scripted slope profile
//!
//! Maps elapsed game time to an acceleration applied on top of the driver's input.

use crate::settings::SlopeEntry;

/// Ordered slope table
#[derive(Debug, Clone)]
pub struct SlopeProfile {
    entries: Vec<SlopeEntry>,
}

impl SlopeProfile {
    pub fn new(entries: Vec<SlopeEntry>) -> Self {
        Self { entries }
    }

    /// Acceleration for the given elapsed time.
    ///
    /// Picks the first entry whose threshold has not yet been passed (in whole
    /// seconds); past the final threshold the last entry holds.
    pub fn acceleration_at(&self, game_time_ms: u64) -> f32 {
        let seconds = game_time_ms / 1000;
        self.entries
            .iter()
            .find(|e| seconds <= e.time_seconds as u64)
            .or(self.entries.last())
            .map(|e| e.acceleration)
            .unwrap_or(0.0)
    }
}
