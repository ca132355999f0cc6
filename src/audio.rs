//! Sound cues
//!
//! The simulation never plays audio itself. It emits cues and the host maps them
//! onto whatever playback it has.

use serde::{Deserialize, Serialize};

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Boost engaged (rate limited)
    BoostActivated,
    /// Brake pressed
    BrakeActivated,
    /// Stop and rewind the boost sound if it is still playing
    BoostCut,
    /// Background music should begin (once per game, not per restart)
    MusicStart,
}

/// Drops repeats of a cue that arrive within a cooldown window of game time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CueLimiter {
    cooldown_ms: u64,
    last_played_ms: Option<u64>,
}

impl CueLimiter {
    pub fn new(cooldown_ms: u32) -> Self {
        Self {
            cooldown_ms: cooldown_ms as u64,
            last_played_ms: None,
        }
    }

    /// Returns true (and records the time) if the cue may play at `now_ms`
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        let ready = match self.last_played_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.cooldown_ms,
        };
        if ready {
            self.last_played_ms = Some(now_ms);
        }
        ready
    }
}
