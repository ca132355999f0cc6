//! Game state and core simulation types
//!
//! Everything a tick mutates lives here or in the subsystem it belongs to.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::audio::SoundCue;
use crate::consts::ROAD_SCROLL_MIN;

/// Thematic zone the road passes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnvironmentKind {
    #[default]
    City,
    Mountain,
    Sea,
    Forest,
}

impl EnvironmentKind {
    /// Fixed cycle order
    pub const ALL: [EnvironmentKind; 4] = [
        EnvironmentKind::City,
        EnvironmentKind::Mountain,
        EnvironmentKind::Sea,
        EnvironmentKind::Forest,
    ];

    /// The environment that follows this one
    pub fn next(self) -> Self {
        match self {
            EnvironmentKind::City => EnvironmentKind::Mountain,
            EnvironmentKind::Mountain => EnvironmentKind::Sea,
            EnvironmentKind::Sea => EnvironmentKind::Forest,
            EnvironmentKind::Forest => EnvironmentKind::City,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentKind::City => "City",
            EnvironmentKind::Mountain => "Mountain",
            EnvironmentKind::Sea => "Sea",
            EnvironmentKind::Forest => "Forest",
        }
    }
}

/// Lateral state of the player's car
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VehicleState {
    /// Steering offset, pulled back toward zero by damping
    pub lateral_x: f32,
}

impl VehicleState {
    /// Apply one tick of steering input followed by damping
    pub fn steer(&mut self, left: bool, right: bool, step: f32, damping: f32) {
        if left {
            self.lateral_x -= step;
        }
        if right {
            self.lateral_x += step;
        }
        self.lateral_x *= damping;
    }
}

/// Road curvature and scroll state
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoadState {
    pub curve: f32,
    pub curve_target: f32,
    /// Lateral drift of the road strip
    pub lateral_offset: f32,
    /// Longitudinal position of the repeating road strip
    pub scroll_z: f32,
}

impl Default for RoadState {
    fn default() -> Self {
        Self {
            curve: 0.0,
            curve_target: 0.0,
            lateral_offset: 0.0,
            scroll_z: ROAD_SCROLL_MIN,
        }
    }
}

/// Events produced during a tick, drained by the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    /// Something the audio layer should play
    Sound(SoundCue),
    /// Show a location banner for `display_ms`
    LocationShown { name: &'static str, display_ms: u32 },
    /// The environment rotated
    EnvironmentChanged {
        from: EnvironmentKind,
        to: EnvironmentKind,
    },
    /// The scenery pool was cleared and rebuilt (all ids replaced)
    SceneryRegenerated { generation: u32 },
    /// The car left the road; emitted once per session
    GameOver { final_score: u64 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Per-session game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// False once the car has left the road
    pub running: bool,
    pub score: u64,
    /// Current speed (m/s), always within the configured bounds
    pub speed: f32,
    /// Distance travelled (m)
    pub distance: f64,
    pub game_time_ms: u64,
    /// Ticks simulated this session
    pub ticks: u64,
    pub environment: EnvironmentKind,
    /// Ticks since the last environment change
    pub environment_timer: u32,
    /// Distance (km) at which the location name last rotated
    pub last_location_change_km: f64,
    /// Index into the current environment's location names
    pub location_index: usize,
    /// Set on the transition to game over
    pub final_score: Option<u64>,
}

impl GameState {
    /// Fresh state for a new session
    pub fn new(initial_speed: f32) -> Self {
        Self {
            running: true,
            score: 0,
            speed: initial_speed,
            distance: 0.0,
            game_time_ms: 0,
            ticks: 0,
            environment: EnvironmentKind::City,
            environment_timer: 0,
            last_location_change_km: 0.0,
            location_index: 0,
            final_score: None,
        }
    }

    /// Distance travelled in kilometers
    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }
}
