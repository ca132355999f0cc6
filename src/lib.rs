//! Endless Road - simulation core for an endless scrolling driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (speed, road, scenery, environments, collision)
//! - `settings`: Data-driven game configuration
//! - `audio`: Sound cue vocabulary emitted by the simulation
//! - `hud`: Values for the on-screen readout
//! - `frame`: Per-tick snapshot handed to the renderer

pub mod audio;
pub mod frame;
pub mod hud;
pub mod settings;
pub mod sim;

pub use frame::RenderFrame;
pub use hud::HudSnapshot;
pub use settings::{ConfigError, GameConfig};
pub use sim::{Controls, GameLoop, Simulation};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation step in milliseconds
    pub const TICK_MS: u32 = 16;

    /// Number of objects in the scenery pool
    pub const SCENERY_POOL_SIZE: usize = 100;

    /// Vehicle rest position (longitudinal position is fixed relative to the camera)
    pub const CAR_Y: f32 = 1.0;
    pub const CAR_Z: f32 = 20.0;

    /// Camera rig relative to the vehicle
    pub const CAMERA_HEIGHT: f32 = 15.0;
    pub const CAMERA_TRAIL: f32 = 10.0;
    pub const CAMERA_LOOK_HEIGHT: f32 = 5.0;

    /// Fraction of the remaining curve delta closed each tick
    pub const CURVE_SMOOTHING: f32 = 0.02;
    /// Road wander: sin(distance * freq) * amplitude
    pub const ROAD_WANDER_FREQ: f64 = 0.05;
    pub const ROAD_WANDER_AMPLITUDE: f32 = 5.0;
    /// Lateral shift per unit of curve
    pub const ROAD_CURVE_SCALE: f32 = 10.0;

    /// Road strip scroll band
    pub const ROAD_SCROLL_MIN: f32 = -50.0;
    pub const ROAD_SCROLL_MAX: f32 = 50.0;

    /// Speed (units/tick) to forward travel per tick divisor
    pub const TRAVEL_DIVISOR: f32 = 50.0;
    /// Score gained per tick is floor(speed / SCORE_DIVISOR)
    pub const SCORE_DIVISOR: f32 = 100.0;
    /// Slope table values are scaled down by this before being added to speed
    pub const SLOPE_DIVISOR: f32 = 100.0;

    /// Scenery placement
    pub const SCENERY_SIZE_MIN: f32 = 2.0;
    pub const SCENERY_SIZE_SPAN: f32 = 5.0;
    pub const SCENERY_LATERAL_BAND: f32 = 150.0;
    pub const SCENERY_ROAD_CLEARANCE: f32 = 5.0;
    pub const SCENERY_Z_MIN: f32 = -150.0;
    /// Length of the band objects are wrapped back by
    pub const SCENERY_Z_SPAN: f32 = 200.0;
    /// Objects further than this behind the camera get recycled
    pub const SCENERY_RECYCLE_BEHIND: f32 = 50.0;
    pub const SCENERY_OPACITY_MIN: f32 = 0.5;
    pub const SCENERY_OPACITY_SPAN: f32 = 0.5;

    /// m/s to km/h
    pub const MS_TO_KMH: f64 = 3.6;
}
