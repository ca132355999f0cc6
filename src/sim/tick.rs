//! Fixed timestep simulation tick
//!
//! `Simulation` owns every piece of mutable session state and advances it one
//! 16 ms step at a time. `GameLoop` wraps it with the startup barrier: until a
//! configuration has been installed, ticking does nothing.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::off_road;
use super::environment::{advance_environment, advance_location, current_location};
use super::scenery::ScenerySystem;
use super::slope::SlopeProfile;
use super::speed::{Boost, next_speed};
use super::state::{GameEvent, GameState, RngState, RoadState, VehicleState};
use crate::audio::{CueLimiter, SoundCue};
use crate::consts::*;
use crate::frame::RenderFrame;
use crate::hud::HudSnapshot;
use crate::settings::{ConfigError, GameConfig};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    /// Steer left
    pub left: bool,
    /// Steer right
    pub right: bool,
    /// Brake
    pub down: bool,
    /// Start a boost (ignored while one is running)
    pub boost_requested: bool,
    /// Start a new session once the current one has ended
    pub restart: bool,
}

/// One game session
#[derive(Debug, Clone)]
pub struct Simulation {
    config: GameConfig,
    slope: SlopeProfile,
    rng_state: RngState,
    rng: Pcg32,
    state: GameState,
    vehicle: VehicleState,
    road: RoadState,
    scenery: ScenerySystem,
    boost: Boost,
    boost_cue: CueLimiter,
    brake_held: bool,
    music_started: bool,
    events: Vec<GameEvent>,
}

impl Simulation {
    /// Create a session from a configuration and RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config, seed))
    }

    fn fresh(config: GameConfig, seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let state = GameState::new(config.speed_model.initial_speed);

        let mut scenery = ScenerySystem::new(config.road_half_width);
        scenery.regenerate(state.environment, &mut rng);

        log::info!("Session started (seed {})", seed);

        Self {
            slope: SlopeProfile::new(config.slope_settings.clone()),
            boost_cue: CueLimiter::new(config.boost_cue_cooldown_ms),
            config,
            rng_state,
            rng,
            state,
            vehicle: VehicleState::default(),
            road: RoadState::default(),
            events: vec![GameEvent::SceneryRegenerated {
                generation: scenery.generation(),
            }],
            scenery,
            boost: Boost::Idle,
            brake_held: false,
            music_started: false,
        }
    }

    /// Throw away all session state and start over with the same seed
    pub fn reset(&mut self) {
        let seed = self.rng_state.seed;
        self.reset_with_seed(seed);
    }

    /// Start over with a new seed. Music keeps playing across sessions.
    pub fn reset_with_seed(&mut self, seed: u64) {
        let config = std::mem::take(&mut self.config);
        let music_started = self.music_started;
        *self = Self::fresh(config, seed);
        self.music_started = music_started;
    }

    /// Advance the session by one fixed step.
    ///
    /// Ticking a finished session is a no-op.
    pub fn tick(&mut self, controls: &Controls) -> &GameState {
        if !self.state.running {
            return &self.state;
        }

        if !self.music_started {
            self.music_started = true;
            self.events.push(GameEvent::Sound(SoundCue::MusicStart));
        }

        self.state.ticks += 1;
        self.state.game_time_ms += TICK_MS as u64;
        let now = self.state.game_time_ms;

        // Boost and brake triggers
        if controls.boost_requested {
            if self.boost.request(self.config.boost_duration_ms) {
                log::debug!("Boost engaged at {} ms", now);
            }
            if self.boost_cue.try_fire(now) {
                self.events.push(GameEvent::Sound(SoundCue::BoostActivated));
            }
        }
        if controls.down && !self.brake_held {
            self.events.push(GameEvent::Sound(SoundCue::BrakeActivated));
            self.events.push(GameEvent::Sound(SoundCue::BoostCut));
        }
        self.brake_held = controls.down;
        self.boost.advance(TICK_MS);

        // Speed
        let slope = self.slope.acceleration_at(now);
        self.state.speed = next_speed(
            self.state.speed,
            self.boost.is_active(),
            controls.down,
            slope,
            &self.config.speed_model,
        );
        let speed = self.state.speed;

        // Road
        self.road
            .update(&mut self.rng, self.state.distance, &self.config.road);
        self.road.scroll(speed);

        // Vehicle
        let vehicle = &self.config.vehicle;
        self.vehicle
            .steer(controls.left, controls.right, vehicle.steer_step, vehicle.damping);

        // Scenery, relative to the camera trailing the car
        self.scenery
            .recycle(CAR_Z + CAMERA_TRAIL, speed, &mut self.rng);

        // Environment
        if let Some((from, to)) =
            advance_environment(&mut self.state, self.config.environment_change_interval)
        {
            log::info!("Environment {} -> {}", from.as_str(), to.as_str());
            self.scenery.regenerate(to, &mut self.rng);
            self.events.push(GameEvent::EnvironmentChanged { from, to });
            self.events.push(GameEvent::SceneryRegenerated {
                generation: self.scenery.generation(),
            });
            self.push_location_shown();
        }

        // Location name
        if advance_location(&mut self.state, self.config.display.location_change_distance) {
            log::debug!(
                "Location -> {} at {:.2} km",
                current_location(&self.state),
                self.state.last_location_change_km
            );
            self.push_location_shown();
        }

        // Road departure
        if off_road(
            self.car_x(),
            self.config.car_half_width,
            self.config.road_half_width,
        ) {
            let final_score = self.state.score;
            self.state.running = false;
            self.state.final_score = Some(final_score);
            self.events.push(GameEvent::GameOver { final_score });
            log::info!(
                "Game over: score {} after {} ticks ({:.2} km)",
                final_score,
                self.state.ticks,
                self.state.distance_km()
            );
            return &self.state;
        }

        // Progress
        self.state.distance += (speed / TRAVEL_DIVISOR) as f64;
        self.state.score += (speed / SCORE_DIVISOR).floor() as u64;

        &self.state
    }

    fn push_location_shown(&mut self) {
        self.events.push(GameEvent::LocationShown {
            name: current_location(&self.state),
            display_ms: self.config.display.location_display_time,
        });
    }

    /// Absolute lateral position of the car, as used by the road departure check
    pub fn car_x(&self) -> f32 {
        if self.config.vehicle.follows_road {
            self.road.lateral_offset + self.vehicle.lateral_x
        } else {
            self.vehicle.lateral_x
        }
    }

    /// Take every event produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn vehicle(&self) -> &VehicleState {
        &self.vehicle
    }

    pub fn road(&self) -> &RoadState {
        &self.road
    }

    pub fn scenery(&self) -> &ScenerySystem {
        &self.scenery
    }

    pub fn boost(&self) -> Boost {
        self.boost
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    /// UI readout for the current state
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::new(&self.state, self.boost.is_active(), &self.config.speedometer)
    }

    /// Renderer snapshot for the current state
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::capture(self)
    }
}

/// Frame-driven host wrapper with the configuration barrier
#[derive(Debug, Clone)]
pub struct GameLoop {
    seed: u64,
    sim: Option<Simulation>,
}

impl GameLoop {
    pub fn new(seed: u64) -> Self {
        Self { seed, sim: None }
    }

    /// Install a configuration and start the first session
    pub fn start(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        self.sim = Some(Simulation::new(config, self.seed)?);
        Ok(())
    }

    /// Parse a settings document and start the first session
    pub fn start_from_json(&mut self, json: &str) -> Result<(), ConfigError> {
        self.start(GameConfig::from_json(json)?)
    }

    pub fn is_started(&self) -> bool {
        self.sim.is_some()
    }

    /// Advance one frame.
    ///
    /// Returns `None` until a configuration has been installed. A `restart`
    /// request on a finished session starts a fresh one and ticks it.
    pub fn tick(&mut self, controls: &Controls) -> Option<&GameState> {
        let sim = self.sim.as_mut()?;
        if controls.restart && !sim.state().running {
            log::info!("Restarting session");
            sim.reset();
        }
        Some(sim.tick(controls))
    }

    /// Start over from initial state (no-op before configuration)
    pub fn reset(&mut self) {
        if let Some(sim) = self.sim.as_mut() {
            sim.reset();
        }
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        self.sim.as_ref()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.sim
            .as_mut()
            .map(Simulation::drain_events)
            .unwrap_or_default()
    }

    pub fn hud(&self) -> Option<HudSnapshot> {
        self.sim.as_ref().map(Simulation::hud)
    }

    pub fn frame(&self) -> Option<RenderFrame> {
        self.sim.as_ref().map(Simulation::frame)
    }
}
