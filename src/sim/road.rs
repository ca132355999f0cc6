//! Road curvature, lateral wander and strip scrolling

use rand::Rng;

use super::state::RoadState;
use crate::consts::*;
use crate::settings::RoadSettings;

impl RoadState {
    /// Ease the curve toward its target and occasionally pick a new target.
    ///
    /// The lateral offset is recomputed from the travelled distance and the
    /// smoothed curve.
    pub fn update<R: Rng>(&mut self, rng: &mut R, distance: f64, settings: &RoadSettings) {
        self.curve += (self.curve_target - self.curve) * CURVE_SMOOTHING;

        if rng.random_bool(settings.curve_change_probability) {
            self.curve_target = (rng.random::<f32>() - 0.5) * settings.curve_max_angle;
        }

        let wander = (distance * ROAD_WANDER_FREQ).sin() as f32 * ROAD_WANDER_AMPLITUDE;
        self.lateral_offset = wander + self.curve * ROAD_CURVE_SCALE;
    }

    /// Advance the road strip and wrap it to fake an endless road
    pub fn scroll(&mut self, speed: f32) {
        self.scroll_z += speed / TRAVEL_DIVISOR;
        if self.scroll_z > ROAD_SCROLL_MAX {
            self.scroll_z = ROAD_SCROLL_MIN;
        }
    }
}
