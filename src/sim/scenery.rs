//! Scenery pool
//!
//! A fixed number of decorative objects stream past the car. Objects that fall
//! behind the camera are wrapped back to the far end of the band with a fresh
//! lateral position, so a bounded pool reads as endless terrain. On an environment
//! change the whole pool is thrown away and rebuilt with the new kind's shapes.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::EnvironmentKind;
use crate::consts::*;

/// Geometry the renderer should build for an object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SceneryShape {
    /// City block: thin, tall box
    Tower {
        width: f32,
        height: f32,
        depth: f32,
    },
    /// Mountain: cone
    Peak { radius: f32, height: f32 },
    /// Sea: sphere
    Swell { radius: f32 },
    /// Forest: trunk cylinder topped by a foliage cone
    Tree {
        trunk_radius: f32,
        trunk_height: f32,
        foliage_radius: f32,
        foliage_height: f32,
    },
}

impl SceneryShape {
    /// Kind-specific shape for a base size
    pub fn for_kind(kind: EnvironmentKind, size: f32) -> Self {
        match kind {
            EnvironmentKind::City => SceneryShape::Tower {
                width: size * 0.5,
                height: size * 2.0,
                depth: size * 0.5,
            },
            EnvironmentKind::Mountain => SceneryShape::Peak {
                radius: size * 1.5,
                height: size * 3.0,
            },
            EnvironmentKind::Sea => SceneryShape::Swell { radius: size },
            EnvironmentKind::Forest => SceneryShape::Tree {
                trunk_radius: 0.5,
                trunk_height: size * 1.5,
                foliage_radius: size,
                foliage_height: size * 1.5,
            },
        }
    }

    /// Height of the object's origin above the ground
    pub fn elevation(&self) -> f32 {
        match *self {
            SceneryShape::Tower { height, .. } => height * 0.5,
            SceneryShape::Peak { height, .. } => height * 0.5,
            SceneryShape::Swell { radius } => radius * 0.2,
            // Trees are grouped at ground level; parts are offset by the renderer
            SceneryShape::Tree { .. } => 0.0,
        }
    }
}

/// One pooled scenery object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneryObject {
    pub id: u32,
    pub kind: EnvironmentKind,
    /// Ground-plane position (x lateral, y longitudinal z)
    pub position: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub shape: SceneryShape,
}

/// Owner of the scenery pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenerySystem {
    objects: Vec<SceneryObject>,
    /// Bumped on every regeneration
    generation: u32,
    next_id: u32,
    road_half_width: f32,
}

impl ScenerySystem {
    pub fn new(road_half_width: f32) -> Self {
        Self {
            objects: Vec::with_capacity(SCENERY_POOL_SIZE),
            generation: 0,
            next_id: 1,
            road_half_width,
        }
    }

    pub fn objects(&self) -> &[SceneryObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Discard the pool and build a fresh one for `kind`
    pub fn regenerate<R: Rng>(&mut self, kind: EnvironmentKind, rng: &mut R) {
        self.objects.clear();
        self.generation += 1;

        for _ in 0..SCENERY_POOL_SIZE {
            let size = rng.random::<f32>() * SCENERY_SIZE_SPAN + SCENERY_SIZE_MIN;
            let x = self.roadside_x(rng);
            let z = rng.random::<f32>() * SCENERY_Z_SPAN + SCENERY_Z_MIN;
            let opacity = rng.random::<f32>() * SCENERY_OPACITY_SPAN + SCENERY_OPACITY_MIN;

            let id = self.next_id;
            self.next_id += 1;
            self.objects.push(SceneryObject {
                id,
                kind,
                position: Vec2::new(x, z),
                size,
                opacity,
                shape: SceneryShape::for_kind(kind, size),
            });
        }

        log::debug!(
            "Scenery regenerated: {} x {} (generation {})",
            self.objects.len(),
            kind.as_str(),
            self.generation
        );
    }

    /// Scroll every object toward the camera and wrap the ones that passed it
    pub fn recycle<R: Rng>(&mut self, camera_z: f32, speed: f32, rng: &mut R) {
        let travel = speed / TRAVEL_DIVISOR;
        let limit = camera_z + SCENERY_RECYCLE_BEHIND;
        let half_width = self.road_half_width;

        for obj in &mut self.objects {
            obj.position.y += travel;
            if obj.position.y > limit {
                obj.position.y -= SCENERY_Z_SPAN;
                obj.position.x = roadside_x(rng, half_width);
            }
        }
    }

    fn roadside_x<R: Rng>(&self, rng: &mut R) -> f32 {
        roadside_x(rng, self.road_half_width)
    }
}

/// Random lateral position that never lands on the road.
///
/// Samples across the full band; anything inside the road plus clearance is
/// pushed out to the clearance edge on the side it fell.
pub fn roadside_x<R: Rng>(rng: &mut R, road_half_width: f32) -> f32 {
    let x = (rng.random::<f32>() - 0.5) * SCENERY_LATERAL_BAND;
    clear_of_road(x, road_half_width)
}

/// Push a lateral position out of the road corridor
pub fn clear_of_road(x: f32, road_half_width: f32) -> f32 {
    let edge = road_half_width + SCENERY_ROAD_CLEARANCE;
    if x.abs() < edge {
        if x > 0.0 { edge } else { -edge }
    } else {
        x
    }
}
