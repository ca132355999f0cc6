//! Render snapshot
//!
//! Everything an external renderer needs to draw one frame. Scenery ids are stable
//! while an object is recycled and all change when `scenery_generation` bumps, so a
//! renderer can keep meshes keyed by id and rebuild only on a new generation.

use glam::Vec3;
use serde::Serialize;

use crate::consts::*;
use crate::sim::{EnvironmentKind, SceneryShape, Simulation};

/// Road strip placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoadView {
    pub lateral_offset: f32,
    pub curve: f32,
    pub scroll_z: f32,
    pub half_width: f32,
}

/// One scenery object in world space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneryView {
    pub id: u32,
    pub kind: EnvironmentKind,
    pub position: Vec3,
    pub shape: SceneryShape,
    pub opacity: f32,
}

/// Per-frame render data
#[derive(Debug, Clone, Serialize)]
pub struct RenderFrame {
    pub vehicle: Vec3,
    pub camera: Vec3,
    pub camera_target: Vec3,
    pub road: RoadView,
    pub environment: EnvironmentKind,
    pub scenery: Vec<SceneryView>,
    pub scenery_generation: u32,
}

impl RenderFrame {
    pub fn capture(sim: &Simulation) -> Self {
        let car_x = sim.car_x();
        let road = sim.road();
        let vehicle = Vec3::new(car_x, CAR_Y, CAR_Z);

        let scenery = sim
            .scenery()
            .objects()
            .iter()
            .map(|obj| SceneryView {
                id: obj.id,
                kind: obj.kind,
                position: Vec3::new(obj.position.x, obj.shape.elevation(), obj.position.y),
                shape: obj.shape,
                opacity: obj.opacity,
            })
            .collect();

        Self {
            vehicle,
            camera: Vec3::new(car_x, CAMERA_HEIGHT, CAR_Z + CAMERA_TRAIL),
            camera_target: vehicle + Vec3::Y * CAMERA_LOOK_HEIGHT,
            road: RoadView {
                lateral_offset: road.lateral_offset,
                curve: road.curve,
                scroll_z: road.scroll_z,
                half_width: sim.config().road_half_width,
            },
            environment: sim.state().environment,
            scenery,
            scenery_generation: sim.scenery().generation(),
        }
    }
}
