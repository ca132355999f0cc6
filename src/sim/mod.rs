//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod environment;
pub mod road;
pub mod scenery;
pub mod slope;
pub mod speed;
pub mod state;
pub mod tick;

pub use collision::{BoundsCheck, off_road};
pub use environment::{current_location, location_name, location_names};
pub use scenery::{SceneryObject, SceneryShape, ScenerySystem};
pub use slope::SlopeProfile;
pub use speed::{Boost, next_speed};
pub use state::{EnvironmentKind, GameEvent, GameState, RoadState, VehicleState};
pub use tick::{Controls, GameLoop, Simulation};
