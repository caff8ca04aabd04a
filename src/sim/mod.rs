//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the
//! platform or the renderer:
//! - One `tick` per frame, fixed per-step constants
//! - Seeded RNG only
//! - Obstacles kept in spawn order

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_overlap, out_of_bounds};
pub use spawn::SpawnTimer;
pub use state::{EndCause, GamePhase, GameState, Obstacle, Plane};
pub use tick::{TickInput, tick};
