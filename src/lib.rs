//! Plane Simulator - A side-scrolling obstacle dodging game
//!
//! Core modules:
//! - `sim`: Simulation step (plane physics, obstacles, collisions, spawning)
//! - `input`: Held-key tracking
//! - `renderer`: Draws the playfield onto a 2D surface
//! - `session`: Loop driver owning all per-session state
//! - `platform`: Browser integration and listener/timer lifetimes
//! - `tuning`: Data-driven game constants

pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{Error, Result};
pub use session::{LoopState, Session};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical canvas units)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Plane spawn position
    pub const PLANE_START_X: f32 = 100.0;
    pub const PLANE_START_Y: f32 = 300.0;
    /// Side of the square, unrotated plane hitbox
    pub const PLANE_HITBOX: f32 = 20.0;

    /// Acceleration along heading per step while thrusting forward
    pub const THRUST_FORWARD: f32 = 0.1;
    /// Deceleration along heading per step while thrusting backward
    pub const THRUST_REVERSE: f32 = 0.05;
    /// Heading change per step (radians)
    pub const TURN_RATE: f32 = 0.05;
    /// Downward acceleration per step
    pub const GRAVITY: f32 = 0.02;
    /// Velocity multiplier applied after integration
    pub const DAMPING: f32 = 0.99;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 50.0;
    pub const OBSTACLE_SPEED: f32 = 2.0;
    /// Milliseconds between obstacle spawns
    pub const SPAWN_INTERVAL_MS: u64 = 2000;
    /// Spawn y is drawn from [0, height - SPAWN_MARGIN)
    pub const SPAWN_MARGIN: f32 = 100.0;
}

/// Vector of length `magnitude` pointing along `angle` (radians, screen space)
#[inline]
pub fn heading_vector(magnitude: f32, angle: f32) -> Vec2 {
    Vec2::new(magnitude * angle.cos(), magnitude * angle.sin())
}
