//! Gameplay tuning
//!
//! Every constant the simulation reads lives here so a page can override
//! them with a JSON blob. Missing fields fall back to the defaults in
//! [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Game balance and playfield configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub width: f32,
    pub height: f32,

    // === Plane ===
    /// Initial plane position
    pub plane_start: Vec2,
    /// Side of the square collision box anchored at the plane position
    pub plane_hitbox: f32,
    pub thrust_forward: f32,
    pub thrust_reverse: f32,
    /// Radians per step
    pub turn_rate: f32,
    pub gravity: f32,
    /// Per-step velocity multiplier, in (0, 1]
    pub damping: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Leftward movement per step
    pub obstacle_speed: f32,
    pub spawn_interval_ms: u64,
    /// Spawn y is drawn from [0, height - spawn_margin)
    pub spawn_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            plane_start: Vec2::new(PLANE_START_X, PLANE_START_Y),
            plane_hitbox: PLANE_HITBOX,
            thrust_forward: THRUST_FORWARD,
            thrust_reverse: THRUST_REVERSE,
            turn_rate: TURN_RATE,
            gravity: GRAVITY,
            damping: DAMPING,

            obstacle_width: OBSTACLE_SIZE,
            obstacle_height: OBSTACLE_SIZE,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_margin: SPAWN_MARGIN,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let reals = [
            ("width", self.width),
            ("height", self.height),
            ("plane_start.x", self.plane_start.x),
            ("plane_start.y", self.plane_start.y),
            ("plane_hitbox", self.plane_hitbox),
            ("thrust_forward", self.thrust_forward),
            ("thrust_reverse", self.thrust_reverse),
            ("turn_rate", self.turn_rate),
            ("gravity", self.gravity),
            ("damping", self.damping),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("obstacle_speed", self.obstacle_speed),
            ("spawn_margin", self.spawn_margin),
        ];
        if let Some((name, value)) = reals.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidTuning(format!("{} must be finite, got {}", name, value)));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(Error::InvalidTuning(format!(
                "playfield must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.plane_hitbox <= 0.0 || self.plane_hitbox >= self.height {
            return Err(Error::InvalidTuning(format!(
                "plane hitbox {} does not fit a playfield of height {}",
                self.plane_hitbox, self.height
            )));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(Error::InvalidTuning(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        if self.obstacle_width <= 0.0 || self.obstacle_height <= 0.0 {
            return Err(Error::InvalidTuning("obstacles must have a positive size".into()));
        }
        if self.spawn_interval_ms == 0 {
            return Err(Error::InvalidTuning("spawn interval must be non-zero".into()));
        }
        if self.spawn_margin < 0.0 {
            return Err(Error::InvalidTuning(format!(
                "spawn margin must not be negative, got {}",
                self.spawn_margin
            )));
        }
        if self.spawn_range() <= 0.0 {
            return Err(Error::InvalidTuning(format!(
                "spawn margin {} leaves no room in a playfield of height {}",
                self.spawn_margin, self.height
            )));
        }
        Ok(())
    }

    /// Exclusive upper bound of obstacle spawn y
    #[inline]
    pub fn spawn_range(&self) -> f32 {
        self.height - self.spawn_margin
    }

    /// Largest plane y that is still inside the playfield
    #[inline]
    pub fn max_plane_y(&self) -> f32 {
        self.height - self.plane_hitbox
    }

    /// Tuning from the page, falling back to defaults on bad input
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning override");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning override: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
