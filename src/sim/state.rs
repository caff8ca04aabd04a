//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; terminal for this session
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCause {
    /// Plane box overlapped the obstacle at this index
    Collision { obstacle: usize },
    /// Plane left the playfield vertically
    OutOfBounds,
}

/// The player's plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in radians (0 = facing right, positive turns clockwise on screen)
    pub angle: f32,
}

impl Plane {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
        }
    }

    /// Collision box: unrotated square anchored at the plane position
    pub fn hitbox(&self, size: f32) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(size))
    }
}

/// A rectangular hazard scrolling leftward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Entirely past the left edge of the playfield
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Constants this session runs with
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub plane: Plane,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// One point per simulation step
    pub score: u64,
    pub phase: GamePhase,
    /// Set together with `GamePhase::GameOver`
    pub end_cause: Option<EndCause>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            plane: Plane::new(tuning.plane_start),
            obstacles: Vec::new(),
            score: 0,
            phase: GamePhase::Playing,
            end_cause: None,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            tuning,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// End the run. The first cause recorded wins.
    pub fn end(&mut self, cause: EndCause) {
        if self.end_cause.is_none() {
            self.end_cause = Some(cause);
        }
        self.phase = GamePhase::GameOver;
    }

    /// Append one obstacle at the right edge with a random height.
    ///
    /// Spawning ignores the phase: only tearing down the session stops it.
    pub fn spawn_obstacle(&mut self) {
        let range = self.tuning.spawn_range();
        let y = if range.is_finite() && range > 0.0 {
            self.rng.random_range(0.0..range)
        } else {
            0.0
        };
        let obstacle = Obstacle::new(
            self.tuning.width,
            y,
            self.tuning.obstacle_width,
            self.tuning.obstacle_height,
        );
        log::debug!("Spawned obstacle at y={:.1} ({} live)", y, self.obstacles.len() + 1);
        self.obstacles.push(obstacle);
    }
}
