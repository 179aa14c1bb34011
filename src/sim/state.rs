//! Game state and core simulation types
//!
//! The whole session lives in one serializable struct so the per-frame
//! update is a plain function of (state, input, elapsed time) - no globals,
//! no hidden RNG engines.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawn;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended on first contact; irreversible
    GameOver,
}

/// A bouncing square obstacle
///
/// Spawned with the fixed launch velocity, never despawned: the collection
/// only grows for the life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner of the square footprint
    pub pos: Vec2,
    /// Edge length (constant, equals `OBSTACLE_SIZE`)
    pub size: f32,
    /// Per-axis signed speeds, scaled by the session multiplier each frame
    pub vel: Vec2,
}

impl Obstacle {
    /// Bounding box of the square footprint
    pub fn aabb(&self) -> Aabb {
        Aabb::from_corner_size(self.pos, self.size)
    }

    /// One frame of motion: integrate by the global multiplier, then flip a
    /// velocity component on wall contact. The position is not clamped back
    /// in, so a box may sit past the edge for a frame of overshoot.
    pub fn integrate(&mut self, speed_multiplier: f32) {
        self.pos += self.vel * speed_multiplier;

        if self.pos.x < 0.0 || self.pos.x > BOARD_WIDTH - self.size {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > BOARD_HEIGHT - self.size {
            self.vel.y = -self.vel.y;
        }
    }
}

/// The player's circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center position, clamped to the board (center only, not the rim)
    pub pos: Vec2,
    /// Fixed radius
    pub radius: f32,
    /// Cached bounding box, recomputed after every move
    pub bbox: Aabb,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            bbox: Aabb::from_center_radius(pos, radius),
        }
    }

    /// Recompute the cached box from the current center
    pub fn refresh_bbox(&mut self) {
        self.bbox = Aabb::from_center_radius(self.pos, self.radius);
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session-owned RNG; all spawn randomness draws from here
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Frame counter; keeps advancing after game over
    pub frame: u64,
    /// Survival score, +1 every `SCORE_FRAMES`
    pub score: u64,
    /// Global obstacle speed scale; starts at 1.0, only ever rises
    pub speed_multiplier: f32,
    /// Seconds accumulated toward the next spawn
    pub spawn_timer: f32,
    /// Player circle
    pub player: Player,
    /// Every obstacle spawned this session, in spawn order
    pub obstacles: Vec<Obstacle>,
}

impl GameState {
    /// Create a new session with the given seed
    ///
    /// The board opens with the player centered and one obstacle already in
    /// play.
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            frame: 0,
            score: 0,
            speed_multiplier: 1.0,
            spawn_timer: 0.0,
            player: Player::new(
                Vec2::new(BOARD_WIDTH / 2.0, BOARD_HEIGHT / 2.0),
                PLAYER_RADIUS,
            ),
            obstacles: Vec::new(),
        };

        spawn::spawn_obstacle(&mut state);

        state
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
