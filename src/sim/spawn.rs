//! Obstacle spawning and bounded random sampling

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Obstacle};
use crate::consts::*;

/// Draw a spawn coordinate so a square of the given size stays on-screen
///
/// Both spawn axes draw from the height-derived range `[size, height - size]`,
/// so on the wide board obstacles never spawn in the right third; they drift
/// into it by bouncing. See DESIGN.md for why this stays.
pub fn random_position(rng: &mut Pcg32, size: f32) -> f32 {
    rng.random_range(size..=BOARD_HEIGHT - size)
}

/// Draw a non-zero per-axis speed from (-20, 20)
///
/// Resamples on an exact-zero draw so the result can never leave an axis
/// motionless.
pub fn random_speed(rng: &mut Pcg32) -> f32 {
    loop {
        let speed = rng.random_range(-OBSTACLE_SPEED_RANGE..OBSTACLE_SPEED_RANGE);
        if speed != 0.0 {
            return speed;
        }
    }
}

/// Append one obstacle at a random position with the fixed launch velocity
pub fn spawn_obstacle(state: &mut GameState) {
    let x = random_position(&mut state.rng, OBSTACLE_SIZE);
    let y = random_position(&mut state.rng, OBSTACLE_SIZE);

    state.obstacles.push(Obstacle {
        pos: Vec2::new(x, y),
        size: OBSTACLE_SIZE,
        vel: Vec2::splat(OBSTACLE_LAUNCH_SPEED),
    });
}
