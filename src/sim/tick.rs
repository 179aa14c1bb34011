//! Fixed timestep simulation tick
//!
//! One call advances exactly one frame. Difficulty and score run on frame
//! cadences; only the spawn timer consumes wall-clock time.

use super::spawn;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Held directional input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Advance the game state by one frame
///
/// `dt` is the wall-clock time this frame covers; it feeds the spawn timer
/// and nothing else. After the terminal transition only the frame counter
/// keeps advancing - score, multiplier, entities and the spawn timer all
/// freeze.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.frame = state.frame.wrapping_add(1);

    if state.phase == GamePhase::GameOver {
        return;
    }

    if state.frame % SPEED_RAMP_FRAMES == 0 {
        state.speed_multiplier += SPEED_RAMP_STEP;
    }
    if state.frame % SCORE_FRAMES == 0 {
        state.score += 1;
    }

    // Move every box before testing contact
    for obstacle in &mut state.obstacles {
        obstacle.integrate(state.speed_multiplier);
    }

    // First overlap ends the run. The rest of this frame still executes;
    // the flag is only consulted at the top of the next tick.
    if state
        .obstacles
        .iter()
        .any(|o| o.aabb().overlaps(&state.player.bbox))
    {
        state.phase = GamePhase::GameOver;
    }

    // Fixed step per held direction; the clamp is on the center alone, so
    // the rim of the circle may hang off-screen at the edges
    let player = &mut state.player;
    if input.left {
        player.pos.x -= PLAYER_STEP;
    }
    if input.right {
        player.pos.x += PLAYER_STEP;
    }
    if input.up {
        player.pos.y -= PLAYER_STEP;
    }
    if input.down {
        player.pos.y += PLAYER_STEP;
    }
    player.pos.x = player.pos.x.clamp(0.0, BOARD_WIDTH);
    player.pos.y = player.pos.y.clamp(0.0, BOARD_HEIGHT);
    player.refresh_bbox();

    state.spawn_timer += dt;
    if state.spawn_timer >= SPAWN_INTERVAL {
        spawn::spawn_obstacle(state);
        state.spawn_timer = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use glam::Vec2;

    /// Session with exactly one hand-placed obstacle and a centered player
    fn lone_obstacle(pos: Vec2, vel: Vec2) -> GameState {
        let mut state = GameState::new(12345);
        state.obstacles.clear();
        state.obstacles.push(Obstacle {
            pos,
            size: OBSTACLE_SIZE,
            vel,
        });
        state
    }

    /// Session with nothing on the board at all
    fn empty_board() -> GameState {
        let mut state = GameState::new(12345);
        state.obstacles.clear();
        state
    }

    #[test]
    fn test_score_after_120_survived_frames() {
        // Obstacle far from the centered player, drifting without reaching
        // either a wall or the player within the window
        let mut state = lone_obstacle(Vec2::new(100.0, 100.0), Vec2::new(2.0, 2.0));
        let input = TickInput::default();

        for _ in 0..SCORE_FRAMES {
            tick(&mut state, &input, 0.0);
        }

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 1);
        assert_eq!(state.frame, SCORE_FRAMES);
        assert_eq!(state.speed_multiplier, 1.0);
        // No input: the player never moved
        assert_eq!(
            state.player.pos,
            Vec2::new(BOARD_WIDTH / 2.0, BOARD_HEIGHT / 2.0)
        );
    }

    #[test]
    fn test_multiplier_ramps_every_600_frames() {
        let mut state = empty_board();
        let input = TickInput::default();

        for _ in 0..SPEED_RAMP_FRAMES {
            tick(&mut state, &input, 0.0);
        }
        assert!((state.speed_multiplier - 1.1).abs() < 1e-6);

        for _ in 0..SPEED_RAMP_FRAMES {
            tick(&mut state, &input, 0.0);
        }
        assert!((state.speed_multiplier - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_flips_exactly_on_boundary_crossing() {
        // Fast horizontal box on a row well clear of the player
        let mut state = lone_obstacle(Vec2::new(1100.0, 100.0), Vec2::new(6.0, 0.0));
        let input = TickInput::default();
        let mut flips = 0;

        for _ in 0..400 {
            let before = state.obstacles[0];
            tick(&mut state, &input, 0.0);
            let after = &state.obstacles[0];

            let moved_x = before.pos.x + before.vel.x * state.speed_multiplier;
            let crossed = moved_x < 0.0 || moved_x > BOARD_WIDTH - before.size;
            assert_eq!(
                after.vel.x != before.vel.x,
                crossed,
                "x velocity must flip exactly when the move leaves the board"
            );
            if crossed {
                flips += 1;
            }
        }

        // 400 frames at 6 units/frame crosses both walls
        assert!(flips >= 2);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_bounce_allows_single_frame_overshoot() {
        let mut state = lone_obstacle(
            Vec2::new(BOARD_WIDTH - OBSTACLE_SIZE - 1.0, 100.0),
            Vec2::new(6.0, 0.0),
        );
        let input = TickInput::default();

        tick(&mut state, &input, 0.0);

        // Velocity flipped but the position stays out of range this frame
        let obstacle = &state.obstacles[0];
        assert_eq!(obstacle.vel.x, -6.0);
        assert!(obstacle.pos.x > BOARD_WIDTH - OBSTACLE_SIZE);

        tick(&mut state, &input, 0.0);
        assert!(state.obstacles[0].pos.x <= BOARD_WIDTH - OBSTACLE_SIZE);
    }

    #[test]
    fn test_collision_ends_run_and_freezes_counters() {
        // Box dead center on the player
        let mut state = lone_obstacle(
            Vec2::new(BOARD_WIDTH / 2.0 - OBSTACLE_SIZE / 2.0, BOARD_HEIGHT / 2.0 - OBSTACLE_SIZE / 2.0),
            Vec2::ZERO,
        );
        let input = TickInput::default();

        tick(&mut state, &input, 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        let score = state.score;
        let multiplier = state.speed_multiplier;
        let obstacles = state.obstacles.clone();
        let player = state.player;
        let frame = state.frame;

        for _ in 0..(SPEED_RAMP_FRAMES * 2) {
            tick(&mut state, &input, 1.0);
        }

        // Only the clock moved
        assert_eq!(state.frame, frame + SPEED_RAMP_FRAMES * 2);
        assert_eq!(state.score, score);
        assert_eq!(state.speed_multiplier, multiplier);
        assert_eq!(state.obstacles, obstacles);
        assert_eq!(state.player, player);
        assert_eq!(state.spawn_timer, 0.0);
    }

    #[test]
    fn test_game_over_ignores_input() {
        let mut state = lone_obstacle(
            Vec2::new(BOARD_WIDTH / 2.0, BOARD_HEIGHT / 2.0),
            Vec2::ZERO,
        );
        let all_held = TickInput {
            left: false,
            right: true,
            up: false,
            down: true,
        };

        tick(&mut state, &all_held, 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);
        let pos = state.player.pos;

        tick(&mut state, &all_held, 0.0);
        assert_eq!(state.player.pos, pos);
    }

    #[test]
    fn test_input_moves_player_by_fixed_step() {
        let mut state = empty_board();
        let input = TickInput {
            left: true,
            up: true,
            ..Default::default()
        };

        tick(&mut state, &input, 0.0);

        let expected = Vec2::new(
            BOARD_WIDTH / 2.0 - PLAYER_STEP,
            BOARD_HEIGHT / 2.0 - PLAYER_STEP,
        );
        assert_eq!(state.player.pos, expected);
        // The cached box tracks the move
        assert_eq!(state.player.bbox.min, expected - Vec2::splat(PLAYER_RADIUS));
        assert_eq!(state.player.bbox.max, expected + Vec2::splat(PLAYER_RADIUS));
    }

    #[test]
    fn test_player_center_clamped_to_board() {
        let mut state = empty_board();
        state.player.pos = Vec2::new(5.0, 5.0);
        state.player.refresh_bbox();
        let input = TickInput {
            left: true,
            up: true,
            ..Default::default()
        };

        tick(&mut state, &input, 0.0);
        assert_eq!(state.player.pos, Vec2::ZERO);

        // Opposing corner
        state.player.pos = Vec2::new(BOARD_WIDTH - 3.0, BOARD_HEIGHT - 3.0);
        let input = TickInput {
            right: true,
            down: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.0);
        assert_eq!(state.player.pos, Vec2::new(BOARD_WIDTH, BOARD_HEIGHT));
    }

    #[test]
    fn test_spawn_fires_at_exactly_five_seconds() {
        let mut state = empty_board();
        let input = TickInput::default();

        tick(&mut state, &input, 2.5);
        assert_eq!(state.obstacles.len(), 0);
        assert_eq!(state.spawn_timer, 2.5);

        // Accumulates to exactly 5.0: one append, timer reset
        tick(&mut state, &input, 2.5);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.spawn_timer, 0.0);
    }

    #[test]
    fn test_obstacle_collection_only_grows() {
        let mut state = GameState::new(777);
        let input = TickInput::default();
        let mut last_len = state.obstacles.len();

        // Long run with the player parked at the origin corner, out of the
        // spawn band's reach until boxes drift there
        state.player.pos = Vec2::new(0.0, 0.0);
        state.player.refresh_bbox();

        for _ in 0..3_000 {
            tick(&mut state, &input, SIM_DT);
            assert!(state.obstacles.len() >= last_len);
            last_len = state.obstacles.len();
        }
    }

    #[test]
    fn test_determinism_across_identical_sessions() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);

        let held = TickInput {
            right: true,
            ..Default::default()
        };
        for i in 0..1_200u32 {
            let input = if i % 3 == 0 { held } else { TickInput::default() };
            tick(&mut a, &input, SIM_DT);
            tick(&mut b, &input, SIM_DT);
        }

        assert_eq!(a.frame, b.frame);
        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.player, b.player);
        assert_eq!(a.obstacles, b.obstacles);
    }
}
