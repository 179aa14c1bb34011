//! Box Dodge - a dodge-the-boxes arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collision, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Web Audio cues (wasm builds only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the board runs at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Board dimensions in game units (rendered 1:1 as pixels)
    pub const BOARD_WIDTH: f32 = 1200.0;
    pub const BOARD_HEIGHT: f32 = 800.0;

    /// Edge length of every obstacle's square footprint
    pub const OBSTACLE_SIZE: f32 = 20.0;
    /// Per-axis velocity an obstacle launches with
    pub const OBSTACLE_LAUNCH_SPEED: f32 = 2.0;
    /// Magnitude bound for `random_speed` draws
    pub const OBSTACLE_SPEED_RANGE: f32 = 20.0;
    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL: f32 = 5.0;

    /// Player circle radius
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Distance the player moves per held direction per frame
    pub const PLAYER_STEP: f32 = 10.0;

    /// The speed multiplier rises by `SPEED_RAMP_STEP` this often (frames)
    pub const SPEED_RAMP_FRAMES: u64 = 600;
    /// Speed multiplier increment per ramp
    pub const SPEED_RAMP_STEP: f32 = 0.1;
    /// Score ticks up by one this often (frames)
    pub const SCORE_FRAMES: u64 = 120;
}
