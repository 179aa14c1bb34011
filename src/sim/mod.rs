//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded, session-owned RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use spawn::{random_position, random_speed, spawn_obstacle};
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, tick};
