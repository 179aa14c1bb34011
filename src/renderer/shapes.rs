//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, GameState};

/// Generate vertices for a filled circle (triangle fan around the center)
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled axis-aligned quad from its top-left corner
pub fn quad(corner: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let tl = corner;
    let tr = corner + Vec2::new(size.x, 0.0);
    let bl = corner + Vec2::new(0.0, size.y);
    let br = corner + size;

    vec![
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Assemble the scene for one frame
///
/// Player first, obstacles over it - the draw order the game has always
/// used. After the terminal transition the entities stop drawing and the
/// frontend's overlay carries the game-over screen.
pub fn frame_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    if state.phase == GamePhase::GameOver {
        return vertices;
    }

    vertices.extend(circle(
        state.player.pos,
        state.player.radius,
        colors::PLAYER,
        48,
    ));

    for obstacle in &state.obstacles {
        vertices.extend(quad(
            obstacle.pos,
            Vec2::splat(obstacle.size),
            colors::OBSTACLE,
        ));
    }

    vertices
}
