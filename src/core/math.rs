// Math utilities and helper functions

use glam::Vec2;
use std::f32::consts::TAU;

/// Wrap an angle into [0, 2π)
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(TAU)
}

/// Wrap a position so leaving one edge re-enters at the opposite edge
pub fn wrap_position(position: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(position.x.rem_euclid(width), position.y.rem_euclid(height))
}
