//! The bird - the only thing the player controls.
//!
//! The bird never moves horizontally. Each tick gravity is added to its
//! vertical velocity and the velocity is added to its position (explicit
//! Euler at a fixed tick, no sub-stepping). A flap overrides the velocity
//! instead of adding to it.
//!
//! Positions are in screen space: origin at the top-left corner, y grows
//! downward, and `(x, y)` is the top-left corner of the sprite.

use bevy::reflect::Reflect;
use serde::Serialize;

use super::{SCREEN_HEIGHT, collision::Aabb};

/// Velocity added every tick, in pixels per tick.
pub const GRAVITY: f32 = 0.5;

/// Velocity assigned by a flap (negative is upward).
pub const FLAP_POWER: f32 = -8.0;

/// Fixed horizontal position of the bird.
pub const BIRD_X: f32 = 30.0;

/// Bird sprite width and height.
pub const BIRD_SIZE: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Reflect)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    /// Pixels per tick, positive is downward.
    pub velocity: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

impl Bird {
    /// A bird at rest, vertically centered.
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: (SCREEN_HEIGHT / 2.0).floor(),
            velocity: 0.0,
        }
    }

    pub fn flap(&mut self) {
        self.velocity = FLAP_POWER;
    }

    /// Advance one tick under gravity.
    pub fn fall(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::pixel(self.x, self.y, BIRD_SIZE, BIRD_SIZE)
    }

    /// True once the bird has left the top of the screen or dropped past the bottom.
    pub fn is_out_of_bounds(&self) -> bool {
        self.y > SCREEN_HEIGHT || self.y < 0.0
    }
}
