//! The main game module for Flappy Bird.
//!
//! This module contains all the gameplay logic including:
//! - The bird and pipe entities
//! - Per-tick physics, pipe recycling and scoring
//! - Collision detection
//! - The game flow state machine
//! - Sprites/HUD that mirror the simulation

mod bird;
mod collision;
mod debug;
pub mod flow;
mod input;
mod pipe;
mod playfield;
pub mod round;

use bevy::prelude::*;

/// Width of the playfield in logical pixels.
pub const SCREEN_WIDTH: f32 = 400.0;

/// Height of the playfield in logical pixels.
pub const SCREEN_HEIGHT: f32 = 600.0;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        flow::plugin,
        round::plugin,
        input::plugin,
        playfield::plugin,
        debug::plugin,
    ));
}
