//! The game's menus and overlays, one per phase that needs one.
//!
//! Menu buttons never change the phase themselves; they send a
//! `FlowEvent` and the game flow decides.

mod front;
mod gameover;
mod pause;

use bevy::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((front::plugin, gameover::plugin, pause::plugin));
}
