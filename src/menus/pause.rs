//! The pause button and the paused banner.

use bevy::prelude::*;

use crate::{
    game::flow::{FlowEvent, InRound, Phase},
    theme::{
        palette::OVERLAY_BACKGROUND,
        widget::{self, ButtonSpec},
    },
};

const PAUSE: ButtonSpec = ButtonSpec {
    label: "Pause",
    size: Vec2::new(70.0, 30.0),
    intent: FlowEvent::TogglePause,
};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(InRound), spawn_pause_button);
    app.add_systems(OnEnter(Phase::Paused), spawn_paused_banner);
}

/// The button stays up for the whole round and toggles like the P key.
fn spawn_pause_button(mut commands: Commands) {
    commands.spawn((
        Name::new("Pause Button Anchor"),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        GlobalZIndex(3),
        DespawnOnExit(InRound),
        children![widget::button(PAUSE)],
    ));
}

fn spawn_paused_banner(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Paused Banner"),
        // Semi-transparent background over the frozen round
        BackgroundColor(OVERLAY_BACKGROUND),
        GlobalZIndex(2),
        DespawnOnExit(Phase::Paused),
        children![widget::header("Paused")],
    ));
}
