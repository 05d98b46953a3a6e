//! The front screen, shown at launch.

use bevy::prelude::*;

use crate::{
    game::flow::{FlowEvent, Phase},
    theme::widget::{self, ButtonSpec},
};

const PLAY: ButtonSpec = ButtonSpec {
    label: "Play",
    size: Vec2::new(100.0, 50.0),
    intent: FlowEvent::StartRound,
};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Phase::FrontScreen), spawn_front_screen);
}

fn spawn_front_screen(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Front Screen"),
        GlobalZIndex(2),
        DespawnOnExit(Phase::FrontScreen),
        children![widget::header("Flappy Bird"), widget::button(PLAY)],
    ));
}
