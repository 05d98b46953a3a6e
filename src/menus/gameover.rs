//! The game over menu.

use bevy::prelude::*;

use crate::{
    game::{
        flow::{FlowEvent, Phase},
        round::Round,
    },
    theme::widget::{self, ButtonSpec},
};

const PLAY_AGAIN: ButtonSpec = ButtonSpec {
    label: "Play Again",
    size: Vec2::new(130.0, 50.0),
    intent: FlowEvent::PlayAgain,
};

const QUIT: ButtonSpec = ButtonSpec {
    label: "Quit",
    size: Vec2::new(130.0, 50.0),
    intent: FlowEvent::QuitClicked,
};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Phase::GameOver), spawn_gameover_menu);
}

fn spawn_gameover_menu(mut commands: Commands, round: Res<Round>) {
    commands.spawn((
        widget::ui_root("Game Over Menu"),
        GlobalZIndex(2),
        DespawnOnExit(Phase::GameOver),
        children![
            widget::label(format!("Game Over! Your Score: {}", round.score)),
            widget::button(PLAY_AGAIN),
            widget::button(QUIT),
        ],
    ));
}
