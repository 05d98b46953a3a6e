//! Keyboard and window input.
//!
//! Space flaps, P toggles pause, closing the window quits.

use bevy::{input::common_conditions::input_just_pressed, prelude::*, window::WindowCloseRequested};

use super::{
    flow::{FlowEvent, InRound},
    round::Round,
};
use crate::AppSystems;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            flap.run_if(in_state(InRound).and(input_just_pressed(KeyCode::Space))),
            toggle_pause.run_if(input_just_pressed(KeyCode::KeyP)),
            quit_on_close_request,
        )
            .in_set(AppSystems::RecordInput),
    );
}

fn flap(mut round: ResMut<Round>) {
    round.flap();
}

fn toggle_pause(mut flow_events: MessageWriter<FlowEvent>) {
    flow_events.write(FlowEvent::TogglePause);
}

fn quit_on_close_request(
    mut close_requests: MessageReader<WindowCloseRequested>,
    mut flow_events: MessageWriter<FlowEvent>,
) {
    if close_requests.read().count() > 0 {
        info!("Window close requested");
        flow_events.write(FlowEvent::Quit);
    }
}
