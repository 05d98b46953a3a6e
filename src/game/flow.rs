//! Game flow: front screen, playing, paused, game over, terminated.
//!
//! Everything that can change the phase is a [`FlowEvent`]. Input, buttons
//! and the simulation only write events; [`Phase::on`] decides what they
//! mean, so an event that makes no sense in the current phase is ignored.

use bevy::prelude::*;
use serde::Serialize;

use crate::AppSystems;

pub(super) fn plugin(app: &mut App) {
    app.init_state::<Phase>();
    app.add_computed_state::<InRound>();
    app.add_message::<FlowEvent>();

    app.add_systems(Update, apply_flow_events.in_set(AppSystems::Update));
}

/// The top-level phase of the game.
#[derive(States, Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize)]
pub enum Phase {
    #[default]
    FrontScreen,
    Playing,
    Paused,
    GameOver,
    Terminated,
}

/// Something that may move the game to another phase.
#[derive(Message, Copy, Clone, Eq, PartialEq, Debug)]
pub enum FlowEvent {
    /// Play button on the front screen.
    StartRound,
    TogglePause,
    /// The simulation ended the round.
    Crashed,
    /// Play Again button on the game over screen.
    PlayAgain,
    /// Quit button on the game over screen.
    QuitClicked,
    /// Window closed. Accepted in every phase.
    Quit,
}

impl Phase {
    /// The phase after `event`. Unhandled events leave the phase unchanged.
    pub fn on(self, event: FlowEvent) -> Phase {
        use FlowEvent as E;
        use Phase as P;

        match (self, event) {
            (_, E::Quit) => P::Terminated,
            (P::FrontScreen, E::StartRound) => P::Playing,
            (P::Playing, E::TogglePause) => P::Paused,
            (P::Paused, E::TogglePause) => P::Playing,
            (P::Playing, E::Crashed) => P::GameOver,
            (P::GameOver, E::PlayAgain) => P::Playing,
            (P::GameOver, E::QuitClicked) => P::Terminated,
            (phase, _) => phase,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Terminated
    }
}

/// Active while a round exists, paused or not.
///
/// Entering it always means a fresh round: the only ways in are from the
/// front screen and from game over.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct InRound;

impl ComputedStates for InRound {
    type SourceStates = Phase;

    fn compute(phase: Phase) -> Option<Self> {
        matches!(phase, Phase::Playing | Phase::Paused).then_some(InRound)
    }
}

fn apply_flow_events(
    mut flow_events: MessageReader<FlowEvent>,
    phase: Res<State<Phase>>,
    mut next_phase: ResMut<NextState<Phase>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    let current = *phase.get();
    let next = flow_events
        .read()
        .fold(current, |phase, &event| phase.on(event));

    if next == current {
        return;
    }

    info!("Phase {:?} -> {:?}", current, next);
    next_phase.set(next);

    if next.is_terminal() {
        app_exit.write(AppExit::Success);
    }
}
