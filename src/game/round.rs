//! One round of play: the bird, the three pipes, and the score.
//!
//! `Round::tick` is the whole simulation step. The Bevy side just calls it
//! once per fixed update while the game is playing and reports crashes to
//! the state machine.

use bevy::prelude::*;
use rand::Rng;
use serde::Serialize;

use super::{
    SCREEN_WIDTH,
    bird::Bird,
    collision::{Crash, detect_crash},
    flow::{FlowEvent, InRound, Phase},
    pipe::{PIPE_SPACING, Pipe},
};
use crate::PausableSystems;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Round>();
    app.register_type::<Round>();

    app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ));

    app.add_systems(OnEnter(InRound), start_round);
    app.add_systems(OnEnter(Phase::Paused), pause_round);
    app.add_systems(OnExit(Phase::Paused), resume_round);

    app.add_systems(FixedUpdate, advance_round.in_set(PausableSystems));
}

/// Simulation ticks per second.
pub const TICK_RATE_HZ: f64 = 30.0;

/// Number of pipes alive at any time during a round.
pub const PIPE_COUNT: usize = 3;

/// Resource holding the state of the current round.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Reflect)]
#[reflect(Resource)]
pub struct Round {
    pub bird: Bird,
    /// Always exactly `PIPE_COUNT` pipes, in creation order.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub paused: bool,
    pub alive: bool,
}

impl Default for Round {
    fn default() -> Self {
        Self::new(&mut rand::rng())
    }
}

/// What happened during a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Pipes that scrolled off the left edge and were replaced.
    pub passed: u32,
    pub crash: Option<Crash>,
}

impl Round {
    /// A fresh round: centered bird at rest, pipes lined up past the right edge.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let pipes = (0..PIPE_COUNT)
            .map(|i| Pipe::spawn(SCREEN_WIDTH + i as f32 * PIPE_SPACING, rng))
            .collect();

        Self {
            bird: Bird::new(),
            pipes,
            score: 0,
            paused: false,
            alive: true,
        }
    }

    /// Flaps still register while paused; they take effect on resume.
    pub fn flap(&mut self) {
        if self.alive {
            self.bird.flap();
        }
    }

    /// Advance the round by one fixed tick.
    ///
    /// Does nothing while paused or after the round has ended.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        if self.paused || !self.alive {
            return TickOutcome::default();
        }

        self.bird.fall();
        for pipe in &mut self.pipes {
            pipe.scroll();
        }

        let passed = self.recycle_pipes(rng);
        self.score += passed;

        let crash = detect_crash(self);
        if crash.is_some() {
            self.alive = false;
        }

        TickOutcome { passed, crash }
    }

    /// Replace every pipe that has left the screen with a fresh one at the
    /// right edge. Returns how many were replaced.
    ///
    /// All pipes are classified against the same post-scroll positions
    /// before any are removed or added, so none is skipped or handled twice.
    fn recycle_pipes<R: Rng>(&mut self, rng: &mut R) -> u32 {
        let before = self.pipes.len();
        self.pipes.retain(|pipe| !pipe.is_off_screen());
        let passed = before - self.pipes.len();

        for _ in 0..passed {
            self.pipes.push(Pipe::spawn(SCREEN_WIDTH, rng));
        }

        passed as u32
    }
}

fn start_round(mut round: ResMut<Round>) {
    *round = Round::new(&mut rand::rng());
    let gaps: Vec<u32> = round.pipes.iter().map(|pipe| pipe.gap_top).collect();
    info!("Round started, pipe gaps: {:?}", gaps);
}

fn pause_round(mut round: ResMut<Round>) {
    round.paused = true;
}

fn resume_round(mut round: ResMut<Round>) {
    round.paused = false;
}

fn advance_round(mut round: ResMut<Round>, mut flow_events: MessageWriter<FlowEvent>) {
    if !round.alive {
        return;
    }

    let outcome = round.tick(&mut rand::rng());

    if outcome.passed > 0 {
        debug!("Passed {} pipe(s), score: {}", outcome.passed, round.score);
    }

    if let Some(crash) = outcome.crash {
        info!("Round over ({:?}), final score: {}", crash, round.score);
        flow_events.write(FlowEvent::Crashed);
    }
}

#[cfg(test)]
impl Round {
    /// A live round with hand-placed entities.
    pub(crate) fn with_entities(bird: Bird, pipes: [Pipe; PIPE_COUNT]) -> Self {
        Self {
            bird,
            pipes: pipes.to_vec(),
            score: 0,
            paused: false,
            alive: true,
        }
    }
}
