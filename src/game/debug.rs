//! Debug visualization for the round.
//!
//! Toggle with the 'D' key during a round.
//! Shows:
//! - Bird hitbox, red while it overlaps a pipe
//! - Pipe segment hitboxes
//! - The gap each pipe leaves open
//!
//! Press 'J' while the overlay is on to log the round as JSON.

use bevy::{color::palettes::css, input::common_conditions::input_just_pressed, prelude::*};
use serde::Serialize;

use super::{
    collision::Aabb,
    flow::{InRound, Phase},
    pipe::PIPE_WIDTH,
    playfield::to_world,
    round::Round,
};

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<DebugHitboxesVisible>();

    // Toggle debug with 'D' key
    app.add_systems(
        Update,
        toggle_debug.run_if(in_state(InRound).and(input_just_pressed(KeyCode::KeyD))),
    );

    app.add_systems(
        Update,
        (
            draw_hitboxes,
            dump_round.run_if(input_just_pressed(KeyCode::KeyJ)),
        )
            .run_if(in_state(InRound).and(debug_visible)),
    );
}

/// Resource to track if the hitbox overlay is visible.
#[derive(Resource, Default)]
pub struct DebugHitboxesVisible(pub bool);

fn debug_visible(debug: Res<DebugHitboxesVisible>) -> bool {
    debug.0
}

fn toggle_debug(mut debug: ResMut<DebugHitboxesVisible>) {
    debug.0 = !debug.0;
    let state = if debug.0 { "ON" } else { "OFF" };
    info!("Debug hitboxes: {}", state);
}

fn draw_hitboxes(mut gizmos: Gizmos, round: Res<Round>) {
    let bird = round.bird.hitbox();
    let mut touching = false;

    for pipe in &round.pipes {
        for segment in pipe.hitboxes() {
            if segment.is_empty() {
                continue;
            }
            touching |= bird.intersects(&segment);
            draw_aabb(&mut gizmos, &segment, css::LIMEGREEN.with_alpha(0.8));
        }

        // Opening between the segments
        let gap = Aabb::new(
            pipe.x,
            pipe.gap_top as f32,
            PIPE_WIDTH,
            pipe.gap_bottom() - pipe.gap_top as f32,
        );
        draw_aabb(&mut gizmos, &gap, css::GOLD.with_alpha(0.3));
    }

    let bird_color = if touching {
        css::RED
    } else {
        css::AQUA
    };
    draw_aabb(&mut gizmos, &bird, bird_color.with_alpha(0.9));
}

/// Outline a screen-space rectangle.
fn draw_aabb(gizmos: &mut Gizmos, rect: &Aabb, color: impl Into<Color>) {
    gizmos.rect_2d(
        Isometry2d::from_translation(to_world(rect)),
        Vec2::new(rect.w, rect.h),
        color,
    );
}

#[derive(Serialize)]
struct Snapshot<'a> {
    phase: Phase,
    round: &'a Round,
}

fn dump_round(round: Res<Round>, phase: Res<State<Phase>>) {
    let snapshot = Snapshot {
        phase: *phase.get(),
        round: &*round,
    };

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => info!("Round snapshot:\n{}", json),
        Err(e) => warn!("Failed to serialize round snapshot: {}", e),
    }
}
