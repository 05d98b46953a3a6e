//! Sprites and HUD for a round.
//!
//! The simulation works in screen space (top-left origin, y down) while the
//! 2D camera looks at world space (centered origin, y up). Every frame the
//! sprites are moved to match the `Round` resource; nothing is read back.

use bevy::prelude::*;

use super::{
    SCREEN_HEIGHT, SCREEN_WIDTH,
    collision::Aabb,
    flow::InRound,
    round::{PIPE_COUNT, Round},
};
use crate::{
    AppSystems,
    theme::palette::{BIRD, HUD_TEXT, PIPE},
};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(InRound), spawn_playfield);
    app.add_systems(
        Update,
        (sync_bird, sync_pipes, update_score_text)
            .in_set(AppSystems::Update)
            .run_if(in_state(InRound)),
    );
}

const HUD_FONT_SIZE: f32 = 26.0;

/// Marker for the bird sprite.
#[derive(Component)]
struct BirdSprite;

/// Which half of a pipe a sprite draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Top,
    Bottom,
}

/// A pipe segment sprite, bound to the pipe at `index` in `Round::pipes`.
#[derive(Component, Debug)]
struct PipeSprite {
    index: usize,
    segment: Segment,
}

/// Marker for the score text.
#[derive(Component)]
struct ScoreText;

/// Center of a screen-space rectangle in world coordinates.
pub fn to_world(rect: &Aabb) -> Vec2 {
    Vec2::new(
        rect.x + rect.w / 2.0 - SCREEN_WIDTH / 2.0,
        SCREEN_HEIGHT / 2.0 - (rect.y + rect.h / 2.0),
    )
}

fn spawn_playfield(mut commands: Commands) {
    commands.spawn((
        Name::new("Bird"),
        BirdSprite,
        Sprite::from_color(BIRD, Vec2::ONE),
        Transform::from_xyz(0.0, 0.0, 1.0),
        DespawnOnExit(InRound),
    ));

    for index in 0..PIPE_COUNT {
        for segment in [Segment::Top, Segment::Bottom] {
            commands.spawn((
                Name::new(format!("Pipe {index} {segment:?}")),
                PipeSprite { index, segment },
                Sprite::from_color(PIPE, Vec2::ONE),
                Transform::default(),
                DespawnOnExit(InRound),
            ));
        }
    }

    commands.spawn((
        Name::new("Score"),
        ScoreText,
        Text::new("Score: 0"),
        TextFont::from_font_size(HUD_FONT_SIZE),
        TextColor(HUD_TEXT),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        DespawnOnExit(InRound),
    ));
}

fn sync_bird(round: Res<Round>, mut bird: Single<(&mut Transform, &mut Sprite), With<BirdSprite>>) {
    let hitbox = round.bird.hitbox();
    let (transform, sprite) = &mut *bird;
    transform.translation = to_world(&hitbox).extend(transform.translation.z);
    sprite.custom_size = Some(Vec2::new(hitbox.w, hitbox.h));
}

fn sync_pipes(round: Res<Round>, mut sprites: Query<(&PipeSprite, &mut Transform, &mut Sprite)>) {
    for (pipe_sprite, mut transform, mut sprite) in &mut sprites {
        let Some(pipe) = round.pipes.get(pipe_sprite.index) else {
            continue;
        };
        let hitbox = match pipe_sprite.segment {
            Segment::Top => pipe.top_hitbox(),
            Segment::Bottom => pipe.bottom_hitbox(),
        };
        transform.translation = to_world(&hitbox).extend(transform.translation.z);
        sprite.custom_size = Some(Vec2::new(hitbox.w, hitbox.h));
    }
}

fn update_score_text(round: Res<Round>, mut text: Single<&mut Text, With<ScoreText>>) {
    if round.is_changed() {
        text.0 = format!("Score: {}", round.score);
    }
}
