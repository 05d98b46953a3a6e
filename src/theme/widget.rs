//! Helper functions for creating common widgets.

use std::borrow::Cow;

use bevy::{ecs::spawn::SpawnWith, prelude::*};

use crate::{
    game::flow::FlowEvent,
    theme::{interaction::InteractionPalette, palette::*},
};

const HEADER_FONT_SIZE: f32 = 40.0;
const LABEL_FONT_SIZE: f32 = 26.0;
const BUTTON_FONT_SIZE: f32 = 24.0;

/// A clickable button: its text, its size, and the flow event it sends.
#[derive(Debug, Clone, Copy)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub size: Vec2,
    pub intent: FlowEvent,
}

/// The flow event a button sends when clicked.
#[derive(Component, Debug, Clone, Copy)]
pub struct ButtonIntent(pub FlowEvent);

/// A root UI node that fills the window and centers its content.
pub fn ui_root(name: impl Into<Cow<'static, str>>) -> impl Bundle {
    (
        Name::new(name),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(20.0),
            ..default()
        },
        // Don't block picking events for other UI roots.
        Pickable::IGNORE,
    )
}

/// A simple header label. Bigger than [`label`].
pub fn header(text: impl Into<String>) -> impl Bundle {
    (
        Name::new("Header"),
        Text(text.into()),
        TextFont::from_font_size(HEADER_FONT_SIZE),
        TextColor(HEADER_TEXT),
    )
}

/// A simple text label.
pub fn label(text: impl Into<String>) -> impl Bundle {
    (
        Name::new("Label"),
        Text(text.into()),
        TextFont::from_font_size(LABEL_FONT_SIZE),
        TextColor(LABEL_TEXT),
    )
}

/// A flat button that writes its [`ButtonSpec::intent`] when clicked.
pub fn button(spec: ButtonSpec) -> impl Bundle {
    (
        Name::new(format!("{} Button", spec.label)),
        Node::default(),
        Children::spawn(SpawnWith(move |parent: &mut ChildSpawner| {
            parent
                .spawn((
                    Name::new("Button Inner"),
                    Button,
                    ButtonIntent(spec.intent),
                    BackgroundColor(BUTTON_BACKGROUND),
                    InteractionPalette {
                        none: BUTTON_BACKGROUND,
                        hovered: BUTTON_HOVERED_BACKGROUND,
                        pressed: BUTTON_PRESSED_BACKGROUND,
                    },
                    Node {
                        width: Val::Px(spec.size.x),
                        height: Val::Px(spec.size.y),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    children![(
                        Name::new("Button Text"),
                        Text(spec.label.to_string()),
                        TextFont::from_font_size(BUTTON_FONT_SIZE),
                        TextColor(BUTTON_TEXT),
                        // Don't bubble picking events from the text up to the button.
                        Pickable::IGNORE,
                    )],
                ))
                .observe(send_intent);
        })),
    )
}

fn send_intent(
    click: On<Pointer<Click>>,
    intents: Query<&ButtonIntent>,
    mut flow_events: MessageWriter<FlowEvent>,
) {
    if let Ok(intent) = intents.get(click.entity) {
        flow_events.write(intent.0);
    }
}
