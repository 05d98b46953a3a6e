use bevy::prelude::*;

/// Sky behind the playfield
pub const SKY: Color = Color::srgb(0.44, 0.77, 0.81);

/// Bird body
pub const BIRD: Color = Color::srgb(0.98, 0.80, 0.18);

/// Pipe segments
pub const PIPE: Color = Color::srgb(0.0, 1.0, 0.0);

/// White text over the sky
pub const HUD_TEXT: Color = Color::WHITE;

/// White text for headers
pub const HEADER_TEXT: Color = Color::WHITE;

/// White text for labels
pub const LABEL_TEXT: Color = Color::WHITE;

/// White text for buttons
pub const BUTTON_TEXT: Color = Color::WHITE;
/// #00ff00
pub const BUTTON_BACKGROUND: Color = Color::srgb(0.0, 1.0, 0.0);
/// #0000ff
pub const BUTTON_HOVERED_BACKGROUND: Color = Color::srgb(0.0, 0.0, 1.0);
/// #000000
pub const BUTTON_PRESSED_BACKGROUND: Color = Color::BLACK;

/// Dimmed backdrop behind overlays
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.35);
