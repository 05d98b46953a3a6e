// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

mod game;
mod menus;
mod theme;

use bevy::{prelude::*, window::WindowResolution};

use crate::game::{SCREEN_HEIGHT, SCREEN_WIDTH, flow::Phase};

fn main() -> AppExit {
    App::new().add_plugins(AppPlugin).run()
}

pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        // Add Bevy plugins.
        app.add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Window {
                    title: "Flappy Bird".to_string(),
                    resolution: WindowResolution::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
                        .with_scale_factor_override(1.0),
                    resizable: false,
                    fit_canvas_to_parent: true,
                    ..default()
                }
                .into(),
                // Closing the window goes through the game flow instead.
                close_when_requested: false,
                ..default()
            }),
        );

        // Add other plugins.
        app.add_plugins((game::plugin, menus::plugin, theme::plugin));

        // Order new `AppSystems` variants by adding them here:
        app.configure_sets(Update, (AppSystems::RecordInput, AppSystems::Update).chain());

        // Simulation only advances while actually playing.
        app.configure_sets(FixedUpdate, PausableSystems.run_if(in_state(Phase::Playing)));

        app.insert_resource(ClearColor(theme::palette::SKY));
        app.add_systems(Startup, spawn_camera);
    }
}

/// High-level groupings of systems for the app in the `Update` schedule.
/// When adding a new variant, make sure to order it in the `configure_sets`
/// call above.
#[derive(SystemSet, Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
enum AppSystems {
    /// Record player input.
    RecordInput,
    /// Do everything else (consider splitting this into further variants).
    Update,
}

/// A system set for systems that shouldn't run while the game is paused
/// or outside of a round.
#[derive(SystemSet, Copy, Clone, Eq, PartialEq, Hash, Debug)]
struct PausableSystems;

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Camera"), Camera2d));
}
