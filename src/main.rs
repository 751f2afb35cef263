mod areas;
mod camera;
mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod heelies;
mod movement;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Heelies".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        movement::MovementPlugin,
        areas::AreasPlugin,
        camera::CameraPlugin,
        heelies::HeeliesPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
