mod backend;
mod constants;
mod page;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use constants::{DEFAULT_API_URL, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use page::{
    CorePlugin, CursorPlugin, EffectsPlugin, HudPlugin, InputPlugin, NetworkPlugin, ScenePlugin,
};

fn main() {
    let api_url = api_url_from_env_or_location();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Our Love Story".to_string(),
                resolution: WindowResolution::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(CorePlugin { api_url })
        .add_plugins(ScenePlugin)
        .add_plugins(InputPlugin)
        .add_plugins(CursorPlugin)
        .add_plugins(EffectsPlugin)
        .add_plugins(NetworkPlugin)
        .add_plugins(HudPlugin)
        .run();
}

#[cfg(not(target_arch = "wasm32"))]
fn api_url_from_env_or_location() -> String {
    std::env::var("LOVENEST_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

#[cfg(target_arch = "wasm32")]
fn api_url_from_env_or_location() -> String {
    let Some(window) = web_sys::window() else {
        return DEFAULT_API_URL.to_string();
    };

    window
        .location()
        .origin()
        .ok()
        .filter(|s| !s.is_empty() && s != "null")
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
