mod spawn;
mod systems;
mod types;

use bevy::prelude::*;

use types::HudUiState;

use super::UpdateSet;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HudUiState>()
            .add_systems(Startup, spawn::spawn_hud)
            .add_systems(
                Update,
                systems::handle_button_interactions.in_set(UpdateSet::Input),
            )
            .add_systems(
                Update,
                (
                    systems::update_stats_ui,
                    systems::update_gallery_ui,
                    systems::update_wall_ui,
                    systems::update_composer_ui,
                    systems::update_toast_ui,
                    systems::update_modal_ui,
                    systems::hide_loading_screen,
                )
                    .chain()
                    .in_set(UpdateSet::Visuals),
            );
    }
}
