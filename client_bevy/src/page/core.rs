use bevy::prelude::*;
use lovenest_shared::config::{PageConfig, SceneConfig};
use lovenest_shared::counter::StatsBoard;
use lovenest_shared::gallery::Gallery;
use lovenest_shared::toast::Toast;
use lovenest_shared::wall::{Composer, MessageWall};

use crate::backend::{Backend, BackendCommand};
use crate::constants::{color_from_hex, Colors};

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Network,
    Simulate,
    Visuals,
}

pub struct CorePlugin {
    pub api_url: String,
}

#[derive(Resource, Clone, Default)]
pub(crate) struct PageSettings {
    pub(crate) scene: SceneConfig,
    pub(crate) page: PageConfig,
}

impl PageSettings {
    /// Invalid sections are replaced by their defaults.
    pub(crate) fn validated(mut self) -> Self {
        if let Err(err) = self.scene.validate() {
            warn!("invalid scene config ({err}), using defaults");
            self.scene = SceneConfig::default();
        }
        if let Err(err) = self.page.validate() {
            warn!("invalid page config ({err}), using defaults");
            self.page = PageConfig::default();
        }
        self
    }
}

/// Everything the page shows that is not part of the 3D scene.
#[derive(Resource, Default)]
pub(crate) struct PageState {
    pub(crate) stats: StatsBoard,
    pub(crate) gallery: Gallery,
    pub(crate) wall: MessageWall,
    pub(crate) composer: Composer,
    pub(crate) toast: Toast,
}

/// Ask the toast slot to show a message.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShowToast(pub(crate) String);

impl ShowToast {
    pub(crate) fn new(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        info!("backend at {}", self.api_url);
        app.insert_resource(Backend::new(self.api_url.clone()))
            .insert_resource(PageSettings::default().validated())
            .init_resource::<PageState>()
            .add_message::<ShowToast>()
            .insert_resource(ClearColor(color_from_hex(Colors::PAGE_BG)))
            .configure_sets(
                Update,
                (
                    UpdateSet::Input,
                    UpdateSet::Network,
                    UpdateSet::Simulate,
                    UpdateSet::Visuals,
                )
                    .chain(),
            )
            .add_systems(Startup, request_initial_data)
            .add_systems(
                Update,
                (apply_toast_messages, advance_page_timers)
                    .chain()
                    .in_set(UpdateSet::Simulate),
            );
    }
}

fn request_initial_data(backend: Res<Backend>) {
    backend.send(BackendCommand::FetchStats);
    backend.send(BackendCommand::FetchPhotos);
    backend.send(BackendCommand::FetchMessages);
}

pub(crate) fn apply_toast_messages(
    mut reader: MessageReader<ShowToast>,
    mut page: ResMut<PageState>,
    settings: Res<PageSettings>,
) {
    for ShowToast(message) in reader.read() {
        debug!("toast: {message}");
        page.toast.show(message.clone(), settings.page.toast_secs);
    }
}

fn advance_page_timers(time: Res<Time>, mut page: ResMut<PageState>) {
    let dt = time.delta_secs_f64();
    page.toast.advance(dt);
    if !page.stats.is_finished() {
        page.stats.advance(dt * 1000.0);
    }
}
