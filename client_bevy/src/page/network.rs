use std::collections::HashMap;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use lovenest_shared::toast::{
    MESSAGE_DEMO, MESSAGE_SENT, UPLOAD_DEMO, UPLOAD_FAILED, UPLOAD_OK, UPLOAD_UNREADABLE,
};

use crate::backend::{Backend, BackendCommand, BackendEvent, LoadedPhoto, PhotoPixels};

use super::{PageSettings, PageState, ShowToast, UpdateSet};

pub struct NetworkPlugin;

/// Decoded gallery photos, keyed by backend URL or local preview key.
#[derive(Resource, Default)]
pub(crate) struct PhotoTextures {
    pub(crate) by_source: HashMap<String, Handle<Image>>,
}

impl Plugin for NetworkPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhotoTextures>()
            .add_systems(Update, backend_event_system.in_set(UpdateSet::Network));
    }
}

pub(crate) fn photo_image(pixels: PhotoPixels) -> Image {
    Image::new(
        Extent3d {
            width: pixels.width,
            height: pixels.height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        pixels.rgba,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

fn store_photo(photo: LoadedPhoto, textures: &mut PhotoTextures, images: &mut Assets<Image>) {
    let handle = images.add(photo_image(photo.pixels));
    textures.by_source.insert(photo.source, handle);
}

pub(crate) fn backend_event_system(
    backend: Res<Backend>,
    settings: Res<PageSettings>,
    mut page: ResMut<PageState>,
    mut textures: ResMut<PhotoTextures>,
    mut images: ResMut<Assets<Image>>,
    mut toasts: MessageWriter<ShowToast>,
) {
    for evt in backend.poll_events() {
        match evt {
            BackendEvent::Stats { stats, demo } => {
                if demo {
                    info!("stats unavailable, showing demo values");
                }
                page.stats.start(&stats, demo, &settings.page);
            }
            BackendEvent::Photos { listed, loaded } => {
                if page.gallery.replace(&listed) {
                    info!("gallery: {} photos, {} decoded", listed.len(), loaded.len());
                    let items = page.gallery.items();
                    textures
                        .by_source
                        .retain(|source, _| items.iter().any(|item| &item.source == source));
                    for photo in loaded {
                        store_photo(photo, &mut textures, &mut images);
                    }
                }
            }
            BackendEvent::PhotosUnavailable | BackendEvent::MessagesUnavailable => {}
            BackendEvent::PhotoUploaded => {
                toasts.write(ShowToast::new(UPLOAD_OK));
                backend.send(BackendCommand::FetchPhotos);
            }
            BackendEvent::UploadRejected => {
                toasts.write(ShowToast::new(UPLOAD_FAILED));
            }
            BackendEvent::UploadPreview(photo) => {
                page.gallery.push_preview(photo.source.clone());
                store_photo(photo, &mut textures, &mut images);
                toasts.write(ShowToast::new(UPLOAD_DEMO));
            }
            BackendEvent::UploadUnreadable => {
                toasts.write(ShowToast::new(UPLOAD_UNREADABLE));
            }
            BackendEvent::Messages(messages) => {
                page.wall.replace(&messages);
            }
            BackendEvent::MessagePosted => {
                page.composer.clear();
                toasts.write(ShowToast::new(MESSAGE_SENT));
                backend.send(BackendCommand::FetchMessages);
            }
            BackendEvent::MessageRejected { status } => {
                warn!("message refused by backend ({status})");
            }
            BackendEvent::MessageDemo { text } => {
                page.wall.prepend_demo(text);
                page.composer.clear();
                toasts.write(ShowToast::new(MESSAGE_DEMO));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{Receiver, Sender};

    use lovenest_shared::api::{MessageWire, PhotoWire, StatsWire, DEMO_STATS};
    use lovenest_shared::counter::Stat;
    use lovenest_shared::wall::DEMO_TIME_LABEL;

    use crate::page::core::apply_toast_messages;

    fn make_test_app_with_events() -> (App, Sender<BackendEvent>, Receiver<BackendCommand>) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<PageState>();
        app.init_resource::<PageSettings>();
        app.init_resource::<PhotoTextures>();
        app.init_resource::<Assets<Image>>();
        app.add_message::<ShowToast>();

        let (backend, event_tx, cmd_rx) = Backend::test_stub();
        app.insert_resource(backend);

        app.add_systems(Update, (backend_event_system, apply_toast_messages).chain());
        (app, event_tx, cmd_rx)
    }

    fn pixels() -> PhotoPixels {
        PhotoPixels {
            width: 2,
            height: 1,
            rgba: vec![255; 8],
        }
    }

    #[test]
    fn posted_message_clears_input_and_refetches() {
        let (mut app, event_tx, cmd_rx) = make_test_app_with_events();
        app.world_mut()
            .resource_mut::<PageState>()
            .composer
            .push_str("hello");

        event_tx.send(BackendEvent::MessagePosted).unwrap();
        app.update();

        assert_eq!(cmd_rx.try_recv().unwrap(), BackendCommand::FetchMessages);
        let page = app.world().resource::<PageState>();
        assert_eq!(page.composer.text(), "");
        assert_eq!(page.toast.message(), MESSAGE_SENT);
    }

    #[test]
    fn refused_message_keeps_input() {
        let (mut app, event_tx, cmd_rx) = make_test_app_with_events();
        app.world_mut()
            .resource_mut::<PageState>()
            .composer
            .push_str("hello");

        event_tx
            .send(BackendEvent::MessageRejected { status: 400 })
            .unwrap();
        app.update();

        assert!(cmd_rx.try_recv().is_err());
        let page = app.world().resource::<PageState>();
        assert_eq!(page.composer.text(), "hello");
        assert!(!page.toast.is_visible());
    }

    #[test]
    fn demo_message_is_prepended() {
        let (mut app, event_tx, _cmd_rx) = make_test_app_with_events();
        event_tx
            .send(BackendEvent::Messages(vec![MessageWire {
                id: Some(1),
                text: "older".to_string(),
                timestamp: "2024-02-14T18:30:00".to_string(),
                kind: None,
            }]))
            .unwrap();
        event_tx
            .send(BackendEvent::MessageDemo {
                text: "offline love".to_string(),
            })
            .unwrap();
        app.update();

        let page = app.world().resource::<PageState>();
        let cards = page.wall.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].text, "offline love");
        assert_eq!(cards[0].time, DEMO_TIME_LABEL);
        assert_eq!(cards[1].text, "older");
        assert_eq!(page.toast.message(), MESSAGE_DEMO);
    }

    #[test]
    fn demo_stats_start_counters() {
        let (mut app, event_tx, _cmd_rx) = make_test_app_with_events();
        event_tx
            .send(BackendEvent::Stats {
                stats: DEMO_STATS,
                demo: true,
            })
            .unwrap();
        app.update();

        let mut page = app.world_mut().resource_mut::<PageState>();
        assert!(page.stats.demo);
        page.stats.advance(5000.0);
        assert_eq!(page.stats.displayed(Stat::DaysTogether), 365);
        assert_eq!(page.stats.displayed(Stat::LoveLevel), 100);
    }

    #[test]
    fn stats_from_backend_are_not_demo() {
        let (mut app, event_tx, _cmd_rx) = make_test_app_with_events();
        let stats = StatsWire {
            days_together: 10,
            messages_sent: 1,
            photos_shared: 0,
            love_level: 50,
        };
        event_tx
            .send(BackendEvent::Stats { stats, demo: false })
            .unwrap();
        app.update();

        let mut page = app.world_mut().resource_mut::<PageState>();
        assert!(!page.stats.demo);
        page.stats.advance(5000.0);
        assert_eq!(page.stats.displayed(Stat::MessagesSent), 1);
        assert_eq!(page.stats.displayed(Stat::PhotosShared), 0);
    }

    #[test]
    fn upload_preview_replaces_placeholder() {
        let (mut app, event_tx, _cmd_rx) = make_test_app_with_events();
        event_tx
            .send(BackendEvent::UploadPreview(LoadedPhoto {
                source: "preview:1:us.png".to_string(),
                pixels: pixels(),
            }))
            .unwrap();
        app.update();

        let page = app.world().resource::<PageState>();
        assert!(!page.gallery.shows_placeholder());
        assert_eq!(page.gallery.items().len(), 1);
        assert_eq!(page.toast.message(), UPLOAD_DEMO);
        let textures = app.world().resource::<PhotoTextures>();
        assert!(textures.by_source.contains_key("preview:1:us.png"));
    }

    #[test]
    fn upload_success_refetches_photos() {
        let (mut app, event_tx, cmd_rx) = make_test_app_with_events();
        event_tx.send(BackendEvent::PhotoUploaded).unwrap();
        app.update();

        assert_eq!(cmd_rx.try_recv().unwrap(), BackendCommand::FetchPhotos);
        assert_eq!(
            app.world().resource::<PageState>().toast.message(),
            UPLOAD_OK
        );
    }

    #[test]
    fn fetched_list_drops_stale_preview_textures() {
        let (mut app, event_tx, _cmd_rx) = make_test_app_with_events();
        event_tx
            .send(BackendEvent::UploadPreview(LoadedPhoto {
                source: "preview:1:us.png".to_string(),
                pixels: pixels(),
            }))
            .unwrap();
        app.update();

        event_tx
            .send(BackendEvent::Photos {
                listed: vec![PhotoWire {
                    url: "/static/uploads/us.png".to_string(),
                    filename: None,
                }],
                loaded: vec![LoadedPhoto {
                    source: "/static/uploads/us.png".to_string(),
                    pixels: pixels(),
                }],
            })
            .unwrap();
        app.update();

        let textures = app.world().resource::<PhotoTextures>();
        assert_eq!(textures.by_source.len(), 1);
        assert!(textures.by_source.contains_key("/static/uploads/us.png"));
        assert!(!textures.by_source.contains_key("preview:1:us.png"));
    }

    #[test]
    fn empty_photo_list_keeps_placeholder() {
        let (mut app, event_tx, _cmd_rx) = make_test_app_with_events();
        event_tx
            .send(BackendEvent::Photos {
                listed: Vec::new(),
                loaded: Vec::new(),
            })
            .unwrap();
        app.update();
        assert!(app.world().resource::<PageState>().gallery.shows_placeholder());

        event_tx
            .send(BackendEvent::Photos {
                listed: vec![PhotoWire {
                    url: "/static/uploads/a.png".to_string(),
                    filename: None,
                }],
                loaded: vec![LoadedPhoto {
                    source: "/static/uploads/a.png".to_string(),
                    pixels: pixels(),
                }],
            })
            .unwrap();
        app.update();

        let page = app.world().resource::<PageState>();
        assert!(!page.gallery.shows_placeholder());
        assert_eq!(page.gallery.items()[0].alt, "Memory 1");
        let textures = app.world().resource::<PhotoTextures>();
        assert_eq!(textures.by_source.len(), 1);
    }
}
