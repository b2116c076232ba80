use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use bevy::log::{debug, warn};
use bevy::prelude::Resource;
use lovenest_shared::api::{
    MessageWire, NewMessage, PhotoWire, StatsWire, DEMO_STATS, MESSAGES_PATH, PHOTOS_PATH,
    STATS_PATH, UPLOAD_PHOTO_PATH,
};

use super::fallback::with_fallback;
use super::photos::{decode_photo, preview_key, LoadedPhoto};
use super::requests::ApiClient;

/// Requests the page makes. Each one resolves to exactly one [`BackendEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    FetchStats,
    FetchPhotos,
    FetchMessages,
    UploadPhoto { file_name: String, bytes: Vec<u8> },
    PostMessage(NewMessage),
}

#[derive(Debug, Clone)]
pub enum BackendEvent {
    Stats {
        stats: StatsWire,
        demo: bool,
    },
    Photos {
        listed: Vec<PhotoWire>,
        loaded: Vec<LoadedPhoto>,
    },
    PhotosUnavailable,
    PhotoUploaded,
    UploadRejected,
    /// Backend unreachable: show the selected file locally instead.
    UploadPreview(LoadedPhoto),
    UploadUnreadable,
    Messages(Vec<MessageWire>),
    MessagesUnavailable,
    MessagePosted,
    MessageRejected {
        status: u16,
    },
    /// Backend unreachable: render the message locally instead.
    MessageDemo {
        text: String,
    },
}

#[cfg(not(target_arch = "wasm32"))]
type NativeCmdSender = tokio::sync::mpsc::UnboundedSender<BackendCommand>;

enum CommandSink {
    #[cfg(not(target_arch = "wasm32"))]
    Native(NativeCmdSender),
    #[cfg(target_arch = "wasm32")]
    Browser {
        base_url: String,
        event_tx: Sender<BackendEvent>,
    },
    #[cfg(test)]
    Recorder(Sender<BackendCommand>),
}

/// Fire-and-forget bridge to the backend. Results are polled once per frame.
#[derive(Resource)]
pub struct Backend {
    event_rx: Mutex<Receiver<BackendEvent>>,
    sink: CommandSink,
}

impl Backend {
    pub fn new(base_url: String) -> Self {
        let (event_tx, event_rx) = mpsc::channel::<BackendEvent>();

        #[cfg(not(target_arch = "wasm32"))]
        let sink = CommandSink::Native(spawn_native_backend_thread(
            ApiClient::new(&base_url),
            event_tx,
        ));

        #[cfg(target_arch = "wasm32")]
        let sink = CommandSink::Browser { base_url, event_tx };

        Self {
            event_rx: Mutex::new(event_rx),
            sink,
        }
    }

    pub fn send(&self, cmd: BackendCommand) {
        debug!("backend command: {}", command_name(&cmd));
        match &self.sink {
            #[cfg(not(target_arch = "wasm32"))]
            CommandSink::Native(tx) => {
                if tx.send(cmd).is_err() {
                    warn!("backend thread is gone, dropping command");
                }
            }
            #[cfg(target_arch = "wasm32")]
            CommandSink::Browser { base_url, event_tx } => {
                let api = ApiClient::new(base_url);
                let event_tx = event_tx.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let event = execute(&api, cmd).await;
                    let _ = event_tx.send(event);
                });
            }
            #[cfg(test)]
            CommandSink::Recorder(tx) => {
                let _ = tx.send(cmd);
            }
        }
    }

    pub fn poll_events(&self) -> Vec<BackendEvent> {
        let mut out = Vec::new();
        if let Ok(rx) = self.event_rx.lock() {
            while let Ok(evt) = rx.try_recv() {
                out.push(evt);
            }
        }
        out
    }

    /// Backend whose commands are recorded and whose events are injected by the test.
    #[cfg(test)]
    pub fn test_stub() -> (Self, Sender<BackendEvent>, Receiver<BackendCommand>) {
        let (event_tx, event_rx) = mpsc::channel();
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let backend = Self {
            event_rx: Mutex::new(event_rx),
            sink: CommandSink::Recorder(cmd_tx),
        };
        (backend, event_tx, cmd_rx)
    }
}

fn command_name(cmd: &BackendCommand) -> &'static str {
    match cmd {
        BackendCommand::FetchStats => "fetch stats",
        BackendCommand::FetchPhotos => "fetch photos",
        BackendCommand::FetchMessages => "fetch messages",
        BackendCommand::UploadPhoto { .. } => "upload photo",
        BackendCommand::PostMessage(_) => "post message",
    }
}

/// Run one command to completion and turn the outcome (or its fallback) into an event.
pub(crate) async fn execute(api: &ApiClient, cmd: BackendCommand) -> BackendEvent {
    match cmd {
        BackendCommand::FetchStats => {
            with_fallback(
                STATS_PATH,
                api.stats(),
                |stats| BackendEvent::Stats { stats, demo: false },
                |_| BackendEvent::Stats {
                    stats: DEMO_STATS,
                    demo: true,
                },
            )
            .await
        }
        BackendCommand::FetchPhotos => {
            let listed = with_fallback(PHOTOS_PATH, api.photos(), Some, |_| None).await;
            match listed {
                Some(listed) => {
                    let loaded = download_photos(api, &listed).await;
                    BackendEvent::Photos { listed, loaded }
                }
                None => BackendEvent::PhotosUnavailable,
            }
        }
        BackendCommand::FetchMessages => {
            with_fallback(
                MESSAGES_PATH,
                api.messages(),
                BackendEvent::Messages,
                |_| BackendEvent::MessagesUnavailable,
            )
            .await
        }
        BackendCommand::UploadPhoto { file_name, bytes } => {
            with_fallback(
                UPLOAD_PHOTO_PATH,
                api.upload_photo(&file_name, bytes.clone()),
                |resp| {
                    if resp.success {
                        BackendEvent::PhotoUploaded
                    } else {
                        BackendEvent::UploadRejected
                    }
                },
                |_| match decode_photo(&bytes) {
                    Ok(pixels) => BackendEvent::UploadPreview(LoadedPhoto {
                        source: preview_key(&file_name),
                        pixels,
                    }),
                    Err(err) => {
                        warn!("cannot preview {file_name}: {err}");
                        BackendEvent::UploadUnreadable
                    }
                },
            )
            .await
        }
        BackendCommand::PostMessage(message) => {
            let text = message.text.clone();
            with_fallback(
                MESSAGES_PATH,
                api.post_message(&message),
                |status| {
                    if status.is_success() {
                        BackendEvent::MessagePosted
                    } else {
                        BackendEvent::MessageRejected {
                            status: status.as_u16(),
                        }
                    }
                },
                |_| BackendEvent::MessageDemo { text },
            )
            .await
        }
    }
}

/// Fetch and decode every listed photo. Broken ones are skipped.
async fn download_photos(api: &ApiClient, listed: &[PhotoWire]) -> Vec<LoadedPhoto> {
    let mut loaded = Vec::with_capacity(listed.len());
    for photo in listed {
        let bytes = match api.download(&photo.url).await {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("skipping photo {}: {err}", photo.url);
                continue;
            }
        };
        match decode_photo(&bytes) {
            Ok(pixels) => loaded.push(LoadedPhoto {
                source: photo.url.clone(),
                pixels,
            }),
            Err(err) => debug!("skipping photo {}: {err}", photo.url),
        }
    }
    loaded
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_native_backend_thread(api: ApiClient, event_tx: Sender<BackendEvent>) -> NativeCmdSender {
    let (cmd_tx, mut cmd_rx) = tokio::sync::mpsc::unbounded_channel::<BackendCommand>();

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_io()
            .enable_time()
            .build()
        {
            Ok(rt) => rt,
            Err(err) => {
                bevy::log::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        rt.block_on(async move {
            while let Some(cmd) = cmd_rx.recv().await {
                let api = api.clone();
                let event_tx = event_tx.clone();
                tokio::spawn(async move {
                    let event = execute(&api, cmd).await;
                    let _ = event_tx.send(event);
                });
            }
        });
    });

    cmd_tx
}
