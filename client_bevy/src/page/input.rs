use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::FileDragAndDrop;
use lovenest_shared::konami::KonamiDetector;
use lovenest_shared::scene::PointerState;
use lovenest_shared::toast::{EMPTY_MESSAGE, SECRET_FOUND, UPLOADING, UPLOAD_HINT, UPLOAD_UNREADABLE};
use lovenest_shared::wall::SubmitAction;

use crate::backend::{Backend, BackendCommand};

use super::{PageState, ShowToast, UpdateSet};

pub struct InputPlugin;

#[derive(Resource, Default)]
pub(crate) struct PointerInput {
    /// Normalized to [-1, 1], y up. Drives the scene camera.
    pub(crate) pointer: PointerState,
    /// Logical window pixels, origin top-left.
    pub(crate) cursor: Vec2,
    pub(crate) seen: bool,
}

#[derive(Resource, Default)]
pub(crate) struct KonamiState {
    detector: KonamiDetector,
}

#[derive(Message, Debug, Clone, Copy)]
pub(crate) struct SecretUnlocked;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerInput>()
            .init_resource::<KonamiState>()
            .add_message::<SecretUnlocked>()
            .add_systems(
                Update,
                (track_pointer, handle_keyboard, handle_dropped_files).in_set(UpdateSet::Input),
            );
    }
}

fn track_pointer(
    mut moved: MessageReader<CursorMoved>,
    q_window: Query<&Window>,
    mut input: ResMut<PointerInput>,
) {
    for evt in moved.read() {
        let Ok(window) = q_window.get(evt.window) else {
            continue;
        };
        input.pointer = PointerState::from_screen(
            evt.position.x as f64,
            evt.position.y as f64,
            window.width() as f64,
            window.height() as f64,
        );
        input.cursor = evt.position;
        input.seen = true;
    }
}

/// Name of a key as the page sees it, e.g. `ArrowUp` or `b`.
pub(crate) fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(c) => Some(c.as_str()),
        Key::Space => Some(" "),
        Key::ArrowUp => Some("ArrowUp"),
        Key::ArrowDown => Some("ArrowDown"),
        Key::ArrowLeft => Some("ArrowLeft"),
        Key::ArrowRight => Some("ArrowRight"),
        Key::Enter => Some("Enter"),
        Key::Escape => Some("Escape"),
        Key::Backspace => Some("Backspace"),
        _ => None,
    }
}

/// Every key gets a name for the secret sequence window, so modifiers and
/// other unnamed keys still break a partial sequence.
fn sequence_name(key: &Key) -> String {
    key_name(key).map_or_else(|| format!("{key:?}"), str::to_string)
}

fn handle_keyboard(
    mut keys: MessageReader<KeyboardInput>,
    mut page: ResMut<PageState>,
    mut konami: ResMut<KonamiState>,
    backend: Res<Backend>,
    mut toasts: MessageWriter<ShowToast>,
    mut secrets: MessageWriter<SecretUnlocked>,
) {
    for evt in keys.read() {
        if evt.state != ButtonState::Pressed {
            continue;
        }

        // The sequence is watched even while typing.
        if konami.detector.push(&sequence_name(&evt.logical_key)) {
            info!("secret sequence entered");
            toasts.write(ShowToast::new(SECRET_FOUND));
            secrets.write(SecretUnlocked);
        }

        if page.composer.focused {
            edit_composer(&evt.logical_key, &mut page, &backend, &mut toasts);
        } else {
            apply_shortcut(&evt.logical_key, &mut page, &mut toasts);
        }
    }
}

fn edit_composer(
    key: &Key,
    page: &mut PageState,
    backend: &Backend,
    toasts: &mut MessageWriter<ShowToast>,
) {
    match key {
        Key::Enter => submit_composer(page, backend, toasts),
        Key::Escape => page.composer.focused = false,
        Key::Backspace => page.composer.backspace(),
        Key::Space => page.composer.push_str(" "),
        Key::Character(c) => page.composer.push_str(c.as_str()),
        _ => {}
    }
}

fn apply_shortcut(key: &Key, page: &mut PageState, toasts: &mut MessageWriter<ShowToast>) {
    let Key::Character(c) = key else {
        return;
    };
    if c.eq_ignore_ascii_case("u") {
        toasts.write(ShowToast::new(UPLOAD_HINT));
    } else if c.eq_ignore_ascii_case("m") {
        page.composer.focused = true;
    }
}

/// Send the composer text, or complain if there is nothing to send.
/// The input is cleared once the backend (or its fallback) has answered.
pub(crate) fn submit_composer(
    page: &PageState,
    backend: &Backend,
    toasts: &mut MessageWriter<ShowToast>,
) {
    match page.composer.submit() {
        SubmitAction::Rejected => {
            toasts.write(ShowToast::new(EMPTY_MESSAGE));
        }
        SubmitAction::Send(message) => backend.send(BackendCommand::PostMessage(message)),
    }
}

fn handle_dropped_files(
    mut drops: MessageReader<FileDragAndDrop>,
    backend: Res<Backend>,
    mut toasts: MessageWriter<ShowToast>,
) {
    for evt in drops.read() {
        let FileDragAndDrop::DroppedFile { path_buf, .. } = evt else {
            continue;
        };
        let file_name = path_buf
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());

        match std::fs::read(path_buf) {
            Ok(bytes) => {
                toasts.write(ShowToast::new(UPLOADING));
                backend.send(BackendCommand::UploadPhoto { file_name, bytes });
            }
            Err(err) => {
                warn!("cannot read dropped file {}: {err}", path_buf.display());
                toasts.write(ShowToast::new(UPLOAD_UNREADABLE));
            }
        }
    }
}
