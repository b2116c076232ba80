use bevy::prelude::*;
use lovenest_shared::counter::Stat;

use crate::constants::{color_from_hex, Colors};

pub(super) const PAGE_PADDING: f32 = 24.0;
pub(super) const STAT_CARD_WIDTH: f32 = 170.0;
pub(super) const TILE_SIZE: f32 = 150.0;
pub(super) const WALL_WIDTH: f32 = 400.0;
pub(super) const MAX_WALL_CARDS: usize = 12;

pub(super) const TITLE: &str = "Our Love Story";
pub(super) const SUBTITLE: &str = "Every moment with you is a memory worth keeping";
pub(super) const GALLERY_TITLE: &str = "Our Memories";
pub(super) const GALLERY_HINT: &str = "Drop a photo onto the window to upload (U)";
pub(super) const GALLERY_PLACEHOLDER: &str = "Our first memory is waiting to be added";
pub(super) const WALL_TITLE: &str = "Love Notes";
pub(super) const COMPOSER_PLACEHOLDER: &str = "Write a love note... (M)";
pub(super) const DEMO_BADGE: &str = "Demo mode";
pub(super) const LOADING_TEXT: &str = "Loading our story...";

#[derive(Resource, Default)]
pub(crate) struct HudUiState {
    /// Gallery source shown full size, if any.
    pub(crate) modal: Option<String>,
}

#[derive(Component)]
pub(super) struct StatValueText {
    pub(super) stat: Stat,
}

#[derive(Component)]
pub(super) struct StatsDemoBadge;

#[derive(Component)]
pub(super) struct GalleryGrid;

#[derive(Component)]
pub(super) struct GalleryPlaceholder;

#[derive(Component)]
pub(super) struct GalleryTile {
    pub(super) source: String,
}

#[derive(Component)]
pub(super) struct WallList;

#[derive(Component)]
pub(super) struct WallCard;

#[derive(Component)]
pub(super) struct ComposerField;

#[derive(Component)]
pub(super) struct ComposerText;

#[derive(Component)]
pub(super) struct SendButton;

#[derive(Component)]
pub(super) struct ToastNode;

#[derive(Component)]
pub(super) struct ToastText;

#[derive(Component)]
pub(super) struct PhotoModal;

#[derive(Component)]
pub(super) struct ModalImage;

#[derive(Component)]
pub(super) struct LoadingOverlay;

pub(super) fn card_bg(alpha: f32) -> Color {
    color_from_hex(Colors::CARD).with_alpha(alpha)
}

pub(super) fn accent_border(focused: bool) -> Color {
    if focused {
        color_from_hex(Colors::GOLD)
    } else {
        color_from_hex(Colors::ROSE).with_alpha(0.4)
    }
}
