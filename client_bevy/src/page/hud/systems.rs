use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::backend::Backend;
use crate::constants::{color_from_hex, Colors};
use crate::page::cursor::Hoverable;
use crate::page::input::submit_composer;
use crate::page::network::PhotoTextures;
use crate::page::{PageSettings, PageState, ShowToast};

use super::spawn::spawn_gallery_placeholder;
use super::types::{
    accent_border, card_bg, ComposerField, ComposerText, GalleryGrid, GalleryTile, HudUiState,
    LoadingOverlay, ModalImage, PhotoModal, SendButton, StatValueText, StatsDemoBadge, ToastNode,
    ToastText, WallCard, WallList, COMPOSER_PLACEHOLDER, MAX_WALL_CARDS, TILE_SIZE,
};

type ButtonInteractionQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static Interaction,
        Option<&'static SendButton>,
        Option<&'static ComposerField>,
        Option<&'static GalleryTile>,
        Option<&'static PhotoModal>,
    ),
    (Changed<Interaction>, With<Button>),
>;

type ComposerTextQuery<'w, 's> =
    Query<'w, 's, (&'static mut Text, &'static mut TextColor), With<ComposerText>>;
type ComposerBorderQuery<'w, 's> = Query<'w, 's, &'static mut BorderColor, With<ComposerField>>;

#[derive(SystemParam)]
pub(super) struct ButtonQueries<'w, 's> {
    query: ButtonInteractionQuery<'w, 's>,
}

#[derive(SystemParam)]
pub(super) struct ComposerUiQueries<'w, 's> {
    text: ComposerTextQuery<'w, 's>,
    border: ComposerBorderQuery<'w, 's>,
}

pub(super) fn handle_button_interactions(
    mut buttons: ButtonQueries,
    mut page: ResMut<PageState>,
    mut hud_ui: ResMut<HudUiState>,
    backend: Res<Backend>,
    mut toasts: MessageWriter<ShowToast>,
) {
    for (interaction, send, field, tile, modal) in &mut buttons.query {
        if *interaction != Interaction::Pressed {
            continue;
        }

        if send.is_some() {
            submit_composer(&page, &backend, &mut toasts);
        }
        if field.is_some() {
            page.composer.focused = true;
        }
        if let Some(tile) = tile {
            hud_ui.modal = Some(tile.source.clone());
        }
        if modal.is_some() {
            hud_ui.modal = None;
        }
    }
}

pub(super) fn update_stats_ui(
    page: Res<PageState>,
    mut q_values: Query<(&StatValueText, &mut Text)>,
    mut q_badge: Query<&mut Visibility, With<StatsDemoBadge>>,
) {
    for (value, mut text) in &mut q_values {
        let shown = page.stats.displayed(value.stat).to_string();
        if text.0 != shown {
            text.0 = shown;
        }
    }
    let badge = if page.stats.demo {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in &mut q_badge {
        visibility.set_if_neq(badge);
    }
}

pub(super) fn update_gallery_ui(
    mut commands: Commands,
    page: Res<PageState>,
    textures: Res<PhotoTextures>,
    q_grid: Query<Entity, With<GalleryGrid>>,
    mut last_signature: Local<Option<(u64, usize)>>,
) {
    let signature = (page.gallery.revision(), textures.by_source.len());
    if *last_signature == Some(signature) {
        return;
    }
    let Ok(grid) = q_grid.single() else {
        return;
    };
    *last_signature = Some(signature);

    commands.entity(grid).despawn_related::<Children>();
    commands.entity(grid).with_children(|grid| {
        if page.gallery.shows_placeholder() {
            spawn_gallery_placeholder(grid);
            return;
        }
        for item in page.gallery.items() {
            // Photos that failed to load are left out.
            let Some(handle) = textures.by_source.get(&item.source) else {
                continue;
            };
            grid.spawn((
                Button,
                Node {
                    width: Val::Px(TILE_SIZE),
                    height: Val::Px(TILE_SIZE),
                    border: UiRect::all(Val::Px(2.0)),
                    overflow: Overflow::clip(),
                    ..default()
                },
                ImageNode::new(handle.clone()),
                BorderColor::all(accent_border(item.preview)),
                BorderRadius::all(Val::Px(10.0)),
                Hoverable,
                GalleryTile {
                    source: item.source.clone(),
                },
            ));
        }
    });
}

pub(super) fn update_wall_ui(
    mut commands: Commands,
    page: Res<PageState>,
    q_list: Query<Entity, With<WallList>>,
    mut last_revision: Local<Option<u64>>,
) {
    let revision = page.wall.revision();
    if *last_revision == Some(revision) {
        return;
    }
    let Ok(list) = q_list.single() else {
        return;
    };
    *last_revision = Some(revision);

    commands.entity(list).despawn_related::<Children>();
    commands.entity(list).with_children(|list| {
        for card in page.wall.cards().iter().take(MAX_WALL_CARDS) {
            list.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    padding: UiRect::all(Val::Px(12.0)),
                    border: UiRect::left(Val::Px(3.0)),
                    ..default()
                },
                BackgroundColor(card_bg(0.85)),
                BorderColor::all(color_from_hex(if card.demo {
                    Colors::GOLD
                } else {
                    Colors::ROSE
                })),
                BorderRadius::all(Val::Px(8.0)),
                WallCard,
            ))
            .with_children(|body| {
                body.spawn((
                    Text::new(card.text.clone()),
                    TextFont::from_font_size(15.0),
                    TextColor(color_from_hex(Colors::INK)),
                ));
                body.spawn((
                    Text::new(card.time.clone()),
                    TextFont::from_font_size(11.0),
                    TextColor(color_from_hex(Colors::INK_DIM)),
                ));
            });
        }
    });
}

pub(super) fn update_composer_ui(page: Res<PageState>, mut queries: ComposerUiQueries) {
    if !page.is_changed() {
        return;
    }
    let composer = &page.composer;
    let (shown, color) = if composer.text().is_empty() && !composer.focused {
        (COMPOSER_PLACEHOLDER.to_string(), Colors::INK_DIM)
    } else if composer.focused {
        (format!("{}|", composer.text()), Colors::INK)
    } else {
        (composer.text().to_string(), Colors::INK)
    };

    for (mut text, mut text_color) in &mut queries.text {
        if text.0 != shown {
            text.0 = shown.clone();
        }
        text_color.0 = color_from_hex(color);
    }
    for mut border in &mut queries.border {
        *border = BorderColor::all(accent_border(composer.focused));
    }
}

pub(super) fn update_toast_ui(
    page: Res<PageState>,
    mut q_toast: Query<&mut Visibility, With<ToastNode>>,
    mut q_text: Query<&mut Text, With<ToastText>>,
) {
    let visibility = if page.toast.is_visible() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut v in &mut q_toast {
        v.set_if_neq(visibility);
    }
    for mut text in &mut q_text {
        if text.0 != page.toast.message() {
            text.0 = page.toast.message().to_string();
        }
    }
}

pub(super) fn update_modal_ui(
    hud_ui: Res<HudUiState>,
    textures: Res<PhotoTextures>,
    mut q_modal: Query<&mut Visibility, With<PhotoModal>>,
    mut q_image: Query<&mut ImageNode, With<ModalImage>>,
) {
    if !hud_ui.is_changed() {
        return;
    }
    let handle = hud_ui
        .modal
        .as_ref()
        .and_then(|source| textures.by_source.get(source));

    for mut visibility in &mut q_modal {
        *visibility = if handle.is_some() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
    if let Some(handle) = handle {
        for mut image in &mut q_image {
            image.image = handle.clone();
        }
    }
}

pub(super) fn hide_loading_screen(
    mut commands: Commands,
    time: Res<Time>,
    settings: Res<PageSettings>,
    q_overlay: Query<Entity, With<LoadingOverlay>>,
    mut elapsed: Local<f64>,
) {
    if q_overlay.is_empty() {
        return;
    }
    *elapsed += time.delta_secs_f64();
    if *elapsed < settings.page.loading_secs {
        return;
    }
    for entity in &q_overlay {
        commands.entity(entity).despawn();
    }
}
