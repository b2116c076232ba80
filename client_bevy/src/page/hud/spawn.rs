use bevy::prelude::*;
use lovenest_shared::counter::Stat;

use crate::constants::{color_from_hex, Colors};
use crate::page::cursor::Hoverable;

use super::types::{
    accent_border, card_bg, ComposerField, ComposerText, GalleryGrid, GalleryPlaceholder,
    LoadingOverlay, ModalImage, PhotoModal, SendButton, StatValueText, StatsDemoBadge,
    ToastNode, ToastText, WallList, COMPOSER_PLACEHOLDER, DEMO_BADGE, GALLERY_HINT,
    GALLERY_PLACEHOLDER, GALLERY_TITLE, LOADING_TEXT, PAGE_PADDING, STAT_CARD_WIDTH, SUBTITLE,
    TILE_SIZE, TITLE, WALL_TITLE, WALL_WIDTH,
};

pub(super) fn spawn_hud(mut commands: Commands) {
    let small = TextFont::from_font_size(12.0);
    let medium = TextFont::from_font_size(16.0);
    let heading = TextFont::from_font_size(22.0);

    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            padding: UiRect::all(Val::Px(PAGE_PADDING)),
            row_gap: Val::Px(18.0),
            ..default()
        })
        .with_children(|page| {
            page.spawn((
                Text::new(TITLE),
                TextFont::from_font_size(40.0),
                TextColor(color_from_hex(Colors::GOLD)),
            ));
            page.spawn((
                Text::new(SUBTITLE),
                medium.clone(),
                TextColor(color_from_hex(Colors::INK_DIM)),
            ));

            page.spawn(Node {
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(16.0),
                ..default()
            })
            .with_children(|row| {
                for stat in Stat::ALL {
                    spawn_stat_card(row, stat, &small);
                }
                row.spawn((
                    Text::new(DEMO_BADGE),
                    small.clone(),
                    TextColor(color_from_hex(Colors::INK_DIM)),
                    Visibility::Hidden,
                    StatsDemoBadge,
                ));
            });

            page.spawn(Node {
                flex_direction: FlexDirection::Row,
                flex_grow: 1.0,
                column_gap: Val::Px(24.0),
                min_height: Val::Px(0.0),
                ..default()
            })
            .with_children(|body| {
                body.spawn(Node {
                    flex_direction: FlexDirection::Column,
                    flex_grow: 1.0,
                    row_gap: Val::Px(10.0),
                    overflow: Overflow::clip(),
                    ..default()
                })
                .with_children(|gallery| {
                    gallery.spawn((
                        Text::new(GALLERY_TITLE),
                        heading.clone(),
                        TextColor(color_from_hex(Colors::ROSE)),
                    ));
                    gallery.spawn((
                        Text::new(GALLERY_HINT),
                        small.clone(),
                        TextColor(color_from_hex(Colors::INK_DIM)),
                    ));
                    gallery
                        .spawn((
                            Node {
                                flex_direction: FlexDirection::Row,
                                flex_wrap: FlexWrap::Wrap,
                                column_gap: Val::Px(10.0),
                                row_gap: Val::Px(10.0),
                                ..default()
                            },
                            GalleryGrid,
                        ))
                        .with_children(|grid| {
                            spawn_gallery_placeholder(grid);
                        });
                });

                body.spawn(Node {
                    flex_direction: FlexDirection::Column,
                    width: Val::Px(WALL_WIDTH),
                    row_gap: Val::Px(10.0),
                    overflow: Overflow::clip(),
                    ..default()
                })
                .with_children(|wall| {
                    wall.spawn((
                        Text::new(WALL_TITLE),
                        heading.clone(),
                        TextColor(color_from_hex(Colors::ROSE)),
                    ));
                    spawn_composer(wall, &medium);
                    wall.spawn((
                        Node {
                            flex_direction: FlexDirection::Column,
                            row_gap: Val::Px(8.0),
                            ..default()
                        },
                        WallList,
                    ));
                });
            });
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(32.0),
                bottom: Val::Px(32.0),
                padding: UiRect::axes(Val::Px(18.0), Val::Px(12.0)),
                border: UiRect::all(Val::Px(1.0)),
                ..default()
            },
            BackgroundColor(card_bg(0.95)),
            BorderColor::all(color_from_hex(Colors::GOLD).with_alpha(0.6)),
            BorderRadius::all(Val::Px(10.0)),
            GlobalZIndex(500),
            Visibility::Hidden,
            ToastNode,
        ))
        .with_children(|toast| {
            toast.spawn((
                Text::new(""),
                medium.clone(),
                TextColor(color_from_hex(Colors::INK)),
                ToastText,
            ));
        });

    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            GlobalZIndex(600),
            Visibility::Hidden,
            PhotoModal,
        ))
        .with_children(|modal| {
            modal.spawn((
                Node {
                    max_width: Val::Percent(85.0),
                    max_height: Val::Percent(85.0),
                    ..default()
                },
                ImageNode::default(),
                ModalImage,
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(color_from_hex(Colors::PAGE_BG)),
            GlobalZIndex(2000),
            LoadingOverlay,
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new(LOADING_TEXT),
                heading,
                TextColor(color_from_hex(Colors::ROSE)),
            ));
        });
}

fn spawn_stat_card(row: &mut ChildSpawnerCommands, stat: Stat, label_font: &TextFont) {
    row.spawn((
        Node {
            width: Val::Px(STAT_CARD_WIDTH),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(12.0)),
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BackgroundColor(card_bg(0.8)),
        BorderColor::all(accent_border(false)),
        BorderRadius::all(Val::Px(12.0)),
        Interaction::default(),
        Hoverable,
    ))
    .with_children(|card| {
        card.spawn((
            Text::new("0"),
            TextFont::from_font_size(32.0),
            TextColor(color_from_hex(Colors::GOLD)),
            StatValueText { stat },
        ));
        card.spawn((
            Text::new(stat.label()),
            label_font.clone(),
            TextColor(color_from_hex(Colors::INK_DIM)),
        ));
    });
}

pub(super) fn spawn_gallery_placeholder(grid: &mut ChildSpawnerCommands) {
    grid.spawn((
        Node {
            width: Val::Px(TILE_SIZE * 2.0),
            height: Val::Px(TILE_SIZE),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: UiRect::all(Val::Px(12.0)),
            border: UiRect::all(Val::Px(1.0)),
            ..default()
        },
        BackgroundColor(card_bg(0.6)),
        BorderColor::all(accent_border(false)),
        BorderRadius::all(Val::Px(12.0)),
        GalleryPlaceholder,
    ))
    .with_children(|tile| {
        tile.spawn((
            Text::new(GALLERY_PLACEHOLDER),
            TextFont::from_font_size(14.0),
            TextColor(color_from_hex(Colors::INK_DIM)),
        ));
    });
}

fn spawn_composer(wall: &mut ChildSpawnerCommands, font: &TextFont) {
    wall.spawn(Node {
        flex_direction: FlexDirection::Row,
        column_gap: Val::Px(8.0),
        ..default()
    })
    .with_children(|row| {
        row.spawn((
            Button,
            Node {
                flex_grow: 1.0,
                min_height: Val::Px(44.0),
                padding: UiRect::all(Val::Px(10.0)),
                border: UiRect::all(Val::Px(1.0)),
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(card_bg(0.9)),
            BorderColor::all(accent_border(false)),
            BorderRadius::all(Val::Px(8.0)),
            Hoverable,
            ComposerField,
        ))
        .with_children(|field| {
            field.spawn((
                Text::new(COMPOSER_PLACEHOLDER),
                font.clone(),
                TextColor(color_from_hex(Colors::INK_DIM)),
                ComposerText,
            ));
        });

        row.spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(16.0), Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(color_from_hex(Colors::ROSE)),
            BorderRadius::all(Val::Px(8.0)),
            Hoverable,
            SendButton,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new("Send"),
                font.clone(),
                TextColor(color_from_hex(Colors::INK)),
            ));
        });
    });
}
