use bevy::prelude::*;
use bevy::window::{CursorOptions, PrimaryWindow};
use lovenest_shared::effects::{cursor_scale, CursorFollower};

use crate::constants::{color_from_hex, Colors};

use super::{PageSettings, PointerInput, UpdateSet};

const DOT_SIZE: f32 = 8.0;
const RING_SIZE: f32 = 36.0;

pub struct CursorPlugin;

/// Marks UI that makes the cursor grow while hovered.
#[derive(Component, Default)]
pub(crate) struct Hoverable;

#[derive(Component)]
struct CursorDot;

#[derive(Component)]
struct CursorRing;

#[derive(Resource, Default)]
struct FollowerState {
    follower: CursorFollower,
}

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FollowerState>()
            .add_systems(Startup, (hide_system_cursor, spawn_cursor))
            .add_systems(Update, move_cursor.in_set(UpdateSet::Visuals));
    }
}

fn hide_system_cursor(mut q_cursor: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    for mut cursor in &mut q_cursor {
        cursor.visible = false;
    }
}

fn spawn_cursor(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(DOT_SIZE),
            height: Val::Px(DOT_SIZE),
            ..default()
        },
        BackgroundColor(color_from_hex(Colors::GOLD)),
        BorderRadius::MAX,
        GlobalZIndex(1000),
        Visibility::Hidden,
        CursorDot,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(RING_SIZE),
            height: Val::Px(RING_SIZE),
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BorderColor::all(color_from_hex(Colors::ROSE).with_alpha(0.7)),
        BorderRadius::MAX,
        GlobalZIndex(999),
        Visibility::Hidden,
        CursorRing,
    ));
}

/// Center a square node of `size` on a window point.
fn place(node: &mut Node, x: f32, y: f32, size: f32) {
    node.left = Val::Px(x - size * 0.5);
    node.top = Val::Px(y - size * 0.5);
    node.width = Val::Px(size);
    node.height = Val::Px(size);
}

fn move_cursor(
    input: Res<PointerInput>,
    settings: Res<PageSettings>,
    mut state: ResMut<FollowerState>,
    q_hover: Query<&Interaction, With<Hoverable>>,
    mut q_dot: Query<(&mut Node, &mut Visibility), (With<CursorDot>, Without<CursorRing>)>,
    mut q_ring: Query<(&mut Node, &mut Visibility), (With<CursorRing>, Without<CursorDot>)>,
) {
    if !input.seen {
        return;
    }

    let hovering = q_hover.iter().any(|i| *i != Interaction::None);
    let scale = cursor_scale(hovering, settings.page.hover_scale) as f32;

    let mouse = input.cursor;
    state.follower.step(
        mouse.x as f64,
        mouse.y as f64,
        settings.page.follower_smoothing,
    );

    for (mut node, mut visibility) in &mut q_dot {
        place(&mut node, mouse.x, mouse.y, DOT_SIZE * scale);
        *visibility = Visibility::Visible;
    }
    let (fx, fy) = (state.follower.x as f32, state.follower.y as f32);
    for (mut node, mut visibility) in &mut q_ring {
        place(&mut node, fx, fy, RING_SIZE * scale);
        *visibility = Visibility::Visible;
    }
}
