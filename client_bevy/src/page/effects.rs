use bevy::prelude::*;
use bevy::ui::UiTransform;
use bevy::window::PrimaryWindow;
use lovenest_shared::effects::{spawn_burst, BurstParticle, FallingHeart, HeartRain, BURST_SIZE};

use crate::constants::{color_from_hex, Colors, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

use super::input::SecretUnlocked;
use super::{PointerInput, UpdateSet};

const RAIN_HEART_SIZE: f32 = 24.0;

pub struct EffectsPlugin;

#[derive(Component)]
pub(crate) struct BurstDot {
    particle: BurstParticle,
}

#[derive(Component)]
pub(crate) struct RainHeart {
    heart: FallingHeart,
}

#[derive(Resource, Default)]
pub(crate) struct RainState {
    pub(crate) rain: HeartRain,
}

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RainState>()
            .add_systems(
                Update,
                (spawn_click_burst, start_heart_rain).in_set(UpdateSet::Input),
            )
            .add_systems(
                Update,
                (animate_bursts, release_heart_rain, animate_heart_rain)
                    .chain()
                    .in_set(UpdateSet::Visuals),
            );
    }
}

fn window_size(q_window: &Query<&Window, With<PrimaryWindow>>) -> Vec2 {
    q_window
        .single()
        .map(|w| Vec2::new(w.width(), w.height()))
        .unwrap_or(Vec2::new(
            DEFAULT_WINDOW_WIDTH as f32,
            DEFAULT_WINDOW_HEIGHT as f32,
        ))
}

fn spawn_click_burst(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    input: Res<PointerInput>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let at = input.cursor;
    for particle in spawn_burst(at.x as f64, at.y as f64, &mut rand::thread_rng()) {
        commands.spawn(burst_bundle(particle));
    }
}

fn burst_bundle(particle: BurstParticle) -> impl Bundle {
    let size = BURST_SIZE as f32;
    (
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(particle.x as f32 - size * 0.5),
            top: Val::Px(particle.y as f32 - size * 0.5),
            width: Val::Px(size),
            height: Val::Px(size),
            ..default()
        },
        BackgroundColor(color_from_hex(particle.accent.hex())),
        BorderRadius::MAX,
        GlobalZIndex(900),
        BurstDot { particle },
    )
}

pub(crate) fn animate_bursts(
    mut commands: Commands,
    mut q_dots: Query<(Entity, &mut BurstDot, &mut Node, &mut BackgroundColor)>,
) {
    let half = BURST_SIZE as f32 * 0.5;
    for (entity, mut dot, mut node, mut color) in &mut q_dots {
        if !dot.particle.step() {
            commands.entity(entity).despawn();
            continue;
        }
        let p = dot.particle;
        node.left = Val::Px(p.x as f32 - half);
        node.top = Val::Px(p.y as f32 - half);
        color.0 = color.0.with_alpha(p.opacity as f32);
    }
}

fn start_heart_rain(mut secrets: MessageReader<SecretUnlocked>, mut state: ResMut<RainState>) {
    for _ in secrets.read() {
        state.rain.trigger();
    }
}

pub(crate) fn release_heart_rain(
    mut commands: Commands,
    time: Res<Time>,
    mut state: ResMut<RainState>,
    q_window: Query<&Window, With<PrimaryWindow>>,
) {
    if state.rain.pending() == 0 {
        return;
    }
    let width = window_size(&q_window).x as f64;
    let released = state
        .rain
        .advance(time.delta_secs_f64(), width, &mut rand::thread_rng());
    for heart in released {
        commands.spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(heart.x as f32),
                top: Val::Px(heart.y as f32),
                width: Val::Px(RAIN_HEART_SIZE),
                height: Val::Px(RAIN_HEART_SIZE),
                ..default()
            },
            BackgroundColor(color_from_hex(Colors::ROSE)),
            BorderRadius::new(
                Val::Percent(50.0),
                Val::Percent(50.0),
                Val::Px(2.0),
                Val::Percent(50.0),
            ),
            UiTransform {
                rotation: Rot2::degrees(heart.rotation_degrees() as f32),
                ..default()
            },
            GlobalZIndex(950),
            RainHeart { heart },
        ));
    }
}

pub(crate) fn animate_heart_rain(
    mut commands: Commands,
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut q_hearts: Query<(Entity, &mut RainHeart, &mut Node, &mut UiTransform)>,
) {
    let height = window_size(&q_window).y as f64;
    for (entity, mut rain, mut node, mut transform) in &mut q_hearts {
        if !rain.heart.step(height) {
            commands.entity(entity).despawn();
            continue;
        }
        node.top = Val::Px(rain.heart.y as f32);
        transform.rotation = Rot2::degrees(rain.heart.rotation_degrees() as f32);
    }
}
