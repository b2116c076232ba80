use std::collections::HashMap;

use bevy::asset::RenderAssetUsages;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use lovenest_shared::heart::{extrude_heart, HeartMesh, HEART_DEPTH, HEART_SEGMENTS};
use lovenest_shared::scene::{Accent, SceneState, Shape, Viewport};

use crate::constants::{
    color_from_hex, AMBIENT_BRIGHTNESS, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    EMISSIVE_STRENGTH, GOLD_LIGHT_POS, POINT_LIGHT_LUMENS, ROSE_LIGHT_POS,
};

use super::{PageSettings, PointerInput, UpdateSet};

pub struct ScenePlugin;

/// Background hearts, the camera rig and the viewport they are drawn into.
#[derive(Resource)]
pub(crate) struct HeartScene {
    pub(crate) state: SceneState,
}

#[derive(Component)]
pub(crate) struct SceneCamera;

#[derive(Component)]
pub(crate) struct HeartShape {
    pub(crate) index: usize,
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene)
            .add_systems(Update, resize_scene.in_set(UpdateSet::Input))
            .add_systems(Update, animate_scene.in_set(UpdateSet::Simulate));
    }
}

fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<PageSettings>,
    q_window: Query<&Window, With<PrimaryWindow>>,
) {
    let config = settings.scene;
    let viewport = q_window
        .single()
        .map(|w| Viewport::new(w.width() as f64, w.height() as f64))
        .unwrap_or(Viewport::new(
            DEFAULT_WINDOW_WIDTH as f64,
            DEFAULT_WINDOW_HEIGHT as f64,
        ));
    let state = SceneState::new(config, viewport, &mut rand::thread_rng());

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.fov_radians() as f32,
            near: config.near as f32,
            far: config.far as f32,
            aspect_ratio: viewport.aspect() as f32,
            ..default()
        }),
        Tonemapping::None,
        camera_transform(&state),
        SceneCamera,
    ));

    let range = config.light_range as f32;
    let intensity = config.light_intensity as f32 * POINT_LIGHT_LUMENS;
    for (accent, pos) in [(Accent::Gold, GOLD_LIGHT_POS), (Accent::Rose, ROSE_LIGHT_POS)] {
        commands.spawn((
            PointLight {
                color: color_from_hex(accent.hex()),
                intensity,
                range,
                ..default()
            },
            Transform::from_translation(Vec3::from_array(pos)),
        ));
    }
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: config.ambient_intensity as f32 * AMBIENT_BRIGHTNESS,
        ..default()
    });

    let mesh = meshes.add(heart_mesh(extrude_heart(HEART_SEGMENTS, HEART_DEPTH)));
    let mut palette: HashMap<(Accent, Accent), Handle<StandardMaterial>> = HashMap::new();
    for (index, shape) in state.shapes.iter().enumerate() {
        let material = palette
            .entry((shape.base, shape.emissive))
            .or_insert_with(|| {
                materials.add(heart_material(shape.base, shape.emissive, config.shape_opacity))
            })
            .clone();
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material),
            shape_transform(shape, config.shape_scale),
            HeartShape { index },
        ));
    }

    info!("scene ready: {} hearts", state.shapes.len());
    commands.insert_resource(HeartScene { state });
}

pub(crate) fn heart_mesh(data: HeartMesh) -> Mesh {
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, data.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, data.normals)
        .with_inserted_indices(Indices::U32(data.indices))
}

fn heart_material(base: Accent, emissive: Accent, opacity: f64) -> StandardMaterial {
    StandardMaterial {
        base_color: color_from_hex(base.hex()).with_alpha(opacity as f32),
        alpha_mode: AlphaMode::Blend,
        emissive: color_from_hex(emissive.hex()).to_linear() * EMISSIVE_STRENGTH,
        perceptual_roughness: 0.3,
        reflectance: 0.8,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

pub(crate) fn shape_transform(shape: &Shape, scale: f64) -> Transform {
    let [px, py, pz] = shape.position.to_array();
    let [rx, ry, rz] = shape.rotation.to_array();
    Transform {
        translation: Vec3::new(px as f32, py as f32, pz as f32),
        rotation: Quat::from_euler(EulerRot::XYZ, rx as f32, ry as f32, rz as f32),
        scale: Vec3::splat(scale as f32),
    }
}

fn camera_transform(state: &SceneState) -> Transform {
    let [cx, cy, cz] = state.camera.position.to_array();
    let [tx, ty, tz] = state.camera.look_at().to_array();
    Transform::from_xyz(cx as f32, cy as f32, cz as f32)
        .looking_at(Vec3::new(tx as f32, ty as f32, tz as f32), Vec3::Y)
}

pub(crate) fn animate_scene(
    scene: Option<ResMut<HeartScene>>,
    pointer: Res<PointerInput>,
    mut q_shapes: Query<(&HeartShape, &mut Transform), Without<SceneCamera>>,
    mut q_camera: Query<&mut Transform, With<SceneCamera>>,
) {
    let Some(mut scene) = scene else {
        return;
    };
    scene.state.step_frame(pointer.pointer);

    let scale = scene.state.config.shape_scale;
    for (heart, mut transform) in &mut q_shapes {
        if let Some(shape) = scene.state.shapes.get(heart.index) {
            *transform = shape_transform(shape, scale);
        }
    }
    for mut transform in &mut q_camera {
        *transform = camera_transform(&scene.state);
    }
}

fn resize_scene(
    mut resized: MessageReader<WindowResized>,
    scene: Option<ResMut<HeartScene>>,
    mut q_projection: Query<&mut Projection, With<SceneCamera>>,
) {
    let Some(mut scene) = scene else {
        resized.clear();
        return;
    };
    for evt in resized.read() {
        if evt.width <= 0.0 || evt.height <= 0.0 {
            continue;
        }
        let aspect = scene
            .state
            .resize(Viewport::new(evt.width as f64, evt.height as f64));
        for mut projection in &mut q_projection {
            if let Projection::Perspective(persp) = &mut *projection {
                persp.aspect_ratio = aspect as f32;
            }
        }
    }
}
