//! Floating-heart background simulation.
//!
//! The animator owns a fixed population of shapes bouncing inside a cube and
//! a camera that eases toward the pointer. Everything that changes per frame
//! is passed in explicitly, so a frame can be stepped without a window or a
//! pointer device.

use std::f64::consts::PI;

use rand::Rng;

use crate::config::{SceneConfig, GOLD, ROSE};
use crate::vec3::{add, vec3, Vec3};

/// One of the two accent colors used for shapes and lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Gold,
    Rose,
}

impl Accent {
    pub const ALL: [Accent; 2] = [Accent::Gold, Accent::Rose];

    pub fn hex(self) -> u32 {
        match self {
            Accent::Gold => GOLD,
            Accent::Rose => ROSE,
        }
    }

    /// Coin flip between the two accents.
    pub fn pick(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            Accent::Gold
        } else {
            Accent::Rose
        }
    }
}

/// A single decorative shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub position: Vec3,
    pub rotation: Vec3,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub base: Accent,
    pub emissive: Accent,
}

impl Shape {
    pub fn random(rng: &mut impl Rng, config: &SceneConfig) -> Self {
        let bound = config.bound;
        let speed = config.max_speed;
        let spin = config.max_spin;

        let position = Vec3::from_fn(|_| rng.gen_range(-bound..=bound));
        let rotation = Vec3::from_fn(|_| rng.gen_range(0.0..=PI));
        let velocity = Vec3::from_fn(|_| rng.gen_range(-speed..=speed));
        let angular_velocity = Vec3::from_fn(|_| rng.gen_range(-spin..=spin));
        let base = Accent::pick(rng);
        let emissive = Accent::pick(rng);

        Self {
            position,
            rotation,
            velocity,
            angular_velocity,
            base,
            emissive,
        }
    }

    /// Advance one frame: Euler step, boundary reflection, spin.
    /// Returns which axes reflected this frame.
    pub fn step(&mut self, bound: f64) -> [bool; 3] {
        self.position = add(self.position, self.velocity);
        let reflected = reflect_at_bound(self.position, &mut self.velocity, bound);
        self.rotation = add(self.rotation, self.angular_velocity);
        reflected
    }
}

/// Negate every velocity axis whose position magnitude exceeds `bound`.
///
/// The position is left as is, so a shape can sit just outside the bound for
/// one frame before the reversed velocity carries it back.
pub fn reflect_at_bound(position: Vec3, velocity: &mut Vec3, bound: f64) -> [bool; 3] {
    let mut reflected = [false; 3];
    for (axis, flag) in reflected.iter_mut().enumerate() {
        if position.axis(axis).abs() > bound {
            let v = velocity.axis_mut(axis);
            *v = -*v;
            *flag = true;
        }
    }
    reflected
}

/// Last known pointer location, normalized so the window spans [-1, 1] with +y up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

impl PointerState {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Normalize a window-space cursor position (origin top-left, y down).
    pub fn from_screen(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: ((cx / width) * 2.0 - 1.0).clamp(-1.0, 1.0),
            y: (-(cy / height) * 2.0 + 1.0).clamp(-1.0, 1.0),
        }
    }
}

/// Camera that always looks at the origin and drifts toward the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
}

impl CameraRig {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            position: vec3(0.0, 0.0, config.camera_distance),
        }
    }

    /// Where the camera is heading for the given pointer.
    pub fn target(pointer: PointerState, config: &SceneConfig) -> (f64, f64) {
        (pointer.x * config.pointer_gain, pointer.y * config.pointer_gain)
    }

    /// Exponential smoothing of x and y toward the pointer target. Depth is fixed.
    pub fn step(&mut self, pointer: PointerState, config: &SceneConfig) {
        let (tx, ty) = Self::target(pointer, config);
        self.position.x += (tx - self.position.x) * config.camera_smoothing;
        self.position.y += (ty - self.position.y) * config.camera_smoothing;
    }

    pub fn look_at(&self) -> Vec3 {
        Vec3::ZERO
    }
}

/// Drawing surface size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f64 {
        if self.height <= 0.0 {
            return 1.0;
        }
        self.width / self.height
    }
}

/// Advance every shape and the camera by one frame.
pub fn step_frame(
    shapes: &mut [Shape],
    camera: &mut CameraRig,
    pointer: PointerState,
    config: &SceneConfig,
) {
    for shape in shapes.iter_mut() {
        shape.step(config.bound);
    }
    camera.step(pointer, config);
}

/// The whole background: population, camera and viewport.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub config: SceneConfig,
    pub shapes: Vec<Shape>,
    pub camera: CameraRig,
    pub viewport: Viewport,
}

impl SceneState {
    pub fn new(config: SceneConfig, viewport: Viewport, rng: &mut impl Rng) -> Self {
        let shapes = (0..config.shape_count)
            .map(|_| Shape::random(rng, &config))
            .collect();
        Self {
            camera: CameraRig::new(&config),
            config,
            shapes,
            viewport,
        }
    }

    pub fn step_frame(&mut self, pointer: PointerState) {
        step_frame(&mut self.shapes, &mut self.camera, pointer, &self.config);
    }

    /// New viewport size. Only the projection changes; shapes are untouched.
    pub fn resize(&mut self, viewport: Viewport) -> f64 {
        self.viewport = viewport;
        viewport.aspect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_scene(seed: u64) -> SceneState {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        SceneState::new(
            SceneConfig::default(),
            Viewport::new(1280.0, 720.0),
            &mut rng,
        )
    }

    fn still_shape(position: Vec3, velocity: Vec3) -> Shape {
        Shape {
            position,
            rotation: vec3(0.1, 0.2, 0.3),
            velocity,
            angular_velocity: vec3(0.001, -0.002, 0.003),
            base: Accent::Gold,
            emissive: Accent::Rose,
        }
    }

    #[test]
    fn spawns_configured_population_within_ranges() {
        let scene = make_scene(7);
        let config = SceneConfig::default();
        assert_eq!(scene.shapes.len(), 30);

        for shape in &scene.shapes {
            for axis in 0..3 {
                assert!(shape.position.axis(axis).abs() <= config.bound);
                let r = shape.rotation.axis(axis);
                assert!((0.0..=PI).contains(&r));
                assert!(shape.velocity.axis(axis).abs() <= config.max_speed);
                assert!(shape.angular_velocity.axis(axis).abs() <= config.max_spin);
            }
        }
    }

    #[test]
    fn both_accents_appear_in_population() {
        let scene = make_scene(11);
        let golds = scene
            .shapes
            .iter()
            .filter(|s| s.base == Accent::Gold)
            .count();
        assert!(golds > 0 && golds < scene.shapes.len());
    }

    #[test]
    fn positions_stay_within_bound_over_long_run() {
        let mut scene = make_scene(42);
        let config = scene.config;
        let pointer = PointerState::new(0.3, -0.8);

        for _ in 0..50_000 {
            scene.step_frame(pointer);
            for shape in &scene.shapes {
                for axis in 0..3 {
                    // One frame of overshoot is at most one velocity step.
                    assert!(
                        shape.position.axis(axis).abs() <= config.bound + config.max_speed,
                        "axis {axis} escaped: {}",
                        shape.position.axis(axis)
                    );
                }
            }
        }
    }

    #[test]
    fn overshoot_lasts_a_single_frame() {
        let mut shape = still_shape(vec3(24.995, 0.0, 0.0), vec3(0.01, 0.0, 0.0));
        shape.step(25.0);
        assert!(shape.position.x > 25.0);
        shape.step(25.0);
        assert!(shape.position.x <= 25.0);
    }

    #[test]
    fn reflection_negates_only_the_crossing_axis() {
        let mut shape = still_shape(vec3(24.995, 3.0, -4.0), vec3(0.01, 0.003, -0.002));
        let before = shape.clone();

        let reflected = shape.step(25.0);

        assert_eq!(reflected, [true, false, false]);
        assert_eq!(shape.velocity.x, -0.01);
        assert_eq!(shape.velocity.y, before.velocity.y);
        assert_eq!(shape.velocity.z, before.velocity.z);
        assert_eq!(shape.angular_velocity, before.angular_velocity);
        assert_eq!(shape.rotation, add(before.rotation, before.angular_velocity));
    }

    #[test]
    fn reflection_preserves_speed_magnitude() {
        let mut velocity = vec3(0.007, -0.004, 0.002);
        let reflected = reflect_at_bound(vec3(-25.5, 25.1, 0.0), &mut velocity, 25.0);
        assert_eq!(reflected, [true, true, false]);
        assert_eq!(velocity, vec3(-0.007, 0.004, 0.002));
    }

    #[test]
    fn inside_bound_is_untouched() {
        let mut velocity = vec3(0.01, 0.01, 0.01);
        let reflected = reflect_at_bound(vec3(25.0, -25.0, 0.0), &mut velocity, 25.0);
        assert_eq!(reflected, [false; 3]);
        assert_eq!(velocity, vec3(0.01, 0.01, 0.01));
    }

    #[test]
    fn camera_converges_geometrically_toward_pointer_target() {
        let config = SceneConfig::default();
        let mut camera = CameraRig::new(&config);
        let pointer = PointerState::new(0.6, -0.4);
        let (tx, ty) = CameraRig::target(pointer, &config);
        assert!((tx - 3.0).abs() < 1e-12);
        assert!((ty + 2.0).abs() < 1e-12);

        let mut prev_dx = (tx - camera.position.x).abs();
        let mut prev_dy = (ty - camera.position.y).abs();
        for _ in 0..200 {
            camera.step(pointer, &config);
            let dx = (tx - camera.position.x).abs();
            let dy = (ty - camera.position.y).abs();
            assert!(dx < prev_dx && dy < prev_dy);
            assert!((dx - prev_dx * 0.95).abs() < 1e-9);
            assert!((dy - prev_dy * 0.95).abs() < 1e-9);
            prev_dx = dx;
            prev_dy = dy;
        }
        assert_eq!(camera.position.z, config.camera_distance);
        assert_eq!(camera.look_at(), Vec3::ZERO);
    }

    #[test]
    fn camera_at_target_stays_put() {
        let config = SceneConfig::default();
        let mut camera = CameraRig::new(&config);
        camera.step(PointerState::default(), &config);
        assert_eq!(camera.position, vec3(0.0, 0.0, 30.0));
    }

    #[test]
    fn pointer_normalizes_window_corners() {
        let top_left = PointerState::from_screen(0.0, 0.0, 800.0, 600.0);
        assert_eq!(top_left, PointerState::new(-1.0, 1.0));

        let bottom_right = PointerState::from_screen(800.0, 600.0, 800.0, 600.0);
        assert_eq!(bottom_right, PointerState::new(1.0, -1.0));

        let center = PointerState::from_screen(400.0, 300.0, 800.0, 600.0);
        assert_eq!(center, PointerState::new(0.0, 0.0));
    }

    #[test]
    fn pointer_with_empty_window_is_centered() {
        assert_eq!(
            PointerState::from_screen(10.0, 10.0, 0.0, 0.0),
            PointerState::default()
        );
    }

    #[test]
    fn resize_updates_aspect_without_touching_shapes() {
        let mut scene = make_scene(3);
        let shapes_before = scene.shapes.clone();

        let aspect = scene.resize(Viewport::new(1000.0, 500.0));

        assert_eq!(aspect, 2.0);
        assert_eq!(scene.viewport, Viewport::new(1000.0, 500.0));
        assert_eq!(scene.shapes, shapes_before);
    }
}
