use std::f64::consts::PI;

/// Accent color: gold
pub const GOLD: u32 = 0xD4AF37;
/// Accent color: rose
pub const ROSE: u32 = 0xE75480;

/// Scene animator configuration
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub shape_count: usize,
    /// Half-extent of the cube shapes bounce inside
    pub bound: f64,
    /// Per-axis initial speed is uniform in [-max_speed, max_speed]
    pub max_speed: f64,
    /// Per-axis spin is uniform in [-max_spin, max_spin]
    pub max_spin: f64,
    pub shape_scale: f64,
    /// Heart material alpha, blended over the page
    pub shape_opacity: f64,
    /// Vertical field of view (degrees)
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    pub camera_distance: f64,
    /// Pointer offset (normalized) is multiplied by this to get the camera target
    pub pointer_gain: f64,
    /// Fraction of the remaining camera distance covered per frame
    pub camera_smoothing: f64,
    pub light_intensity: f64,
    pub light_range: f64,
    pub ambient_intensity: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape_count: 30,
            bound: 25.0,
            max_speed: 0.01,
            max_spin: 0.005,
            shape_scale: 0.5,
            shape_opacity: 0.6,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_distance: 30.0,
            pointer_gain: 5.0,
            camera_smoothing: 0.05,
            light_intensity: 1.0,
            light_range: 100.0,
            ambient_intensity: 0.5,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.bound.is_finite() || self.bound <= 0.0 {
            return Err("bound must be finite and > 0".to_string());
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err("max_speed must be finite and >= 0".to_string());
        }
        if self.max_speed >= self.bound {
            return Err("max_speed must be smaller than bound".to_string());
        }
        if !self.max_spin.is_finite() || self.max_spin < 0.0 {
            return Err("max_spin must be finite and >= 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.shape_opacity) {
            return Err("shape_opacity must be in [0, 1]".to_string());
        }
        if self.fov_degrees <= 0.0 || self.fov_degrees >= 180.0 {
            return Err("fov_degrees must be in (0, 180)".to_string());
        }
        if self.near <= 0.0 || self.far <= self.near {
            return Err("clip range must satisfy 0 < near < far".to_string());
        }
        if !(0.0..=1.0).contains(&self.camera_smoothing) || self.camera_smoothing == 0.0 {
            return Err("camera_smoothing must be in (0, 1]".to_string());
        }
        Ok(())
    }

    pub fn fov_radians(&self) -> f64 {
        self.fov_degrees * PI / 180.0
    }
}

/// Timings and tuning for the page widgets around the scene
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Total stat counter animation time (milliseconds)
    pub counter_duration_ms: f64,
    /// Stat counter tick period (milliseconds)
    pub counter_tick_ms: f64,
    pub toast_secs: f64,
    pub loading_secs: f64,
    pub follower_smoothing: f64,
    pub hover_scale: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000.0,
            counter_tick_ms: 16.0,
            toast_secs: 3.0,
            loading_secs: 1.5,
            follower_smoothing: 0.1,
            hover_scale: 2.0,
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.counter_tick_ms.is_finite() || self.counter_tick_ms <= 0.0 {
            return Err("counter_tick_ms must be finite and > 0".to_string());
        }
        if !self.counter_duration_ms.is_finite() || self.counter_duration_ms < self.counter_tick_ms
        {
            return Err("counter_duration_ms must be >= counter_tick_ms".to_string());
        }
        if self.toast_secs <= 0.0 {
            return Err("toast_secs must be > 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.follower_smoothing) {
            return Err("follower_smoothing must be in [0, 1]".to_string());
        }
        Ok(())
    }
}
