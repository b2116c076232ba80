/// Small 3D vector used by the scene simulation.
/// Kept engine-free so the animator can be stepped and tested without a renderer.

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a vector by evaluating `f` once per axis, x first.
    pub fn from_fn(mut f: impl FnMut(usize) -> f64) -> Self {
        let x = f(0);
        let y = f(1);
        let z = f(2);
        Self { x, y, z }
    }

    /// Component by axis index (0 = x, 1 = y, 2 = z).
    pub fn axis(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    pub fn axis_mut(&mut self, axis: usize) -> &mut f64 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Shorthand constructor
pub fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Add two vectors
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_accessors_match_fields() {
        let mut v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v.axis(0), 1.0);
        assert_eq!(v.axis(1), 2.0);
        assert_eq!(v.axis(2), 3.0);

        *v.axis_mut(1) = -7.0;
        assert_eq!(v.y, -7.0);
        assert_eq!(v.to_array(), [1.0, -7.0, 3.0]);
    }

    #[test]
    fn from_fn_visits_axes_in_order() {
        let mut seen = Vec::new();
        let v = Vec3::from_fn(|axis| {
            seen.push(axis);
            axis as f64 * 10.0
        });
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(v, vec3(0.0, 10.0, 20.0));
    }

    #[test]
    fn add_is_componentwise() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(0.5, -1.0, 2.0);
        assert_eq!(add(a, b), vec3(1.5, 1.0, 5.0));
    }
}
