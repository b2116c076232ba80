//! Extruded heart geometry shared by every shape in the scene.

/// Extrusion depth of the heart slab.
pub const HEART_DEPTH: f32 = 0.3;
/// Samples per Bézier segment.
pub const HEART_SEGMENTS: usize = 12;

/// Interior point the cap faces are fanned from.
const FAN_CENTER: [f32; 2] = [0.0, 0.35];

/// Cubic Bézier segments: start, control 1, control 2, end.
const HEART_CURVES: [[[f32; 2]; 4]; 4] = [
    [[0.0, 0.0], [0.0, -0.3], [-0.6, -0.3], [-0.6, 0.0]],
    [[-0.6, 0.0], [-0.6, 0.3], [0.0, 0.6], [0.0, 1.0]],
    [[0.0, 1.0], [0.0, 0.6], [0.6, 0.3], [0.6, 0.0]],
    [[0.6, 0.0], [0.6, -0.3], [0.0, -0.3], [0.0, 0.0]],
];

/// Triangle-list mesh data, ready to upload.
#[derive(Debug, Clone, Default)]
pub struct HeartMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

fn cubic(p: [[f32; 2]; 4], t: f32) -> [f32; 2] {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    [
        a * p[0][0] + b * p[1][0] + c * p[2][0] + d * p[3][0],
        a * p[0][1] + b * p[1][1] + c * p[2][1] + d * p[3][1],
    ]
}

/// Signed area of a closed polygon (positive when counter-clockwise).
pub fn signed_area(points: &[[f32; 2]]) -> f32 {
    let n = points.len();
    let mut twice = 0.0;
    for i in 0..n {
        let [x0, y0] = points[i];
        let [x1, y1] = points[(i + 1) % n];
        twice += x0 * y1 - x1 * y0;
    }
    twice * 0.5
}

/// Closed heart outline, counter-clockwise, without a repeated end point.
pub fn heart_outline(segments: usize) -> Vec<[f32; 2]> {
    let segments = segments.max(1);
    let mut points = Vec::with_capacity(HEART_CURVES.len() * segments);
    for curve in HEART_CURVES {
        for step in 0..segments {
            points.push(cubic(curve, step as f32 / segments as f32));
        }
    }
    if signed_area(&points) < 0.0 {
        points.reverse();
    }
    points
}

/// Extrude the outline into a closed slab centered on z = 0.
pub fn extrude_heart(segments: usize, depth: f32) -> HeartMesh {
    let outline = heart_outline(segments);
    let n = outline.len();
    let front_z = depth * 0.5;
    let back_z = -depth * 0.5;
    let mut mesh = HeartMesh::default();

    // Front cap
    let front_center = mesh.positions.len() as u32;
    mesh.positions.push([FAN_CENTER[0], FAN_CENTER[1], front_z]);
    mesh.normals.push([0.0, 0.0, 1.0]);
    for p in &outline {
        mesh.positions.push([p[0], p[1], front_z]);
        mesh.normals.push([0.0, 0.0, 1.0]);
    }
    for i in 0..n as u32 {
        let a = front_center + 1 + i;
        let b = front_center + 1 + (i + 1) % n as u32;
        mesh.indices.extend_from_slice(&[front_center, a, b]);
    }

    // Back cap, opposite winding
    let back_center = mesh.positions.len() as u32;
    mesh.positions.push([FAN_CENTER[0], FAN_CENTER[1], back_z]);
    mesh.normals.push([0.0, 0.0, -1.0]);
    for p in &outline {
        mesh.positions.push([p[0], p[1], back_z]);
        mesh.normals.push([0.0, 0.0, -1.0]);
    }
    for i in 0..n as u32 {
        let a = back_center + 1 + i;
        let b = back_center + 1 + (i + 1) % n as u32;
        mesh.indices.extend_from_slice(&[back_center, b, a]);
    }

    // Side walls get their own vertices so the normals stay flat.
    for i in 0..n {
        let p = outline[i];
        let q = outline[(i + 1) % n];
        let dx = q[0] - p[0];
        let dy = q[1] - p[1];
        let len = (dx * dx + dy * dy).sqrt();
        let normal = if len > 1e-6 {
            [dy / len, -dx / len, 0.0]
        } else {
            [1.0, 0.0, 0.0]
        };

        let base = mesh.positions.len() as u32;
        mesh.positions.push([p[0], p[1], front_z]);
        mesh.positions.push([q[0], q[1], front_z]);
        mesh.positions.push([q[0], q[1], back_z]);
        mesh.positions.push([p[0], p[1], back_z]);
        for _ in 0..4 {
            mesh.normals.push(normal);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 3, base + 1, base + 1, base + 3, base + 2]);
    }

    mesh
}
