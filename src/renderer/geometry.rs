//! Procedural cube geometry
//!
//! Two cubes share one static vertex buffer: a flattened 1x1x1 floor cube
//! sunk one unit below the origin, and a thin slab at the origin that casts
//! the shadow.

use glam::Vec3;

use super::vertex::Vertex;

/// Vertices per cube (6 faces x 2 triangles x 3 vertices)
pub const CUBE_VERTEX_COUNT: usize = 36;
/// Vertices in the whole scene (two cubes)
pub const SCENE_VERTEX_COUNT: usize = 2 * CUBE_VERTEX_COUNT;

// One fixed color per face
const NEG_X: [f32; 3] = [0.0, 1.0, 1.0];
const POS_X: [f32; 3] = [1.0, 0.0, 1.0];
const NEG_Y: [f32; 3] = [0.0, 1.0, 0.0];
const POS_Y: [f32; 3] = [1.0, 1.0, 0.0];
const NEG_Z: [f32; 3] = [0.0, 0.0, 1.0];
const POS_Z: [f32; 3] = [1.0, 0.0, 0.0];

/// Build one cube as 36 interleaved vertices
///
/// `half` holds the half-extents along each axis; `center` offsets every
/// vertex. Deterministic: identical inputs yield identical output.
pub fn cube_vertices(half: Vec3, center: Vec3) -> Vec<Vertex> {
    let (w, h, d) = (half.x, half.y, half.z);
    let v = |x: f32, y: f32, z: f32, color: [f32; 3]| {
        Vertex::new([x + center.x, y + center.y, z + center.z], color)
    };

    vec![
        v(-w, -h, -d, NEG_X),
        v(-w, h, d, NEG_X),
        v(-w, h, -d, NEG_X),
        v(-w, -h, d, NEG_X),
        v(-w, h, d, NEG_X),
        v(-w, -h, -d, NEG_X),
        //
        v(w, -h, -d, POS_X),
        v(w, h, -d, POS_X),
        v(w, h, d, POS_X),
        v(w, h, d, POS_X),
        v(w, -h, d, POS_X),
        v(w, -h, -d, POS_X),
        //
        v(-w, -h, -d, NEG_Y),
        v(w, -h, -d, NEG_Y),
        v(w, -h, d, NEG_Y),
        v(w, -h, d, NEG_Y),
        v(-w, -h, d, NEG_Y),
        v(-w, -h, -d, NEG_Y),
        //
        v(-w, h, -d, POS_Y),
        v(w, h, d, POS_Y),
        v(w, h, -d, POS_Y),
        v(-w, h, d, POS_Y),
        v(w, h, d, POS_Y),
        v(-w, h, -d, POS_Y),
        //
        v(w, -h, -d, NEG_Z),
        v(-w, -h, -d, NEG_Z),
        v(w, h, -d, NEG_Z),
        v(-w, h, -d, NEG_Z),
        v(w, h, -d, NEG_Z),
        v(-w, -h, -d, NEG_Z),
        //
        v(-w, -h, d, POS_Z),
        v(w, -h, d, POS_Z),
        v(w, h, d, POS_Z),
        v(w, h, d, POS_Z),
        v(-w, h, d, POS_Z),
        v(-w, -h, d, POS_Z),
    ]
}

/// The full static scene: floor cube plus the small caster slab
pub fn scene_vertices() -> Vec<Vertex> {
    let mut verts = cube_vertices(Vec3::new(1.0, 1.0, 1.0), Vec3::new(0.0, -1.0, 0.0));
    verts.extend(cube_vertices(Vec3::new(0.3, 0.5, 0.1), Vec3::ZERO));
    verts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_vertex_count() {
        let cube = cube_vertices(Vec3::ONE, Vec3::ZERO);
        assert_eq!(cube.len(), CUBE_VERTEX_COUNT);
        assert_eq!(scene_vertices().len(), SCENE_VERTEX_COUNT);
    }

    #[test]
    fn test_cube_generation_is_deterministic() {
        let half = Vec3::new(0.3, 0.5, 0.1);
        let center = Vec3::new(0.0, -1.0, 0.0);
        assert_eq!(cube_vertices(half, center), cube_vertices(half, center));
    }

    #[test]
    fn test_center_offsets_every_vertex() {
        let cube = cube_vertices(Vec3::ONE, Vec3::new(0.0, -1.0, 0.0));
        for vert in &cube {
            assert!(vert.position[0] >= -1.0 && vert.position[0] <= 1.0);
            assert!(vert.position[1] >= -2.0 && vert.position[1] <= 0.0);
            assert!(vert.position[2] >= -1.0 && vert.position[2] <= 1.0);
        }
    }

    #[test]
    fn test_each_face_keeps_one_color() {
        let cube = cube_vertices(Vec3::ONE, Vec3::ZERO);
        for face in cube.chunks(6) {
            let color = face[0].color;
            assert!(face.iter().all(|v| v.color == color));
        }
        // All six face colors are distinct
        let mut colors: Vec<_> = cube.chunks(6).map(|f| f[0].color.map(|c| c as u8)).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }
}
