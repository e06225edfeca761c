//! Triangle soup world geometry
//!
//! A [`TriangleMesh`] is the flattened form of a scene graph: positions plus
//! index triples, with no materials, hierarchy, or animation. It is what a
//! scene loader hands over to build the collision world, and it is the only
//! geometry representation the engine understands.
//!
//! The mesh serializes with serde so collision worlds can be shipped as
//! plain JSON next to the rendered assets.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::Triangle;

/// Indexed triangle soup.
///
/// Winding is counter-clockwise; surface normals derived from it must point
/// out of walkable geometry for floor classification to work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    positions: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Creates a mesh from position and index buffers.
    pub fn new(positions: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Self {
        debug_assert!(
            indices
                .iter()
                .flatten()
                .all(|&i| (i as usize) < positions.len()),
            "mesh index out of range"
        );
        Self { positions, indices }
    }

    /// Creates an empty mesh.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a free-standing triangle, returning its index.
    pub fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) -> usize {
        let base = self.positions.len() as u32;
        self.positions.extend([a, b, c]);
        self.indices.push([base, base + 1, base + 2]);
        self.indices.len() - 1
    }

    /// Appends an axis-aligned horizontal quad at height `y`, spanning
    /// `[min_x, max_x] x [min_z, max_z]`, wound so the normal points +Y.
    pub fn push_floor_quad(&mut self, min_x: f32, max_x: f32, min_z: f32, max_z: f32, y: f32) {
        let a = Vec3::new(min_x, y, min_z);
        let b = Vec3::new(min_x, y, max_z);
        let c = Vec3::new(max_x, y, max_z);
        let d = Vec3::new(max_x, y, min_z);
        self.push_triangle(a, b, c);
        self.push_triangle(a, c, d);
    }

    /// Number of triangles in the mesh.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the mesh holds no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates over the triangles of the mesh.
    ///
    /// Index triples referring past the position buffer are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices.iter().filter_map(|&[ia, ib, ic]| {
            let a = self.positions.get(ia as usize)?;
            let b = self.positions.get(ib as usize)?;
            let c = self.positions.get(ic as usize)?;
            Some(Triangle::new(*a, *b, *c))
        })
    }

    /// Deserializes a mesh from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
