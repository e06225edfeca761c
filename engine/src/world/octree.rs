//! Static world index
//!
//! An octree over world triangles, built once when the scene is loaded and
//! immutable afterwards. It answers the single query the movement engine
//! needs: "what is the deepest contact between this capsule and the world?"
//!
//! # Construction
//!
//! The enclosing box of all triangles is subdivided into eight children per
//! node until a node references at most [`MAX_NODE_TRIANGLES`] triangles or
//! [`MAX_DEPTH`] is reached. A triangle is referenced by every leaf whose box
//! overlaps the triangle's bounding box, so a leaf query may report the same
//! triangle through several leaves; query results are deduplicated.
//!
//! # Example
//!
//! ```ignore
//! use gallery_walk_engine::world::{TriangleMesh, WorldIndex};
//! use gallery_walk_engine::physics::Capsule;
//! use glam::Vec3;
//!
//! let mut mesh = TriangleMesh::empty();
//! mesh.push_floor_quad(-20.0, 20.0, -20.0, 20.0, 0.0);
//! let world = WorldIndex::from_mesh(&mesh);
//!
//! let capsule = Capsule::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 2.0, 0.0), 0.7);
//! if let Some(contact) = world.capsule_intersect(&capsule) {
//!     // deepest contact, unit normal, depth >= 0
//! }
//! ```

use glam::Vec3;

use crate::physics::{Capsule, ContactResult, Triangle, triangle_capsule_intersect};
use crate::world::TriangleMesh;

/// Leaf capacity before a node subdivides.
pub const MAX_NODE_TRIANGLES: usize = 8;

/// Maximum subdivision depth of the octree.
pub const MAX_DEPTH: usize = 8;

/// Margin added around the world bounds so boundary triangles sit strictly
/// inside the root box.
const BOUNDS_MARGIN: f32 = 1e-3;

/// Axis-aligned box used for octree nodes and overlap tests.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    fn intersects(&self, other_min: Vec3, other_max: Vec3) -> bool {
        self.min.x <= other_max.x
            && self.max.x >= other_min.x
            && self.min.y <= other_max.y
            && self.max.y >= other_min.y
            && self.min.z <= other_max.z
            && self.max.z >= other_min.z
    }

    /// Returns the i-th octant (i in 0..8) of this box, split at the center.
    fn octant(&self, i: usize) -> Aabb {
        let center = (self.min + self.max) * 0.5;
        let (x0, x1) = if i & 1 == 0 {
            (self.min.x, center.x)
        } else {
            (center.x, self.max.x)
        };
        let (y0, y1) = if i & 2 == 0 {
            (self.min.y, center.y)
        } else {
            (center.y, self.max.y)
        };
        let (z0, z1) = if i & 4 == 0 {
            (self.min.z, center.z)
        } else {
            (center.z, self.max.z)
        };
        Aabb {
            min: Vec3::new(x0, y0, z0),
            max: Vec3::new(x1, y1, z1),
        }
    }
}

/// One octree node. Leaves hold triangle indices; interior nodes hold
/// their non-empty octants.
#[derive(Debug, Clone)]
struct OctreeNode {
    bounds: Aabb,
    triangles: Vec<usize>,
    children: Vec<OctreeNode>,
}

impl OctreeNode {
    fn subdivide(&mut self, triangles: &[Triangle], depth: usize) {
        if self.triangles.len() <= MAX_NODE_TRIANGLES || depth >= MAX_DEPTH {
            return;
        }

        for i in 0..8 {
            let bounds = self.bounds.octant(i);
            let indices: Vec<usize> = self
                .triangles
                .iter()
                .copied()
                .filter(|&t| {
                    let (tri_min, tri_max) = triangles[t].aabb();
                    bounds.intersects(tri_min, tri_max)
                })
                .collect();

            // Empty octants are not stored
            if indices.is_empty() {
                continue;
            }

            let mut child = OctreeNode {
                bounds,
                triangles: indices,
                children: Vec::new(),
            };
            child.subdivide(triangles, depth + 1);
            self.children.push(child);
        }

        self.triangles.clear();
    }

    /// Collects triangle indices from every leaf whose box overlaps the
    /// query box.
    fn collect(&self, query_min: Vec3, query_max: Vec3, out: &mut Vec<usize>) {
        if !self.bounds.intersects(query_min, query_max) {
            return;
        }
        if self.children.is_empty() {
            out.extend_from_slice(&self.triangles);
        } else {
            for child in &self.children {
                child.collect(query_min, query_max, out);
            }
        }
    }

    fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(OctreeNode::count_nodes).sum::<usize>()
    }
}

/// Spatial acceleration structure over static world triangles.
///
/// Read-only after [`WorldIndex::build`]; world geometry is assumed immutable
/// for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct WorldIndex {
    triangles: Vec<Triangle>,
    root: Option<OctreeNode>,
}

impl WorldIndex {
    /// Builds the index from a triangle soup. One-time call at scene load.
    ///
    /// Degenerate triangles (collinear or coincident vertices) are dropped
    /// here so queries never see a surface without a normal.
    pub fn build(triangles: Vec<Triangle>) -> Self {
        let total = triangles.len();
        let triangles: Vec<Triangle> = triangles
            .into_iter()
            .filter(|t| t.normal().is_some())
            .collect();

        let dropped = total - triangles.len();
        if dropped > 0 {
            log::warn!("[WorldIndex] dropped {} degenerate triangles", dropped);
        }

        if triangles.is_empty() {
            return Self {
                triangles,
                root: None,
            };
        }

        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for tri in &triangles {
            let (tri_min, tri_max) = tri.aabb();
            min = min.min(tri_min);
            max = max.max(tri_max);
        }

        let mut root = OctreeNode {
            bounds: Aabb {
                min: min - Vec3::splat(BOUNDS_MARGIN),
                max: max + Vec3::splat(BOUNDS_MARGIN),
            },
            triangles: (0..triangles.len()).collect(),
            children: Vec::new(),
        };
        root.subdivide(&triangles, 0);

        log::info!(
            "[WorldIndex] built octree: {} triangles, {} nodes",
            triangles.len(),
            root.count_nodes()
        );

        Self {
            triangles,
            root: Some(root),
        }
    }

    /// Builds the index from a mesh soup (what a scene loader produces).
    pub fn from_mesh(mesh: &TriangleMesh) -> Self {
        Self::build(mesh.triangles().collect())
    }

    /// Number of triangles held by the index.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the deepest penetrating contact between the capsule and the
    /// world, or `None` if the capsule is free.
    ///
    /// The returned normal is unit length and the depth is non-negative.
    /// Candidate contacts that cannot be normalized are discarded rather
    /// than propagated.
    pub fn capsule_intersect(&self, capsule: &Capsule) -> Option<ContactResult> {
        let root = self.root.as_ref()?;

        let (query_min, query_max) = capsule.aabb();
        let mut candidates = Vec::new();
        root.collect(query_min, query_max, &mut candidates);

        // Triangles spanning several leaves appear more than once
        candidates.sort_unstable();
        candidates.dedup();

        let mut best: Option<ContactResult> = None;
        for index in candidates {
            if let Some(contact) = triangle_capsule_intersect(capsule, &self.triangles[index]) {
                if !contact.is_valid() {
                    continue;
                }
                if best.is_none_or(|b| contact.depth > b.depth) {
                    best = Some(contact);
                }
            }
        }
        best
    }
}
