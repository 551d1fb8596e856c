//! Triangle-mesh collision geometry
//!
//! Meshes are stored in model space and transformed per-triangle on the fly
//! during queries, so a single mesh can back any number of instances. The
//! queries themselves never allocate; only construction does.

use crate::foundation::math::{Mat4, Vec3};

use super::primitives::Triangle;

/// Errors raised while building collision geometry from raw buffers
#[derive(thiserror::Error, Debug)]
pub enum MeshError {
    /// An index referenced a vertex past the end of the vertex buffer
    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        /// The offending index value
        index: u32,
        /// Number of vertices supplied
        vertex_count: usize,
    },

    /// The index buffer length was not a multiple of three
    #[error("index buffer length {len} is not a multiple of 3")]
    TruncatedIndices {
        /// Length of the supplied index buffer
        len: usize,
    },
}

/// A triangle soup for collision queries, stored in model space
///
/// Built once from vertex positions and triangle indices; read-only
/// afterwards. An empty mesh is valid and every query against it reports
/// "no hit".
#[derive(Debug, Clone, Default)]
pub struct CollisionMesh {
    triangles: Vec<Triangle>,
}

impl CollisionMesh {
    /// Build a mesh from vertex positions and triangle indices
    ///
    /// Validates that the index buffer is a whole number of triangles and
    /// that every index is in range.
    pub fn new(vertices: &[Vec3], indices: &[u32]) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::TruncatedIndices { len: indices.len() });
        }

        let mut triangles = Vec::with_capacity(indices.len() / 3);
        for chunk in indices.chunks_exact(3) {
            let mut corners = [Vec3::zeros(); 3];
            for (corner, &index) in corners.iter_mut().zip(chunk) {
                *corner = *vertices.get(index as usize).ok_or(MeshError::IndexOutOfBounds {
                    index,
                    vertex_count: vertices.len(),
                })?;
            }
            triangles.push(Triangle::new(corners[0], corners[1], corners[2]));
        }

        log::debug!("built collision mesh with {} triangles", triangles.len());
        Ok(Self { triangles })
    }

    /// Number of triangles in the mesh
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh carries no geometry
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Model-space triangles
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterate the triangles transformed into world space by `matrix`
    ///
    /// Transforms lazily so queries that early-out (or meshes queried with
    /// many different transforms) never pay for a full copy.
    pub fn triangles_world<'a>(&'a self, matrix: &'a Mat4) -> impl Iterator<Item = Triangle> + 'a {
        self.triangles.iter().map(move |tri| tri.transformed(matrix))
    }
}

/// CPU-side collision geometry for a model made of one or more meshes
///
/// Mirrors how engines pair a render model with optional collision data: a
/// model with no meshes is valid and raycasts against it simply miss.
#[derive(Debug, Clone, Default)]
pub struct Model {
    meshes: Vec<CollisionMesh>,
}

impl Model {
    /// Create a model from its collision meshes
    pub fn new(meshes: Vec<CollisionMesh>) -> Self {
        Self { meshes }
    }

    /// The model's collision meshes
    pub fn meshes(&self) -> &[CollisionMesh] {
        &self.meshes
    }

    /// Whether the model carries no CPU-side collision geometry
    pub fn is_empty(&self) -> bool {
        self.meshes.iter().all(CollisionMesh::is_empty)
    }
}
