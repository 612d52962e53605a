use glamx::Vec3;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GEOMETRY_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identifier of a [`RenderMesh`].
///
/// GPU buffers are cached per id, so two renderables holding the same
/// `Rc<RenderMesh>` share one upload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeometryId(u64);

impl GeometryId {
    fn next() -> Self {
        GeometryId(NEXT_GEOMETRY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Geometric description of a mesh, kept on the CPU.
///
/// Vertices, normals and indices share one index buffer. Each constructor call
/// allocates a fresh [`GeometryId`], so clones of a mesh keep their id while
/// independently built meshes never collide.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderMesh {
    id: GeometryId,
    coords: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
}

impl RenderMesh {
    /// Creates a mesh from per-vertex data sharing one index buffer.
    ///
    /// # Panics
    /// Panics if `coords` and `normals` have different lengths.
    pub fn new(coords: Vec<Vec3>, normals: Vec<Vec3>, indices: Vec<[u32; 3]>) -> RenderMesh {
        assert_eq!(
            coords.len(),
            normals.len(),
            "every vertex needs exactly one normal"
        );
        RenderMesh {
            id: GeometryId::next(),
            coords,
            normals,
            indices,
        }
    }

    /// Creates a mesh whose triangles index positions and normals separately.
    ///
    /// Each corner is `[vertex_idx, normal_idx]`. Distinct pairs become distinct
    /// vertices of the unified buffer; repeated pairs are shared.
    pub fn from_split(coords: &[Vec3], normals: &[Vec3], faces: &[[[u32; 2]; 3]]) -> RenderMesh {
        let mut pair2id: HashMap<[u32; 2], u32> = HashMap::new();
        let mut resc = Vec::new();
        let mut resn = Vec::new();
        let mut resi = Vec::with_capacity(faces.len());

        for triangle in faces {
            let mut unified = [0u32; 3];
            for (corner, pair) in unified.iter_mut().zip(triangle.iter()) {
                *corner = *pair2id.entry(*pair).or_insert_with(|| {
                    resc.push(coords[pair[0] as usize]);
                    resn.push(normals[pair[1] as usize]);
                    resc.len() as u32 - 1
                });
            }
            resi.push(unified);
        }

        RenderMesh::new(resc, resn, resi)
    }

    /// The identifier GPU caches key this mesh on.
    #[inline]
    pub fn id(&self) -> GeometryId {
        self.id
    }

    /// Coordinates of the mesh vertices.
    #[inline]
    pub fn coords(&self) -> &[Vec3] {
        &self.coords
    }

    /// Per-vertex normals.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Triangles, as indices into `coords` and `normals`.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Scales every vertex component-wise. Normals are left untouched, which
    /// is only correct for axis-aligned faces.
    pub fn scale_by(&mut self, scale: Vec3) {
        for c in self.coords.iter_mut() {
            *c *= scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_but_survive_clones() {
        let a = RenderMesh::new(vec![Vec3::ZERO], vec![Vec3::Z], vec![]);
        let b = RenderMesh::new(vec![Vec3::ZERO], vec![Vec3::Z], vec![]);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn split_faces_share_repeated_pairs() {
        let coords = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE];
        let normals = [Vec3::Z];
        let faces = [
            [[0, 0], [1, 0], [2, 0]],
            [[1, 0], [3, 0], [2, 0]],
        ];
        let mesh = RenderMesh::from_split(&coords, &normals, &faces);
        assert_eq!(mesh.coords().len(), 4);
        assert_eq!(mesh.indices(), &[[0, 1, 2], [1, 3, 2]]);
    }
}
