use crate::procedural::RenderMesh;
use crate::resource::MeshMaterial;
use crate::scene::Transform;
use std::rc::Rc;

/// Identifier of a renderable, unique within the [`SceneRoot`](crate::scene::SceneRoot)
/// that created it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderableId(pub(crate) u64);

/// A drawable unit: shared shape data, its own appearance, its own transform.
///
/// Renderables are only created through [`SceneRoot::add`](crate::scene::SceneRoot::add).
#[derive(Clone, Debug)]
pub struct Renderable {
    id: RenderableId,
    geometry: Rc<RenderMesh>,
    material: MeshMaterial,
    transform: Transform,
}

impl Renderable {
    pub(crate) fn new(
        id: RenderableId,
        geometry: Rc<RenderMesh>,
        material: MeshMaterial,
        transform: Transform,
    ) -> Self {
        Renderable {
            id,
            geometry,
            material,
            transform,
        }
    }

    /// This renderable's identity in its scene root.
    #[inline]
    pub fn id(&self) -> RenderableId {
        self.id
    }

    /// The mesh, possibly shared with other renderables.
    #[inline]
    pub fn geometry(&self) -> &Rc<RenderMesh> {
        &self.geometry
    }

    #[inline]
    pub fn material(&self) -> &MeshMaterial {
        &self.material
    }

    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}
