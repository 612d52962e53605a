use crate::light::DirectionalLight;
use crate::procedural::RenderMesh;
use crate::resource::MeshMaterial;
use crate::scene::{Renderable, RenderableId, Transform};
use std::rc::Rc;

/// The container of everything drawn in a frame.
///
/// Renderables keep their insertion order, which is also the index the frame
/// driver animates them by. Nothing is ever removed.
#[derive(Clone, Debug)]
pub struct SceneRoot {
    renderables: Vec<Renderable>,
    lights: Vec<DirectionalLight>,
    ambient: f32,
    next_id: u64,
}

impl Default for SceneRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRoot {
    /// An empty scene without lights or ambient term.
    pub fn new() -> SceneRoot {
        SceneRoot {
            renderables: Vec::new(),
            lights: Vec::new(),
            ambient: 0.0,
            next_id: 0,
        }
    }

    /// Adds a renderable and returns its identity.
    pub fn add(
        &mut self,
        geometry: Rc<RenderMesh>,
        material: MeshMaterial,
        transform: Transform,
    ) -> RenderableId {
        let id = RenderableId(self.next_id);
        self.next_id += 1;
        self.renderables
            .push(Renderable::new(id, geometry, material, transform));
        id
    }

    /// Adds a directional light.
    pub fn add_light(&mut self, light: DirectionalLight) {
        self.lights.push(light);
    }

    /// Number of renderables.
    #[inline]
    pub fn len(&self) -> usize {
        self.renderables.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.renderables.is_empty()
    }

    /// Renderables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Renderable> {
        self.renderables.iter()
    }

    /// Mutable renderables in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Renderable> {
        self.renderables.iter_mut()
    }

    pub fn get(&self, id: RenderableId) -> Option<&Renderable> {
        self.renderables.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: RenderableId) -> Option<&mut Renderable> {
        self.renderables.iter_mut().find(|r| r.id() == id)
    }

    #[inline]
    pub fn lights(&self) -> &[DirectionalLight] {
        &self.lights
    }

    /// Intensity of the light reaching every surface regardless of orientation.
    #[inline]
    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    pub fn set_ambient(&mut self, ambient: f32) {
        self.ambient = ambient;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedural::unit_cuboid;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_ordered() {
        let mesh = Rc::new(unit_cuboid());
        let mut root = SceneRoot::new();
        let ids: Vec<_> = (0..5)
            .map(|_| root.add(mesh.clone(), MeshMaterial::default(), Transform::IDENTITY))
            .collect();

        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 5);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(root.iter().map(|r| r.id()).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn lookups_by_id() {
        let mut root = SceneRoot::new();
        let id = root.add(
            Rc::new(unit_cuboid()),
            MeshMaterial::default(),
            Transform::IDENTITY,
        );
        root.get_mut(id).unwrap().transform_mut().rotation.x = 1.0;
        assert_eq!(root.get(id).unwrap().transform().rotation.x, 1.0);
        assert!(root.get(RenderableId(99)).is_none());
    }
}
