use crate::builtin::ObjectMaterial;
use crate::procedural::GeometryId;
use crate::renderer::Frame;
use crate::resource::GpuMesh3d;
use crate::scene::SceneRoot;
use std::collections::HashMap;

/// Replays [`Frame`]s on the GPU.
///
/// Meshes are uploaded the first time a geometry is seen, so renderables
/// sharing one geometry share one upload.
pub struct SceneRenderer {
    material: ObjectMaterial,
    meshes: HashMap<GeometryId, GpuMesh3d>,
}

impl SceneRenderer {
    /// A renderer drawing into targets with `sample_count` samples per pixel.
    pub fn new(sample_count: u32) -> SceneRenderer {
        SceneRenderer {
            material: ObjectMaterial::new(sample_count),
            meshes: HashMap::new(),
        }
    }

    /// Uploads the geometries of `root` that are not on the GPU yet, then the
    /// uniforms of `frame`.
    pub fn prepare(&mut self, root: &SceneRoot, frame: &Frame) {
        for renderable in root.iter() {
            let geometry = renderable.geometry();
            self.meshes
                .entry(geometry.id())
                .or_insert_with(|| GpuMesh3d::from_render_mesh(geometry));
        }

        self.material.prepare(frame);
    }

    /// Records the draws of the last prepared `frame` into `pass`.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>, frame: &Frame) {
        for (i, draw) in frame.draws.iter().enumerate() {
            match self.meshes.get(&draw.geometry) {
                Some(mesh) => self.material.render(pass, i, mesh),
                None => log::warn!("geometry {:?} was never uploaded", draw.geometry),
            }
        }
    }
}
