//! GPU-side copy of a [`RenderMesh`].

use crate::context::Context;
use crate::procedural::{GeometryId, RenderMesh};
use bytemuck::{Pod, Zeroable};

/// Interleaved vertex layout shared with `object.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub(crate) struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl GpuVertex {
    pub(crate) const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// A mesh uploaded to the GPU: one interleaved vertex buffer and one index buffer.
///
/// Uploads are immutable; the demo never edits geometry after creation.
pub struct GpuMesh3d {
    geometry: GeometryId,
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    num_indices: u32,
}

impl GpuMesh3d {
    /// Uploads `mesh` using the global context.
    pub fn from_render_mesh(mesh: &RenderMesh) -> GpuMesh3d {
        let ctxt = Context::get();

        let vertices: Vec<GpuVertex> = mesh
            .coords()
            .iter()
            .zip(mesh.normals())
            .map(|(c, n)| GpuVertex {
                position: c.to_array(),
                normal: n.to_array(),
            })
            .collect();

        let vertex_buffer = ctxt.create_buffer_init(
            Some("gpu_mesh_vertices"),
            bytemuck::cast_slice(&vertices),
            wgpu::BufferUsages::VERTEX,
        );
        let index_buffer = ctxt.create_buffer_init(
            Some("gpu_mesh_indices"),
            bytemuck::cast_slice(mesh.indices()),
            wgpu::BufferUsages::INDEX,
        );

        log::debug!(
            "uploaded geometry {:?}: {} vertices, {} triangles",
            mesh.id(),
            vertices.len(),
            mesh.indices().len()
        );

        GpuMesh3d {
            geometry: mesh.id(),
            vertices: vertex_buffer,
            indices: index_buffer,
            num_indices: (mesh.indices().len() * 3) as u32,
        }
    }

    /// The geometry this upload was made from.
    #[inline]
    pub fn geometry(&self) -> GeometryId {
        self.geometry
    }

    /// The interleaved position/normal buffer.
    #[inline]
    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertices
    }

    /// The `u32` index buffer.
    #[inline]
    pub fn index_buffer(&self) -> &wgpu::Buffer {
        &self.indices
    }

    /// Number of indices to draw.
    #[inline]
    pub fn num_indices(&self) -> u32 {
        self.num_indices
    }
}
