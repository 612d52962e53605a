//! Materials and GPU resources.

pub use crate::resource::dynamic_buffer::DynamicUniformBuffer;
pub use crate::resource::gpu_mesh3d::GpuMesh3d;
pub(crate) use crate::resource::gpu_mesh3d::GpuVertex;
pub use crate::resource::material::{MeshMaterial, Shading};

mod dynamic_buffer;
mod gpu_mesh3d;
mod material;
