//! Procedural mesh generation.

pub use self::cuboid::{cuboid, unit_cuboid};
pub use self::render_mesh::{GeometryId, RenderMesh};

mod cuboid;
mod render_mesh;
