//! Built-in materials.

pub use self::object_material::{ObjectMaterial, OBJECT_SRC};

mod object_material;
