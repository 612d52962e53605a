//! The scene: renderables, their transforms, and the root that owns them.

pub use self::renderable::{Renderable, RenderableId};
pub use self::scene_root::SceneRoot;
pub use self::transform::Transform;

mod renderable;
mod scene_root;
mod transform;
