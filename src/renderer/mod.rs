//! Turning a scene into draw calls.

pub use self::frame::{DrawCommand, Frame};
pub use self::scene_renderer::SceneRenderer;

mod frame;
mod scene_renderer;
