//! The window, and things to handle the rendering loop and events.

mod events;
mod rendering;
mod wgpu_canvas;
mod window;

pub use crate::config::{CanvasSetup, NumSamples};
pub use events::WindowEvent;
pub use wgpu_canvas::WgpuCanvas;
pub use window::Window;
