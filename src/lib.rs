/*!
# cubescene

A row of tinted cubes spinning in front of a perspective camera, drawn with
wgpu into a native window or an HTML `<canvas>`.

The crate is split in two halves:

* the **scene** side is plain data: a [`SceneRoot`](scene::SceneRoot) holds
  renderables (a shared [`RenderMesh`](procedural::RenderMesh), a
  [`MeshMaterial`](resource::MeshMaterial) and a [`Transform`](scene::Transform)),
  the [assembler](assembler::assemble) fills it from `(color, offset)` pairs and
  the [`FrameDriver`](driver::FrameDriver) rotates every renderable from the
  elapsed time;
* the **GPU** side turns that scene into a [`Frame`](renderer::Frame) draw list
  and replays it through a [`Window`](window::Window).

Putting it together:

```no_run
use cubescene::prelude::*;

async fn run() -> Result<(), CanvasError> {
    let config = DemoConfig::default();
    let mut window = Window::open(&config.canvas).await?;
    let camera = demo::camera(&config.camera, Some((window.width(), window.height())));
    let mut root = demo::scene(&config);

    FrameDriver::new(WallClock::new())
        .run(&mut window, &mut root, &camera)
        .await;
    Ok(())
}
```

The loop is the same on every platform. On native targets each frame returns
after a vsync'd present and the future is driven with `pollster`. On WASM each
frame awaits `requestAnimationFrame` and the future is spawned with
`wasm-bindgen-futures`.
*/
#![allow(clippy::module_inception)]

pub use glamx;

pub mod assembler;
pub mod builtin;
pub mod camera;
pub mod color;
pub mod config;
pub mod context;
pub mod demo;
pub mod driver;
pub mod error;
pub mod light;
pub mod procedural;
pub mod renderer;
pub mod resource;
pub mod scene;
pub mod window;

pub mod prelude {
    pub use crate::assembler::{assemble, CubeSpec};
    pub use crate::camera::*;
    pub use crate::color::{self, Color};
    pub use crate::config::{CameraSetup, CanvasSetup, DemoConfig, NumSamples};
    pub use crate::demo;
    pub use crate::driver::*;
    pub use crate::error::CanvasError;
    pub use crate::light::*;
    pub use crate::procedural::*;
    pub use crate::renderer::*;
    pub use crate::resource::{MeshMaterial, Shading};
    pub use crate::scene::*;
    pub use crate::window::{Window, WindowEvent};
    pub use glamx::{Mat4, Quat, Vec2, Vec3};
    pub use std::rc::Rc;
}
