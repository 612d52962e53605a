//! Drawing one frame and handing control back to the host.

use crate::camera::Camera3d;
use crate::context::Context;
use crate::driver::FramePresenter;
use crate::renderer::Frame;
use crate::scene::SceneRoot;

use super::Window;

/// How long a frame that could not be drawn waits before the next attempt.
#[cfg(not(target_arch = "wasm32"))]
const SKIPPED_FRAME_WAIT: std::time::Duration = std::time::Duration::from_millis(16);

impl Window {
    /// Renders one frame of `root` seen from `camera`.
    ///
    /// Returns `false`, without drawing, once the window should close.
    ///
    /// # Example
    /// ```no_run
    /// use cubescene::prelude::*;
    ///
    /// async fn show(root: SceneRoot) -> Result<(), CanvasError> {
    ///     let mut window = Window::open(&CanvasSetup::default()).await?;
    ///     let camera = PerspectiveCamera3d::default();
    ///
    ///     while window.render_3d(&root, &camera).await {
    ///         // Per-frame updates go here.
    ///     }
    ///     Ok(())
    /// }
    /// ```
    ///
    /// # Platform-specific
    /// - **Native**: returns after presenting, which waits for vsync when it is
    ///   enabled. A frame the surface could not take sleeps for about one
    ///   display refresh instead.
    /// - **WASM**: yields to the browser and returns at the next animation
    ///   frame. If no animation frame can be requested the window closes, so
    ///   the next call returns `false`.
    pub async fn render_3d(&mut self, root: &SceneRoot, camera: &dyn Camera3d) -> bool {
        self.handle_events();
        if self.should_close() {
            return false;
        }

        let frame = Frame::build(root, camera);
        let drawn = self.draw(root, &frame);

        #[cfg(not(target_arch = "wasm32"))]
        if !drawn {
            std::thread::sleep(SKIPPED_FRAME_WAIT);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = drawn;

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use web_sys::wasm_bindgen::closure::Closure;

            match web_sys::window() {
                Some(window) => {
                    let (s, r) = oneshot::channel();
                    let closure = Closure::once(move || {
                        let _ = s.send(());
                    });

                    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                        Ok(_) => {
                            let _ = r.await;
                        }
                        Err(e) => {
                            log::error!("requestAnimationFrame failed: {e:?}");
                            self.should_close = true;
                        }
                    }
                }
                None => {
                    log::error!("no browser window to schedule frames on");
                    self.should_close = true;
                }
            }
        }

        true
    }

    /// Draws `frame` to the surface. Returns `false` when the surface had no
    /// texture to draw into.
    fn draw(&mut self, root: &SceneRoot, frame: &Frame) -> bool {
        let surface_texture = match self.canvas.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost or outdated, reconfiguring");
                self.canvas.reconfigure();
                return false;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::trace!("surface timed out, skipping frame");
                return false;
            }
            Err(e) => {
                log::warn!("failed to acquire surface texture: {e}");
                return false;
            }
        };
        let color_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.prepare(root, frame);

        let ctxt = Context::get();
        let mut encoder = ctxt.create_command_encoder(Some("cubescene_frame_encoder"));
        {
            let bg = self.background;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: self.canvas.msaa_view().unwrap_or(&color_view),
                    resolve_target: self.canvas.msaa_view().map(|_| &color_view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg.r as f64,
                            g: bg.g as f64,
                            b: bg.b as f64,
                            a: bg.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.canvas.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer.render(&mut pass, frame);
        }

        ctxt.submit(std::iter::once(encoder.finish()));
        self.canvas.present(surface_texture);
        true
    }
}

impl FramePresenter for Window {
    async fn present(&mut self, root: &SceneRoot, camera: &dyn Camera3d) -> bool {
        self.render_3d(root, camera).await
    }
}
