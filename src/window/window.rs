//! The window the scene is drawn into.

use std::sync::mpsc::{self, Receiver};

use crate::color::Color;
use crate::config::CanvasSetup;
use crate::context::Context;
use crate::error::CanvasResult;
use crate::renderer::SceneRenderer;
use crate::window::{WgpuCanvas, WindowEvent};

/// A native window, or a `<canvas>` element on the web, that scenes are
/// rendered into.
///
/// Opening a window initializes the thread's wgpu context; dropping it tears
/// the context down.
pub struct Window {
    events: Receiver<WindowEvent>,
    pub(crate) canvas: WgpuCanvas,
    pub(crate) renderer: SceneRenderer,
    pub(crate) background: Color,
    pub(crate) should_close: bool,
}

impl Drop for Window {
    fn drop(&mut self) {
        Context::reset();
    }
}

impl Window {
    /// Opens a window configured by `setup`.
    ///
    /// On the web this binds the canvas whose id is `setup.canvas_id` and
    /// fails if the page has none.
    pub async fn open(setup: &CanvasSetup) -> CanvasResult<Window> {
        let (event_send, event_receive) = mpsc::channel();
        let canvas = WgpuCanvas::open(setup, event_send).await?;
        let renderer = SceneRenderer::new(canvas.sample_count());

        Ok(Window {
            events: event_receive,
            canvas,
            renderer,
            background: setup.background,
            should_close: false,
        })
    }

    /// Indicates whether this window should be closed.
    #[inline]
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// The surface width, in physical pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.canvas.size().0
    }

    /// The surface height, in physical pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.canvas.size().1
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    pub(crate) fn handle_events(&mut self) {
        self.canvas.poll_events();

        for event in self.events.try_iter() {
            match event {
                WindowEvent::Close => {
                    log::info!("close requested");
                    self.should_close = true;
                }
                WindowEvent::FramebufferSize(width, height) => {
                    log::debug!("surface resized to {width}x{height}");
                }
            }
        }
    }
}
