//! Errors raised while acquiring the drawing surface.

use thiserror::Error;

/// Why a [`Window`](crate::window::Window) could not be opened.
///
/// Only setup can fail. Once a window is open, surface errors are handled
/// per frame and never surface to the caller.
#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("failed to create the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create the window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("failed to create a surface for the window: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no graphics adapter can draw to this surface: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to create the graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("the surface reports no supported texture format")]
    NoSurfaceFormat,

    #[error("no <canvas> element with id {0:?} in the document")]
    CanvasNotFound(String),

    #[error("the page has no browser window or document")]
    NoDocument,
}

pub type CanvasResult<T> = Result<T, CanvasError>;
