//! Unified wgpu-based canvas for both native and web platforms.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::config::CanvasSetup;
use crate::context::Context;
use crate::error::{CanvasError, CanvasResult};
use crate::window::WindowEvent;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowAttributes};

#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;
#[cfg(not(target_arch = "wasm32"))]
use winit::application::ApplicationHandler;
#[cfg(not(target_arch = "wasm32"))]
use winit::event::WindowEvent as WinitWindowEvent;
#[cfg(not(target_arch = "wasm32"))]
use winit::event_loop::ActiveEventLoop;

// winit allows a single EventLoop per program and it is neither Send nor Sync.
#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static EVENT_LOOP: RefCell<Option<EventLoop<()>>> = const { RefCell::new(None) };
    static PENDING_EVENTS: RefCell<Vec<WindowEvent>> = const { RefCell::new(Vec::new()) };
}

/// A window (native) or an existing `<canvas>` (web) with a configured wgpu
/// surface and a matching depth buffer.
pub struct WgpuCanvas {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    out_events: Sender<WindowEvent>,
    depth_view: wgpu::TextureView,
    msaa_view: Option<wgpu::TextureView>,
    sample_count: u32,
}

impl WgpuCanvas {
    /// Opens the window, or binds the canvas, and initializes the wgpu context.
    pub async fn open(setup: &CanvasSetup, out_events: Sender<WindowEvent>) -> CanvasResult<Self> {
        let window_attrs = WindowAttributes::default()
            .with_title(setup.title.as_str())
            .with_inner_size(LogicalSize::new(setup.width as f64, setup.height as f64));

        #[cfg(not(target_arch = "wasm32"))]
        let window = EVENT_LOOP.with(|cell| -> CanvasResult<Window> {
            let mut slot = cell.borrow_mut();
            let event_loop = match slot.take() {
                Some(event_loop) => event_loop,
                None => EventLoop::new()?,
            };
            #[allow(deprecated)]
            let window = event_loop.create_window(window_attrs);
            *slot = Some(event_loop);
            Ok(window?)
        })?;

        #[cfg(target_arch = "wasm32")]
        let window = {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            let events = EventLoop::new()?;
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(CanvasError::NoDocument)?;
            let canvas = document
                .get_element_by_id(&setup.canvas_id)
                .and_then(|elem| elem.dyn_into::<web_sys::HtmlCanvasElement>().ok())
                .ok_or_else(|| CanvasError::CanvasNotFound(setup.canvas_id.clone()))?;

            // The page decides the canvas size; only fall back to the setup
            // when it has not been laid out yet.
            let (width, height) = (canvas.client_width(), canvas.client_height());
            let window_attrs = if width > 0 && height > 0 {
                window_attrs.with_inner_size(LogicalSize::new(width as f64, height as f64))
            } else {
                window_attrs
            };

            #[allow(deprecated)]
            events.create_window(window_attrs.with_canvas(Some(canvas)))?
        };

        let window = Arc::new(window);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        // WebGL2 compatibility
        #[cfg(target_arch = "wasm32")]
        let limits = wgpu::Limits::downlevel_webgl2_defaults();
        #[cfg(not(target_arch = "wasm32"))]
        let limits = wgpu::Limits::default();

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("cubescene device"),
                required_features: wgpu::Features::empty(),
                required_limits: limits,
                ..Default::default()
            })
            .await?;

        // Non-sRGB formats behave the same on native and WebGL2; the shader
        // does the gamma encoding.
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(CanvasError::NoSurfaceFormat)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let sample_count =
            Self::supported_sample_count(&adapter, surface_format, setup.samples.count());

        Context::init(&adapter, device, queue, surface_format);
        let ctxt = Context::get();

        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let present_mode = if setup.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&ctxt.device, &surface_config);

        let depth_view = Self::create_depth_view(width, height, sample_count);
        let msaa_view = Self::create_msaa_view(width, height, surface_format, sample_count);

        log::info!(
            "surface configured: {}x{} {:?} ({:?}, {}x MSAA)",
            width,
            height,
            surface_format,
            present_mode,
            sample_count
        );

        Ok(WgpuCanvas {
            window,
            surface,
            surface_config,
            out_events,
            depth_view,
            msaa_view,
            sample_count,
        })
    }

    /// The largest count up to `requested` usable for both the surface and
    /// the depth format.
    fn supported_sample_count(
        adapter: &wgpu::Adapter,
        surface_format: wgpu::TextureFormat,
        requested: u32,
    ) -> u32 {
        let color = adapter.get_texture_format_features(surface_format).flags;
        let depth = adapter
            .get_texture_format_features(Context::depth_format())
            .flags;

        let mut count = requested.max(1);
        while count > 1
            && !(color.sample_count_supported(count) && depth.sample_count_supported(count))
        {
            count /= 2;
        }
        if count != requested {
            log::warn!("{requested}x MSAA is not supported, using {count}x");
        }
        count
    }

    // Views keep their texture alive.
    fn create_depth_view(width: u32, height: u32, sample_count: u32) -> wgpu::TextureView {
        let texture = Context::get().create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: Context::depth_format(),
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn create_msaa_view(
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Option<wgpu::TextureView> {
        if sample_count <= 1 {
            return None;
        }

        let texture = Context::get().create_texture(&wgpu::TextureDescriptor {
            label: Some("msaa_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        Some(texture.create_view(&wgpu::TextureViewDescriptor::default()))
    }

    /// Reconfigures the surface and the depth buffer for a new size.
    ///
    /// Zero-sized requests are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure();

        self.depth_view = Self::create_depth_view(width, height, self.sample_count);
        self.msaa_view =
            Self::create_msaa_view(width, height, self.surface_config.format, self.sample_count);
    }

    /// Applies the current configuration to the surface again.
    ///
    /// Needed after the surface reported itself lost or outdated.
    pub fn reconfigure(&self) {
        self.surface
            .configure(&Context::get().device, &self.surface_config);
    }

    /// Forwards the events received since the last call to the window.
    pub fn poll_events(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use winit::platform::pump_events::EventLoopExtPumpEvents;

            struct EventCollector;

            impl ApplicationHandler for EventCollector {
                fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

                fn window_event(
                    &mut self,
                    _event_loop: &ActiveEventLoop,
                    _window_id: winit::window::WindowId,
                    event: WinitWindowEvent,
                ) {
                    let event = match event {
                        WinitWindowEvent::CloseRequested => WindowEvent::Close,
                        WinitWindowEvent::Resized(size) if size.width > 0 && size.height > 0 => {
                            WindowEvent::FramebufferSize(size.width, size.height)
                        }
                        _ => return,
                    };
                    PENDING_EVENTS.with(|pending| pending.borrow_mut().push(event));
                }
            }

            EVENT_LOOP.with(|cell| {
                if let Some(ref mut event_loop) = *cell.borrow_mut() {
                    let _ = event_loop
                        .pump_app_events(Some(std::time::Duration::ZERO), &mut EventCollector);
                }
            });

            let events = PENDING_EVENTS.with(|pending| std::mem::take(&mut *pending.borrow_mut()));
            for event in events {
                if let WindowEvent::FramebufferSize(width, height) = event {
                    self.resize(width, height);
                }
                let _ = self.out_events.send(event);
            }
        }

        // The browser resizes the canvas behind winit's back; compare sizes instead.
        #[cfg(target_arch = "wasm32")]
        {
            let size = self.window.inner_size();
            if size.width > 0
                && size.height > 0
                && (size.width != self.surface_config.width
                    || size.height != self.surface_config.height)
            {
                self.resize(size.width, size.height);
                let _ = self
                    .out_events
                    .send(WindowEvent::FramebufferSize(size.width, size.height));
            }
        }
    }

    pub fn get_current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Asks the windowing system for the next frame, then presents this one.
    pub fn present(&self, frame: wgpu::SurfaceTexture) {
        self.window.pre_present_notify();
        frame.present();
    }

    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// The multisampled color target, when anti-aliasing is on.
    pub fn msaa_view(&self) -> Option<&wgpu::TextureView> {
        self.msaa_view.as_ref()
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_config.format
    }

    /// The size of the surface, in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }
}
