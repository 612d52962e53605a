//! The thread-local wgpu context shared by the window and every GPU resource.

use std::cell::RefCell;
use std::sync::Arc;

// The scene and everything drawn from it live on one thread, so the device
// does too. RefCell<Option<>> lets the window reset it when it closes.
thread_local! {
    static CONTEXT_SINGLETON: RefCell<Option<Context>> = const { RefCell::new(None) };
}

/// The wgpu rendering context containing all GPU resources needed for rendering.
///
/// Cloning is cheap: every handle is behind an `Arc`.
#[derive(Clone)]
pub struct Context {
    /// The wgpu device used for creating GPU resources.
    pub device: Arc<wgpu::Device>,
    /// The wgpu queue used for submitting commands.
    pub queue: Arc<wgpu::Queue>,
    /// The texture format of the window surface.
    pub surface_format: wgpu::TextureFormat,
}

impl Context {
    /// Installs the global wgpu context for this thread, replacing any previous one.
    pub fn init(
        adapter: &wgpu::Adapter,
        device: wgpu::Device,
        queue: wgpu::Queue,
        surface_format: wgpu::TextureFormat,
    ) {
        log::debug!(
            "wgpu context ready on {:?} ({:?})",
            adapter.get_info().name,
            adapter.get_info().backend
        );
        CONTEXT_SINGLETON.with(|cell| {
            *cell.borrow_mut() = Some(Context {
                device: Arc::new(device),
                queue: Arc::new(queue),
                surface_format,
            });
        });
    }

    /// Gets a clone of the global wgpu context.
    ///
    /// # Panics
    /// Panics if the context has not been initialized via `init()`. Every GPU
    /// resource in this crate is created after a [`Window`](crate::window::Window)
    /// has been opened, which initializes it.
    pub fn get() -> Context {
        Self::try_get().expect("wgpu context not initialized: open a Window first")
    }

    /// Gets a clone of the global wgpu context, if one has been initialized.
    pub fn try_get() -> Option<Context> {
        CONTEXT_SINGLETON.with(|cell| cell.borrow().clone())
    }

    /// Drops the global wgpu context and destroys its device.
    pub fn reset() {
        CONTEXT_SINGLETON.with(|cell| {
            if let Some(ctx) = cell.borrow_mut().take() {
                ctx.device.destroy();
            }
        });
    }

    /// Creates a new buffer initialized with data.
    pub fn create_buffer_init(
        &self,
        label: Option<&str>,
        contents: &[u8],
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        use wgpu::util::DeviceExt;
        self.device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label,
                contents,
                usage,
            })
    }

    /// Creates a new, zeroed buffer of `size` bytes.
    pub fn create_buffer(
        &self,
        label: Option<&str>,
        size: u64,
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        self.device.create_buffer(&wgpu::BufferDescriptor {
            label,
            size,
            usage,
            mapped_at_creation: false,
        })
    }

    /// Writes data to a buffer.
    pub fn write_buffer(&self, buffer: &wgpu::Buffer, offset: u64, data: &[u8]) {
        self.queue.write_buffer(buffer, offset, data);
    }

    pub fn create_texture(&self, desc: &wgpu::TextureDescriptor) -> wgpu::Texture {
        self.device.create_texture(desc)
    }

    pub fn create_bind_group_layout(
        &self,
        desc: &wgpu::BindGroupLayoutDescriptor,
    ) -> wgpu::BindGroupLayout {
        self.device.create_bind_group_layout(desc)
    }

    pub fn create_bind_group(&self, desc: &wgpu::BindGroupDescriptor) -> wgpu::BindGroup {
        self.device.create_bind_group(desc)
    }

    pub fn create_pipeline_layout(
        &self,
        desc: &wgpu::PipelineLayoutDescriptor,
    ) -> wgpu::PipelineLayout {
        self.device.create_pipeline_layout(desc)
    }

    pub fn create_render_pipeline(
        &self,
        desc: &wgpu::RenderPipelineDescriptor,
    ) -> wgpu::RenderPipeline {
        self.device.create_render_pipeline(desc)
    }

    /// Creates a new shader module from WGSL source.
    pub fn create_shader_module(&self, label: Option<&str>, source: &str) -> wgpu::ShaderModule {
        self.device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label,
                source: wgpu::ShaderSource::Wgsl(source.into()),
            })
    }

    /// Creates a new command encoder.
    pub fn create_command_encoder(&self, label: Option<&str>) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label })
    }

    /// Submits command buffers to the GPU queue.
    pub fn submit<I: IntoIterator<Item = wgpu::CommandBuffer>>(&self, command_buffers: I) {
        self.queue.submit(command_buffers);
    }

    /// Gets the depth texture format used for depth attachments.
    pub fn depth_format() -> wgpu::TextureFormat {
        wgpu::TextureFormat::Depth32Float
    }
}
