use crate::color;
use crate::context::Context;
use crate::light::MAX_LIGHTS;
use crate::renderer::Frame;
use crate::resource::{DynamicUniformBuffer, GpuMesh3d, GpuVertex};
use bytemuck::{Pod, Zeroable};
use glamx::{Mat3, Mat4};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct GpuLight {
    direction: [f32; 3],
    intensity: f32,
    color: [f32; 3],
    _pad: f32,
}

/// Layout must match `FrameUniforms` in object.wgsl (288 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct FrameUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    eye: [f32; 3],
    num_lights: u32,
    lights: [GpuLight; MAX_LIGHTS],
    ambient: f32,
    _pad: [f32; 3],
}

/// Layout must match `ObjectUniforms` in object.wgsl (144 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct ObjectUniforms {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 3], // mat3x3 padded to mat3x4
    color: [f32; 4],
    shading: u32,
    shininess: f32,
    _pad: [f32; 2],
}

impl FrameUniforms {
    fn new(frame: &Frame) -> Self {
        let mut lights = [GpuLight::zeroed(); MAX_LIGHTS];
        for (gpu, light) in lights.iter_mut().zip(&frame.lights) {
            *gpu = GpuLight {
                direction: light.direction().to_array(),
                intensity: light.intensity,
                color: [light.color.r, light.color.g, light.color.b],
                _pad: 0.0,
            };
        }

        FrameUniforms {
            view: frame.view.to_cols_array_2d(),
            proj: frame.projection.to_cols_array_2d(),
            eye: frame.eye.to_array(),
            num_lights: frame.lights.len().min(MAX_LIGHTS) as u32,
            lights,
            ambient: frame.ambient,
            _pad: [0.0; 3],
        }
    }
}

fn normal_matrix(model: &Mat4) -> [[f32; 4]; 3] {
    let n = Mat3::from_mat4(*model).inverse().transpose();
    [n.x_axis.extend(0.0), n.y_axis.extend(0.0), n.z_axis.extend(0.0)].map(|c| c.to_array())
}

/// The pipeline drawing every renderable.
///
/// Frame uniforms (camera and lights) are written once per frame. Object
/// uniforms are batched into a [`DynamicUniformBuffer`] and selected per draw
/// with a dynamic offset.
pub struct ObjectMaterial {
    pipeline: wgpu::RenderPipeline,
    frame_uniform_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_bind_group_layout: wgpu::BindGroupLayout,
    object_uniform_buffer: DynamicUniformBuffer<ObjectUniforms>,
    object_bind_group: wgpu::BindGroup,
    offsets: Vec<u32>,
}

impl ObjectMaterial {
    /// Creates the pipeline for the current surface format and the given
    /// multisampling.
    pub fn new(sample_count: u32) -> ObjectMaterial {
        let ctxt = Context::get();

        let frame_bind_group_layout =
            ctxt.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("object_material_frame_bind_group_layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let object_bind_group_layout =
            ctxt.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("object_material_object_bind_group_layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let pipeline_layout = ctxt.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("object_material_pipeline_layout"),
            bind_group_layouts: &[&frame_bind_group_layout, &object_bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = ctxt.create_shader_module(Some("object_material_shader"), OBJECT_SRC);

        let pipeline = ctxt.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("object_material_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[GpuVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctxt.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: Context::depth_format(),
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: sample_count.max(1),
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let frame_uniform_buffer = ctxt.create_buffer(
            Some("object_material_frame_uniforms"),
            std::mem::size_of::<FrameUniforms>() as u64,
            wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        );

        let frame_bind_group = ctxt.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("object_material_frame_bind_group"),
            layout: &frame_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_uniform_buffer.as_entire_binding(),
            }],
        });

        let object_uniform_buffer =
            DynamicUniformBuffer::<ObjectUniforms>::new("object_material_object_uniforms");
        let object_bind_group =
            Self::create_object_bind_group(&object_bind_group_layout, &object_uniform_buffer);

        ObjectMaterial {
            pipeline,
            frame_uniform_buffer,
            frame_bind_group,
            object_bind_group_layout,
            object_uniform_buffer,
            object_bind_group,
            offsets: Vec::new(),
        }
    }

    fn create_object_bind_group(
        layout: &wgpu::BindGroupLayout,
        buffer: &DynamicUniformBuffer<ObjectUniforms>,
    ) -> wgpu::BindGroup {
        Context::get().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("object_material_object_bind_group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.binding(),
            }],
        })
    }

    /// Uploads the uniforms of every draw in `frame`.
    ///
    /// Must be called before the render pass that replays `frame` is opened.
    pub fn prepare(&mut self, frame: &Frame) {
        let ctxt = Context::get();

        ctxt.write_buffer(
            &self.frame_uniform_buffer,
            0,
            bytemuck::bytes_of(&FrameUniforms::new(frame)),
        );

        self.object_uniform_buffer.clear();
        self.offsets.clear();
        for draw in &frame.draws {
            let uniforms = ObjectUniforms {
                model: draw.model.to_cols_array_2d(),
                normal: normal_matrix(&draw.model),
                color: color::to_array(draw.color),
                shading: draw.shading.shader_mode(),
                shininess: draw.shininess,
                _pad: [0.0; 2],
            };
            self.offsets.push(self.object_uniform_buffer.push(&uniforms));
        }

        if self.object_uniform_buffer.flush() {
            self.object_bind_group = Self::create_object_bind_group(
                &self.object_bind_group_layout,
                &self.object_uniform_buffer,
            );
        }
    }

    /// Draws the `index`-th draw of the last prepared frame with `mesh`.
    pub fn render(&self, pass: &mut wgpu::RenderPass<'_>, index: usize, mesh: &GpuMesh3d) {
        let Some(&offset) = self.offsets.get(index) else {
            log::warn!("draw {index} was not prepared");
            return;
        };

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.frame_bind_group, &[]);
        pass.set_bind_group(1, &self.object_bind_group, &[offset]);
        pass.set_vertex_buffer(0, mesh.vertex_buffer().slice(..));
        pass.set_index_buffer(mesh.index_buffer().slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..mesh.num_indices(), 0, 0..1);
    }
}

/// Source of the object shader.
pub static OBJECT_SRC: &str = include_str!("object.wgsl");
