//! Fractal renderer.
//!
//! Draws a full-screen quad whose fragment shader runs the escape-time
//! iteration per pixel. All per-frame state travels in one uniform buffer:
//! the projection matrix plus the evaluator parameters.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use seahorse_engine::render::{RenderCtx, RenderTarget};

use crate::fractal::{ColorMode, MAX_ITERATIONS};

/// Quad corner positions in `[-1, 1]^2`; the vertex shader derives the complex
/// coordinate from these, so they double as the fractal's parameter domain.
const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [-1.0, -1.0, 0.0] },
    QuadVertex { pos: [1.0, -1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0, 0.0] },
    QuadVertex { pos: [-1.0, 1.0, 0.0] },
];

const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// GPU resources for the fractal pass.
///
/// Resources are created lazily on first use and recreated when the surface
/// format changes (e.g. after the window moves to another monitor).
#[derive(Default)]
pub struct FractalRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    params_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,
}

impl FractalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one frame of the fractal with the given projection and mode.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        projection: [[f32; 4]; 4],
        mode: ColorMode,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        let Some(ubo) = self.params_ubo.as_ref() else { return };
        let params = FractalParams {
            proj: projection,
            escape_radius: mode.escape_radius(),
            max_iterations: MAX_ITERATIONS,
            color_mode: mode.shader_flag(),
            _pad: 0,
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&params));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("seahorse fractal pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader_src = include_str!("shaders/mandelbrot.wgsl");
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("seahorse mandelbrot shader"),
            source: wgpu::ShaderSource::Wgsl(shader_src.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("seahorse fractal bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(params_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("seahorse fractal pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("seahorse fractal pipeline"),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[QuadVertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        // The fractal covers every pixel; no blending needed.
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },

                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),

                multiview_mask: None,
                cache: None,
            });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.params_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.params_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let params_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("seahorse fractal params ubo"),
            size: std::mem::size_of::<FractalParams>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("seahorse fractal bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: params_ubo.as_entire_binding(),
            }],
        });

        self.params_ubo = Some(params_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("seahorse fractal quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("seahorse fractal quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    pos: [f32; 3],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Uniform block mirrored by `Params` in the WGSL shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct FractalParams {
    proj: [[f32; 4]; 4],
    escape_radius: f32,
    max_iterations: u32,
    color_mode: u32,
    _pad: u32,
}

/// Minimum binding size for the params uniform.
///
/// `FractalParams` is 80 bytes by construction, so the size is non-zero.
fn params_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<FractalParams>() as u64)
        .expect("FractalParams has non-zero size by construction")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_layout_matches_wgsl_block() {
        // mat4x4<f32> (64) + f32 + u32 + u32 + pad = 80, 16-byte aligned.
        assert_eq!(std::mem::size_of::<FractalParams>(), 80);
        assert_eq!(std::mem::size_of::<FractalParams>() % 16, 0);
    }

    #[test]
    fn quad_covers_unit_square() {
        for v in QUAD_VERTICES {
            assert!(v.pos[0].abs() == 1.0 && v.pos[1].abs() == 1.0);
            assert_eq!(v.pos[2], 0.0);
        }
        assert_eq!(QUAD_INDICES.len(), 6);
    }
}
