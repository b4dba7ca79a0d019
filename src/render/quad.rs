use anyhow::{bail, Result};
use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;
use crate::render::RenderCtx;
use crate::scene::{Camera, Quad};

const SHADER_SRC: &str = include_str!("shaders/quad.wgsl");

/// Smallest storage-buffer capacity, in quad records. Avoids churning tiny
/// reallocations while a scene ramps up.
const MIN_QUAD_CAPACITY: usize = 64;

/// GPU layout of the camera uniform (group 0, binding 0).
///
/// 24 payload bytes; `_pad` rounds the struct to a 16-byte multiple for
/// uniform-buffer friendliness across backends.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CameraUniform {
    position: [f32; 2],
    rotation: f32,
    zoom: f32,
    screen_size: [f32; 2],
    _pad: [f32; 2],
}

impl CameraUniform {
    fn new(camera: &Camera, viewport: Viewport) -> Self {
        Self {
            position: [camera.position.x, camera.position.y],
            rotation: camera.rotation,
            zoom: camera.zoom,
            screen_size: [viewport.width, viewport.height],
            _pad: [0.0; 2],
        }
    }
}

/// One per-instance record in the storage buffer (group 1, binding 0).
///
/// `color` is a WGSL `vec3` (align 16), which lands at offset 16 here and
/// leaves `rotation` in its 4-byte tail slot: 32 bytes total, no padding.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadRecord {
    position: [f32; 2],
    scale: [f32; 2],
    color: [f32; 3],
    rotation: f32,
}

impl From<&Quad> for QuadRecord {
    fn from(quad: &Quad) -> Self {
        Self {
            position: [quad.position.x, quad.position.y],
            scale: [quad.scale.x, quad.scale.y],
            color: [quad.color.r, quad.color.g, quad.color.b],
            rotation: quad.rotation,
        }
    }
}

/// Storage-buffer header: the instance count, padded out to the 16-byte
/// alignment of the record array that follows it.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadHeader {
    count: u32,
    _pad: [u32; 3],
}

/// Encodes the wire form of the quad storage buffer: header, then records in
/// instance order.
fn encode_quads(staging: &mut Vec<u8>, quads: &[Quad]) {
    staging.clear();

    let header = QuadHeader {
        count: quads.len() as u32,
        _pad: [0; 3],
    };
    staging.extend_from_slice(bytemuck::bytes_of(&header));

    for quad in quads {
        staging.extend_from_slice(bytemuck::bytes_of(&QuadRecord::from(quad)));
    }
}

fn camera_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<CameraUniform>() as u64)
        .expect("CameraUniform has non-zero size by construction")
}

// Header plus one record: what the shader needs bound even for an empty scene.
fn quad_buffer_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(
        (std::mem::size_of::<QuadHeader>() + std::mem::size_of::<QuadRecord>()) as u64,
    )
    .expect("QuadHeader + QuadRecord have non-zero size by construction")
}

/// Instanced quad renderer.
///
/// Draws every quad of a frame in a single 4-vertex triangle-strip draw call.
/// Corner positions are derived from the vertex index in the shader, so there
/// is no vertex buffer; per-instance state lives in a read-only storage
/// buffer indexed by the instance index.
pub struct QuadRenderer {
    pipeline: wgpu::RenderPipeline,

    camera_ubo: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,

    quad_ssbo: wgpu::Buffer,
    quad_bind_group_layout: wgpu::BindGroupLayout,
    quad_bind_group: wgpu::BindGroup,
    /// Capacity of `quad_ssbo` in records. Grows, never shrinks.
    quad_capacity: usize,
    quad_count: u32,

    /// CPU-side encode scratch, reused across frames.
    staging: Vec<u8>,
}

impl QuadRenderer {
    /// Builds the pipeline and initial buffers for rendering into
    /// `target_format` attachments.
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("quadrille quad shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });

        let camera_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quadrille camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("quadrille camera bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(camera_min_binding_size()),
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quadrille camera bind group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        let quad_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("quadrille quad bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: Some(quad_buffer_min_binding_size()),
                    },
                    count: None,
                }],
            });

        let quad_capacity = MIN_QUAD_CAPACITY;
        let quad_ssbo = Self::create_quad_ssbo(device, quad_capacity);
        let quad_bind_group =
            Self::create_quad_bind_group(device, &quad_bind_group_layout, &quad_ssbo);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("quadrille quad pipeline layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &quad_bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("quadrille quad pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                // Corners come from the vertex index; no vertex buffers.
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    // Output is opaque (alpha forced to 1.0); no blending.
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Cw,
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

        Self {
            pipeline,
            camera_ubo,
            camera_bind_group,
            quad_ssbo,
            quad_bind_group_layout,
            quad_bind_group,
            quad_capacity,
            quad_count: 0,
            staging: Vec::new(),
        }
    }

    /// Uploads the frame's camera and quads.
    ///
    /// Performs the host-side contract checks the shader itself cannot: the
    /// viewport must be drawable (`screen_size.y` is a divisor) and the camera
    /// finite. Quad fields are debug-asserted finite; in release a bad quad
    /// renders garbage but cannot fault.
    ///
    /// Call once per frame before [`draw`](Self::draw), outside the pass.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, camera: &Camera, quads: &[Quad]) -> Result<()> {
        if !ctx.viewport.is_valid() {
            bail!(
                "viewport {}x{} is not drawable (extents must be finite and positive)",
                ctx.viewport.width,
                ctx.viewport.height
            );
        }
        if !camera.is_finite() {
            bail!("camera has non-finite fields: {camera:?}");
        }
        debug_assert!(
            quads.iter().all(Quad::is_finite),
            "quad list contains non-finite fields"
        );

        let uniform = CameraUniform::new(camera, ctx.viewport);
        ctx.queue
            .write_buffer(&self.camera_ubo, 0, bytemuck::bytes_of(&uniform));

        encode_quads(&mut self.staging, quads);

        if quads.len() > self.quad_capacity {
            let new_capacity = quads.len().next_power_of_two().max(MIN_QUAD_CAPACITY);
            log::debug!(
                "growing quad storage buffer: {} -> {} records",
                self.quad_capacity,
                new_capacity
            );

            self.quad_ssbo = Self::create_quad_ssbo(ctx.device, new_capacity);
            self.quad_bind_group = Self::create_quad_bind_group(
                ctx.device,
                &self.quad_bind_group_layout,
                &self.quad_ssbo,
            );
            self.quad_capacity = new_capacity;
        }

        ctx.queue.write_buffer(&self.quad_ssbo, 0, &self.staging);
        self.quad_count = quads.len() as u32;

        log::trace!("prepared {} quads", self.quad_count);
        Ok(())
    }

    /// Records the instanced draw for the most recently prepared frame.
    ///
    /// The pass must target the format given to [`new`](Self::new). No-op when
    /// the prepared quad list was empty.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.quad_count == 0 {
            return;
        }

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.camera_bind_group, &[]);
        rpass.set_bind_group(1, &self.quad_bind_group, &[]);
        rpass.draw(0..4, 0..self.quad_count);
    }

    /// Number of instances the next [`draw`](Self::draw) will issue.
    #[inline]
    pub fn quad_count(&self) -> u32 {
        self.quad_count
    }

    fn create_quad_ssbo(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quadrille quad ssbo"),
            size: (std::mem::size_of::<QuadHeader>()
                + capacity * std::mem::size_of::<QuadRecord>()) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_quad_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        ssbo: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quadrille quad bind group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ssbo.as_entire_binding(),
            }],
        })
    }
}
