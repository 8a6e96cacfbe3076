use anyhow::Result;
use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::Size;
use crate::pixels::Surface;
use crate::render::{RenderCtx, RenderTarget};

const BYTES_PER_PIXEL: u32 = 4;

/// Number of upload buffers cycled through, one per frame in turn.
const UPLOAD_BUFFERS: usize = 2;

// ── upload layout ─────────────────────────────────────────────────────────

/// Row layout of a surface inside a buffer-to-texture copy.
///
/// wgpu requires `bytes_per_row` to be a multiple of
/// [`wgpu::COPY_BYTES_PER_ROW_ALIGNMENT`]; narrow surfaces get padded rows.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UploadLayout {
    pub size: Size,
    pub unpadded_bytes_per_row: u32,
    pub padded_bytes_per_row: u32,
}

impl UploadLayout {
    pub fn new(size: Size) -> Self {
        let unpadded = size.width * BYTES_PER_PIXEL;
        let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
        let padded = unpadded.div_ceil(align) * align;
        Self {
            size,
            unpadded_bytes_per_row: unpadded,
            padded_bytes_per_row: padded,
        }
    }

    #[inline]
    pub fn is_padded(&self) -> bool {
        self.padded_bytes_per_row != self.unpadded_bytes_per_row
    }

    /// Size of one upload buffer in bytes.
    #[inline]
    pub fn buffer_size(&self) -> u64 {
        self.padded_bytes_per_row as u64 * self.size.height as u64
    }

    /// Copies tightly packed rows from `src` into `dst` with padded stride.
    /// Padding bytes are zero.
    pub fn pad_rows(&self, src: &[u8], dst: &mut Vec<u8>) {
        let row = self.unpadded_bytes_per_row as usize;
        let stride = self.padded_bytes_per_row as usize;
        debug_assert_eq!(src.len(), row * self.size.height as usize);

        dst.clear();
        dst.resize(stride * self.size.height as usize, 0);
        for (src_row, dst_row) in src.chunks_exact(row).zip(dst.chunks_exact_mut(stride)) {
            dst_row[..row].copy_from_slice(src_row);
        }
    }
}

/// Fails when a `size` texture would exceed the device's `max_dim` limit.
pub fn check_texture_size(size: Size, max_dim: u32) -> Result<()> {
    anyhow::ensure!(
        size.fits_within(max_dim),
        "pixel surface {}x{} exceeds the device texture limit of {max_dim}",
        size.width,
        size.height
    );
    Ok(())
}

/// Returns the buffer to write this frame and advances `next` to the other one.
#[inline]
fn take_upload_index(next: &mut usize) -> usize {
    let index = *next;
    *next = (index + 1) % UPLOAD_BUFFERS;
    index
}

/// Texture format matching the in-memory byte order of `pixels::Color`.
///
/// The sRGB variant is used on sRGB swapchains so sampling decodes exactly what
/// the swapchain re-encodes, leaving surface colors unchanged on screen.
pub(crate) fn texture_format_for(surface_format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    if surface_format.is_srgb() {
        wgpu::TextureFormat::Bgra8UnormSrgb
    } else {
        wgpu::TextureFormat::Bgra8Unorm
    }
}

// ── quad ──────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    pos: [f32; 2], // NDC
    uv: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2  // uv
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Full-window quad, triangle strip order.
const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [-1.0, -1.0], uv: [0.0, 0.0] },
    QuadVertex { pos: [1.0, -1.0], uv: [1.0, 0.0] },
    QuadVertex { pos: [-1.0, 1.0], uv: [0.0, 1.0] },
    QuadVertex { pos: [1.0, 1.0], uv: [1.0, 1.0] },
];

// ── renderer ──────────────────────────────────────────────────────────────

/// GPU resources sized to one surface.
struct UploadTarget {
    layout: UploadLayout,
    format: wgpu::TextureFormat,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
    buffers: [wgpu::Buffer; UPLOAD_BUFFERS],
    /// Index of the buffer the next upload writes.
    next: usize,
}

/// Presents a [`Surface`] as a nearest-filtered full-window quad.
///
/// Each frame the surface bytes go into one of two upload buffers (alternating),
/// get copied into the texture, and the quad is drawn. A change in surface
/// size recreates the texture and buffers.
#[derive(Default)]
pub struct PixelRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    sampler: Option<wgpu::Sampler>,
    quad_vbo: Option<wgpu::Buffer>,

    upload: Option<UploadTarget>,

    /// Scratch space for padded rows.
    staging: Vec<u8>,
}

impl PixelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads `surface` and draws it over the whole target.
    ///
    /// Fails without touching the GPU when the surface is larger than the
    /// device allows for a texture.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        surface: &Surface,
    ) -> Result<()> {
        check_texture_size(surface.size(), ctx.device.limits().max_texture_dimension_2d)?;

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_upload_target(ctx, surface.size());
        self.upload_surface(ctx, target, surface);

        let Some(pipeline) = self.pipeline.as_ref() else { return Ok(()) };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return Ok(()) };
        let Some(upload) = self.upload.as_ref() else { return Ok(()) };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("pxr pixels pass"),
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
        rpass.set_bind_group(0, &upload.bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.draw(0..QUAD_VERTICES.len() as u32, 0..1);
        Ok(())
    }

    fn upload_surface(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, surface: &Surface) {
        let Some(up) = self.upload.as_mut() else { return };

        let buffer = &up.buffers[take_upload_index(&mut up.next)];

        let bytes = surface.as_bytes();
        if up.layout.is_padded() {
            up.layout.pad_rows(bytes, &mut self.staging);
            ctx.queue.write_buffer(buffer, 0, &self.staging);
        } else {
            ctx.queue.write_buffer(buffer, 0, bytes);
        }

        let Size { width, height } = up.layout.size;
        target.encoder.copy_buffer_to_texture(
            wgpu::TexelCopyBufferInfo {
                buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(up.layout.padded_bytes_per_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::TexelCopyTextureInfo {
                texture: &up.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("pxr pixels shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/pixels.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("pxr pixels bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: 0,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: 1,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("pxr pixels pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pxr pixels pipeline"),
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
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
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

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("pxr pixels sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        log::debug!("pixel pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.sampler = Some(sampler);

        // Bind groups reference the old layout.
        self.upload = None;
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("pxr pixels quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }

    fn ensure_upload_target(&mut self, ctx: &RenderCtx<'_>, size: Size) {
        let format = texture_format_for(ctx.surface_format);
        if let Some(up) = &self.upload {
            if up.layout.size == size && up.format == format {
                return;
            }
        }

        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };

        let layout = UploadLayout::new(size);

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("pxr pixels texture"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("pxr pixels bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        let buffers = std::array::from_fn(|i| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(if i == 0 { "pxr pixels upload 0" } else { "pxr pixels upload 1" }),
                size: layout.buffer_size(),
                usage: wgpu::BufferUsages::COPY_SRC | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });

        log::debug!(
            "pixel texture {}x{} {:?} (row stride {} bytes)",
            size.width,
            size.height,
            format,
            layout.padded_bytes_per_row
        );

        self.upload = Some(UploadTarget {
            layout,
            format,
            texture,
            bind_group,
            buffers,
            next: 0,
        });
    }
}
