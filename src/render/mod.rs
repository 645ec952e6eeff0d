//! wgpu-Renderer: zeichnet die `RenderScene` in den egui-Viewport.

mod callback;
pub mod tessellate;
mod types;

pub use callback::WgpuRenderCallback;
pub use types::GpuVertex;

use tessellate::{DrawSpan, PipelineKind};

use crate::core::DrawMode;
use crate::shared::{PrimitiveBatch, RenderScene};

/// Zeichnet Szenen über zwei Pipelines: Dreieckslisten (Flächen,
/// Punkt-Quads, Hintergrund) und Linienlisten. Alle Batches eines
/// Frames landen in einem gemeinsamen, wiederverwendeten
/// Vertex-Buffer und werden abschnittsweise gezeichnet.
pub struct Renderer {
    pipeline_fill: wgpu::RenderPipeline,
    pipeline_lines: wgpu::RenderPipeline,
    vertex_buffer: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    /// Wiederverwendbarer Scratch-Buffer (vermeidet per-Frame-Allokation)
    vertex_scratch: Vec<GpuVertex>,
}

impl Renderer {
    /// Erstellt Pipelines und Shader aus dem egui-Render-State.
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let make_pipeline = |label: &str, topology: wgpu::PrimitiveTopology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[GpuVertex::desc()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: render_state.target_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState {
                    count: 4,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        Self {
            pipeline_fill: make_pipeline("Fill Pipeline", wgpu::PrimitiveTopology::TriangleList),
            pipeline_lines: make_pipeline("Line Pipeline", wgpu::PrimitiveTopology::LineList),
            vertex_buffer: None,
            vertex_capacity: 0,
            vertex_scratch: Vec::new(),
        }
    }

    /// Tesselliert die Szene, lädt sie hoch und zeichnet alle Abschnitte.
    pub fn render_scene(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        render_pass: &mut wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        let [vw, vh] = scene.viewport_size;
        if !vw.is_finite() || !vh.is_finite() || vw <= 0.0 || vh <= 0.0 {
            return;
        }
        let point_half_ndc = [scene.point_size_px / vw, scene.point_size_px / vh];

        let mut vertices = std::mem::take(&mut self.vertex_scratch);
        vertices.clear();
        let mut spans = Vec::with_capacity(scene.batches.len() + 1);

        // Hintergrund als Vollbild-Quad; der Render-Pass selbst wird
        // von egui nicht geleert
        spans.push(background_span(&mut vertices, scene.clear_color));

        for batch in &scene.batches {
            if let Some(span) = tessellate::append_batch(batch, point_half_ndc, &mut vertices) {
                spans.push(span);
            }
        }

        // Vertex-Buffer erstellen/aktualisieren (Reuse)
        if self.vertex_buffer.is_none() || vertices.len() > self.vertex_capacity {
            let buffer_size = (vertices.len() * std::mem::size_of::<GpuVertex>()) as u64;
            self.vertex_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Scene Vertex Buffer"),
                size: buffer_size,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.vertex_capacity = vertices.len();
        }

        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else {
            self.vertex_scratch = vertices;
            return;
        };
        queue.write_buffer(vertex_buffer, 0, bytemuck::cast_slice(&vertices));

        render_pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        for span in spans {
            let pipeline = match span.kind {
                PipelineKind::Fill => &self.pipeline_fill,
                PipelineKind::Lines => &self.pipeline_lines,
            };
            render_pass.set_pipeline(pipeline);
            render_pass.draw(span.range, 0..1);
        }

        self.vertex_scratch = vertices;
    }
}

/// Hängt das Vollbild-Hintergrund-Quad an und liefert dessen Abschnitt.
fn background_span(vertices: &mut Vec<GpuVertex>, clear_color: [f32; 3]) -> DrawSpan {
    let quad = PrimitiveBatch::plain(
        DrawMode::TriangleFan,
        vec![
            -1.0, -1.0, 0.0, //
            1.0, -1.0, 0.0, //
            1.0, 1.0, 0.0, //
            -1.0, 1.0, 0.0,
        ],
        clear_color.repeat(4),
    );
    // Das Quad ist nie leer, der Abschnitt existiert immer
    tessellate::append_batch(&quad, [0.0, 0.0], vertices).unwrap_or(DrawSpan {
        kind: PipelineKind::Fill,
        range: 0..0,
    })
}
