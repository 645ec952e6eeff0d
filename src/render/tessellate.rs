//! CPU-Tessellation der WebGL-Topologien.
//!
//! wgpu kennt weder `LINE_LOOP`/`LINE_STRIP`-Loops mit Schlusskante
//! noch `TRIANGLE_FAN` oder eine Punktgröße. Alle sieben Topologien
//! werden deshalb vor dem Upload in Dreieckslisten (Punkte als
//! Quads, Flächen) bzw. Linienlisten zerlegt. Der Farb-Modifikator
//! des Batches wird dabei in die Vertex-Farben einmultipliziert.

use std::ops::Range;

use super::types::GpuVertex;
use crate::core::DrawMode;
use crate::shared::PrimitiveBatch;

/// Ziel-Pipeline eines tessellierten Batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    /// Dreiecksliste (Flächen und Punkt-Quads)
    Fill,
    /// Linienliste
    Lines,
}

/// Ein Zeichenabschnitt im gemeinsamen Vertex-Buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSpan {
    pub kind: PipelineKind,
    pub range: Range<u32>,
}

/// Tesselliert einen Batch und hängt die Vertices an `out` an.
///
/// `point_half_ndc` ist die halbe Punkt-Quad-Ausdehnung in NDC
/// (aus Punktgröße in Pixeln und Viewport-Größe). Leere oder
/// degenerierte Batches liefern `None`.
pub fn append_batch(
    batch: &PrimitiveBatch,
    point_half_ndc: [f32; 2],
    out: &mut Vec<GpuVertex>,
) -> Option<DrawSpan> {
    let start = out.len() as u32;
    let vertices = collect_vertices(batch);

    let kind = match batch.topology {
        DrawMode::Points => {
            for v in &vertices {
                push_point_quad(out, v, point_half_ndc);
            }
            PipelineKind::Fill
        }
        DrawMode::Lines => {
            for pair in vertices.chunks_exact(2) {
                out.extend_from_slice(pair);
            }
            PipelineKind::Lines
        }
        DrawMode::LineStrip => {
            for pair in vertices.windows(2) {
                out.extend_from_slice(pair);
            }
            PipelineKind::Lines
        }
        DrawMode::LineLoop => {
            for pair in vertices.windows(2) {
                out.extend_from_slice(pair);
            }
            if vertices.len() > 2 {
                out.push(vertices[vertices.len() - 1]);
                out.push(vertices[0]);
            }
            PipelineKind::Lines
        }
        DrawMode::Triangles => {
            for tri in vertices.chunks_exact(3) {
                out.extend_from_slice(tri);
            }
            PipelineKind::Fill
        }
        DrawMode::TriangleStrip => {
            for (i, tri) in vertices.windows(3).enumerate() {
                // Windung alterniert im Strip; Culling ist aus, die
                // Reihenfolge bleibt trotzdem konsistent
                if i % 2 == 0 {
                    out.extend_from_slice(tri);
                } else {
                    out.push(tri[1]);
                    out.push(tri[0]);
                    out.push(tri[2]);
                }
            }
            PipelineKind::Fill
        }
        DrawMode::TriangleFan => {
            for tri in vertices.windows(2).skip(1) {
                out.push(vertices[0]);
                out.extend_from_slice(tri);
            }
            PipelineKind::Fill
        }
    };

    let end = out.len() as u32;
    if end == start {
        return None;
    }
    Some(DrawSpan {
        kind,
        range: start..end,
    })
}

/// Batch-Puffer → `GpuVertex`-Liste mit einmultipliziertem Modifikator.
fn collect_vertices(batch: &PrimitiveBatch) -> Vec<GpuVertex> {
    let m = batch.color_mod;
    batch
        .positions
        .chunks_exact(3)
        .zip(batch.colors.chunks_exact(3))
        .map(|(p, c)| {
            GpuVertex::new(
                [p[0], p[1], p[2]],
                [c[0] * m[0], c[1] * m[1], c[2] * m[2]],
            )
        })
        .collect()
}

/// Ein Punkt als achsenparalleles Quad (zwei Dreiecke).
fn push_point_quad(out: &mut Vec<GpuVertex>, v: &GpuVertex, half: [f32; 2]) {
    let [x, y, z] = v.position;
    let (hx, hy) = (half[0], half[1]);
    let corners = [
        [x - hx, y - hy, z],
        [x + hx, y - hy, z],
        [x + hx, y + hy, z],
        [x - hx, y + hy, z],
    ];
    for &i in &[0usize, 1, 2, 0, 2, 3] {
        out.push(GpuVertex::new(corners[i], v.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(topology: DrawMode, count: usize) -> PrimitiveBatch {
        let mut positions = Vec::new();
        let mut colors = Vec::new();
        for i in 0..count {
            positions.extend_from_slice(&[i as f32 * 0.1, 0.0, 0.0]);
            colors.extend_from_slice(&[1.0, 1.0, 1.0]);
        }
        PrimitiveBatch::plain(topology, positions, colors)
    }

    fn tessellate(b: &PrimitiveBatch) -> (Vec<GpuVertex>, Option<DrawSpan>) {
        let mut out = Vec::new();
        let span = append_batch(b, [0.01, 0.01], &mut out);
        (out, span)
    }

    #[test]
    fn test_points_werden_quads() {
        let (out, span) = tessellate(&batch(DrawMode::Points, 3));
        assert_eq!(out.len(), 3 * 6);
        assert_eq!(span.unwrap().kind, PipelineKind::Fill);
    }

    #[test]
    fn test_line_loop_schliesst_den_zug() {
        let (out, span) = tessellate(&batch(DrawMode::LineLoop, 4));
        // 3 Strip-Segmente plus Schlusskante, je 2 Vertices
        assert_eq!(out.len(), 8);
        assert_eq!(span.unwrap().kind, PipelineKind::Lines);
        assert_eq!(out[7].position, out[0].position);
    }

    #[test]
    fn test_line_loop_mit_zwei_vertices_ohne_doppelkante() {
        let (out, _) = tessellate(&batch(DrawMode::LineLoop, 2));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_strip_und_fan_werden_listen() {
        let (strip, _) = tessellate(&batch(DrawMode::TriangleStrip, 5));
        assert_eq!(strip.len(), 3 * 3);

        let (fan, _) = tessellate(&batch(DrawMode::TriangleFan, 5));
        assert_eq!(fan.len(), 3 * 3);
        // Jedes Fächer-Dreieck beginnt am Zentrum
        assert_eq!(fan[0].position, fan[3].position);
        assert_eq!(fan[0].position, fan[6].position);
    }

    #[test]
    fn test_unvollstaendige_primitive_werden_verworfen() {
        let (lines, _) = tessellate(&batch(DrawMode::Lines, 5));
        assert_eq!(lines.len(), 4);

        let (tris, _) = tessellate(&batch(DrawMode::Triangles, 5));
        assert_eq!(tris.len(), 3);
    }

    #[test]
    fn test_leerer_batch_liefert_none() {
        let (out, span) = tessellate(&batch(DrawMode::Triangles, 0));
        assert!(out.is_empty());
        assert!(span.is_none());
    }

    #[test]
    fn test_color_mod_wird_einmultipliziert() {
        let mut b = batch(DrawMode::Lines, 2);
        b.color_mod = [1.0, 0.0, 0.0, 1.0];
        let (out, _) = tessellate(&b);
        assert_eq!(out[0].color, [1.0, 0.0, 0.0]);
    }
}
