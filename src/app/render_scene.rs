//! Baut pro Frame die `RenderScene` aus dem App-Zustand.
//!
//! Zeichenreihenfolge: Rasterlinien, dann alle Layer in
//! Dokument-Reihenfolge (der selektierte Layer zusätzlich mit Punkt-
//! und Linienzug-Overlay), dann Bounding-Box und Selektions-Marker.

use crate::app::AppState;
use crate::core::{DrawMode, Layer};
use crate::shared::{PrimitiveBatch, RenderScene};

/// Erstellt die Frame-Beschreibung; reine Funktion des Zustands.
pub fn build(state: &AppState) -> RenderScene {
    let mut batches = Vec::new();

    if state.view.snap_to_grid {
        batches.push(grid_batch(
            state.view.grid_size,
            state.view.canvas_color,
            state.options.grid_contrast_factor,
        ));
    }

    for (index, layer) in state.document.layers().iter().enumerate() {
        if layer.is_empty() {
            continue;
        }
        batches.push(PrimitiveBatch::plain(
            layer.draw_mode,
            layer.positions().to_vec(),
            layer.colors().to_vec(),
        ));

        if state.selection.layer == Some(index) {
            push_selection_overlays(&mut batches, layer);
        }
    }

    if let Some(layer) = state.selected_layer() {
        if let Some((min, max)) = layer.bounding_box() {
            batches.push(bounding_box_batch(
                min,
                max,
                state.view.canvas_color,
                state.options.bounding_box_contrast_factor,
            ));
        }
    }

    if let Some(marker) = selected_vertex_marker(state) {
        batches.push(marker);
    }

    RenderScene {
        clear_color: state.view.canvas_color,
        batches,
        point_size_px: state.options.point_size_px,
        viewport_size: [state.view.canvas_rect.width, state.view.canvas_rect.height],
    }
}

/// Verschiebt eine Farbkomponente Richtung Mittelgrau und klemmt auf [0,1].
pub(crate) fn adjust_contrast(component: f32, factor: f32) -> f32 {
    (component + (0.5 - component) * factor).clamp(0.0, 1.0)
}

fn contrast_color(base: [f32; 3], factor: f32) -> [f32; 3] {
    [
        adjust_contrast(base[0], factor),
        adjust_contrast(base[1], factor),
        adjust_contrast(base[2], factor),
    ]
}

/// Rasterlinien über die volle Zeichenfläche als Linienliste.
fn grid_batch(grid_size: f32, canvas_color: [f32; 3], contrast: f32) -> PrimitiveBatch {
    let color = contrast_color(canvas_color, contrast);
    let mut positions = Vec::new();
    let steps = (2.0 / grid_size).round() as i32;
    for i in 0..=steps {
        let v = -1.0 + i as f32 * grid_size;
        // Vertikale Linie bei x = v
        positions.extend_from_slice(&[v, -1.0, 0.0, v, 1.0, 0.0]);
        // Horizontale Linie bei y = v
        positions.extend_from_slice(&[-1.0, v, 0.0, 1.0, v, 0.0]);
    }
    let colors = color.repeat(positions.len() / 3);
    PrimitiveBatch::plain(DrawMode::Lines, positions, colors)
}

/// Punkt- und Linienzug-Overlay des selektierten Layers.
fn push_selection_overlays(batches: &mut Vec<PrimitiveBatch>, layer: &Layer) {
    if layer.draw_mode != DrawMode::Points {
        batches.push(PrimitiveBatch::plain(
            DrawMode::Points,
            layer.positions().to_vec(),
            layer.colors().to_vec(),
        ));
    }
    if layer.draw_mode != DrawMode::LineStrip && layer.vertex_count() >= 2 {
        batches.push(PrimitiveBatch::plain(
            DrawMode::LineStrip,
            layer.positions().to_vec(),
            layer.colors().to_vec(),
        ));
    }
}

/// Bounding-Box des selektierten Layers als geschlossener Zug.
fn bounding_box_batch(
    min: glam::Vec2,
    max: glam::Vec2,
    canvas_color: [f32; 3],
    contrast: f32,
) -> PrimitiveBatch {
    let color = contrast_color(canvas_color, contrast);
    let positions = vec![
        min.x, min.y, 0.0, //
        max.x, min.y, 0.0, //
        max.x, max.y, 0.0, //
        min.x, max.y, 0.0,
    ];
    let colors = color.repeat(4);
    PrimitiveBatch::plain(DrawMode::LineLoop, positions, colors)
}

/// Rotes Markierungs-Quadrat um den selektierten Vertex.
fn selected_vertex_marker(state: &AppState) -> Option<PrimitiveBatch> {
    let layer = state.selected_layer()?;
    let pos = layer.position(state.selection.vertex?)?;
    let h = state.options.selected_vertex_marker_size;
    let positions = vec![
        pos.x - h,
        pos.y - h,
        pos.z,
        pos.x + h,
        pos.y - h,
        pos.z,
        pos.x + h,
        pos.y + h,
        pos.z,
        pos.x - h,
        pos.y + h,
        pos.z,
    ];
    let colors = [1.0f32, 1.0, 1.0].repeat(4);
    Some(PrimitiveBatch {
        topology: DrawMode::LineLoop,
        positions,
        colors,
        color_mod: [1.0, 0.0, 0.0, 1.0],
    })
}
