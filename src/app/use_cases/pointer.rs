//! Pointer-Protokoll auf der Zeichenfläche.
//!
//! Down: Treffer → selektieren und Drag starten; sonst neuen Vertex
//! am topologisch passenden Index einfügen, selektieren und direkt
//! in den Drag übergehen. Move: selektierten Vertex mitführen.
//! Up: Drag beenden, Selektion bleibt.

use crate::app::use_cases::selection::{find_insertion_point, nearest_vertex};
use crate::app::AppState;
use crate::core::geometry::screen_to_normalized;
use glam::Vec3;

/// Primärtaste gedrückt: selektieren oder Vertex einfügen.
pub fn press(state: &mut AppState, screen_x: f32, screen_y: f32) {
    let Some(layer_index) = state.selection.layer else {
        return;
    };
    let point = cursor_to_ndc(state, screen_x, screen_y);
    let Some(layer) = state.document.layer(layer_index) else {
        return;
    };

    if let Some(hit) = nearest_vertex(layer, point, state.options.vertex_selection_radius) {
        state.selection.vertex = Some(hit);
        state.selection.dragging = true;
        return;
    }

    let insert_at = find_insertion_point(layer, point);
    let color = state.ui.paint_color;
    let Some(layer) = state.document.layer_mut(layer_index) else {
        return;
    };
    if layer.insert_vertex(insert_at, point, color) {
        state.selection.vertex = Some(insert_at);
        state.selection.dragging = true;
    }
}

/// Pointer bewegt: bei aktivem Drag den selektierten Vertex mitführen.
pub fn drag(state: &mut AppState, screen_x: f32, screen_y: f32) {
    if !state.selection.dragging {
        return;
    }
    let (Some(layer_index), Some(vertex_index)) = (state.selection.layer, state.selection.vertex)
    else {
        return;
    };
    let point = cursor_to_ndc(state, screen_x, screen_y);
    if let Some(layer) = state.document.layer_mut(layer_index) {
        layer.set_position(vertex_index, point);
    }
}

/// Primärtaste losgelassen: Drag beenden, Selektion bleibt bestehen.
pub fn release(state: &mut AppState) {
    state.selection.dragging = false;
}

/// Bildschirmposition → NDC, mit Raster-Snapping falls aktiv.
fn cursor_to_ndc(state: &AppState, screen_x: f32, screen_y: f32) -> Vec3 {
    let grid = state.view.snap_to_grid.then_some(state.view.grid_size);
    screen_to_normalized(screen_x, screen_y, 0.0, state.view.canvas_rect, grid)
}
