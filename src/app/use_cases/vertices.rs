//! Vertex-Operationen jenseits des Pointer-Protokolls.

use crate::app::AppState;
use glam::Vec3;

/// Löscht den selektierten Vertex; danach ist kein Vertex selektiert.
pub fn delete_selected(state: &mut AppState) {
    let (Some(layer_index), Some(vertex_index)) = (state.selection.layer, state.selection.vertex)
    else {
        return;
    };
    let Some(layer) = state.document.layer_mut(layer_index) else {
        return;
    };
    if layer.remove_vertex(vertex_index) {
        state.selection.vertex = None;
        state.selection.dragging = false;
    }
}

/// Färbt den selektierten Vertex mit der aktuellen Zeichenfarbe.
pub fn apply_paint_color(state: &mut AppState) {
    let (Some(layer_index), Some(vertex_index)) = (state.selection.layer, state.selection.vertex)
    else {
        return;
    };
    let color = state.ui.paint_color;
    if let Some(layer) = state.document.layer_mut(layer_index) {
        layer.set_color(vertex_index, color);
    }
}

/// Übernimmt Position und Farbe aus dem numerischen Vertex-Editor.
pub fn update_selected(state: &mut AppState, position: Vec3, color: [f32; 3]) {
    let (Some(layer_index), Some(vertex_index)) = (state.selection.layer, state.selection.vertex)
    else {
        return;
    };
    if let Some(layer) = state.document.layer_mut(layer_index) {
        layer.set_position(vertex_index, position);
        layer.set_color(vertex_index, color);
    }
}
