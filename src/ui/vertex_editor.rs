//! Numerischer Vertex-Editor: Position und Farbe des selektierten Vertex.

use crate::app::{AppIntent, AppState};
use glam::Vec3;

/// Zeigt das Editor-Fenster, solange ein Vertex selektiert ist.
pub fn render_vertex_editor(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(vertex_index) = state.selection.vertex else {
        return events;
    };
    let Some(layer) = state.selected_layer() else {
        return events;
    };
    let (Some(position), Some(color)) = (layer.position(vertex_index), layer.color(vertex_index))
    else {
        return events;
    };

    egui::Window::new(format!("Vertex {vertex_index}"))
        .resizable(false)
        .show(ctx, |ui| {
            let mut pos = position;
            let mut col = color;
            let mut changed = false;

            egui::Grid::new("vertex_editor_grid").show(ui, |ui| {
                for (label, value) in [("x", &mut pos.x), ("y", &mut pos.y), ("z", &mut pos.z)] {
                    ui.label(label);
                    changed |= ui
                        .add(
                            egui::DragValue::new(value)
                                .speed(0.01)
                                .range(-1.0..=1.0)
                                .fixed_decimals(3),
                        )
                        .changed();
                    ui.end_row();
                }
                ui.label("Farbe");
                changed |= ui.color_edit_button_rgb(&mut col).changed();
                ui.end_row();
            });

            if changed {
                events.push(AppIntent::VertexEditorChanged {
                    position: Vec3::new(pos.x, pos.y, pos.z),
                    color: col,
                });
            }
        });

    events
}
