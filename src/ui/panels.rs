//! Seitliches Werkzeug-Panel: Layer-Liste, Raster, Farben, Export.

use crate::app::{AppIntent, AppState};
use crate::core::DrawMode;

/// Rendert das linke Panel und gibt erzeugte Events zurück.
pub fn render_side_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("layer_panel")
        .default_width(230.0)
        .show(ctx, |ui| {
            render_layer_list(ui, state, &mut events);
            ui.separator();
            render_grid_controls(ui, state, &mut events);
            ui.separator();
            render_color_controls(ui, state, &mut events);
            ui.separator();
            render_export_controls(ui, state, &mut events);
        });

    events
}

fn render_layer_list(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.heading("Layer");

    for (index, layer) in state.document.layers().iter().enumerate() {
        ui.horizontal(|ui| {
            let selected = state.selection.layer == Some(index);
            let label = format!("{} ({})", layer.name, layer.vertex_count());
            if ui.selectable_label(selected, label).clicked() {
                events.push(AppIntent::LayerSelected { index });
            }
            // Kopier-Buttons: Vertices / Colors / Indices
            if ui.small_button("V").on_hover_text("Vertices kopieren").clicked() {
                events.push(AppIntent::CopyVerticesRequested { layer_index: index });
            }
            if ui.small_button("C").on_hover_text("Farben kopieren").clicked() {
                events.push(AppIntent::CopyColorsRequested { layer_index: index });
            }
            if ui.small_button("I").on_hover_text("Indizes kopieren").clicked() {
                events.push(AppIntent::CopyIndicesRequested { layer_index: index });
            }
        });
    }

    ui.horizontal(|ui| {
        if ui.button("➕ Neu").clicked() {
            events.push(AppIntent::AddLayerRequested);
        }
        let has_selection = state.selection.layer.is_some();
        if ui
            .add_enabled(has_selection, egui::Button::new("🗑 Löschen"))
            .clicked()
        {
            events.push(AppIntent::DeleteLayerRequested);
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Leeren"))
            .clicked()
        {
            events.push(AppIntent::ClearLayerRequested);
        }
    });

    if let Some(layer) = state.selected_layer() {
        let current = layer.draw_mode;
        egui::ComboBox::from_label("Topologie")
            .selected_text(current.token())
            .show_ui(ui, |ui| {
                for mode in DrawMode::ALL {
                    if ui.selectable_label(mode == current, mode.token()).clicked() {
                        events.push(AppIntent::DrawModeChanged { mode });
                    }
                }
            });
    }
}

fn render_grid_controls(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        let mut snap = state.view.snap_to_grid;
        if ui.checkbox(&mut snap, "Raster").changed() {
            events.push(AppIntent::GridToggled { enabled: snap });
        }

        let mut size = state.view.grid_size;
        if ui
            .add(
                egui::DragValue::new(&mut size)
                    .speed(0.01)
                    .range(0.01..=1.0)
                    .fixed_decimals(2),
            )
            .changed()
        {
            events.push(AppIntent::GridSizeChanged { size });
        }
    });
}

fn render_color_controls(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        let mut canvas_color = state.view.canvas_color;
        if ui.color_edit_button_rgb(&mut canvas_color).changed() {
            events.push(AppIntent::CanvasColorChanged {
                color: canvas_color,
            });
        }
        ui.label("Hintergrund");
    });

    ui.horizontal(|ui| {
        let mut paint_color = state.ui.paint_color;
        if ui.color_edit_button_rgb(&mut paint_color).changed() {
            events.push(AppIntent::PaintColorChanged { color: paint_color });
        }
        ui.label("Zeichenfarbe");
    });

    let has_vertex = state.selection.vertex.is_some();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(has_vertex, egui::Button::new("Farbe anwenden"))
            .clicked()
        {
            events.push(AppIntent::ApplyPaintColorRequested);
        }
        if ui
            .add_enabled(has_vertex, egui::Button::new("Vertex löschen"))
            .clicked()
        {
            events.push(AppIntent::DeleteVertexRequested);
        }
    });
}

fn render_export_controls(ui: &mut egui::Ui, state: &mut AppState, events: &mut Vec<AppIntent>) {
    ui.heading("Export");

    ui.horizontal(|ui| {
        ui.label("Name:");
        if ui.text_edit_singleline(&mut state.ui.model_name).changed() {
            events.push(AppIntent::ModelNameChanged {
                name: state.ui.model_name.clone(),
            });
        }
    });

    if ui.button("Model2D-Klasse exportieren").clicked() {
        events.push(AppIntent::ExportModelRequested);
    }
    if ui.button("Laufzeitklasse exportieren").clicked() {
        events.push(AppIntent::ExportRuntimeRequested);
    }
    if ui.button("Alle Layer kopieren (JSON)").clicked() {
        events.push(AppIntent::CopyAllLayersRequested);
    }
}
