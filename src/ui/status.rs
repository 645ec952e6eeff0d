//! Statuszeile am unteren Fensterrand.

use crate::app::AppState;

/// Rendert die Statuszeile (nur Anzeige, keine Events).
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Layer: {}", state.document.layer_count()));
            if let Some(layer) = state.selected_layer() {
                ui.separator();
                ui.label(format!(
                    "{}: {} Vertices ({})",
                    layer.name,
                    layer.vertex_count(),
                    layer.draw_mode.token()
                ));
            }
            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.label(message);
            }
        });
    });
}
