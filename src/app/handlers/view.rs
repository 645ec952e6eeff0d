//! Handler für Canvas-Ansicht und Optionen.

use crate::app::AppState;
use crate::core::CanvasRect;
use crate::shared::EditorOptions;

/// Übernimmt das aktuelle Canvas-Rechteck der UI.
pub fn set_canvas_rect(state: &mut AppState, rect: CanvasRect) {
    state.view.canvas_rect = rect;
}

/// Schaltet das Raster-Snapping.
pub fn set_grid_enabled(state: &mut AppState, enabled: bool) {
    state.view.snap_to_grid = enabled;
    log::info!("Raster-Snapping: {}", if enabled { "an" } else { "aus" });
}

/// Setzt die Rasterweite; nicht-positive Werte werden verworfen.
pub fn set_grid_size(state: &mut AppState, size: f32) {
    if size > 0.0 {
        state.view.grid_size = size;
    }
}

/// Setzt die Hintergrundfarbe der Zeichenfläche.
pub fn set_canvas_color(state: &mut AppState, color: [f32; 3]) {
    state.view.canvas_color = color;
}

/// Übernimmt geänderte Optionen und speichert sie als TOML.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(&EditorOptions::config_path())?;
    Ok(())
}
