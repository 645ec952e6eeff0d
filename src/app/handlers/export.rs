//! Handler für Export und Clipboard-Kopien.
//!
//! Exporte laufen zweistufig: erst das Artefakt rendern und den
//! Save-Dialog anstoßen, dann nach der Pfadwahl schreiben.
//! Schreib- und Clipboard-Fehler sind nicht fatal, sie landen im
//! Log und in der Statuszeile.

use crate::app::AppState;
use crate::export::{clipboard, runtime, write_model_class};

/// Rendert die Modellklasse und stößt den Save-Dialog an.
pub fn prepare_model_export(state: &mut AppState) {
    match write_model_class(&state.document, &state.ui.model_name, &state.options) {
        Ok(artifact) => {
            log::info!("Export vorbereitet: {}", artifact.file_name);
            state.ui.status_message = None;
            state.ui.pending_export = Some(artifact);
            state.ui.show_export_save_dialog = true;
        }
        Err(e) => {
            log::warn!("Export abgebrochen: {}", e);
            state.ui.status_message = Some(format!("Export abgebrochen: {e}"));
        }
    }
}

/// Stellt das Model2D-Laufzeitartefakt bereit und stößt den Save-Dialog an.
pub fn prepare_runtime_export(state: &mut AppState) {
    state.ui.pending_export = Some(runtime::runtime_artifact());
    state.ui.show_export_save_dialog = true;
}

/// Schreibt das wartende Artefakt an den gewählten Pfad.
pub fn write_artifact(state: &mut AppState, path: &str) {
    let Some(artifact) = state.ui.pending_export.take() else {
        return;
    };
    match std::fs::write(path, &artifact.content) {
        Ok(()) => {
            log::info!("Export geschrieben: {}", path);
            state.ui.status_message = Some(format!("Gespeichert: {}", artifact.file_name));
        }
        Err(e) => {
            log::error!("Export fehlgeschlagen ({}): {}", path, e);
            state.ui.status_message = Some(format!("Speichern fehlgeschlagen: {e}"));
        }
    }
}

/// Legt den Vertex-Puffer eines Layers als JS-Snippet ins Clipboard.
pub fn copy_layer_vertices(state: &mut AppState, layer_index: usize) {
    if let Some(layer) = state.document.layer(layer_index) {
        state.ui.pending_clipboard = Some(clipboard::vertices_snippet(layer, &state.options));
    }
}

/// Legt den Farb-Puffer eines Layers als JS-Snippet ins Clipboard.
pub fn copy_layer_colors(state: &mut AppState, layer_index: usize) {
    if let Some(layer) = state.document.layer(layer_index) {
        state.ui.pending_clipboard = Some(clipboard::colors_snippet(layer, &state.options));
    }
}

/// Legt die erzeugte Index-Liste eines Layers als JS-Snippet ins Clipboard.
pub fn copy_layer_indices(state: &mut AppState, layer_index: usize) {
    if let Some(layer) = state.document.layer(layer_index) {
        state.ui.pending_clipboard = Some(clipboard::indices_snippet(layer, &state.options));
    }
}

/// Legt alle Layer als JSON ins Clipboard.
pub fn copy_all_layers(state: &mut AppState) {
    match clipboard::document_to_json(&state.document) {
        Ok(json) => state.ui.pending_clipboard = Some(json),
        Err(e) => {
            log::error!("JSON-Export fehlgeschlagen: {}", e);
            state.ui.status_message = Some(format!("Kopieren fehlgeschlagen: {e}"));
        }
    }
}
