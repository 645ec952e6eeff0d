//! Datei-Dialoge (rfd) für den Export.

use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Save-Dialog für das vorbereitete Export-Artefakt
    if ui_state.show_export_save_dialog {
        ui_state.show_export_save_dialog = false;

        let default_name = ui_state
            .pending_export
            .as_ref()
            .map(|a| a.file_name.as_str())
            .unwrap_or("model2D.js");

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JavaScript", &["js"])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::ExportPathSelected {
                path: path_to_ui_string(&path),
            });
        } else {
            // Abgebrochen: Artefakt verwerfen, sonst schreibt ein
            // späterer Dialog veraltete Inhalte
            ui_state.pending_export = None;
        }
    }

    events
}
