//! Handler für den Layer-Lebenszyklus.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::DrawMode;

/// Legt einen neuen Layer an und selektiert ihn.
pub fn add(state: &mut AppState) {
    let index = use_cases::layers::add_layer(state);
    if let Some(layer) = state.document.layer(index) {
        log::info!("Layer angelegt: {}", layer.name);
    }
}

/// Löscht den selektierten Layer.
pub fn delete(state: &mut AppState) {
    if let Some(layer) = state.selected_layer() {
        log::info!("Layer gelöscht: {}", layer.name);
    }
    use_cases::layers::delete_layer(state);
}

/// Leert den selektierten Layer.
pub fn clear(state: &mut AppState) {
    use_cases::layers::clear_layer(state);
}

/// Selektiert einen Layer.
pub fn select(state: &mut AppState, index: usize) {
    use_cases::layers::select_layer(state, index);
}

/// Setzt die Topologie des selektierten Layers.
pub fn set_draw_mode(state: &mut AppState, mode: DrawMode) {
    use_cases::layers::set_draw_mode(state, mode);
    log::info!("Topologie: {}", mode.token());
}
