//! Layer-Lebenszyklus: anlegen, löschen, leeren, selektieren.

use crate::app::AppState;
use crate::core::DrawMode;

/// Legt einen neuen Layer an und selektiert ihn.
///
/// Die Topologie erbt vom aktuell selektierten Layer; ohne Selektion
/// startet der Layer mit `POINTS`.
pub fn add_layer(state: &mut AppState) -> usize {
    let draw_mode = state
        .selected_layer()
        .map_or(DrawMode::Points, |l| l.draw_mode);
    let index = state.document.add_layer(draw_mode);
    state.selection.select_layer(Some(index));
    index
}

/// Löscht den selektierten Layer; danach ist nichts selektiert.
pub fn delete_layer(state: &mut AppState) {
    let Some(index) = state.selection.layer else {
        return;
    };
    if state.document.remove_layer(index).is_some() {
        state.selection.select_layer(None);
    }
}

/// Entfernt alle Vertices des selektierten Layers.
/// Name und Topologie bleiben erhalten, die Vertex-Selektion nicht.
pub fn clear_layer(state: &mut AppState) {
    let Some(index) = state.selection.layer else {
        return;
    };
    let Some(layer) = state.document.layer_mut(index) else {
        return;
    };
    layer.clear();
    state.selection.vertex = None;
    state.selection.dragging = false;
}

/// Selektiert den Layer an `index`; ungültige Indizes sind ein No-op.
/// Die Vertex-Selektion wird immer verworfen, auch beim erneuten
/// Selektieren desselben Layers.
pub fn select_layer(state: &mut AppState, index: usize) {
    if index >= state.document.layer_count() {
        return;
    }
    state.selection.select_layer(Some(index));
}

/// Setzt die Topologie des selektierten Layers.
pub fn set_draw_mode(state: &mut AppState, mode: DrawMode) {
    let Some(index) = state.selection.layer else {
        return;
    };
    if let Some(layer) = state.document.layer_mut(index) {
        layer.draw_mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_layer_erbt_topologie_vom_selektierten() {
        let mut state = AppState::new();
        let first = add_layer(&mut state);
        set_draw_mode(&mut state, DrawMode::TriangleFan);
        assert_eq!(state.document.layer(first).unwrap().draw_mode, DrawMode::TriangleFan);

        let second = add_layer(&mut state);
        assert_eq!(
            state.document.layer(second).unwrap().draw_mode,
            DrawMode::TriangleFan,
            "neuer Layer muss die Topologie des selektierten erben"
        );
        assert_eq!(state.selection.layer, Some(second));
    }

    #[test]
    fn test_add_layer_ohne_selektion_startet_mit_points() {
        let mut state = AppState::new();
        let index = add_layer(&mut state);
        assert_eq!(state.document.layer(index).unwrap().draw_mode, DrawMode::Points);
    }

    #[test]
    fn test_delete_layer_setzt_selektion_auf_nichts() {
        let mut state = AppState::new();
        add_layer(&mut state);
        add_layer(&mut state);
        delete_layer(&mut state);
        assert_eq!(state.document.layer_count(), 1);
        assert_eq!(state.selection.layer, None, "nach dem Löschen ist kein Layer selektiert");
    }

    #[test]
    fn test_select_layer_verwirft_vertex_selektion() {
        let mut state = AppState::new();
        add_layer(&mut state);
        state.selection.vertex = Some(0);
        select_layer(&mut state, 0);
        assert_eq!(state.selection.vertex, None);
    }

    #[test]
    fn test_select_layer_ausserhalb_ist_noop() {
        let mut state = AppState::new();
        add_layer(&mut state);
        select_layer(&mut state, 7);
        assert_eq!(state.selection.layer, Some(0));
    }
}
