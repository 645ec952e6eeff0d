//! Handler für Pointer-Protokoll und Vertex-Bearbeitung.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec3;

/// Pointer-Down auf der Zeichenfläche.
pub fn press_pointer(state: &mut AppState, screen_x: f32, screen_y: f32) {
    use_cases::pointer::press(state, screen_x, screen_y);
}

/// Pointer-Move bei gedrückter Primärtaste.
pub fn drag_pointer(state: &mut AppState, screen_x: f32, screen_y: f32) {
    use_cases::pointer::drag(state, screen_x, screen_y);
}

/// Pointer-Up.
pub fn release_pointer(state: &mut AppState) {
    use_cases::pointer::release(state);
}

/// Löscht den selektierten Vertex.
pub fn delete_selected_vertex(state: &mut AppState) {
    use_cases::vertices::delete_selected(state);
}

/// Färbt den selektierten Vertex mit der Zeichenfarbe.
pub fn apply_paint_color(state: &mut AppState) {
    use_cases::vertices::apply_paint_color(state);
}

/// Setzt die Zeichenfarbe für neue Vertices.
pub fn set_paint_color(state: &mut AppState, color: [f32; 3]) {
    state.ui.paint_color = color;
}

/// Übernimmt Werte aus dem numerischen Vertex-Editor.
pub fn update_selected_vertex(state: &mut AppState, position: Vec3, color: [f32; 3]) {
    use_cases::vertices::update_selected(state, position, color);
}

/// Setzt den Modellnamen für den Export.
pub fn set_model_name(state: &mut AppState, name: String) {
    state.ui.model_name = name;
}
