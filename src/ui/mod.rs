//! UI-Schicht: egui-Panels, Canvas-Input, Datei-Dialoge.
//!
//! Alle Render-Funktionen sind passiv: sie zeichnen aus dem Zustand
//! und geben erzeugte `AppIntent`s zurück, mutiert wird im Controller.

mod dialogs;
mod input;
mod panels;
mod status;
mod vertex_editor;

pub use dialogs::handle_file_dialogs;
pub use input::collect_canvas_events;
pub use panels::render_side_panel;
pub use status::render_status_bar;
pub use vertex_editor::render_vertex_editor;
