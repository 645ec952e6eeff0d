//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Baut die Frame-Beschreibung für den Renderer.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        super::render_scene::build(state)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Canvas / Pointer ===
            AppCommand::SetCanvasRect { rect } => handlers::view::set_canvas_rect(state, rect),
            AppCommand::PressPointer { screen_x, screen_y } => {
                handlers::editing::press_pointer(state, screen_x, screen_y)
            }
            AppCommand::DragPointer { screen_x, screen_y } => {
                handlers::editing::drag_pointer(state, screen_x, screen_y)
            }
            AppCommand::ReleasePointer => handlers::editing::release_pointer(state),

            // === Layer ===
            AppCommand::AddLayer => handlers::layers::add(state),
            AppCommand::DeleteLayer => handlers::layers::delete(state),
            AppCommand::ClearLayer => handlers::layers::clear(state),
            AppCommand::SelectLayer { index } => handlers::layers::select(state, index),
            AppCommand::SetDrawMode { mode } => handlers::layers::set_draw_mode(state, mode),

            // === Vertices ===
            AppCommand::DeleteSelectedVertex => handlers::editing::delete_selected_vertex(state),
            AppCommand::ApplyPaintColor => handlers::editing::apply_paint_color(state),
            AppCommand::SetPaintColor { color } => handlers::editing::set_paint_color(state, color),
            AppCommand::UpdateSelectedVertex { position, color } => {
                handlers::editing::update_selected_vertex(state, position, color)
            }

            // === Ansicht ===
            AppCommand::SetGridEnabled { enabled } => {
                handlers::view::set_grid_enabled(state, enabled)
            }
            AppCommand::SetGridSize { size } => handlers::view::set_grid_size(state, size),
            AppCommand::SetCanvasColor { color } => handlers::view::set_canvas_color(state, color),

            // === Export ===
            AppCommand::SetModelName { name } => handlers::editing::set_model_name(state, name),
            AppCommand::PrepareModelExport => handlers::export::prepare_model_export(state),
            AppCommand::PrepareRuntimeExport => handlers::export::prepare_runtime_export(state),
            AppCommand::WriteExportArtifact { path } => {
                handlers::export::write_artifact(state, &path)
            }
            AppCommand::CopyLayerVertices { layer_index } => {
                handlers::export::copy_layer_vertices(state, layer_index)
            }
            AppCommand::CopyLayerColors { layer_index } => {
                handlers::export::copy_layer_colors(state, layer_index)
            }
            AppCommand::CopyLayerIndices { layer_index } => {
                handlers::export::copy_layer_indices(state, layer_index)
            }
            AppCommand::CopyAllLayers => handlers::export::copy_all_layers(state),

            // === Sonstiges ===
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, options)?,
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }
}
