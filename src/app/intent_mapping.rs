//! Übersetzung von UI-Absichten in ausführbare Commands.
//!
//! Hier sitzt die kontextabhängige Politik: Absichten, die im
//! aktuellen Zustand sinnlos sind (kein Layer selektiert, kein Drag
//! aktiv), erzeugen gar keine Commands, statt später im Handler
//! abgefangen zu werden.

use crate::app::events::{AppCommand, AppIntent};
use crate::app::AppState;

/// Übersetzt einen `AppIntent` in null oder mehr `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasResized { rect } => vec![AppCommand::SetCanvasRect { rect }],
        AppIntent::CanvasPointerPressed { screen_x, screen_y } => {
            // Ohne selektierten Layer gibt es kein Ziel für Klicks
            if state.selection.layer.is_some() {
                vec![AppCommand::PressPointer { screen_x, screen_y }]
            } else {
                vec![]
            }
        }
        AppIntent::CanvasPointerMoved { screen_x, screen_y } => {
            if state.selection.dragging {
                vec![AppCommand::DragPointer { screen_x, screen_y }]
            } else {
                vec![]
            }
        }
        AppIntent::CanvasPointerReleased => vec![AppCommand::ReleasePointer],

        AppIntent::AddLayerRequested => vec![AppCommand::AddLayer],
        AppIntent::DeleteLayerRequested | AppIntent::ClearLayerRequested
            if state.selection.layer.is_none() =>
        {
            vec![]
        }
        AppIntent::DeleteLayerRequested => vec![AppCommand::DeleteLayer],
        AppIntent::ClearLayerRequested => vec![AppCommand::ClearLayer],
        AppIntent::LayerSelected { index } => vec![AppCommand::SelectLayer { index }],
        AppIntent::DrawModeChanged { mode } => vec![AppCommand::SetDrawMode { mode }],

        AppIntent::DeleteVertexRequested => {
            if state.selection.vertex.is_some() {
                vec![AppCommand::DeleteSelectedVertex]
            } else {
                vec![]
            }
        }
        AppIntent::ApplyPaintColorRequested => vec![AppCommand::ApplyPaintColor],
        AppIntent::PaintColorChanged { color } => vec![AppCommand::SetPaintColor { color }],
        AppIntent::VertexEditorChanged { position, color } => {
            vec![AppCommand::UpdateSelectedVertex { position, color }]
        }

        AppIntent::GridToggled { enabled } => vec![AppCommand::SetGridEnabled { enabled }],
        AppIntent::GridSizeChanged { size } => vec![AppCommand::SetGridSize { size }],
        AppIntent::CanvasColorChanged { color } => vec![AppCommand::SetCanvasColor { color }],

        AppIntent::ModelNameChanged { name } => vec![AppCommand::SetModelName { name }],
        AppIntent::ExportModelRequested => vec![AppCommand::PrepareModelExport],
        AppIntent::ExportRuntimeRequested => vec![AppCommand::PrepareRuntimeExport],
        AppIntent::ExportPathSelected { path } => {
            vec![AppCommand::WriteExportArtifact { path }]
        }
        AppIntent::CopyVerticesRequested { layer_index } => {
            vec![AppCommand::CopyLayerVertices { layer_index }]
        }
        AppIntent::CopyColorsRequested { layer_index } => {
            vec![AppCommand::CopyLayerColors { layer_index }]
        }
        AppIntent::CopyIndicesRequested { layer_index } => {
            vec![AppCommand::CopyLayerIndices { layer_index }]
        }
        AppIntent::CopyAllLayersRequested => vec![AppCommand::CopyAllLayers],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
