//! Ausführbare Commands: vom Controller dispatchte Zustandsänderungen.

use crate::core::{CanvasRect, DrawMode};
use crate::shared::EditorOptions;
use glam::Vec3;

/// Vom `intent_mapping` erzeugte, ausführbare Commands.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Canvas / Pointer ────────────────────────────────────────
    /// Canvas-Rechteck übernehmen
    SetCanvasRect { rect: CanvasRect },
    /// Pointer-Down-Protokoll ausführen (Treffer selektieren oder Vertex einfügen)
    PressPointer { screen_x: f32, screen_y: f32 },
    /// Laufenden Drag fortschreiben
    DragPointer { screen_x: f32, screen_y: f32 },
    /// Drag beenden
    ReleasePointer,

    // ── Layer ───────────────────────────────────────────────────
    /// Layer anlegen (Topologie erbt vom selektierten Layer)
    AddLayer,
    /// Selektierten Layer löschen
    DeleteLayer,
    /// Selektierten Layer leeren
    ClearLayer,
    /// Layer selektieren
    SelectLayer { index: usize },
    /// Topologie des selektierten Layers setzen
    SetDrawMode { mode: DrawMode },

    // ── Vertices ────────────────────────────────────────────────
    /// Selektierten Vertex löschen
    DeleteSelectedVertex,
    /// Zeichenfarbe auf den selektierten Vertex anwenden
    ApplyPaintColor,
    /// Zeichenfarbe setzen
    SetPaintColor { color: [f32; 3] },
    /// Selektierten Vertex aus dem numerischen Editor aktualisieren
    UpdateSelectedVertex { position: Vec3, color: [f32; 3] },

    // ── Ansicht ─────────────────────────────────────────────────
    /// Raster-Snapping setzen
    SetGridEnabled { enabled: bool },
    /// Rasterweite setzen
    SetGridSize { size: f32 },
    /// Hintergrundfarbe setzen
    SetCanvasColor { color: [f32; 3] },

    // ── Export ──────────────────────────────────────────────────
    /// Modellname setzen
    SetModelName { name: String },
    /// Modellklasse rendern und Save-Dialog anstoßen
    PrepareModelExport,
    /// Laufzeitartefakt bereitstellen und Save-Dialog anstoßen
    PrepareRuntimeExport,
    /// Wartendes Export-Artefakt an den gewählten Pfad schreiben
    WriteExportArtifact { path: String },
    /// Vertex-Puffer eines Layers ins Clipboard legen
    CopyLayerVertices { layer_index: usize },
    /// Farb-Puffer eines Layers ins Clipboard legen
    CopyLayerColors { layer_index: usize },
    /// Index-Liste eines Layers ins Clipboard legen
    CopyLayerIndices { layer_index: usize },
    /// Alle Layer als JSON ins Clipboard legen
    CopyAllLayers,

    // ── Sonstiges ───────────────────────────────────────────────
    /// Optionen übernehmen und als TOML speichern
    ApplyOptions { options: EditorOptions },
    /// Anwendung beenden
    RequestExit,
}
