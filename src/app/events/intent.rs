//! UI-Absichten: rohe, kontextfreie Eingaben der Oberfläche.

use crate::core::{CanvasRect, DrawMode};
use crate::shared::EditorOptions;
use glam::Vec3;

/// Absichten der UI-Schicht, noch ohne Kenntnis des App-Zustands.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    // ── Canvas / Pointer ────────────────────────────────────────
    /// Canvas-Rechteck des aktuellen Frames (jedes Frame gemeldet)
    CanvasResized { rect: CanvasRect },
    /// Primärtaste auf dem Canvas gedrückt (Bildschirm-Pixel)
    CanvasPointerPressed { screen_x: f32, screen_y: f32 },
    /// Pointer bei gedrückter Primärtaste bewegt
    CanvasPointerMoved { screen_x: f32, screen_y: f32 },
    /// Primärtaste losgelassen
    CanvasPointerReleased,

    // ── Layer ───────────────────────────────────────────────────
    /// Neuen Layer anlegen
    AddLayerRequested,
    /// Selektierten Layer löschen
    DeleteLayerRequested,
    /// Selektierten Layer leeren (Vertices entfernen)
    ClearLayerRequested,
    /// Layer in der Liste angeklickt
    LayerSelected { index: usize },
    /// Topologie des selektierten Layers ändern
    DrawModeChanged { mode: DrawMode },

    // ── Vertices ────────────────────────────────────────────────
    /// Selektierten Vertex löschen
    DeleteVertexRequested,
    /// Zeichenfarbe auf den selektierten Vertex anwenden
    ApplyPaintColorRequested,
    /// Zeichenfarbe im Panel geändert
    PaintColorChanged { color: [f32; 3] },
    /// Numerischer Vertex-Editor: Position/Farbe geändert
    VertexEditorChanged { position: Vec3, color: [f32; 3] },

    // ── Ansicht ─────────────────────────────────────────────────
    /// Raster-Snapping ein-/ausschalten
    GridToggled { enabled: bool },
    /// Rasterweite geändert
    GridSizeChanged { size: f32 },
    /// Hintergrundfarbe der Zeichenfläche geändert
    CanvasColorChanged { color: [f32; 3] },

    // ── Export ──────────────────────────────────────────────────
    /// Modellname im Panel geändert
    ModelNameChanged { name: String },
    /// Export der Modellklasse angefordert
    ExportModelRequested,
    /// Export des Model2D-Laufzeitartefakts angefordert
    ExportRuntimeRequested,
    /// Save-Dialog hat einen Zielpfad geliefert
    ExportPathSelected { path: String },
    /// Vertex-Puffer eines Layers ins Clipboard kopieren
    CopyVerticesRequested { layer_index: usize },
    /// Farb-Puffer eines Layers ins Clipboard kopieren
    CopyColorsRequested { layer_index: usize },
    /// Index-Liste eines Layers ins Clipboard kopieren
    CopyIndicesRequested { layer_index: usize },
    /// Alle Layer als JSON ins Clipboard kopieren
    CopyAllLayersRequested,

    // ── Sonstiges ───────────────────────────────────────────────
    /// Geänderte Optionen übernehmen und speichern
    OptionsChanged { options: EditorOptions },
    /// Anwendung beenden
    ExitRequested,
}
