//! Frame-Vertrag zwischen `app` und `render`.
//!
//! Die `app`-Schicht baut pro Frame eine `RenderScene` aus dem
//! aktuellen Zustand; die `render`-Schicht konsumiert sie nur lesend.
//! Zwei Builds ohne zwischenliegende Mutation ergeben identische Szenen.

use crate::core::DrawMode;

/// Ein Zeichenbefehl: Vertices einer Topologie mit Farben und
/// globalem Farb-Modifikator.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveBatch {
    pub topology: DrawMode,
    /// Flacher Positions-Puffer (x,y,z je Vertex, NDC).
    pub positions: Vec<f32>,
    /// Flacher Farb-Puffer (r,g,b je Vertex).
    pub colors: Vec<f32>,
    /// Wird im Shader mit der Vertex-Farbe multipliziert.
    pub color_mod: [f32; 4],
}

impl PrimitiveBatch {
    /// Batch ohne Farb-Modifikation (Modifikator = Weiß).
    pub fn plain(topology: DrawMode, positions: Vec<f32>, colors: Vec<f32>) -> Self {
        Self {
            topology,
            positions,
            colors,
            color_mod: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Vollständige Frame-Beschreibung für den Renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Hintergrundfarbe der Zeichenfläche.
    pub clear_color: [f32; 3],
    /// Zeichenbefehle in Zeichenreihenfolge (hinten → vorne).
    pub batches: Vec<PrimitiveBatch>,
    /// Punktgröße für `POINTS`-Topologien in Screen-Pixeln.
    pub point_size_px: f32,
    /// Viewport-Größe in Pixeln (für die Punkt-Quad-Tessellation).
    pub viewport_size: [f32; 2],
}
