//! WebGL-kompatible Primitive-Topologien für Layer.

/// Topologie, mit der die Vertices eines Layers interpretiert werden.
///
/// Die Varianten entsprechen 1:1 den WebGL-Draw-Modes; `token()` liefert
/// den Original-Bezeichner für Export und UI-Anzeige.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    #[default]
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl DrawMode {
    /// Alle Topologien in UI-Reihenfolge (Dropdown im Layer-Panel).
    pub const ALL: [DrawMode; 7] = [
        DrawMode::Points,
        DrawMode::Lines,
        DrawMode::LineLoop,
        DrawMode::LineStrip,
        DrawMode::Triangles,
        DrawMode::TriangleStrip,
        DrawMode::TriangleFan,
    ];

    /// WebGL-Konstantenname, z.B. `"LINE_LOOP"`.
    pub fn token(self) -> &'static str {
        match self {
            DrawMode::Points => "POINTS",
            DrawMode::Lines => "LINES",
            DrawMode::LineLoop => "LINE_LOOP",
            DrawMode::LineStrip => "LINE_STRIP",
            DrawMode::Triangles => "TRIANGLES",
            DrawMode::TriangleStrip => "TRIANGLE_STRIP",
            DrawMode::TriangleFan => "TRIANGLE_FAN",
        }
    }
}
