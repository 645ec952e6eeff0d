//! Zentrale Konfiguration für den Shape2D-Designer.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius für Vertex-Selektion in NDC-Einheiten (3D-Distanz).
pub const VERTEX_SELECTION_RADIUS: f32 = 0.05;
/// Kantenlänge des Markierungs-Quadrats um den selektierten Vertex (NDC).
pub const SELECTED_VERTEX_MARKER_SIZE: f32 = 0.03;

// ── Raster ──────────────────────────────────────────────────────────

/// Standard-Rasterweite in NDC-Einheiten.
pub const GRID_SIZE_DEFAULT: f32 = 0.1;
/// Kontrastfaktor der Rasterlinien gegenüber der Canvas-Farbe.
pub const GRID_CONTRAST_FACTOR: f32 = 0.5;
/// Kontrastfaktor der Bounding-Box des selektierten Layers.
pub const BOUNDING_BOX_CONTRAST_FACTOR: f32 = 0.7;

// ── Farben ──────────────────────────────────────────────────────────

/// Standard-Hintergrundfarbe der Zeichenfläche (RGB: Schwarz).
pub const CANVAS_COLOR_DEFAULT: [f32; 3] = [0.0, 0.0, 0.0];
/// Standard-Zeichenfarbe neuer Vertices (RGB: Weiß).
pub const PAINT_COLOR_DEFAULT: [f32; 3] = [1.0, 1.0, 1.0];

// ── Rendering ───────────────────────────────────────────────────────

/// Punktgröße beim Zeichnen von `POINTS`-Layern in Screen-Pixeln.
pub const POINT_SIZE_PX: f32 = 5.0;

// ── Export ──────────────────────────────────────────────────────────

/// Nachkommastellen für exportierte Zahlenlisten.
pub const FLOAT_PRECISION: usize = 3;
/// Werte pro Zeile in exportierten Zahlenlisten (eine Vertex-Gruppe).
pub const EXPORT_GROUP_SIZE: usize = 3;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `shape2d_designer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Vertex-Selektion (NDC, 3D-Distanz)
    pub vertex_selection_radius: f32,
    /// Kantenlänge des Selektions-Markers (NDC)
    #[serde(default = "default_marker_size")]
    pub selected_vertex_marker_size: f32,

    // ── Raster ──────────────────────────────────────────────────
    /// Standard-Rasterweite beim Start
    pub grid_size_default: f32,
    /// Kontrastfaktor der Rasterlinien gegenüber der Canvas-Farbe
    pub grid_contrast_factor: f32,
    /// Kontrastfaktor der Bounding-Box des selektierten Layers
    #[serde(default = "default_bounding_box_contrast")]
    pub bounding_box_contrast_factor: f32,

    // ── Farben ──────────────────────────────────────────────────
    /// Hintergrundfarbe der Zeichenfläche beim Start
    pub canvas_color_default: [f32; 3],
    /// Zeichenfarbe neuer Vertices beim Start
    pub paint_color_default: [f32; 3],

    // ── Rendering ───────────────────────────────────────────────
    /// Punktgröße für `POINTS`-Layer in Screen-Pixeln
    pub point_size_px: f32,

    // ── Export ──────────────────────────────────────────────────
    /// Nachkommastellen exportierter Zahlenlisten
    #[serde(default = "default_float_precision")]
    pub float_precision: usize,
    /// Werte pro Zeile in exportierten Zahlenlisten
    #[serde(default = "default_export_group_size")]
    pub export_group_size: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            vertex_selection_radius: VERTEX_SELECTION_RADIUS,
            selected_vertex_marker_size: SELECTED_VERTEX_MARKER_SIZE,

            grid_size_default: GRID_SIZE_DEFAULT,
            grid_contrast_factor: GRID_CONTRAST_FACTOR,
            bounding_box_contrast_factor: BOUNDING_BOX_CONTRAST_FACTOR,

            canvas_color_default: CANVAS_COLOR_DEFAULT,
            paint_color_default: PAINT_COLOR_DEFAULT,

            point_size_px: POINT_SIZE_PX,

            float_precision: FLOAT_PRECISION,
            export_group_size: EXPORT_GROUP_SIZE,
        }
    }
}

/// Serde-Default für `selected_vertex_marker_size` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_marker_size() -> f32 {
    SELECTED_VERTEX_MARKER_SIZE
}

/// Serde-Default für `bounding_box_contrast_factor` (Abwärtskompatibilität).
fn default_bounding_box_contrast() -> f32 {
    BOUNDING_BOX_CONTRAST_FACTOR
}

/// Serde-Default für `float_precision` (Abwärtskompatibilität).
fn default_float_precision() -> usize {
    FLOAT_PRECISION
}

/// Serde-Default für `export_group_size` (Abwärtskompatibilität).
fn default_export_group_size() -> usize {
    EXPORT_GROUP_SIZE
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.validated()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt unbrauchbare Werte aus der TOML-Datei durch Defaults.
    ///
    /// Die Rasterweite muss strikt positiv sein (sie teilt beim
    /// Snapping und bestimmt die Zahl der Rasterlinien), die
    /// Gruppengröße des Exports mindestens 1.
    fn validated(mut self) -> Self {
        if !self.grid_size_default.is_finite() || self.grid_size_default <= 0.0 {
            log::warn!(
                "Ungültige Rasterweite {} in den Optionen, verwende {}",
                self.grid_size_default,
                GRID_SIZE_DEFAULT
            );
            self.grid_size_default = GRID_SIZE_DEFAULT;
        }
        if self.export_group_size == 0 {
            self.export_group_size = EXPORT_GROUP_SIZE;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("shape2d_designer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("shape2d_designer.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip_erhaelt_werte() {
        let mut opts = EditorOptions::default();
        opts.vertex_selection_radius = 0.08;
        opts.canvas_color_default = [0.1, 0.2, 0.3];

        let toml_str = toml::to_string_pretty(&opts).expect("serialisierbar");
        let geladen: EditorOptions = toml::from_str(&toml_str).expect("deserialisierbar");
        assert_eq!(geladen, opts);
    }

    #[test]
    fn test_fehlende_felder_fallen_auf_defaults() {
        // Alte TOML-Datei ohne die später ergänzten Felder
        let toml_str = r#"
            vertex_selection_radius = 0.05
            grid_size_default = 0.1
            grid_contrast_factor = 0.5
            canvas_color_default = [0.0, 0.0, 0.0]
            paint_color_default = [1.0, 1.0, 1.0]
            point_size_px = 5.0
        "#;
        let opts: EditorOptions = toml::from_str(toml_str).expect("deserialisierbar");
        assert_eq!(opts.float_precision, FLOAT_PRECISION);
        assert_eq!(opts.selected_vertex_marker_size, SELECTED_VERTEX_MARKER_SIZE);
    }

    #[test]
    fn test_rasterweite_null_aus_toml_faellt_auf_default() {
        // Eine manuell editierte Datei darf keine Rasterweite 0 einschleusen
        let mut opts = EditorOptions::default();
        opts.grid_size_default = 0.0;
        let path = std::env::temp_dir().join("shape2d_designer_options_test.toml");
        std::fs::write(&path, toml::to_string_pretty(&opts).unwrap()).unwrap();

        let geladen = EditorOptions::load_from_file(&path);
        assert_eq!(geladen.grid_size_default, GRID_SIZE_DEFAULT);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_negative_rasterweite_wird_ersetzt() {
        let mut opts = EditorOptions::default();
        opts.grid_size_default = -0.5;
        assert_eq!(opts.validated().grid_size_default, GRID_SIZE_DEFAULT);
    }
}
