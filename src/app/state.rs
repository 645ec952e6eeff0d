//! Application State — zentrale Datenhaltung.

use crate::core::{CanvasRect, ShapeDocument};
use crate::export::ExportArtifact;
use crate::shared::EditorOptions;

/// Auswahlbezogener Anwendungszustand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Index des selektierten Layers (None = keiner)
    pub layer: Option<usize>,
    /// Index des selektierten Vertex im selektierten Layer
    pub vertex: Option<usize>,
    /// Läuft gerade ein Vertex-Drag?
    pub dragging: bool,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selektiert einen Layer; die Vertex-Selektion wird dabei immer
    /// verworfen, auch wenn derselbe Layer erneut gewählt wird.
    pub fn select_layer(&mut self, index: Option<usize>) {
        self.layer = index;
        self.vertex = None;
        self.dragging = false;
    }
}

/// View-bezogener Anwendungszustand.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Canvas-Ausschnitt in Bildschirm-Pixeln (von der UI pro Frame gemeldet)
    pub canvas_rect: CanvasRect,
    /// Raster-Snapping aktiv?
    pub snap_to_grid: bool,
    /// Rasterweite in NDC-Einheiten
    pub grid_size: f32,
    /// Hintergrundfarbe der Zeichenfläche
    pub canvas_color: [f32; 3],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand aus den Optionen.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            canvas_rect: CanvasRect::default(),
            snap_to_grid: false,
            grid_size: options.grid_size_default,
            canvas_color: options.canvas_color_default,
        }
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Modellname für den Export (Eingabefeld im Panel)
    pub model_name: String,
    /// Zeichenfarbe für neue Vertices
    pub paint_color: [f32; 3],
    /// Temporäre Statusnachricht (z.B. Export-Fehler)
    pub status_message: Option<String>,
    /// Fertiges Export-Artefakt, wartet auf Pfadwahl im Save-Dialog
    pub pending_export: Option<ExportArtifact>,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_export_save_dialog: bool,
    /// Text, der im nächsten Frame ins Clipboard übernommen wird
    pub pending_clipboard: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand aus den Optionen.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            model_name: String::new(),
            paint_color: options.paint_color_default,
            status_message: None,
            pending_export: None,
            show_export_save_dialog: false,
            pending_clipboard: None,
        }
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Das bearbeitete Dokument
    pub document: ShapeDocument,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Laufzeit-Optionen (Radien, Farben, Präzision)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Dokument.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit gegebenen Optionen (z.B. aus TOML geladen).
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            document: ShapeDocument::new(),
            view: ViewState::new(&options),
            ui: UiState::new(&options),
            selection: SelectionState::new(),
            options,
            should_exit: false,
        }
    }

    /// Der aktuell selektierte Layer, falls vorhanden.
    pub fn selected_layer(&self) -> Option<&crate::core::Layer> {
        self.document.layer(self.selection.layer?)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
