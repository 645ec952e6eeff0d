//! Export des Dokuments als JavaScript-Quelltext und Clipboard-Snippets.

pub mod clipboard;
pub mod format;
pub mod indices;
pub mod model_writer;
pub mod runtime;
pub mod shapes;

pub use indices::generate_indices;
pub use model_writer::write_model_class;
pub use shapes::{collect_shapes, replay_shapes, ShapeRecord, ShapeSink};

/// Fertig gerenderter Export: Dateiname plus Inhalt.
///
/// Wird vom Handler erzeugt und erst nach der Pfadwahl im
/// Save-Dialog auf die Platte geschrieben.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content: String,
}
