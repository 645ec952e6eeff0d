//! Dokument → Shape-Datensätze, wie sie der Export und das
//! Model2D-Laufzeitartefakt konsumieren.

use crate::core::{DrawMode, ShapeDocument};
use crate::export::generate_indices;

/// Ein exportfertiger Shape: genau ein Layer mit erzeugten Indizes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    pub name: String,
    pub vertices: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Vec<u32>,
    pub draw_mode: DrawMode,
}

/// Abnehmer registrierter Shapes (entspricht `Model2D.addShape`).
///
/// Produktiv schreibt der Export JavaScript-Quelltext; im Test ersetzt
/// ein Stub den WebGL-Konsumenten und protokolliert die Aufrufe.
pub trait ShapeSink {
    fn add_shape(&mut self, vertices: &[f32], colors: &[f32], indices: &[u32], mode: DrawMode);
}

/// Erzeugt pro Layer einen `ShapeRecord` in Dokument-Reihenfolge.
pub fn collect_shapes(document: &ShapeDocument) -> Vec<ShapeRecord> {
    document
        .layers()
        .iter()
        .map(|layer| ShapeRecord {
            name: layer.name.clone(),
            vertices: layer.positions().to_vec(),
            colors: layer.colors().to_vec(),
            indices: generate_indices(layer.vertex_count()),
            draw_mode: layer.draw_mode,
        })
        .collect()
}

/// Spielt die Datensätze als je einen `add_shape`-Aufruf ab.
pub fn replay_shapes(records: &[ShapeRecord], sink: &mut impl ShapeSink) {
    for record in records {
        sink.add_shape(
            &record.vertices,
            &record.colors,
            &record.indices,
            record.draw_mode,
        );
    }
}
