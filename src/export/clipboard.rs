//! Clipboard-Snippets: einzelne Layer-Puffer als JS-Konstanten,
//! alle Layer gesammelt als JSON.

use serde::Serialize;

use crate::core::{Layer, ShapeDocument};
use crate::export::format::{format_index_list, format_number_list};
use crate::export::{collect_shapes, generate_indices};
use crate::shared::EditorOptions;

/// `const vertices = [...]` für einen Layer.
pub fn vertices_snippet(layer: &Layer, options: &EditorOptions) -> String {
    snippet(
        "vertices",
        &format_number_list(layer.positions(), options.float_precision, options.export_group_size),
    )
}

/// `const colors = [...]` für einen Layer.
pub fn colors_snippet(layer: &Layer, options: &EditorOptions) -> String {
    snippet(
        "colors",
        &format_number_list(layer.colors(), options.float_precision, options.export_group_size),
    )
}

/// `const indices = [...]` für einen Layer (Indizes werden erzeugt).
pub fn indices_snippet(layer: &Layer, options: &EditorOptions) -> String {
    snippet(
        "indices",
        &format_index_list(&generate_indices(layer.vertex_count()), options.export_group_size),
    )
}

fn snippet(name: &str, body: &str) -> String {
    if body.is_empty() {
        return format!("const {name} = [];\n");
    }
    format!("const {name} = [\n    {body}\n];\n")
}

#[derive(Serialize)]
struct LayerJson {
    name: String,
    vertices: Vec<f32>,
    colors: Vec<f32>,
    indices: Vec<u32>,
    #[serde(rename = "drawMode")]
    draw_mode: &'static str,
}

/// Alle Layer als formatiertes JSON-Array (Bulk-Copy).
pub fn document_to_json(document: &ShapeDocument) -> anyhow::Result<String> {
    let layers: Vec<LayerJson> = collect_shapes(document)
        .into_iter()
        .map(|shape| LayerJson {
            name: shape.name,
            vertices: shape.vertices,
            colors: shape.colors,
            indices: shape.indices,
            draw_mode: shape.draw_mode.token(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&layers)?)
}
