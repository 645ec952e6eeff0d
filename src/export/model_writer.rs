//! Schreibt das Dokument als JavaScript-Klasse `Model2D_<Name>`.

use anyhow::bail;

use crate::core::ShapeDocument;
use crate::export::format::{format_index_list, format_number_list};
use crate::export::{collect_shapes, ExportArtifact};
use crate::shared::EditorOptions;

/// Rendert das Dokument als `Model2D`-Unterklasse.
///
/// Pro Layer entsteht genau ein
/// `this.addShape(vertices, colors, indices, this.gl.<MODE>);` mit
/// Literal-Arrays. Klassenname: `Model2D_` plus Modellname mit großem
/// Anfangsbuchstaben; Dateiname: `model2D_` plus Modellname in
/// Kleinbuchstaben. Leerer Modellname ist ein Eingabefehler.
pub fn write_model_class(
    document: &ShapeDocument,
    model_name: &str,
    options: &EditorOptions,
) -> anyhow::Result<ExportArtifact> {
    let name = model_name.trim();
    if name.is_empty() {
        bail!("Modellname darf nicht leer sein");
    }

    let mut content = String::new();
    content.push_str(&format!(
        "class Model2D_{} extends Model2D {{\n",
        capitalize_first(name)
    ));
    content.push_str("    constructor(gl) {\n");
    content.push_str("        super(gl);\n");

    for (i, shape) in collect_shapes(document).iter().enumerate() {
        let n = i + 1;
        content.push_str(&format!("\n        // {}\n", shape.name));
        content.push_str(&array_declaration(
            &format!("vertices{n}"),
            &format_number_list(&shape.vertices, options.float_precision, options.export_group_size),
        ));
        content.push_str(&array_declaration(
            &format!("colors{n}"),
            &format_number_list(&shape.colors, options.float_precision, options.export_group_size),
        ));
        content.push_str(&array_declaration(
            &format!("indices{n}"),
            &format_index_list(&shape.indices, options.export_group_size),
        ));
        content.push_str(&format!(
            "        this.addShape(vertices{n}, colors{n}, indices{n}, this.gl.{});\n",
            shape.draw_mode.token()
        ));
    }

    content.push_str("    }\n}\n");

    Ok(ExportArtifact {
        file_name: format!("model2D_{}.js", name.to_lowercase()),
        content,
    })
}

/// `const <name> = [ ... ];` mit auf Konstruktor-Tiefe eingerückten Zeilen.
fn array_declaration(name: &str, body: &str) -> String {
    if body.is_empty() {
        return format!("        const {name} = [];\n");
    }
    let body = body.replace("\n    ", "\n            ");
    format!("        const {name} = [\n            {body}\n        ];\n")
}

/// Erster Buchstabe groß, Rest unverändert.
fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DrawMode;
    use glam::Vec3;

    fn with_quad_document() -> ShapeDocument {
        let mut doc = ShapeDocument::new();
        let idx = doc.add_layer(DrawMode::TriangleFan);
        let layer = doc.layer_mut(idx).unwrap();
        let ecken = [
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(-0.5, 0.5, 0.0),
        ];
        for (i, p) in ecken.iter().enumerate() {
            layer.insert_vertex(i, *p, [1.0, 1.0, 1.0]);
        }
        doc
    }

    #[test]
    fn test_klassen_und_dateiname() {
        let artefakt =
            write_model_class(&with_quad_document(), "quad", &EditorOptions::default()).unwrap();
        assert_eq!(artefakt.file_name, "model2D_quad.js");
        assert!(artefakt
            .content
            .starts_with("class Model2D_Quad extends Model2D {"));
    }

    #[test]
    fn test_ein_addshape_pro_layer_mit_topologie_token() {
        let mut doc = with_quad_document();
        doc.add_layer(DrawMode::Points);
        let artefakt = write_model_class(&doc, "Figur", &EditorOptions::default()).unwrap();
        assert!(artefakt
            .content
            .contains("this.addShape(vertices1, colors1, indices1, this.gl.TRIANGLE_FAN);"));
        assert!(artefakt
            .content
            .contains("this.addShape(vertices2, colors2, indices2, this.gl.POINTS);"));
    }

    #[test]
    fn test_arrays_als_literale_mit_fester_praezision() {
        let artefakt =
            write_model_class(&with_quad_document(), "quad", &EditorOptions::default()).unwrap();
        assert!(artefakt.content.contains("-0.500, -0.500, 0.000"));
        // Fächer-Indizes des Vierecks
        assert!(artefakt.content.contains("0, 1, 2,"));
        assert!(artefakt.content.contains("0, 2, 3"));
    }

    #[test]
    fn test_leerer_name_ist_fehler() {
        let doc = with_quad_document();
        assert!(write_model_class(&doc, "   ", &EditorOptions::default()).is_err());
        assert!(write_model_class(&doc, "", &EditorOptions::default()).is_err());
    }

    #[test]
    fn test_leerer_layer_ergibt_leere_literale() {
        let mut doc = ShapeDocument::new();
        doc.add_layer(DrawMode::Lines);
        let artefakt = write_model_class(&doc, "leer", &EditorOptions::default()).unwrap();
        assert!(artefakt.content.contains("const vertices1 = [];"));
        assert!(artefakt.content.contains("this.addShape(vertices1, colors1, indices1, this.gl.LINES);"));
    }
}
