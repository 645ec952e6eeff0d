//! Eingebettetes Model2D-Laufzeitartefakt.
//!
//! Die exportierten Klassen erben von `Model2D`; diese Basisklasse wird
//! als eigenständige Datei `model2D.js` mitgeliefert, damit die Exporte
//! ohne den Editor lauffähig sind.

use crate::export::ExportArtifact;

const RUNTIME_FILE_NAME: &str = "model2D.js";

const RUNTIME_SOURCE: &str = r#"class Model2D {
    constructor(gl) {
        this.gl = gl;
        this.shapes = [];
    }

    addShape(vertices, colors, indices, drawMode) {
        const gl = this.gl;

        const vertexBuffer = gl.createBuffer();
        gl.bindBuffer(gl.ARRAY_BUFFER, vertexBuffer);
        gl.bufferData(gl.ARRAY_BUFFER, new Float32Array(vertices), gl.STATIC_DRAW);

        const colorBuffer = gl.createBuffer();
        gl.bindBuffer(gl.ARRAY_BUFFER, colorBuffer);
        gl.bufferData(gl.ARRAY_BUFFER, new Float32Array(colors), gl.STATIC_DRAW);

        const indexBuffer = gl.createBuffer();
        gl.bindBuffer(gl.ELEMENT_ARRAY_BUFFER, indexBuffer);
        gl.bufferData(gl.ELEMENT_ARRAY_BUFFER, new Uint16Array(indices), gl.STATIC_DRAW);

        this.shapes.push({
            vertexBuffer,
            colorBuffer,
            indexBuffer,
            vertexCount: vertices.length / 3,
            drawMode,
        });
    }

    draw(positionLocation, colorLocation) {
        const gl = this.gl;
        for (const shape of this.shapes) {
            gl.bindBuffer(gl.ARRAY_BUFFER, shape.vertexBuffer);
            gl.vertexAttribPointer(positionLocation, 3, gl.FLOAT, false, 0, 0);
            gl.enableVertexAttribArray(positionLocation);

            gl.bindBuffer(gl.ARRAY_BUFFER, shape.colorBuffer);
            gl.vertexAttribPointer(colorLocation, 3, gl.FLOAT, false, 0, 0);
            gl.enableVertexAttribArray(colorLocation);

            gl.drawArrays(shape.drawMode, 0, shape.vertexCount);
        }
    }
}
"#;

/// Das unveränderliche Laufzeitartefakt.
pub fn runtime_artifact() -> ExportArtifact {
    ExportArtifact {
        file_name: RUNTIME_FILE_NAME.to_string(),
        content: RUNTIME_SOURCE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laufzeitklasse_traegt_addshape() {
        let artefakt = runtime_artifact();
        assert_eq!(artefakt.file_name, "model2D.js");
        assert!(artefakt.content.starts_with("class Model2D {"));
        assert!(artefakt
            .content
            .contains("addShape(vertices, colors, indices, drawMode)"));
    }
}
