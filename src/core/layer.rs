//! Ein Layer: benannte Vertex-Liste mit Farben und Topologie.

use crate::core::DrawMode;
use glam::{Vec2, Vec3};

/// Benannter Layer des Dokuments.
///
/// Positionen und Farben liegen als flache `f32`-Puffer vor
/// (drei Komponenten pro Vertex), wie sie der Renderer und der
/// Export direkt konsumieren. Invariante: beide Puffer sind immer
/// gleich lang und ein Vielfaches von 3 — deshalb sind sie privat
/// und nur über die Methoden hier veränderbar.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub draw_mode: DrawMode,
    vertices: Vec<f32>,
    colors: Vec<f32>,
}

impl Layer {
    pub fn new(name: impl Into<String>, draw_mode: DrawMode) -> Self {
        Self {
            name: name.into(),
            draw_mode,
            vertices: Vec::new(),
            colors: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Flacher Positions-Puffer (x,y,z je Vertex).
    pub fn positions(&self) -> &[f32] {
        &self.vertices
    }

    /// Flacher Farb-Puffer (r,g,b je Vertex).
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        let i = index.checked_mul(3)?;
        let chunk = self.vertices.get(i..i + 3)?;
        Some(Vec3::new(chunk[0], chunk[1], chunk[2]))
    }

    pub fn color(&self, index: usize) -> Option<[f32; 3]> {
        let i = index.checked_mul(3)?;
        let chunk = self.colors.get(i..i + 3)?;
        Some([chunk[0], chunk[1], chunk[2]])
    }

    /// Fügt einen Vertex vor `index` ein (`index == vertex_count()` hängt an).
    ///
    /// Gibt `false` zurück, wenn der Index außerhalb liegt; der Layer
    /// bleibt dann unverändert.
    pub fn insert_vertex(&mut self, index: usize, position: Vec3, color: [f32; 3]) -> bool {
        if index > self.vertex_count() {
            return false;
        }
        let i = index * 3;
        self.vertices.splice(i..i, position.to_array());
        self.colors.splice(i..i, color);
        true
    }

    /// Entfernt den Vertex an `index`; `false` bei ungültigem Index.
    pub fn remove_vertex(&mut self, index: usize) -> bool {
        if index >= self.vertex_count() {
            return false;
        }
        let i = index * 3;
        self.vertices.drain(i..i + 3);
        self.colors.drain(i..i + 3);
        true
    }

    pub fn set_position(&mut self, index: usize, position: Vec3) -> bool {
        if index >= self.vertex_count() {
            return false;
        }
        let i = index * 3;
        self.vertices[i..i + 3].copy_from_slice(&position.to_array());
        true
    }

    pub fn set_color(&mut self, index: usize, color: [f32; 3]) -> bool {
        if index >= self.vertex_count() {
            return false;
        }
        let i = index * 3;
        self.colors[i..i + 3].copy_from_slice(&color);
        true
    }

    /// Leert beide Puffer; Name und Topologie bleiben erhalten.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.colors.clear();
    }

    /// Achsenparallele Hülle der xy-Komponenten, `None` wenn leer.
    pub fn bounding_box(&self) -> Option<(Vec2, Vec2)> {
        let mut chunks = self.vertices.chunks_exact(3);
        let first = chunks.next()?;
        let mut min = Vec2::new(first[0], first[1]);
        let mut max = min;
        for chunk in chunks {
            min = min.min(Vec2::new(chunk[0], chunk[1]));
            max = max.max(Vec2::new(chunk[0], chunk[1]));
        }
        Some((min, max))
    }
}
