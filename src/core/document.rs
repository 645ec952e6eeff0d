//! Dokument: geordnete Layer-Liste mit fortlaufender Namensvergabe.

use crate::core::{DrawMode, Layer};

/// Das bearbeitete Shape-Dokument.
///
/// Layer werden über ihren Index in der Liste angesprochen; die
/// laufende Nummer für neue Layer-Namen zählt nur aufwärts, damit
/// nach dem Löschen kein Name doppelt vergeben wird.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDocument {
    layers: Vec<Layer>,
    next_layer_number: u32,
}

impl Default for ShapeDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeDocument {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            next_layer_number: 1,
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Legt einen neuen Layer `"Layer N"` am Listenende an und gibt
    /// dessen Index zurück.
    pub fn add_layer(&mut self, draw_mode: DrawMode) -> usize {
        let name = format!("Layer {}", self.next_layer_number);
        self.next_layer_number += 1;
        self.layers.push(Layer::new(name, draw_mode));
        self.layers.len() - 1
    }

    /// Entfernt den Layer an `index`; `None` bei ungültigem Index.
    pub fn remove_layer(&mut self, index: usize) -> Option<Layer> {
        if index >= self.layers.len() {
            return None;
        }
        Some(self.layers.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_layer_vergibt_fortlaufende_namen() {
        let mut doc = ShapeDocument::new();
        doc.add_layer(DrawMode::Points);
        doc.add_layer(DrawMode::Lines);
        assert_eq!(doc.layer(0).unwrap().name, "Layer 1");
        assert_eq!(doc.layer(1).unwrap().name, "Layer 2");
    }

    #[test]
    fn test_namen_werden_nach_loeschen_nicht_wiederverwendet() {
        let mut doc = ShapeDocument::new();
        doc.add_layer(DrawMode::Points);
        doc.add_layer(DrawMode::Points);
        doc.remove_layer(1);
        let idx = doc.add_layer(DrawMode::Points);
        assert_eq!(doc.layer(idx).unwrap().name, "Layer 3", "Layer 2 darf nicht erneut vergeben werden");
    }

    #[test]
    fn test_remove_layer_ausserhalb_ist_none() {
        let mut doc = ShapeDocument::new();
        doc.add_layer(DrawMode::Points);
        assert!(doc.remove_layer(3).is_none());
        assert_eq!(doc.layer_count(), 1);
    }
}
