//! Topologiebewusste Wahl des Einfügepunkts für neue Vertices.

use crate::core::geometry::distance_to_segment;
use crate::core::Layer;
use glam::Vec3;

/// Bestimmt, an welchem Index ein neuer Vertex eingefügt wird.
///
/// Unter zwei Vertices wird schlicht angehängt. Sonst wird der
/// Umriss als geschlossener Zug betrachtet (letzter → erster Vertex
/// eingeschlossen) und die dem Punkt nächste Kante gesucht; eingefügt
/// wird vor deren Endvertex. Für die Schlusskante heißt das: an den
/// Listenanfang, vor Vertex 0.
pub fn find_insertion_point(layer: &Layer, point: Vec3) -> usize {
    let count = layer.vertex_count();
    if count < 2 {
        return count;
    }

    let mut min_dist = f32::INFINITY;
    let mut insert_at = count;
    for i in 0..count {
        let (Some(start), Some(end)) = (layer.position(i), layer.position((i + 1) % count))
        else {
            continue;
        };
        let dist = distance_to_segment(point, start, end);
        if dist < min_dist {
            min_dist = dist;
            insert_at = (i + 1) % count;
        }
    }
    insert_at
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DrawMode;

    /// Einheitsquadrat, Ecken gegen den Uhrzeigersinn ab links unten.
    fn with_square() -> Layer {
        let mut layer = Layer::new("Layer 1", DrawMode::LineLoop);
        let ecken = [
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(-0.5, 0.5, 0.0),
        ];
        for (i, p) in ecken.iter().enumerate() {
            layer.insert_vertex(i, *p, [1.0; 3]);
        }
        layer
    }

    #[test]
    fn test_unter_zwei_vertices_wird_angehaengt() {
        let mut layer = Layer::new("Layer 1", DrawMode::Points);
        assert_eq!(find_insertion_point(&layer, Vec3::ZERO), 0);
        layer.insert_vertex(0, Vec3::ZERO, [1.0; 3]);
        assert_eq!(find_insertion_point(&layer, Vec3::ONE), 1);
    }

    #[test]
    fn test_punkt_nahe_rechter_kante() {
        // Nahe der Kante Vertex 1 → Vertex 2: einfügen vor Vertex 2
        let layer = with_square();
        assert_eq!(find_insertion_point(&layer, Vec3::new(0.6, 0.0, 0.0)), 2);
    }

    #[test]
    fn test_punkt_nahe_oberer_kante() {
        let layer = with_square();
        assert_eq!(find_insertion_point(&layer, Vec3::new(0.0, 0.6, 0.0)), 3);
    }

    #[test]
    fn test_punkt_nahe_schlusskante_fuegt_vor_vertex_0_ein() {
        // Kante Vertex 3 → Vertex 0 (links): Endvertex der Kante ist 0,
        // eingefügt wird also am Listenanfang
        let layer = with_square();
        assert_eq!(find_insertion_point(&layer, Vec3::new(-0.6, 0.0, 0.0)), 0);
    }

    #[test]
    fn test_schlusskante_rotiert_die_reihenfolge() {
        let mut layer = with_square();
        let at = find_insertion_point(&layer, Vec3::new(-0.6, 0.0, 0.0));
        assert!(layer.insert_vertex(at, Vec3::new(-0.6, 0.0, 0.0), [1.0; 3]));
        // Der neue Vertex steht vorn, die alte Ecke 0 rückt auf Index 1
        assert_eq!(layer.position(0), Some(Vec3::new(-0.6, 0.0, 0.0)));
        assert_eq!(layer.position(1), Some(Vec3::new(-0.5, -0.5, 0.0)));
    }
}
