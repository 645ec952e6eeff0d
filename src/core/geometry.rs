//! Geometrie-Grundfunktionen: Segment-Distanz, Grid-Snapping,
//! Screen→NDC-Transformation.

use glam::Vec3;

/// Canvas-Ausschnitt in Bildschirm-Pixeln (Ursprung links oben).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Kürzester Abstand eines Punkts zu einem Liniensegment.
///
/// Projektion wird auf [0,1] geklemmt; degeneriertes Segment
/// (Start == Ende) fällt auf die Punkt-Distanz zurück.
pub fn distance_to_segment(point: Vec3, seg_start: Vec3, seg_end: Vec3) -> f32 {
    let dir = seg_end - seg_start;
    let len_sq = dir.length_squared();
    let closest = if len_sq == 0.0 {
        seg_start
    } else {
        let t = ((point - seg_start).dot(dir) / len_sq).clamp(0.0, 1.0);
        seg_start + dir * t
    };
    point.distance(closest)
}

/// Rundet einen Wert auf das nächste Vielfache der Rasterweite.
pub fn snap_to_grid(value: f32, grid_size: f32) -> f32 {
    (value / grid_size).round() * grid_size
}

/// Rechnet eine Bildschirmposition in normalisierte Gerätekoordinaten um.
///
/// x wächst nach rechts, y nach oben (Pixel-y wird gespiegelt); das
/// Canvas-Innere ergibt [-1, 1]. Bei aktivem Raster werden alle drei
/// Komponenten gerundet, auch z.
pub fn screen_to_normalized(
    screen_x: f32,
    screen_y: f32,
    depth: f32,
    rect: CanvasRect,
    grid_size: Option<f32>,
) -> Vec3 {
    let mut x = (screen_x - rect.left) / rect.width * 2.0 - 1.0;
    let mut y = 1.0 - (screen_y - rect.top) / rect.height * 2.0;
    let mut z = depth;
    if let Some(grid) = grid_size.filter(|g| *g > 0.0) {
        x = snap_to_grid(x, grid);
        y = snap_to_grid(y, grid);
        z = snap_to_grid(z, grid);
    }
    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distanz_zu_horizontalem_segment() {
        let d = distance_to_segment(
            Vec3::new(0.5, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert_relative_eq!(d, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_distanz_klemmt_auf_endpunkte() {
        // Punkt liegt jenseits des Segment-Endes → Distanz zum Endpunkt
        let d = distance_to_segment(
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        assert_relative_eq!(d, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_degeneriertes_segment_liefert_punktdistanz() {
        let p = Vec3::new(3.0, 4.0, 0.0);
        let s = Vec3::new(0.0, 0.0, 0.0);
        let d = distance_to_segment(p, s, s);
        assert_relative_eq!(d, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_screen_mapping_ecken_und_mitte() {
        let rect = CanvasRect::new(10.0, 20.0, 200.0, 100.0);

        let mitte = screen_to_normalized(110.0, 70.0, 0.0, rect, None);
        assert_relative_eq!(mitte.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(mitte.y, 0.0, epsilon = 1e-6);

        // Links oben → (-1, +1): Pixel-y ist gespiegelt
        let oben_links = screen_to_normalized(10.0, 20.0, 0.0, rect, None);
        assert_relative_eq!(oben_links.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(oben_links.y, 1.0, epsilon = 1e-6);

        let unten_rechts = screen_to_normalized(210.0, 120.0, 0.0, rect, None);
        assert_relative_eq!(unten_rechts.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(unten_rechts.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_snapping_rundet_alle_komponenten() {
        let rect = CanvasRect::new(0.0, 0.0, 100.0, 100.0);
        // (57, 31) → NDC (0.14, 0.38) → Raster 0.1 → (0.1, 0.4)
        let p = screen_to_normalized(57.0, 31.0, 0.07, rect, Some(0.1));
        assert_relative_eq!(p.x, 0.1, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.4, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.1, epsilon = 1e-6);
    }

    #[test]
    fn test_snapping_inaktiv_bei_rasterweite_null() {
        let rect = CanvasRect::new(0.0, 0.0, 100.0, 100.0);
        let p = screen_to_normalized(57.0, 31.0, 0.0, rect, Some(0.0));
        assert_relative_eq!(p.x, 0.14, epsilon = 1e-6);
    }
}
