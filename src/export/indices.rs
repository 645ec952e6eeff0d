//! Index-Generierung für exportierte Shapes.

/// Erzeugt die Index-Liste für `vertex_count` Vertices.
///
/// Bis drei Vertices: Identität `[0, 1, .., n-1]`. Ab vier Vertices
/// ein Fächer um Vertex 0: `(0, i, i+1)` für `i` in `1..n-1`. Die
/// Indizes beschreiben nur bei Dreiecks-Topologien echte Dreiecke,
/// werden aber für jede Topologie mit exportiert.
pub fn generate_indices(vertex_count: usize) -> Vec<u32> {
    if vertex_count <= 3 {
        return (0..vertex_count as u32).collect();
    }
    let mut indices = Vec::with_capacity((vertex_count - 2) * 3);
    for i in 1..vertex_count as u32 - 1 {
        indices.extend_from_slice(&[0, i, i + 1]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bis_drei_vertices_identitaet() {
        assert_eq!(generate_indices(0), Vec::<u32>::new());
        assert_eq!(generate_indices(1), vec![0]);
        assert_eq!(generate_indices(3), vec![0, 1, 2]);
    }

    #[test]
    fn test_ab_vier_vertices_faecher() {
        assert_eq!(generate_indices(4), vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(generate_indices(5), vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }
}
