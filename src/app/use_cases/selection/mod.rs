//! Selektions-Logik: Vertex-Treffertest und Einfügepunkt-Wahl.

pub mod insertion;

pub use hit_test::nearest_vertex;
pub use insertion::find_insertion_point;
