//! Domänenmodell des Shape-Editors: Layer, Dokument, Topologien, Geometrie.

pub mod document;
pub mod draw_mode;
pub mod geometry;
pub mod layer;

pub use document::ShapeDocument;
pub use draw_mode::DrawMode;
pub use geometry::CanvasRect;
pub use layer::Layer;
