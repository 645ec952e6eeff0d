//! Shape2D-Designer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{CanvasRect, DrawMode, Layer, ShapeDocument};
pub use export::{generate_indices, ExportArtifact, ShapeRecord, ShapeSink};
pub use shared::{EditorOptions, PrimitiveBatch, RenderScene};
