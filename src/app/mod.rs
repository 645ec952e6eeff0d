//! Applikationsschicht: Zustand, Events, Controller, Szenenaufbau.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod intent_mapping;
pub mod render_scene;
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, SelectionState, UiState, ViewState};
