//! Feature-Handler: dünne Schicht zwischen Controller und Use-Cases.

pub mod editing;
pub mod export;
pub mod layers;
pub mod view;
