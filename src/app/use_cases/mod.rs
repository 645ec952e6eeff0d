//! Use-Cases: die eigentliche Editor-Logik, von den Handlern aufgerufen.

pub mod layers;
pub mod pointer;
pub mod selection;
pub mod vertices;
