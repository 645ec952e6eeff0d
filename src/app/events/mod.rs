//! Event-Typen des Intent/Command-Flusses.
//!
//! `AppIntent` beschreibt, was die UI will; `AppCommand` beschreibt,
//! was der Controller daraufhin ausführt. Die Übersetzung macht
//! `intent_mapping`.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
