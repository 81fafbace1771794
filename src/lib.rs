//! durus: lesson viewer and quiz toolkit for CMS-driven course content
//!
//! This library loads rich-text lesson documents exported from the headless
//! content platform, mines the quizzes embedded in their text, and hosts the
//! mini-game state machines and their persistent progress store.

pub mod content;
pub mod export;
pub mod games;
pub mod progress;

/// Export format options
#[derive(clap::ValueEnum, Clone)]
pub enum ExportFormat {
    Markdown,
    Text,
    Csv,
    Json,
}

// Re-export commonly used types
pub use content::{Document, Quiz, QuizCategory, RichTextNode};
pub use games::GameKind;
pub use progress::ProgressStore;
