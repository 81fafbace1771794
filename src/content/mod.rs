//! Lesson content parsing and data structures
//!
//! This module provides functionality for loading lesson documents exported
//! from the headless content platform and converting their rich-text trees
//! into flat text lines and quiz records.

pub mod error;
pub(crate) mod lines;
pub(crate) mod loader;
pub mod models;
pub mod query;
pub mod quiz;

// Re-export the models, query functions, and core operations
pub use error::ContentError;
pub use lines::flatten_lines;
pub use loader::load_document;
pub use models::*;
pub use query::{generate_outline, search_document};
pub use quiz::{extract_quizzes, ANSWER_MARKER};
