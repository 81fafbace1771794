//! Lesson loading and validation
//!
//! This module contains the `load_document()` function that turns a lesson
//! JSON file, as exported from the content API, into our internal `Document`
//! representation. Network access, authentication, and locale resolution are
//! owned by the export tooling; by the time a file reaches us it is plain
//! JSON on disk.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use super::lines::flatten_lines;
use super::models::*;

/// Lesson files come in two shapes: the full API envelope with a title, or a
/// bare rich-text root (older exports).
#[derive(Deserialize)]
#[serde(untagged)]
enum LessonEnvelope {
    Lesson { title: String, body: RichTextNode },
    Body(RichTextNode),
}

/// Load a lesson JSON file into a `Document`.
///
/// Validates the file extension, deserializes the rich-text tree, and
/// flattens it once to compute the line sequence and metadata. Malformed
/// trees (a container with no `content` array) fail here rather than at
/// first query.
pub fn load_document(file_path: &Path) -> Result<Document> {
    validate_lesson_file(file_path)?;

    let file_size = std::fs::metadata(file_path)?.len();
    let raw = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read {}", file_path.display()))?;

    let envelope: LessonEnvelope = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid lesson export", file_path.display()))?;

    let (title, body) = match envelope {
        LessonEnvelope::Lesson { title, body } => (title, body),
        LessonEnvelope::Body(body) => {
            let title = file_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled Lesson")
                .to_string();
            (title, body)
        }
    };

    let lines = flatten_lines(&body)
        .with_context(|| format!("{} has a malformed rich-text tree", file_path.display()))?;

    let metadata = DocumentMetadata {
        file_path: file_path.to_string_lossy().to_string(),
        file_size,
        line_count: lines.len(),
        word_count: lines.iter().map(|l| l.split_whitespace().count()).sum(),
    };

    Ok(Document {
        title,
        metadata,
        body,
        lines,
    })
}

/// Validates that the file is a lesson export we understand.
fn validate_lesson_file(file_path: &Path) -> Result<()> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if extension != "json" {
        bail!(
            "Invalid file format. Expected .json lesson export, got .{}\n\
            Note: durus only reads lesson files exported from the content API.",
            extension
        );
    }

    Ok(())
}
