//! Line flattening
//!
//! Collapses the rich-text node tree into a flat, ordered sequence of trimmed
//! text lines. This sequence is the sole input to quiz extraction and the
//! basis for search, word counts, and text export.

use super::error::{ContentError, Result};
use super::models::{NodeType, RichTextNode};

/// Flatten a document tree into its non-empty text lines, in reading order.
///
/// `text` leaves contribute their trimmed `value`; leaves that are empty
/// after trimming are dropped. Every other node recurses into its `content`
/// array. A container without a `content` array is malformed and aborts the
/// walk.
pub fn flatten_lines(root: &RichTextNode) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    collect_lines(root, &mut lines)?;
    Ok(lines)
}

fn collect_lines(node: &RichTextNode, lines: &mut Vec<String>) -> Result<()> {
    if node.node_type == NodeType::Text {
        // A text leaf with a missing value reads as empty and is dropped.
        if let Some(value) = &node.value {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
        return Ok(());
    }

    let children = node
        .content
        .as_ref()
        .ok_or_else(|| ContentError::MissingContent {
            node_type: node.node_type.as_str().to_string(),
        })?;

    for child in children {
        collect_lines(child, lines)?;
    }

    Ok(())
}
