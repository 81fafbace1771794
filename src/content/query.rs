//! Lesson search and navigation operations
//!
//! This module provides read-only querying operations on loaded lessons:
//! full-text search over the flattened lines and outline generation from
//! heading nodes.

use regex::RegexBuilder;

use super::models::*;

/// Case-insensitive substring search over the document's text lines.
///
/// The query is matched literally (regex metacharacters are escaped), so it
/// works unchanged for Arabic and Latin text. Empty or whitespace-only
/// queries return no results.
pub fn search_document(document: &Document, query: &str) -> Vec<SearchResult> {
    let mut results = Vec::new();
    let query = query.trim();
    if query.is_empty() {
        return results;
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return results;
    };

    for (line_index, line) in document.lines.iter().enumerate() {
        if let Some(found) = pattern.find(line) {
            results.push(SearchResult {
                line_index,
                text: line.clone(),
                start_pos: found.start(),
                end_pos: found.end(),
            });
        }
    }

    results
}

/// One outline item per heading node, carrying the index of the heading's
/// first flattened line so the viewer can jump to it.
pub fn generate_outline(document: &Document) -> Vec<OutlineItem> {
    let mut outline = Vec::new();
    let mut line_cursor = 0;
    walk_outline(&document.body, &mut line_cursor, &mut outline);
    outline
}

fn walk_outline(node: &RichTextNode, line_cursor: &mut usize, outline: &mut Vec<OutlineItem>) {
    if node.node_type == NodeType::Text {
        if node.value.as_deref().is_some_and(|v| !v.trim().is_empty()) {
            *line_cursor += 1;
        }
        return;
    }

    if let Some(level) = node.node_type.heading_level() {
        outline.push(OutlineItem {
            title: node_text(node),
            level,
            line_index: *line_cursor,
        });
    }

    // Shape errors are caught at load time; a read-only walk tolerates them.
    for child in node.content.iter().flatten() {
        walk_outline(child, line_cursor, outline);
    }
}

/// Concatenated trimmed text of every leaf under the node.
pub(crate) fn node_text(node: &RichTextNode) -> String {
    let mut parts = Vec::new();
    gather_text(node, &mut parts);
    parts.join(" ")
}

fn gather_text(node: &RichTextNode, parts: &mut Vec<String>) {
    if node.node_type == NodeType::Text {
        if let Some(value) = &node.value {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
        return;
    }
    for child in node.content.iter().flatten() {
        gather_text(child, parts);
    }
}
