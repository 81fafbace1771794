//! Lesson export
//!
//! Renders a loaded lesson to plain text, Markdown, CSV (quizzes only), or a
//! JSON envelope carrying the flattened lines and extracted quizzes.

use anyhow::Result;
use serde::Serialize;

use crate::content::query::node_text;
use crate::content::{extract_quizzes, Document, NodeType, Quiz, RichTextNode};
use crate::ExportFormat;

#[derive(Serialize)]
struct ExportEnvelope<'a> {
    title: &'a str,
    lines: &'a [String],
    quizzes: Vec<Quiz>,
}

pub fn export_document(document: &Document, format: &ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(export_text(document)),
        ExportFormat::Markdown => Ok(export_markdown(document)),
        ExportFormat::Csv => Ok(export_quiz_csv(document)),
        ExportFormat::Json => export_json(document),
    }
}

fn export_text(document: &Document) -> String {
    let mut out = document.lines.join("\n");
    out.push('\n');
    out
}

fn export_json(document: &Document) -> Result<String> {
    let envelope = ExportEnvelope {
        title: &document.title,
        lines: &document.lines,
        quizzes: extract_quizzes(&document.lines),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

fn export_markdown(document: &Document) -> String {
    let mut out = format!("# {}\n", document.title);
    render_markdown_node(&document.body, &mut out);
    out
}

fn render_markdown_node(node: &RichTextNode, out: &mut String) {
    match node.node_type {
        NodeType::Text => {}
        NodeType::Paragraph => {
            let text = node_text(node);
            if !text.is_empty() {
                out.push('\n');
                out.push_str(&text);
                out.push('\n');
            }
        }
        NodeType::Blockquote => {
            for child in node.content.iter().flatten() {
                let text = node_text(child);
                if !text.is_empty() {
                    out.push('\n');
                    out.push_str("> ");
                    out.push_str(&text);
                    out.push('\n');
                }
            }
        }
        NodeType::UnorderedList | NodeType::OrderedList => {
            out.push('\n');
            for (i, item) in node.content.iter().flatten().enumerate() {
                let text = node_text(item);
                if node.node_type == NodeType::OrderedList {
                    out.push_str(&format!("{}. {text}\n", i + 1));
                } else {
                    out.push_str(&format!("- {text}\n"));
                }
            }
        }
        NodeType::HorizontalRule => {
            out.push_str("\n---\n");
        }
        _ => {
            if let Some(level) = node.node_type.heading_level() {
                let text = node_text(node);
                out.push('\n');
                out.push_str(&"#".repeat(level as usize));
                out.push(' ');
                out.push_str(&text);
                out.push('\n');
            } else {
                for child in node.content.iter().flatten() {
                    render_markdown_node(child, out);
                }
            }
        }
    }
}

/// CSV of the lesson's quizzes, one row per quiz with choices joined by `|`.
fn export_quiz_csv(document: &Document) -> String {
    let mut out = String::from("category,question,answer,choices\n");
    for quiz in extract_quizzes(&document.lines) {
        let row = [
            quiz.category.code().to_string(),
            quiz.question,
            quiz.answer,
            quiz.choices.join("|"),
        ];
        let escaped: Vec<String> = row.iter().map(|field| escape_csv_field(field)).collect();
        out.push_str(&escaped.join(","));
        out.push('\n');
    }
    out
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
