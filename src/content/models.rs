//! Core data structures for lesson content
//!
//! This module defines the public types used to represent a lesson fetched
//! from the content platform: the rich-text node tree, the loaded document
//! wrapper, and the quiz records mined out of the text.

use serde::{Deserialize, Serialize};

/// Node vocabulary of the content platform's rich-text format.
///
/// The platform guarantees that every leaf reachable from the document root
/// is a `text` node; all other node types are containers whose `content`
/// array preserves reading order. Node types outside the known vocabulary
/// (the platform adds new embed types over time) deserialize as `Other` and
/// are recursed like any container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    Document,
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    HorizontalRule,
    Hyperlink,
    EmbeddedAssetBlock,
    Text,
    /// Unknown node type, kept with its wire name.
    Other(String),
}

impl From<String> for NodeType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "document" => NodeType::Document,
            "paragraph" => NodeType::Paragraph,
            "heading-1" => NodeType::Heading1,
            "heading-2" => NodeType::Heading2,
            "heading-3" => NodeType::Heading3,
            "heading-4" => NodeType::Heading4,
            "heading-5" => NodeType::Heading5,
            "heading-6" => NodeType::Heading6,
            "unordered-list" => NodeType::UnorderedList,
            "ordered-list" => NodeType::OrderedList,
            "list-item" => NodeType::ListItem,
            "blockquote" => NodeType::Blockquote,
            "hr" => NodeType::HorizontalRule,
            "hyperlink" => NodeType::Hyperlink,
            "embedded-asset-block" => NodeType::EmbeddedAssetBlock,
            "text" => NodeType::Text,
            _ => NodeType::Other(raw),
        }
    }
}

impl From<NodeType> for String {
    fn from(node_type: NodeType) -> String {
        node_type.as_str().to_string()
    }
}

impl NodeType {
    /// Wire name of the node type, as it appears in the JSON payload.
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Document => "document",
            NodeType::Paragraph => "paragraph",
            NodeType::Heading1 => "heading-1",
            NodeType::Heading2 => "heading-2",
            NodeType::Heading3 => "heading-3",
            NodeType::Heading4 => "heading-4",
            NodeType::Heading5 => "heading-5",
            NodeType::Heading6 => "heading-6",
            NodeType::UnorderedList => "unordered-list",
            NodeType::OrderedList => "ordered-list",
            NodeType::ListItem => "list-item",
            NodeType::Blockquote => "blockquote",
            NodeType::HorizontalRule => "hr",
            NodeType::Hyperlink => "hyperlink",
            NodeType::EmbeddedAssetBlock => "embedded-asset-block",
            NodeType::Text => "text",
            NodeType::Other(name) => name,
        }
    }

    /// Heading depth (1-6) for heading nodes, `None` otherwise.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            NodeType::Heading1 => Some(1),
            NodeType::Heading2 => Some(2),
            NodeType::Heading3 => Some(3),
            NodeType::Heading4 => Some(4),
            NodeType::Heading5 => Some(5),
            NodeType::Heading6 => Some(6),
            _ => None,
        }
    }
}

/// One node of the rich-text tree delivered by the content API.
///
/// Leaves carry `value`, containers carry `content`. Unknown payload fields
/// (`data`, `marks`, ...) are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextNode {
    #[serde(rename = "nodeType")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<RichTextNode>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub metadata: DocumentMetadata,
    pub body: RichTextNode,
    /// Flattened text lines in reading order, computed once at load time.
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub file_size: u64,
    pub line_count: usize,
    pub word_count: usize,
}

/// Question type of a quiz, identified by a fixed 3-letter code prefixed to
/// the question line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizCategory {
    /// Multiple choice (`MCQ`)
    #[serde(rename = "MCQ")]
    MultipleChoice,
    /// True or false (`TOF`)
    #[serde(rename = "TOF")]
    TrueFalse,
    /// Put the choices in order (`ORD`)
    #[serde(rename = "ORD")]
    Ordering,
}

impl QuizCategory {
    /// Length in bytes of every category code.
    pub const CODE_LEN: usize = 3;

    /// The 3-letter code used in question marker lines.
    pub fn code(&self) -> &'static str {
        match self {
            QuizCategory::MultipleChoice => "MCQ",
            QuizCategory::TrueFalse => "TOF",
            QuizCategory::Ordering => "ORD",
        }
    }
}

/// One quiz mined out of a lesson's text lines.
///
/// A quiz with no choices or an empty answer is still emitted; validation of
/// incomplete quizzes is left to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub category: QuizCategory,
    pub question: String,
    pub choices: Vec<String>,
    pub answer: String,
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub line_index: usize,
    pub text: String,
    pub start_pos: usize,
    pub end_pos: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineItem {
    pub title: String,
    pub level: u8,
    pub line_index: usize,
}
