//! The book input contract: title, author, and an ordered chapter list

use serde::{Deserialize, Serialize};

/// A complete book as supplied to the controller.
/// Read-only input: the controller never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookData {
    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Ordered list of chapters
    pub chapters: Vec<Chapter>,
}

/// A single chapter of a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chapter {
    /// Chapter title
    pub title: String,

    /// Raw chapter text; paragraphs are delimited by line breaks
    pub content: String,
}

impl BookData {
    /// Create a new book with the given title and author
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            chapters: Vec::new(),
        }
    }

    /// Parse a book from its JSON representation
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Add a chapter to the book
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    /// The first letter of the title, used for the generated cover art
    pub fn initial(&self) -> Option<char> {
        self.title.chars().next()
    }
}

impl Chapter {
    /// Create a new chapter
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Split the raw content into display paragraphs: one per non-blank
    /// line, trimmed, in source order. Blank lines never produce a
    /// paragraph.
    pub fn paragraphs(&self) -> Vec<String> {
        self.content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}
