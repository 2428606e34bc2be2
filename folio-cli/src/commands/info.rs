//! Info command implementation

use anyhow::{Context, Result};
use folio_core::BookData;
use serde::Serialize;

/// Book info output
#[derive(Serialize)]
struct BookInfo {
    title: String,
    author: String,
    chapters: usize,
}

/// Load a book from its JSON file
pub(crate) fn load_book(input: &str) -> Result<BookData> {
    let data = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to open input file: {}", input))?;
    let book =
        BookData::from_json(&data).with_context(|| format!("Failed to parse {}", input))?;
    tracing::debug!(title = %book.title, chapters = book.chapters.len(), "parsed book");
    Ok(book)
}

/// Display information about a book
pub fn info(input: &str, json: bool) -> Result<()> {
    let book = load_book(input)?;

    let info = BookInfo {
        title: book.title.clone(),
        author: book.author.clone(),
        chapters: book.chapters.len(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Title:    {}", info.title);
        println!("Author:   {}", info.author);
        println!("Chapters: {}", info.chapters);
    }

    Ok(())
}
