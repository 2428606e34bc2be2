//! Toc command implementation

use anyhow::Result;

use super::info::load_book;

/// Print the table of contents as a numbered list
pub fn toc(input: &str) -> Result<()> {
    let book = load_book(input)?;

    println!("{} — {}", book.title, book.author);
    for (index, chapter) in book.chapters.iter().enumerate() {
        println!("{:>3}. {}", index + 1, chapter.title);
    }

    Ok(())
}
