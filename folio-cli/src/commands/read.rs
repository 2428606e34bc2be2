//! Read command implementation
//!
//! Opens a reading session over the book with a filesystem-backed
//! state store, so each invocation resumes at the saved chapter unless
//! `--chapter` overrides it.

use anyhow::{ensure, Result};
use folio_core::render::{Frame, RenderSink};
use folio_core::store::FileStore;
use folio_core::{AppConfig, ReaderApp, View};
use std::path::Path;

use super::info::load_book;

/// Render sink that prints chapter-load frames to stdout
struct TermSink;

impl RenderSink for TermSink {
    fn present(&mut self, frame: &Frame) {
        // Only chapter loads produce output; navigation and settings
        // frames are silent on a terminal.
        if !frame.reset_scroll {
            return;
        }

        println!("## {}", frame.reader.chapter_title);
        println!();
        for paragraph in &frame.reader.paragraphs {
            println!("{paragraph}");
            println!();
        }
        print!("[{:.0}%]", frame.reader.progress_percent);
        if !frame.reader.next_enabled {
            print!(" {}", folio_core::render::LABEL_END);
        }
        println!();
    }
}

/// Derive the state namespace from the book's file name, so different
/// book files sharing one state directory do not collide
fn app_name(input: &str) -> String {
    Path::new(input)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("book")
        .to_string()
}

/// Read a chapter, persisting the position for the next invocation
pub fn read(input: &str, chapter: Option<usize>, state_dir: &str) -> Result<()> {
    let book = load_book(input)?;
    let chapter_count = book.chapters.len();

    let config = AppConfig::new(app_name(input));
    let store = FileStore::new(state_dir);
    let mut app = ReaderApp::new(book, &config, Box::new(store), Box::new(TermSink))?;

    match chapter {
        Some(index) => {
            ensure!(
                index < chapter_count,
                "chapter {} is out of range (book has {} chapters)",
                index,
                chapter_count
            );
            app.navigate_to(View::Reader);
            app.load_chapter(index);
        }
        None => {
            tracing::info!(
                chapter = app.state().chapter_index,
                "resuming from persisted position"
            );
            app.start_reading();
        }
    }

    Ok(())
}
