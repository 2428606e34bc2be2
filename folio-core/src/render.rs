//! View projection layer
//!
//! A [`Frame`] is a pure description of everything the UI shows for a
//! given `(BookData, ReaderState)` pair. The controller computes a new
//! frame after every state transition and hands it to a [`RenderSink`];
//! no rendering surface is touched by the transition logic itself.

use crate::state::{FontFamily, ReaderState, Theme, View};
use crate::types::BookData;

/// Label on the cover's start control for a fresh session
pub const LABEL_START: &str = "Start Reading";

/// Label on the cover's start control when resuming mid-book
pub const LABEL_RESUME: &str = "Resume Reading";

/// Label on the next-chapter control
pub const LABEL_NEXT: &str = "Next";

/// Label on the next-chapter control at the last chapter
pub const LABEL_END: &str = "The End";

/// A complete description of the visible UI
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// The single active view
    pub active_view: View,

    pub cover: CoverFrame,
    pub reader: ReaderFrame,

    /// Table of contents; exactly one entry is active
    pub toc: Vec<TocItem>,

    pub settings: SettingsFrame,

    /// True when this frame follows a chapter load and the content
    /// region must be scrolled back to the top
    pub reset_scroll: bool,
}

/// The cover view: title, author, generated cover art, start control
#[derive(Debug, Clone, PartialEq)]
pub struct CoverFrame {
    pub title: String,
    pub author: String,

    /// Single letter shown as the generated cover art
    pub art_letter: String,

    /// "Start Reading", or "Resume Reading" when a session is resumed
    /// past chapter zero
    pub start_label: &'static str,
}

/// The reading view: current chapter plus navigation affordances
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderFrame {
    pub chapter_title: String,

    /// Chapter body, one entry per displayed paragraph, in source order
    pub paragraphs: Vec<String>,

    /// Previous control enabled (disabled at chapter zero)
    pub prev_enabled: bool,

    /// Next control enabled (disabled at the last chapter)
    pub next_enabled: bool,

    /// "Next", or the end-of-book label at the last chapter
    pub next_label: &'static str,

    /// Reading progress in percent; exactly 100 at the last chapter
    pub progress_percent: f64,

    /// Display preferences applied to the content region
    pub font_size: u32,
    pub font_family: FontFamily,
    pub theme: Theme,
}

/// One table-of-contents entry
#[derive(Debug, Clone, PartialEq)]
pub struct TocItem {
    pub title: String,

    /// True iff this entry matches the current chapter index
    pub active: bool,
}

/// The settings panel: visibility plus selection indicators.
/// Exactly one indicator per category matches the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsFrame {
    pub open: bool,
    pub selected_theme: Theme,
    pub selected_font: FontFamily,
    pub font_size: u32,
}

impl Frame {
    /// Project the current state onto a frame. Pure: no side effects,
    /// no mutation. Requires `state.chapter_index` to be in bounds,
    /// which the controller guarantees before every render.
    pub fn project(book: &BookData, state: &ReaderState, panel_open: bool) -> Self {
        let chapter_count = book.chapters.len();
        let index = state.chapter_index;
        let chapter = &book.chapters[index];
        let last = index + 1 == chapter_count;

        Self {
            active_view: state.current_view,
            cover: CoverFrame {
                title: book.title.clone(),
                author: book.author.clone(),
                art_letter: book.initial().map(String::from).unwrap_or_default(),
                start_label: if index > 0 { LABEL_RESUME } else { LABEL_START },
            },
            reader: ReaderFrame {
                chapter_title: chapter.title.clone(),
                paragraphs: chapter.paragraphs(),
                prev_enabled: index > 0,
                next_enabled: !last,
                next_label: if last { LABEL_END } else { LABEL_NEXT },
                progress_percent: (index + 1) as f64 / chapter_count as f64 * 100.0,
                font_size: state.font_size,
                font_family: state.font_family,
                theme: state.theme,
            },
            toc: book
                .chapters
                .iter()
                .enumerate()
                .map(|(i, chap)| TocItem {
                    title: chap.title.clone(),
                    active: i == index,
                })
                .collect(),
            settings: SettingsFrame {
                open: panel_open,
                selected_theme: state.theme,
                selected_font: state.font_family,
                font_size: state.font_size,
            },
            reset_scroll: false,
        }
    }
}

/// Receives frames from the controller. Implementations render to a
/// terminal, a GUI surface, or (in tests) a recording buffer.
pub trait RenderSink: Send {
    fn present(&mut self, frame: &Frame);
}

/// Sink that drops every frame; useful for headless runs
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _frame: &Frame) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Chapter;

    fn two_chapter_book() -> BookData {
        let mut book = BookData::new("Walden", "Henry David Thoreau");
        book.add_chapter(Chapter::new("Economy", "When I wrote.\n\nI lived alone."));
        book.add_chapter(Chapter::new("Reading", "With a little.\n"));
        book
    }

    #[test]
    fn projection_at_chapter_zero() {
        let book = two_chapter_book();
        let state = ReaderState::default();
        let frame = Frame::project(&book, &state, false);

        assert_eq!(frame.cover.start_label, LABEL_START);
        assert_eq!(frame.cover.art_letter, "W");
        assert_eq!(frame.reader.chapter_title, "Economy");
        assert_eq!(frame.reader.paragraphs.len(), 2);
        assert!(!frame.reader.prev_enabled);
        assert!(frame.reader.next_enabled);
        assert_eq!(frame.reader.next_label, LABEL_NEXT);
        assert_eq!(frame.reader.progress_percent, 50.0);
        assert!(frame.toc[0].active);
        assert!(!frame.toc[1].active);
    }

    #[test]
    fn projection_at_the_last_chapter() {
        let book = two_chapter_book();
        let state = ReaderState {
            chapter_index: 1,
            ..ReaderState::default()
        };
        let frame = Frame::project(&book, &state, false);

        assert_eq!(frame.cover.start_label, LABEL_RESUME);
        assert!(frame.reader.prev_enabled);
        assert!(!frame.reader.next_enabled);
        assert_eq!(frame.reader.next_label, LABEL_END);
        assert_eq!(frame.reader.progress_percent, 100.0);
    }

    #[test]
    fn settings_indicators_mirror_state() {
        let book = two_chapter_book();
        let state = ReaderState {
            theme: Theme::Dark,
            font_family: FontFamily::Sans,
            font_size: 24,
            ..ReaderState::default()
        };
        let frame = Frame::project(&book, &state, true);

        assert!(frame.settings.open);
        assert_eq!(frame.settings.selected_theme, Theme::Dark);
        assert_eq!(frame.settings.selected_font, FontFamily::Sans);
        assert_eq!(frame.settings.font_size, 24);
    }
}
