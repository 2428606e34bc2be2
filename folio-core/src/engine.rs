//! The reading session controller
//!
//! [`ReaderApp`] owns the mutable [`ReaderState`] and drives every
//! transition: view navigation, chapter loads, and settings changes.
//! It is constructed once per session with injected dependencies (a
//! [`StateStore`] and a [`RenderSink`]), runs single-threaded, and
//! handles one input event to completion before the next.
//!
//! Every successful transition persists the state (best-effort) and
//! emits a fresh [`Frame`] to the sink.

use crate::error::{FolioError, Result};
use crate::render::{Frame, RenderSink};
use crate::state::{FontFamily, ReaderState, Theme, View};
use crate::store::{state_key, StateStore};
use crate::types::{AppConfig, BookData};
use chrono::Utc;

/// Per-session controller over a single book
pub struct ReaderApp {
    book: BookData,
    state: ReaderState,
    panel_open: bool,
    store: Box<dyn StateStore>,
    sink: Box<dyn RenderSink>,
    storage_key: String,
}

impl ReaderApp {
    /// Construct a session controller.
    ///
    /// Restores persisted state under the key derived from
    /// `config.app_name`, merging the stored blob onto defaults. A
    /// restored chapter index past the end of this book's chapter list
    /// is pulled back to the last chapter so the bounds invariant holds
    /// before the first render.
    ///
    /// Fails if the book has no chapters; everything downstream assumes
    /// at least one.
    pub fn new(
        book: BookData,
        config: &AppConfig,
        store: Box<dyn StateStore>,
        sink: Box<dyn RenderSink>,
    ) -> Result<Self> {
        if book.chapters.is_empty() {
            return Err(FolioError::EmptyBook);
        }

        let storage_key = state_key(&config.app_name);
        let mut state = match store.load(&storage_key) {
            Ok(Some(blob)) => ReaderState::merged_from_json(&blob),
            Ok(None) => ReaderState::default(),
            Err(e) => {
                tracing::warn!("failed to load persisted state, starting fresh: {e}");
                ReaderState::default()
            }
        };
        state.chapter_index = state.chapter_index.min(book.chapters.len() - 1);

        let mut app = Self {
            book,
            state,
            panel_open: false,
            store,
            sink,
            storage_key,
        };
        app.render(false);
        Ok(app)
    }

    /// The current state (read-only)
    pub fn state(&self) -> &ReaderState {
        &self.state
    }

    /// The book this session is reading
    pub fn book(&self) -> &BookData {
        &self.book
    }

    /// Whether the settings panel is open
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Project the current state onto a frame without mutating anything
    pub fn frame(&self) -> Frame {
        Frame::project(&self.book, &self.state, self.panel_open)
    }

    /// Switch the active view. Exactly one view is active at a time;
    /// the switch persists immediately.
    pub fn navigate_to(&mut self, view: View) {
        self.state.current_view = view;
        self.persist();
        self.render(false);
    }

    /// Load the chapter at `index`.
    ///
    /// Out-of-range requests are silently rejected: no state change, no
    /// render. `next_chapter`/`prev_chapter` rely on this to clamp at
    /// the boundaries. A successful load resets the content scroll,
    /// records the read time, persists, and re-renders (which also
    /// refreshes the TOC highlight).
    pub fn load_chapter(&mut self, index: usize) {
        if index >= self.book.chapters.len() {
            tracing::debug!(index, "rejecting out-of-range chapter load");
            return;
        }

        self.state.chapter_index = index;
        self.state.last_read = Utc::now();
        self.persist();
        self.render(true);
    }

    /// Advance to the next chapter; no-op at the last chapter
    pub fn next_chapter(&mut self) {
        self.load_chapter(self.state.chapter_index + 1);
    }

    /// Go back one chapter; no-op at chapter zero
    pub fn prev_chapter(&mut self) {
        let Some(prev) = self.state.chapter_index.checked_sub(1) else {
            return;
        };
        self.load_chapter(prev);
    }

    /// Begin (or resume) reading: load the current chapter and switch
    /// to the reader view
    pub fn start_reading(&mut self) {
        self.load_chapter(self.state.chapter_index);
        self.navigate_to(View::Reader);
    }

    /// Set the color theme; applied on the next frame and persisted
    pub fn set_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
        self.persist();
        self.render(false);
    }

    /// Set the typeface family; applied on the next frame and persisted
    pub fn set_font(&mut self, family: FontFamily) {
        self.state.font_family = family;
        self.persist();
        self.render(false);
    }

    /// Adjust the font size by `delta` pixels, clamped to the
    /// [14, 32] range. Clamping saturates: a request past a bound
    /// lands on the bound rather than being rejected.
    pub fn change_font_size(&mut self, delta: i32) {
        self.state.font_size = ReaderState::clamp_font_size(self.state.font_size, delta);
        self.persist();
        self.render(false);
    }

    /// Toggle the settings panel. Opening refreshes the selection
    /// indicators from current state via the emitted frame, covering
    /// changes made while the panel was closed. Panel visibility is
    /// session-local and never persisted.
    pub fn toggle_settings(&mut self) {
        self.panel_open = !self.panel_open;
        self.render(false);
    }

    /// Best-effort persistence. Storage failures (quota, disabled
    /// backend) are logged and swallowed; the session continues with
    /// its in-memory state.
    fn persist(&self) {
        let blob = match self.state.to_json() {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!("failed to serialize state: {e}");
                return;
            }
        };
        if let Err(e) = self.store.save(&self.storage_key, &blob) {
            tracing::warn!("failed to persist state, continuing in memory: {e}");
        }
    }

    fn render(&mut self, reset_scroll: bool) {
        let mut frame = Frame::project(&self.book, &self.state, self.panel_open);
        frame.reset_scroll = reset_scroll;
        self.sink.present(&frame);
    }
}
