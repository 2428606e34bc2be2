//! Companion session for the lighter static-site reader variant
//!
//! The companion uses its own flat key namespace, independent of the
//! main `pwa-book-state-*` blob: `"theme"` holds `"dark"` or `"light"`,
//! `"scrollPos"` a stringified integer offset. Theme toggles persist
//! immediately; scroll offsets go through the collapsing scheduler so
//! a burst of scroll events costs at most one write per quiescence
//! window.

use crate::schedule::CollapsingScheduler;
use crate::store::StateStore;
use std::sync::Arc;
use std::time::Duration;

/// Companion key for the theme preference
pub const THEME_KEY: &str = "theme";

/// Companion key for the saved scroll offset
pub const SCROLL_POS_KEY: &str = "scrollPos";

const THEME_DARK: &str = "dark";
const THEME_LIGHT: &str = "light";

/// A session of the lighter companion reader
pub struct CompanionSession {
    store: Arc<dyn StateStore>,
    scheduler: CollapsingScheduler,
    debounce: Duration,
    dark: bool,
    scroll_pos: u64,
}

impl CompanionSession {
    /// Restore a companion session from the store. A stored theme of
    /// `"dark"` enables dark mode; any other value (or none) means
    /// light. An unparseable scroll offset restores to the top.
    pub fn restore(store: Arc<dyn StateStore>, debounce: Duration) -> Self {
        let dark = store
            .load(THEME_KEY)
            .ok()
            .flatten()
            .is_some_and(|v| v == THEME_DARK);
        let scroll_pos = store
            .load(SCROLL_POS_KEY)
            .ok()
            .flatten()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self {
            scheduler: CollapsingScheduler::new(Arc::clone(&store)),
            store,
            debounce,
            dark,
            scroll_pos,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn scroll_pos(&self) -> u64 {
        self.scroll_pos
    }

    /// Flip dark mode and persist immediately (best-effort)
    pub fn toggle_dark(&mut self) {
        self.dark = !self.dark;
        let value = if self.dark { THEME_DARK } else { THEME_LIGHT };
        if let Err(e) = self.store.save(THEME_KEY, value) {
            tracing::warn!("failed to persist theme: {e}");
        }
    }

    /// Record a scroll offset. The write is debounced: repeated calls
    /// within the quiescence window collapse into one trailing write
    /// carrying the last offset.
    pub fn record_scroll(&mut self, pos: u64) {
        self.scroll_pos = pos;
        self.scheduler
            .schedule(SCROLL_POS_KEY, &pos.to_string(), self.debounce);
    }

    /// Write any pending scroll offset now; used at shutdown
    pub fn flush(&self) {
        self.scheduler.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn theme_toggle_persists_immediately() {
        let store = Arc::new(MemoryStore::new());
        let mut session = CompanionSession::restore(store.clone(), Duration::from_millis(10));
        assert!(!session.is_dark());

        session.toggle_dark();
        assert!(session.is_dark());
        assert_eq!(store.load(THEME_KEY).unwrap().as_deref(), Some("dark"));

        session.toggle_dark();
        assert_eq!(store.load(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn scroll_offset_roundtrips_through_the_store() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut session =
                CompanionSession::restore(store.clone(), Duration::from_millis(5));
            session.record_scroll(100);
            session.record_scroll(740);
            session.flush();
        }
        assert_eq!(store.load(SCROLL_POS_KEY).unwrap().as_deref(), Some("740"));

        let session = CompanionSession::restore(store, Duration::from_millis(5));
        assert_eq!(session.scroll_pos(), 740);
    }

    #[tokio::test]
    async fn garbage_scroll_value_restores_to_top() {
        let store = Arc::new(MemoryStore::new());
        store.save(SCROLL_POS_KEY, "not-a-number").unwrap();

        let session = CompanionSession::restore(store, Duration::from_millis(5));
        assert_eq!(session.scroll_pos(), 0);
    }
}
