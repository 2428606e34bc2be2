//! Collapsing write scheduler
//!
//! Debounced persistence for high-frequency inputs (scroll offsets).
//! `schedule` under a key cancels any pending write for that key and
//! reschedules with the new value, so at most one write per key is in
//! flight and it fires only after the input has been quiet for the
//! delay window, carrying the most recent value (trailing-edge).
//!
//! Requires a tokio runtime.

use crate::store::StateStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

struct PendingWrite {
    seq: u64,
    value: String,
    handle: JoinHandle<()>,
}

/// Keyed trailing-edge write scheduler over a [`StateStore`]
pub struct CollapsingScheduler {
    store: Arc<dyn StateStore>,
    pending: Arc<Mutex<HashMap<String, PendingWrite>>>,
    next_seq: Mutex<u64>,
}

impl CollapsingScheduler {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            store,
            pending: Arc::new(Mutex::new(HashMap::new())),
            next_seq: Mutex::new(0),
        }
    }

    /// Schedule a write of `value` under `key` after `delay` of
    /// quiescence. Any write already pending for `key` is cancelled
    /// and replaced.
    pub fn schedule(&self, key: &str, value: &str, delay: Duration) {
        let seq = {
            let mut next = self.next_seq.lock().unwrap();
            *next += 1;
            *next
        };

        let store = Arc::clone(&self.store);
        let pending = Arc::clone(&self.pending);
        let task_key = key.to_string();
        let task_value = value.to_string();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if let Err(e) = store.save(&task_key, &task_value) {
                tracing::warn!(key = %task_key, "debounced write failed: {e}");
            }

            // Only clear our own entry; a newer schedule for the same
            // key may have replaced it while the save ran.
            let mut map = pending.lock().unwrap();
            if map.get(&task_key).is_some_and(|p| p.seq == seq) {
                map.remove(&task_key);
            }
        });

        let mut map = self.pending.lock().unwrap();
        if let Some(old) = map.insert(
            key.to_string(),
            PendingWrite {
                seq,
                value: value.to_string(),
                handle,
            },
        ) {
            old.handle.abort();
        }
    }

    /// Number of writes currently pending
    pub fn pending_count(&self) -> usize {
        self.pending.lock().unwrap().len()
    }

    /// Cancel all pending timers and perform their writes immediately,
    /// each with its most recent value. Used at shutdown so a quiescence
    /// window still in progress cannot drop the final state.
    pub fn flush(&self) {
        let drained: Vec<(String, PendingWrite)> =
            self.pending.lock().unwrap().drain().collect();
        for (key, write) in drained {
            write.handle.abort();
            if let Err(e) = self.store.save(&key, &write.value) {
                tracing::warn!(key = %key, "flush write failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn rapid_schedules_collapse_into_one_trailing_write() {
        let store = Arc::new(MemoryStore::new());
        let scheduler = CollapsingScheduler::new(store.clone());

        for pos in 0..50 {
            scheduler.schedule("scrollPos", &pos.to_string(), Duration::from_millis(20));
        }
        assert_eq!(scheduler.pending_count(), 1);

        // Nothing lands before the quiescence window elapses
        assert_eq!(store.load("scrollPos").unwrap(), None);

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(store.load("scrollPos").unwrap().as_deref(), Some("49"));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let store = Arc::new(MemoryStore::new());
        let scheduler = CollapsingScheduler::new(store.clone());

        scheduler.schedule("theme", "dark", Duration::from_millis(10));
        scheduler.schedule("scrollPos", "120", Duration::from_millis(10));
        assert_eq!(scheduler.pending_count(), 2);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.load("scrollPos").unwrap().as_deref(), Some("120"));
    }

    #[tokio::test]
    async fn flush_writes_the_latest_value_immediately() {
        let store = Arc::new(MemoryStore::new());
        let scheduler = CollapsingScheduler::new(store.clone());

        scheduler.schedule("scrollPos", "5", Duration::from_secs(60));
        scheduler.schedule("scrollPos", "9", Duration::from_secs(60));
        scheduler.flush();

        assert_eq!(store.load("scrollPos").unwrap().as_deref(), Some("9"));
        assert_eq!(scheduler.pending_count(), 0);
    }
}
