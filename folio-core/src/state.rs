//! Persisted reading state: current view, chapter position, and
//! display preferences.
//!
//! The persisted form is a JSON object with camelCase keys (the wire
//! format predates this crate). Loading merges the stored blob onto
//! defaults field by field, so blobs written before a field existed,
//! or carrying a value that no longer parses, fall back to the default
//! for that field only.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Smallest accepted reader font size, in pixels
pub const MIN_FONT_SIZE: u32 = 14;

/// Largest accepted reader font size, in pixels
pub const MAX_FONT_SIZE: u32 = 32;

/// Default reader font size, in pixels
pub const DEFAULT_FONT_SIZE: u32 = 18;

/// The full-screen views the application can show.
/// Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Cover,
    Reader,
    Toc,
}

impl View {
    /// Parse a view name as received from untyped input (e.g. a CLI
    /// argument). Unknown names yield `None`; callers treat that as a
    /// no-op rather than an error.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "cover" => Some(Self::Cover),
            "reader" => Some(Self::Reader),
            "toc" => Some(Self::Toc),
            _ => None,
        }
    }
}

/// Color theme applied at the document level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    Sepia,
}

/// Typeface family for the reading surface
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    Serif,
    Sans,
}

/// The persisted reading state. Single source of truth for what the
/// views display; views are pure projections of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReaderState {
    /// Which full-screen view is active
    pub current_view: View,

    /// Index of the chapter being read; always a valid index into the
    /// book's chapter list before any render
    pub chapter_index: usize,

    /// Active color theme
    pub theme: Theme,

    /// Reader font size in pixels, within [MIN_FONT_SIZE, MAX_FONT_SIZE]
    pub font_size: u32,

    /// Reader typeface family
    pub font_family: FontFamily,

    /// When the reader last loaded a chapter. Recorded but not used by
    /// navigation; retained for forward compatibility.
    pub last_read: DateTime<Utc>,
}

impl Default for ReaderState {
    fn default() -> Self {
        Self {
            current_view: View::Cover,
            chapter_index: 0,
            theme: Theme::Light,
            font_size: DEFAULT_FONT_SIZE,
            font_family: FontFamily::Serif,
            last_read: DateTime::UNIX_EPOCH,
        }
    }
}

impl ReaderState {
    /// Serialize to the persisted JSON form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Load state from a stored blob, merging onto defaults.
    ///
    /// Fields absent from the blob keep their defaults; fields that
    /// fail to decode (unknown enum value, wrong type) are skipped the
    /// same way. A blob that is not a JSON object at all yields the
    /// defaults. The font size is clamped after the merge so a stored
    /// out-of-range value cannot escape the bounds.
    pub fn merged_from_json(json: &str) -> Self {
        let mut state = Self::default();
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(json) else {
            return state;
        };

        merge_field(&map, "currentView", &mut state.current_view);
        merge_field(&map, "chapterIndex", &mut state.chapter_index);
        merge_field(&map, "theme", &mut state.theme);
        merge_field(&map, "fontSize", &mut state.font_size);
        merge_field(&map, "fontFamily", &mut state.font_family);
        merge_field(&map, "lastRead", &mut state.last_read);

        state.font_size = state.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        state
    }

    /// Apply an additive font-size delta with saturating clamping:
    /// a request past a bound lands exactly on the bound.
    pub fn clamp_font_size(current: u32, delta: i32) -> u32 {
        let requested = i64::from(current) + i64::from(delta);
        requested.clamp(i64::from(MIN_FONT_SIZE), i64::from(MAX_FONT_SIZE)) as u32
    }
}

fn merge_field<T: DeserializeOwned>(map: &Map<String, Value>, key: &str, slot: &mut T) {
    if let Some(value) = map.get(key) {
        if let Ok(parsed) = serde_json::from_value::<T>(value.clone()) {
            *slot = parsed;
        }
    }
}
