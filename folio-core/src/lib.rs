//! Folio Core Library
//!
//! This crate provides the view/state controller for the Folio reading
//! application: the book data model, persisted reading state, chapter
//! navigation, settings, and the pure view-projection layer. Rendering
//! surfaces and durable storage are injected at the seams so the
//! transition logic is testable with doubles.

pub mod companion;
pub mod engine;
pub mod error;
pub mod render;
pub mod schedule;
pub mod state;
pub mod store;
pub mod types;

pub use engine::ReaderApp;
pub use error::{FolioError, Result, StoreError};
pub use render::{Frame, RenderSink};
pub use state::{FontFamily, ReaderState, Theme, View};
pub use types::{AppConfig, BookData, Chapter};
