//! Core types for the Folio reading application

mod book;
mod config;

pub use book::{BookData, Chapter};
pub use config::AppConfig;
