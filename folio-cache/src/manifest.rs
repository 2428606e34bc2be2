//! The cache manifest: one versioned generation of the application shell
//!
//! The generation name is the only cache-busting mechanism: bumping it
//! makes the next activate delete every older generation wholesale.
//! There is no per-URL expiry.

use serde::{Deserialize, Serialize};

/// Current shell generation name. Bump the suffix to force a full
/// asset refresh on the next visit.
pub const CACHE_NAME: &str = "folio-shell-v1";

/// URL of the root document, served to failed navigations
pub const ROOT_DOCUMENT: &str = "./index.html";

/// The fixed application-shell asset list: everything needed to boot
/// the reading UI offline.
const SHELL_URLS: &[&str] = &[
    "./",
    "./index.html",
    "./style.css",
    "./app.js",
    "./manifest.json",
    "./icon-512.png",
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;600&family=Merriweather:wght@300;400;700&display=swap",
];

/// A named cache generation plus the assets it pre-fetches at install
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheManifest {
    /// Version-tagged generation name
    pub cache_name: String,

    /// Asset URLs fetched and stored at install, in order
    pub urls: Vec<String>,
}

impl CacheManifest {
    /// The current application-shell manifest
    pub fn shell() -> Self {
        Self {
            cache_name: CACHE_NAME.to_string(),
            urls: SHELL_URLS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// A manifest with a custom generation name and asset list
    pub fn new(cache_name: impl Into<String>, urls: Vec<String>) -> Self {
        Self {
            cache_name: cache_name.into(),
            urls,
        }
    }

    /// The URL served from cache when a navigation fails offline
    pub fn navigation_fallback(&self) -> &str {
        ROOT_DOCUMENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_manifest_lists_the_whole_application_shell() {
        let manifest = CacheManifest::shell();
        assert_eq!(manifest.cache_name, CACHE_NAME);
        assert!(manifest.urls.contains(&"./index.html".to_string()));
        assert!(manifest.urls.contains(&"./app.js".to_string()));
        assert!(manifest.urls.contains(&"./manifest.json".to_string()));
        assert!(manifest.urls.iter().any(|u| u.starts_with("https://fonts.")));
        assert_eq!(manifest.navigation_fallback(), ROOT_DOCUMENT);
    }
}
