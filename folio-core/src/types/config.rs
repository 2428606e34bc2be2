//! Application configuration supplied at startup

use serde::{Deserialize, Serialize};

/// Per-book application configuration.
/// `app_name` is the stable identifier that namespaces persisted state,
/// so multiple books sharing one storage origin never collide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Stable application identifier
    pub app_name: String,
}

impl AppConfig {
    /// Create a config with the given application name
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}
