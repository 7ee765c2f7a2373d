//! Runtime configuration, read from the environment (after `.env`).

use std::path::PathBuf;

use crate::concepts::{DASHBOARD_CONCEPTS, UPLOAD_CONCEPTS};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TOP_WORDS: usize = 10;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Replaces the built-in datasets when set.
    pub datasets_file: Option<PathBuf>,
    pub dashboard_concepts: usize,
    pub upload_concepts: usize,
    pub top_words: usize,
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            datasets_file: None,
            dashboard_concepts: DASHBOARD_CONCEPTS,
            upload_concepts: UPLOAD_CONCEPTS,
            top_words: DEFAULT_TOP_WORDS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparseable values fall back to
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str, default: usize| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            bind_addr: lookup("BIND_ADDR")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.bind_addr),
            datasets_file: lookup("DATASETS_FILE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            dashboard_concepts: number("DASHBOARD_CONCEPTS", defaults.dashboard_concepts),
            upload_concepts: number("UPLOAD_CONCEPTS", defaults.upload_concepts),
            top_words: number("TOP_WORDS", defaults.top_words),
            max_upload_bytes: number("MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
        }
    }
}
