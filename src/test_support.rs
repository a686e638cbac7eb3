//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use crate::api::Post;
use crate::core::config::{DEFAULT_LOG_LEVEL, ResolvedConfig, parse_base_url};
use crate::core::state::App;

/// A resolved config pointing at `base_url`, with default post ids.
pub fn test_config(base_url: &str) -> ResolvedConfig {
    ResolvedConfig {
        base_url: parse_base_url(base_url).unwrap(),
        fetch_post_id: 1,
        xhr_post_id: 2,
        log_level: DEFAULT_LOG_LEVEL,
        log_file: PathBuf::from("test.log"),
    }
}

/// Creates a test App with an unreachable base URL.
pub fn test_app() -> App {
    App::new("http://localhost.test/".to_string())
}

pub fn post(id: u64, title: &str, body: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Flattens a test terminal's buffer into one string of cell symbols.
pub fn buffer_text(backend: &ratatui::backend::TestBackend) -> String {
    backend
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
