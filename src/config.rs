//! Runtime Configuration
//!
//! Read once at startup from `<meta>` tags in `index.html`:
//!
//! ```html
//! <meta name="task-api-base-url" content="https://tasks.example.com">
//! <meta name="log-level" content="debug">
//! ```

use log::Level;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const API_BASE_URL_META: &str = "task-api-base-url";
const LOG_LEVEL_META: &str = "log-level";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Task service origin, without a trailing slash
    pub api_base_url: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: Level::Info,
        }
    }
}

impl AppConfig {
    pub fn from_document() -> Self {
        Self::default().with_overrides(meta_content(API_BASE_URL_META), meta_content(LOG_LEVEL_META))
    }

    /// Apply page-supplied values. Blank or unparseable values keep the default.
    pub fn with_overrides(mut self, api_base_url: Option<String>, log_level: Option<String>) -> Self {
        if let Some(url) = api_base_url {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                self.api_base_url = url.to_string();
            }
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<Level>().ok()) {
            self.log_level = level;
        }
        self
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??;
    meta.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let config = AppConfig::default()
            .with_overrides(Some("https://tasks.example.com/".to_string()), Some("debug".to_string()));
        assert_eq!(config.api_base_url, "https://tasks.example.com");
        assert_eq!(config.log_level, Level::Debug);
    }

    #[test]
    fn test_bad_overrides_keep_defaults() {
        let config = AppConfig::default().with_overrides(Some("  ".to_string()), Some("loud".to_string()));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_log_level_sets_logger_threshold() {
        let config = AppConfig::default().with_overrides(None, Some(" WARN ".to_string()));
        assert_eq!(config.log_level, Level::Warn);
        // "off" has no Level, so the default stays
        let config = AppConfig::default().with_overrides(None, Some("off".to_string()));
        assert_eq!(config.log_level, Level::Info);
    }
}
