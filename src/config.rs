//! Runtime configuration assembled once at startup.
//!
//! [`SiteConfig`] is built from the parsed CLI in `main` and passed by
//! reference into each pipeline stage. No stage reads the process
//! environment itself; everything environment-derived arrives through this
//! value, which keeps the transformer and renderer testable with injected
//! configuration.

use crate::cli::Cli;

/// Bilingual site title rendered into the page header and `<title>`.
pub const SITE_TITLE: &str = "TechBharat.ai — AI & टेक न्यूज़ (हिंदी)";

/// Fixed OR-combined topic query sent to the headline search.
pub const TOPIC_QUERY: &str = "AI OR Artificial Intelligence OR Tech OR Machine Learning";

/// Headline language requested from the news API.
pub const NEWS_LANGUAGE: &str = "en";

/// Default translation target.
pub const TARGET_LANGUAGE: &str = "hi";

/// NewsAPI top-headlines endpoint.
pub const NEWS_ENDPOINT: &str = "https://newsapi.org/v2/top-headlines";

/// Google Translate v2 endpoint.
pub const TRANSLATE_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

/// Resolved configuration for one run.
///
/// Endpoints live here rather than as hardwired literals in the fetch and
/// translate stages so tests can point a stage at a substitute.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Display title for the page header.
    pub site_title: String,
    /// NewsAPI credential; the placeholder default fails at the API, which
    /// is accepted rather than guarded against.
    pub newsapi_key: String,
    /// Translation credential; `None` leaves translation silently skipped.
    pub translate_api_key: Option<String>,
    /// Path of the generated HTML file, fully overwritten on success.
    pub output_path: String,
    /// Headline count requested as the API page size.
    pub max_items: u32,
    /// Whether the translation pass is active.
    pub auto_translate: bool,
    /// BCP-47 code handed to the translation API.
    pub target_language: String,
    /// Headline search endpoint.
    pub news_endpoint: String,
    /// Translation endpoint.
    pub translate_endpoint: String,
}

impl SiteConfig {
    /// Build the run configuration from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            newsapi_key: cli.newsapi_key.clone(),
            translate_api_key: cli.translate_api_key.clone(),
            output_path: cli.output.clone(),
            max_items: cli.max_items,
            auto_translate: cli.translate,
            ..Self::default()
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: SITE_TITLE.to_string(),
            newsapi_key: "YOUR_NEWSAPI_KEY".to_string(),
            translate_api_key: None,
            output_path: "index.html".to_string(),
            max_items: 10,
            auto_translate: false,
            target_language: TARGET_LANGUAGE.to_string(),
            news_endpoint: NEWS_ENDPOINT.to_string(),
            translate_endpoint: TRANSLATE_ENDPOINT.to_string(),
        }
    }
}
