//! Data models for the NewsAPI headline response.
//!
//! This module defines the wire shape returned by the top-headlines endpoint
//! and the display accessors the renderer reads:
//! - [`HeadlinesResponse`]: envelope carrying the `articles` array
//! - [`Article`]: one headline record, every field optional on the wire
//! - [`Source`]: the nested `source` object carrying the outlet name
//!
//! Field names are camelCase on the wire (`publishedAt`), hence the serde
//! rename. Articles are read-only data flowing through one render pass;
//! there is no identity, deduplication, or mutation after deserialization.

use crate::utils::truncate_chars;
use serde::{Deserialize, Serialize};

/// Maximum length of a card summary, in characters.
///
/// Summaries longer than this are cut to 247 characters plus a three
/// character ellipsis marker, giving exactly 250.
pub const SUMMARY_MAX_CHARS: usize = 250;

/// The JSON envelope returned by the top-headlines endpoint.
///
/// Only the `articles` array is consumed; a response without that key
/// deserializes to an empty list rather than an error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct HeadlinesResponse {
    /// The headline records, in the order the API ranked them.
    pub articles: Vec<Article>,
}

/// One news item as returned by the headline source.
///
/// All fields are optional on the wire. Absent values surface through the
/// accessor methods as the documented display fallbacks, never as errors.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    /// The headline text.
    pub title: Option<String>,
    /// A short description of the story, when the outlet provides one.
    pub description: Option<String>,
    /// Link target for the card; `#` is substituted when absent.
    pub url: Option<String>,
    /// The publishing outlet.
    pub source: Source,
    /// Publication timestamp, nominally RFC 3339.
    pub published_at: Option<String>,
}

/// The nested `source` object of an [`Article`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Source {
    /// Outlet display name, e.g. `"TechCrunch"`.
    pub name: Option<String>,
}

impl Article {
    /// The headline text, or empty if the API omitted it.
    pub fn headline(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// The link target for both card links; `#` when the API omitted the URL.
    pub fn link(&self) -> &str {
        self.url.as_deref().unwrap_or("#")
    }

    /// The outlet name for the meta line, or empty if absent.
    pub fn source_label(&self) -> &str {
        self.source.name.as_deref().unwrap_or("")
    }

    /// The date-only prefix of the publication timestamp.
    ///
    /// Takes the first 10 characters (`YYYY-MM-DD` for an RFC 3339 value);
    /// shorter values are returned whole.
    pub fn published_date(&self) -> &str {
        let ts = self.published_at.as_deref().unwrap_or("");
        match ts.char_indices().nth(10) {
            Some((idx, _)) => &ts[..idx],
            None => ts,
        }
    }

    /// Derive the display summary for this article's card.
    ///
    /// Uses `description`, falling back to `title` when the description is
    /// absent or empty, and to empty text when both are missing. The result
    /// is bounded to [`SUMMARY_MAX_CHARS`] characters with a trailing `...`
    /// on truncation.
    pub fn display_summary(&self) -> String {
        let text = self
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(self.title.as_deref())
            .unwrap_or("");
        truncate_chars(text, SUMMARY_MAX_CHARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: Option<&str>, description: Option<&str>) -> Article {
        Article {
            title: title.map(String::from),
            description: description.map(String::from),
            ..Article::default()
        }
    }

    #[test]
    fn test_headlines_response_full_fixture() {
        let json = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": "techcrunch", "name": "TechCrunch"},
                "author": "A. Writer",
                "title": "New model released",
                "description": "A longer description of the release.",
                "url": "https://example.com/story",
                "urlToImage": "https://example.com/story.jpg",
                "publishedAt": "2025-01-02T10:00:00Z",
                "content": "Full content..."
            }]
        }"#;

        let parsed: HeadlinesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.articles.len(), 1);
        let art = &parsed.articles[0];
        assert_eq!(art.headline(), "New model released");
        assert_eq!(art.link(), "https://example.com/story");
        assert_eq!(art.source_label(), "TechCrunch");
        assert_eq!(art.published_date(), "2025-01-02");
    }

    #[test]
    fn test_headlines_response_missing_articles_key() {
        let parsed: HeadlinesResponse =
            serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert!(parsed.articles.is_empty());
    }

    #[test]
    fn test_article_all_fields_absent() {
        let art: Article = serde_json::from_str("{}").unwrap();
        assert_eq!(art.headline(), "");
        assert_eq!(art.link(), "#");
        assert_eq!(art.source_label(), "");
        assert_eq!(art.published_date(), "");
        assert_eq!(art.display_summary(), "");
    }

    #[test]
    fn test_article_null_fields() {
        let json = r#"{"title": null, "description": null, "url": null,
                       "source": {"name": null}, "publishedAt": null}"#;
        let art: Article = serde_json::from_str(json).unwrap();
        assert_eq!(art.headline(), "");
        assert_eq!(art.link(), "#");
        assert_eq!(art.source_label(), "");
        assert_eq!(art.display_summary(), "");
    }

    #[test]
    fn test_display_summary_prefers_description() {
        let art = article(Some("Title"), Some("Description text"));
        assert_eq!(art.display_summary(), "Description text");
    }

    #[test]
    fn test_display_summary_falls_back_to_title() {
        let art = article(Some("Title only"), None);
        assert_eq!(art.display_summary(), "Title only");
    }

    #[test]
    fn test_display_summary_empty_description_falls_back() {
        let art = article(Some("Title only"), Some(""));
        assert_eq!(art.display_summary(), "Title only");
    }

    #[test]
    fn test_display_summary_both_absent_is_empty() {
        let art = article(None, None);
        assert_eq!(art.display_summary(), "");
    }

    #[test]
    fn test_display_summary_truncates_to_exactly_250() {
        let long = "x".repeat(300);
        let art = article(None, Some(&long));
        let summary = art.display_summary();
        assert_eq!(summary.chars().count(), 250);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_display_summary_250_chars_unchanged() {
        let exact = "y".repeat(250);
        let art = article(None, Some(&exact));
        assert_eq!(art.display_summary(), exact);
    }

    #[test]
    fn test_display_summary_truncates_long_title_fallback() {
        let long = "t".repeat(300);
        let art = article(Some(&long), None);
        let summary = art.display_summary();
        assert_eq!(summary.chars().count(), 250);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_published_date_short_value_returned_whole() {
        let art = Article {
            published_at: Some("2025".to_string()),
            ..Article::default()
        };
        assert_eq!(art.published_date(), "2025");
    }

    #[test]
    fn test_article_serializes_camel_case() {
        let art = Article {
            published_at: Some("2025-01-02T10:00:00Z".to_string()),
            ..Article::default()
        };
        let json = serde_json::to_string(&art).unwrap();
        assert!(json.contains("publishedAt"));
    }
}
