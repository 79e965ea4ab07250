//! Headline fetch from the NewsAPI top-headlines endpoint.
//!
//! One GET per run with a fixed AI/tech topic query, English headlines, and
//! the configured page size. There is no retry, no backoff, and no caching:
//! a timeout, a non-2xx status, or a malformed body all surface as an error
//! for the orchestrator to report.

use crate::config::{NEWS_LANGUAGE, SiteConfig, TOPIC_QUERY};
use crate::models::{Article, HeadlinesResponse};
use once_cell::sync::Lazy;
use reqwest::Client;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Timeout applied to the headline request.
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Shared HTTP client, also used by the translation backend.
///
/// Built without a client-level timeout: only the headline fetch carries
/// one, applied per request.
static HTTP: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .expect("HTTP client")
});

/// Handle to the shared HTTP client.
pub fn http() -> &'static Client {
    &HTTP
}

/// Build the top-headlines request URL for this run's configuration.
///
/// The API key is a query parameter, so the built URL is never logged;
/// callers log the non-secret parts instead.
fn headlines_url(config: &SiteConfig) -> Result<Url, Box<dyn Error>> {
    let page_size = config.max_items.to_string();
    let url = Url::parse_with_params(
        &config.news_endpoint,
        [
            ("q", TOPIC_QUERY),
            ("language", NEWS_LANGUAGE),
            ("pageSize", page_size.as_str()),
            ("apiKey", config.newsapi_key.as_str()),
        ],
    )?;
    Ok(url)
}

/// Fetch the current batch of headlines.
///
/// # Returns
///
/// The list under the response's `articles` key, in API order, or an empty
/// vector when that key is absent. Transport failures, the 15 second
/// timeout, and non-success statuses are propagated to the caller; nothing
/// is caught here.
#[instrument(level = "info", skip_all)]
pub async fn fetch_news(config: &SiteConfig) -> Result<Vec<Article>, Box<dyn Error>> {
    let url = headlines_url(config)?;
    debug!(
        endpoint = %config.news_endpoint,
        q = TOPIC_QUERY,
        page_size = config.max_items,
        "Requesting headlines"
    );

    let resp = http()
        .get(url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await?
        .error_for_status()?;
    let body: HeadlinesResponse = resp.json().await?;

    info!(count = body.articles.len(), "Fetched headline batch");
    Ok(body.articles)
}
