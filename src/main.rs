//! # TechBharat News
//!
//! A static-site generator for the TechBharat.ai front page: fetches the
//! current AI/tech headlines from NewsAPI, optionally translates titles and
//! summaries to Hindi, and renders everything into a single `index.html`.
//!
//! ## Usage
//!
//! ```sh
//! # Scheduled mode (e.g. from cron, hourly); key from the environment
//! NEWSAPI_KEY=... techbharat_news
//!
//! # Custom output path with Hindi translation enabled
//! techbharat_news -o /srv/site/index.html --translate
//! ```
//!
//! ## Architecture
//!
//! One linear pass per invocation:
//! 1. **Fetch**: one GET against the top-headlines endpoint
//! 2. **Transform**: per article, derive a summary and optionally translate
//! 3. **Render**: assemble the full HTML document, one card per article
//! 4. **Write**: overwrite the output file
//!
//! A fetch failure or an empty batch ends the run without touching the
//! previous output file; both exit normally. Only a write failure aborts
//! the process abnormally.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod fetch;
mod models;
mod render;
mod translate;
mod utils;

use cli::Cli;
use config::SiteConfig;
use models::Article;
use translate::{TranslateBackend, Translator};

/// How a single run ended.
#[derive(Debug, PartialEq, Eq)]
enum RunOutcome {
    /// The page was rendered and written.
    Published { count: usize },
    /// The fetch returned no articles; nothing was written.
    NoArticles,
    /// The fetch failed; reported and absorbed, nothing was written.
    FetchFailed,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("Generating TechBharat front page");

    let args = Cli::parse();
    debug!(?args.output, args.max_items, args.translate, "Parsed CLI arguments");
    let config = SiteConfig::from_cli(&args);

    let translator = Translator::from_config(&config);
    debug!(translate = translator.is_active(), "Translation pass wired");

    let fetched = fetch::fetch_news(&config).await;
    let outcome = run(&config, fetched, &translator).await?;

    let elapsed = start_time.elapsed();
    match outcome {
        RunOutcome::Published { count } => {
            info!(
                path = %config.output_path,
                articles = count,
                ?elapsed,
                "Site updated"
            );
        }
        RunOutcome::NoArticles => {
            info!(?elapsed, "No new articles found; previous page left untouched");
        }
        RunOutcome::FetchFailed => {
            info!(?elapsed, "Run ended without output");
        }
    }

    Ok(())
}

/// Drive one pass of the pipeline from an already-resolved fetch result.
///
/// Fetch failure and the empty batch are terminal but benign: both are
/// reported, leave any previous output file untouched, and map to an
/// [`RunOutcome`] rather than an error. Write failures propagate to the
/// caller.
#[instrument(level = "info", skip_all)]
async fn run<T: TranslateBackend>(
    config: &SiteConfig,
    fetched: Result<Vec<Article>, Box<dyn Error>>,
    translator: &Translator<T>,
) -> Result<RunOutcome, Box<dyn Error>> {
    let articles = match fetched {
        Ok(articles) => articles,
        Err(e) => {
            error!(error = %e, "Headline fetch failed; previous page left untouched");
            return Ok(RunOutcome::FetchFailed);
        }
    };

    if articles.is_empty() {
        info!("No new articles found");
        return Ok(RunOutcome::NoArticles);
    }

    let html = render::render_page(config, translator, &articles, Local::now()).await;
    render::write_page(&config.output_path, &html).await?;

    Ok(RunOutcome::Published {
        count: articles.len(),
    })
}
