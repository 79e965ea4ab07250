//! Command-line interface definitions for the TechBharat page generator.
//!
//! The scheduled mode is a bare invocation with no arguments: every option
//! below has an environment fallback or a literal default, so `clap` here is
//! the configuration surface rather than a required CLI.

use clap::Parser;

/// Command-line arguments for the TechBharat page generator.
///
/// # Examples
///
/// ```sh
/// # Scheduled mode: no arguments, keys from the environment
/// techbharat_news
///
/// # Write somewhere else and enable Hindi translation
/// techbharat_news -o /srv/site/index.html --translate
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output file for the generated page
    #[arg(short, long, default_value = "index.html")]
    pub output: String,

    /// NewsAPI credential (the placeholder default is rejected by the API)
    #[arg(long, env = "NEWSAPI_KEY", default_value = "YOUR_NEWSAPI_KEY")]
    pub newsapi_key: String,

    /// Google Translate API key; translation is skipped without one
    #[arg(long, env = "TRANSLATE_API_KEY")]
    pub translate_api_key: Option<String>,

    /// Number of headlines to request from the API
    #[arg(long, default_value_t = 10)]
    pub max_items: u32,

    /// Translate titles and summaries to Hindi before rendering
    #[arg(long)]
    pub translate: bool,
}
