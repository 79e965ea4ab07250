//! HTML assembly for the front page and the output write.
//!
//! The page is one self-contained document: inline CSS, a header with the
//! site title and refresh timestamp, one card per article in API order, and
//! a fixed footer. Titles and summaries pass through the translation pass
//! and are then HTML-escaped; URLs and source names are embedded as
//! received.
//!
//! Rendering is pure with respect to its inputs: the wall-clock instant is
//! taken once by the orchestrator and passed in. [`write_page`] is the only
//! function here that touches the filesystem.

use crate::config::SiteConfig;
use crate::models::Article;
use crate::translate::{TranslateBackend, Translator};
use crate::utils::escape_html;
use chrono::{DateTime, Local};
use futures::stream::{self, StreamExt};
use std::error::Error;
use std::fmt::Write as _;
use tokio::fs;
use tracing::{info, instrument};

/// Display format of the refresh timestamp: day, full month name, year,
/// 12-hour time with AM/PM. `chrono`'s `%B` is English-only, so the Hindi
/// page carries an English-format timestamp; the published page has always
/// read this way and keeps doing so.
const UPDATED_FORMAT: &str = "%d %B %Y, %I:%M %p";

/// Closing chrome appended after the last card.
const PAGE_FOOTER: &str = "</div>
<footer>
© 2025 TechBharat.ai — अपडेट हर घंटे · Developed by TechBharat Bot
</footer>
</body>
</html>
";

/// Render the complete HTML document for one run.
///
/// Cards appear in input order. The per-article transformation (translate,
/// then escape) runs sequentially, one article at a time.
#[instrument(level = "info", skip_all, fields(count = articles.len()))]
pub async fn render_page<T: TranslateBackend>(
    config: &SiteConfig,
    translator: &Translator<T>,
    articles: &[Article],
    generated_at: DateTime<Local>,
) -> String {
    let updated = generated_at.format(UPDATED_FORMAT).to_string();

    let mut page = String::new();
    write!(
        page,
        r#"<!doctype html>
<html lang="hi">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="TechBharat.ai - ताज़ा AI और टेक खबरें, गाइड और रिव्यू — हिंदी में।">
<style>
body{{font-family:system-ui,-apple-system,Segoe UI,Roboto,'Noto Sans Devanagari',sans-serif;background:#f7f7f7;margin:0;padding:0;color:#111}}
header{{background:#0f172a;color:white;padding:20px;text-align:center}}
.container{{max-width:900px;margin:auto;padding:20px}}
.card{{background:white;margin-bottom:16px;padding:16px;border-radius:10px;box-shadow:0 2px 6px rgba(0,0,0,0.08)}}
.card h2{{margin:0 0 8px 0;font-size:20px}}
.card p{{font-size:15px;line-height:1.6}}
footer{{background:#0f172a;color:white;text-align:center;padding:20px;margin-top:40px;font-size:14px}}
a{{color:#2563eb;text-decoration:none}}
.meta{{color:#555;font-size:13px;margin-bottom:8px}}
</style>
</head>
<body>
<header>
<h1>{title}</h1>
<p>ताज़ा अपडेट: {updated}</p>
</header>
<div class="container">
"#,
        title = config.site_title,
        updated = updated,
    )
    .unwrap();

    let cards: Vec<String> = stream::iter(articles)
        .then(|article| render_card(translator, article))
        .collect()
        .await;
    for card in &cards {
        page.push_str(card);
    }

    page.push_str(PAGE_FOOTER);
    info!(bytes = page.len(), cards = articles.len(), "Rendered page");
    page
}

/// Render one article card.
///
/// Title and summary are translated independently and escaped after
/// translation. The URL and source name are embedded unescaped, matching
/// the published page.
async fn render_card<T: TranslateBackend>(
    translator: &Translator<T>,
    article: &Article,
) -> String {
    let title = escape_html(&translator.translate_text(article.headline()).await);
    let summary = escape_html(&translator.translate_text(&article.display_summary()).await);
    let url = article.link();
    let source = article.source_label();
    let published = article.published_date();

    let mut card = String::new();
    writeln!(card, r#"  <div class="card">"#).unwrap();
    writeln!(
        card,
        r#"    <h2><a href="{url}" target="_blank">{title}</a></h2>"#
    )
    .unwrap();
    writeln!(card, r#"    <div class="meta">{source} · {published}</div>"#).unwrap();
    writeln!(card, "    <p>{summary}</p>").unwrap();
    writeln!(
        card,
        r#"    <p><a href="{url}" target="_blank">पूरा लेख पढ़ें →</a></p>"#
    )
    .unwrap();
    writeln!(card, "  </div>").unwrap();
    card
}

/// Persist the rendered document, fully replacing any previous file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_page(path: &str, html: &str) -> Result<(), Box<dyn Error>> {
    fs::write(path, html).await?;
    info!(bytes = html.len(), "Wrote page");
    Ok(())
}
