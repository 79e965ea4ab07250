//! Text helpers for summary truncation and HTML embedding.
//!
//! Everything user-facing that lands inside the generated page body goes
//! through [`escape_html`]; summary sizing goes through [`truncate_chars`].
//! Both operate on characters, not bytes, because titles and summaries may
//! contain Devanagari text once translation is enabled.

/// Escape a string for safe embedding in HTML element content.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their entity forms. `&` is
/// handled by the same single pass as the rest, so already-escaped input is
/// escaped again rather than treated as markup.
///
/// # Arguments
///
/// * `s` - The raw text to escape
///
/// # Returns
///
/// A new string with all HTML-sensitive characters replaced.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(escape_html("AI <Breakthrough>"), "AI &lt;Breakthrough&gt;");
/// assert_eq!(escape_html("R&D \"lab\""), "R&amp;D &quot;lab&quot;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Truncate a string to at most `max` characters.
///
/// Strings longer than `max` are cut to `max - 3` characters with `...`
/// appended, so the result is exactly `max` characters long. The cut is a
/// raw character cut with no word-boundary awareness.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}
