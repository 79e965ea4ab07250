//! Optional translation of display text via the Google Translate v2 API.
//!
//! The outbound call sits behind a trait seam so the pass can be exercised
//! without the network:
//! - [`TranslateBackend`]: the single-call translation contract
//! - [`GoogleTranslate`]: production backend, one POST per text
//! - [`Translator`]: the pass itself, which never fails
//!
//! # Failure posture
//!
//! Translation is decorative. With the feature off or no key configured the
//! pass is the identity function, and any backend failure (network, non-2xx,
//! malformed response) is absorbed: the original text is returned and the
//! failure is visible only on the debug log level. Nothing in this module
//! can abort a run.

use crate::config::SiteConfig;
#[cfg(test)]
use crate::config::TARGET_LANGUAGE;
use crate::fetch::http;
use serde::{Deserialize, Serialize};
use std::error::Error;
use tracing::{debug, instrument};

/// Trait for the outbound translation call.
///
/// Implementors translate one piece of text per call. [`Translator`] wraps
/// an implementor and supplies the absorb-all-failures posture; tests inject
/// their own implementors through `Translator::with_backend`.
pub trait TranslateBackend {
    /// Translate `text` into the `target` language.
    async fn translate(&self, text: &str, target: &str) -> Result<String, Box<dyn Error>>;
}

/// Production backend for the Google Translate v2 endpoint.
#[derive(Debug)]
pub struct GoogleTranslate<'a> {
    /// Translation API credential, sent as the `key` query parameter.
    pub api_key: &'a str,
    /// Endpoint URL, taken from [`SiteConfig`].
    pub endpoint: &'a str,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    target: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

impl TranslateBackend for GoogleTranslate<'_> {
    /// POST the text and return the first translation result.
    ///
    /// No timeout is applied here; only the headline fetch carries one.
    #[instrument(level = "debug", skip_all)]
    async fn translate(&self, text: &str, target: &str) -> Result<String, Box<dyn Error>> {
        let resp = http()
            .post(self.endpoint)
            .query(&[("key", self.api_key)])
            .json(&TranslateRequest { q: text, target })
            .send()
            .await?
            .error_for_status()?;
        let body: TranslateResponse = resp.json().await?;

        let first = body
            .data
            .translations
            .into_iter()
            .next()
            .ok_or("translation response carried no translations")?;
        Ok(first.translated_text)
    }
}

/// The translation pass applied to titles and summaries before rendering.
///
/// Carries `Some(backend)` only when the run has translation enabled and a
/// key configured; otherwise [`Translator::translate_text`] returns its
/// input unchanged.
#[derive(Debug)]
pub struct Translator<T> {
    backend: Option<T>,
    target: String,
}

impl<'a> Translator<GoogleTranslate<'a>> {
    /// Wire the production backend from the run configuration.
    pub fn from_config(config: &'a SiteConfig) -> Self {
        let backend = match (config.auto_translate, config.translate_api_key.as_deref()) {
            (true, Some(key)) => Some(GoogleTranslate {
                api_key: key,
                endpoint: &config.translate_endpoint,
            }),
            (true, None) => {
                debug!("Translation enabled but no API key configured; passing text through");
                None
            }
            (false, _) => {
                debug!("Translation disabled; passing text through");
                None
            }
        };
        Self {
            backend,
            target: config.target_language.clone(),
        }
    }
}

#[cfg(test)]
impl Translator<GoogleTranslate<'static>> {
    /// A translator with no backend: the identity pass.
    pub fn disabled() -> Self {
        Self {
            backend: None,
            target: TARGET_LANGUAGE.to_string(),
        }
    }
}

impl<T: TranslateBackend> Translator<T> {
    /// Build the pass over an explicit backend. Tests inject mocks here.
    #[cfg(test)]
    pub fn with_backend(backend: T, target: impl Into<String>) -> Self {
        Self {
            backend: Some(backend),
            target: target.into(),
        }
    }

    /// Whether a backend is wired, i.e. whether text will actually change.
    pub fn is_active(&self) -> bool {
        self.backend.is_some()
    }

    /// Translate one piece of display text. Never fails.
    ///
    /// Returns the input unchanged when no backend is wired or when the
    /// backend errors; the error is logged at debug level and absorbed.
    pub async fn translate_text(&self, text: &str) -> String {
        let Some(backend) = &self.backend else {
            return text.to_string();
        };
        match backend.translate(text, &self.target).await {
            Ok(translated) => translated,
            Err(e) => {
                debug!(error = %e, "Translation failed; keeping original text");
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Marks translated text so tests can tell the pass ran.
    struct EchoBackend;

    impl TranslateBackend for EchoBackend {
        async fn translate(&self, text: &str, target: &str) -> Result<String, Box<dyn Error>> {
            Ok(format!("{target}:{text}"))
        }
    }

    /// Always errors, counting how often it was asked.
    struct FailingBackend {
        calls: AtomicUsize,
    }

    impl FailingBackend {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TranslateBackend for FailingBackend {
        async fn translate(&self, _text: &str, _target: &str) -> Result<String, Box<dyn Error>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err("translation endpoint unreachable".into())
        }
    }

    #[tokio::test]
    async fn test_disabled_translator_is_identity() {
        let translator = Translator::disabled();
        assert!(!translator.is_active());
        assert_eq!(translator.translate_text("unchanged <text>").await, "unchanged <text>");
        assert_eq!(translator.translate_text("").await, "");
    }

    #[tokio::test]
    async fn test_from_config_flag_off_ignores_key() {
        let config = SiteConfig {
            auto_translate: false,
            translate_api_key: Some("t-key".to_string()),
            ..SiteConfig::default()
        };
        let translator = Translator::from_config(&config);
        assert!(!translator.is_active());
        assert_eq!(translator.translate_text("as-is").await, "as-is");
    }

    #[tokio::test]
    async fn test_from_config_flag_on_without_key_is_inactive() {
        let config = SiteConfig {
            auto_translate: true,
            translate_api_key: None,
            ..SiteConfig::default()
        };
        let translator = Translator::from_config(&config);
        assert!(!translator.is_active());
        assert_eq!(translator.translate_text("as-is").await, "as-is");
    }

    #[test]
    fn test_from_config_flag_on_with_key_is_active() {
        let config = SiteConfig {
            auto_translate: true,
            translate_api_key: Some("t-key".to_string()),
            ..SiteConfig::default()
        };
        assert!(Translator::from_config(&config).is_active());
    }

    #[tokio::test]
    async fn test_backend_success_replaces_text() {
        let translator = Translator::with_backend(EchoBackend, "hi");
        assert_eq!(translator.translate_text("hello").await, "hi:hello");
    }

    #[tokio::test]
    async fn test_backend_failure_is_absorbed() {
        let backend = FailingBackend::new();
        let translator = Translator::with_backend(backend, "hi");

        let out = translator.translate_text("original text").await;
        assert_eq!(out, "original text");

        // The backend was consulted and its failure absorbed, not skipped.
        let Translator { backend, .. } = translator;
        assert_eq!(backend.unwrap().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_translate_response_parses_google_shape() {
        let json = r#"{"data": {"translations": [{"translatedText": "नमस्ते"}]}}"#;
        let parsed: TranslateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.translations[0].translated_text, "नमस्ते");
    }

    #[test]
    fn test_translate_response_missing_field_is_error() {
        let json = r#"{"data": {}}"#;
        assert!(serde_json::from_str::<TranslateResponse>(json).is_err());
    }

    #[test]
    fn test_translate_request_wire_shape() {
        let body = serde_json::to_string(&TranslateRequest {
            q: "hello",
            target: "hi",
        })
        .unwrap();
        assert_eq!(body, r#"{"q":"hello","target":"hi"}"#);
    }
}
