use crate::translate::TranslationProvider;
use lokasync_core::Result;
use std::time::Duration;

const GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/t";

/// Free-tier Google endpoint, one blocking request per entry. Best effort:
/// any network or shape problem surfaces as an error and the orchestrator
/// falls back to the original value.
pub struct GoogleTranslate {
    client: reqwest::blocking::Client,
    source_lang: String,
}

impl GoogleTranslate {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("lokasync/cli")
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            source_lang: "en".to_string(),
        })
    }
}

impl TranslationProvider for GoogleTranslate {
    fn name(&self) -> &str {
        "google"
    }

    fn translate(&self, lang: &str, text: &str) -> Result<Option<String>> {
        let resp = self
            .client
            .get(GOOGLE_ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", self.source_lang.as_str()),
                ("tl", lang),
                ("q", text),
            ])
            .send()?;
        let json: serde_json::Value = resp.json()?;
        Ok(json
            .as_array()
            .and_then(|a| a.first())
            .and_then(first_string))
    }
}

// The endpoint answers ["text"] for a single query but nests one level
// deeper in some locales; take the first string either way.
fn first_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(a) => a.first().and_then(first_string),
        _ => None,
    }
}

/// Deterministic offline provider: wraps the text in a language tag. Used by
/// tests and for exercising the pipeline without network access.
#[derive(Debug, Default)]
pub struct PseudoProvider;

impl TranslationProvider for PseudoProvider {
    fn name(&self) -> &str {
        "pseudo"
    }

    fn translate(&self, lang: &str, text: &str) -> Result<Option<String>> {
        Ok(Some(format!("[{lang}] {text}")))
    }
}
