use crate::placeholders;
use lokasync_core::{ResEntry, Result};

/// Outbound translation collaborator. One call per (entry, language);
/// `Ok(None)` means the provider had no usable result.
pub trait TranslationProvider {
    fn name(&self) -> &str;
    fn translate(&self, lang: &str, text: &str) -> Result<Option<String>>;
}

/// Drive per-entry translation for one language.
///
/// Non-translatable entries pass through verbatim with zero provider calls.
/// A failed or empty provider result degrades to the original value, so the
/// output always has exactly one pair per input entry. No retries.
pub fn translate_entries(
    provider: &dyn TranslationProvider,
    entries: &[ResEntry],
    lang: &str,
    errors: &mut Vec<String>,
) -> (Vec<(String, String)>, usize) {
    let mut out = Vec::with_capacity(entries.len());
    let mut translated = 0usize;

    for entry in entries {
        if !entry.translatable {
            out.push((entry.name.clone(), entry.value.clone()));
            continue;
        }
        let (masked, markers) = placeholders::protect(&entry.value);
        match provider.translate(lang, &masked) {
            Ok(Some(text)) => {
                out.push((
                    entry.name.clone(),
                    placeholders::restore(text.trim(), &markers),
                ));
                translated += 1;
            }
            Ok(None) => {
                tracing::debug!(event = "translation_empty", lang = %lang, key = %entry.name);
                out.push((entry.name.clone(), entry.value.clone()));
            }
            Err(err) => {
                tracing::warn!(event = "translation_failed", lang = %lang, key = %entry.name, %err);
                errors.push(format!("{lang}/{}: {err}", entry.name));
                out.push((entry.name.clone(), entry.value.clone()));
            }
        }
    }

    (out, translated)
}
