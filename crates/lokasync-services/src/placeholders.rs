use regex::Regex;
use std::sync::OnceLock;

/// Format specifiers like `%s`, `%d`, `%1$s` must survive the round trip
/// through a translation provider un-translated.
fn format_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%(\d+\$)?0?\d*[sdif]").unwrap())
}

/// Literal escape sequences that providers tend to mangle.
const LITERALS: [&str; 2] = [r"\n", r"\t"];

/// Replace protected substrings with opaque markers before sending text out.
/// Returns the masked text plus the marker table needed by [`restore`].
pub fn protect(text: &str) -> (String, Vec<(String, String)>) {
    let mut tokens: Vec<String> = Vec::new();
    for m in format_re().find_iter(text) {
        if !tokens.iter().any(|t| t == m.as_str()) {
            tokens.push(m.as_str().to_string());
        }
    }
    for lit in LITERALS {
        if text.contains(lit) && !tokens.iter().any(|t| t == lit) {
            tokens.push(lit.to_string());
        }
    }

    let mut markers: Vec<(String, String)> = tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| (format!("__PLH{}__", i + 1), token))
        .collect();

    // Mask longest tokens first so "%1$s" never loses its tail to "%s".
    markers.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    let mut masked = text.to_string();
    for (marker, token) in &markers {
        masked = masked.replace(token.as_str(), marker);
    }
    (masked, markers)
}

/// Undo [`protect`] on provider output. Providers routinely lowercase the
/// markers, so both spellings are restored.
pub fn restore(text: &str, markers: &[(String, String)]) -> String {
    let mut out = text.to_string();
    for (marker, token) in markers {
        out = out.replace(marker.as_str(), token);
        out = out.replace(&marker.to_lowercase(), token);
    }
    out
}
