use lokasync_core::{LokasyncError, ResEntry, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::collections::HashMap;
use std::path::Path;

/// Load the source-of-truth document (`res/values/strings.xml`).
///
/// A missing or malformed file is not an error: it yields `Ok(None)` so that
/// callers can treat "no document" as "nothing to do" without touching any
/// state.
pub fn load_source_doc(path: &Path) -> Result<Option<Vec<ResEntry>>> {
    let xml = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(err) => {
            tracing::warn!(event = "source_unreadable", path = %path.display(), %err);
            return Ok(None);
        }
    };
    match parse_resources(&xml) {
        Ok(entries) => Ok(Some(entries)),
        Err(err) => {
            tracing::warn!(event = "source_malformed", path = %path.display(), %err);
            Ok(None)
        }
    }
}

/// Load an existing per-language document as ordered `(name, value)` pairs.
/// A missing file is an empty document; a malformed one is treated the same
/// way (the next write replaces it wholesale).
pub fn load_language_doc(path: &Path) -> Result<Vec<(String, String)>> {
    let xml = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => return Ok(Vec::new()),
    };
    match parse_resources(&xml) {
        Ok(entries) => Ok(entries.into_iter().map(|e| (e.name, e.value)).collect()),
        Err(err) => {
            tracing::warn!(event = "language_doc_malformed", path = %path.display(), %err);
            Ok(Vec::new())
        }
    }
}

/// Parse a `<resources>` document into entries, document order preserved.
/// Duplicate names follow last-wins: the later value replaces the earlier one
/// in place.
fn parse_resources(xml: &str) -> std::result::Result<Vec<ResEntry>, LokasyncError> {
    let mut reader = Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut out: Vec<ResEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut depth = 0usize;
    let mut current: Option<(String, bool)> = None;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                depth += 1;
                if depth == 2 {
                    let (name, translatable) = entry_attrs(&e)?;
                    current = name.map(|n| (n, translatable));
                    text.clear();
                }
            }
            Ok(Event::Empty(e)) => {
                if depth == 1 {
                    if let (Some(name), translatable) = entry_attrs(&e)? {
                        push_entry(&mut out, &mut index, name, String::new(), translatable);
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if depth >= 2 && current.is_some() {
                    let chunk = t
                        .unescape()
                        .map_err(|e| LokasyncError::Xml(e.to_string()))?;
                    // Text around inline markup concatenates directly;
                    // whitespace-only nodes are layout, not content.
                    if !chunk.trim().is_empty() {
                        text.push_str(&chunk);
                    }
                }
            }
            Ok(Event::CData(t)) => {
                if depth >= 2 && current.is_some() {
                    text.push_str(&String::from_utf8_lossy(t.as_ref()));
                }
            }
            Ok(Event::End(_)) => {
                if depth == 2 {
                    if let Some((name, translatable)) = current.take() {
                        push_entry(&mut out, &mut index, name, std::mem::take(&mut text), translatable);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(LokasyncError::Xml(format!("{e}"))),
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}

fn push_entry(
    out: &mut Vec<ResEntry>,
    index: &mut HashMap<String, usize>,
    name: String,
    value: String,
    translatable: bool,
) {
    let entry = ResEntry {
        name: name.clone(),
        value,
        translatable,
    };
    match index.get(&name) {
        Some(&i) => out[i] = entry,
        None => {
            index.insert(name, out.len());
            out.push(entry);
        }
    }
}

fn entry_attrs(
    e: &BytesStart<'_>,
) -> std::result::Result<(Option<String>, bool), LokasyncError> {
    let mut name: Option<String> = None;
    let mut translatable = true;
    for attr in e.attributes() {
        let attr = attr.map_err(|e| LokasyncError::Xml(e.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| LokasyncError::Xml(e.to_string()))?;
        match attr.key.as_ref() {
            b"name" => name = Some(value.into_owned()),
            b"translatable" => translatable = value.trim().eq_ignore_ascii_case("true"),
            _ => {}
        }
    }
    Ok((name.filter(|n| !n.is_empty()), translatable))
}

/// Render a `<resources>` document from `(name, value)` pairs.
/// Values are escaped by the writer, so raw `&`/`<`/`>` coming back from a
/// translation provider cannot corrupt the document.
pub fn render_strings_xml_bytes(entries: &[(String, String)]) -> Result<Vec<u8>> {
    let mut w = Writer::new_with_indent(Vec::new(), b' ', 4);

    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    w.write_event(Event::Start(BytesStart::new("resources")))?;

    for (name, value) in entries {
        let mut el = BytesStart::new("string");
        el.push_attribute(("name", name.as_str()));
        w.write_event(Event::Start(el))?;
        w.write_event(Event::Text(BytesText::new(value)))?;
        w.write_event(Event::End(BytesEnd::new("string")))?;
    }

    w.write_event(Event::End(BytesEnd::new("resources")))?;
    let mut out = w.into_inner();
    out.push(b'\n');
    Ok(out)
}
