// src/record/assemble.rs
use std::fmt;

use crate::core::sanitize::title_case;
use super::fragment::IMPLICIT_MARK;
use super::{numeric, variant};

/// One piece of an output line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordLine {
    /// Item name, written verbatim.
    Name(String),
    /// `|` + `@`? + `digits:`? + text
    Modifier {
        implicit: bool,
        prefix: Option<String>,
        text: String,
    },
    /// `| -label- `
    Variant(String),
}

impl fmt::Display for RecordLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordLine::Name(name) => f.write_str(name),
            RecordLine::Modifier { implicit, prefix, text } => {
                f.write_str("|")?;
                if *implicit {
                    write!(f, "{IMPLICIT_MARK}")?;
                }
                if let Some(prefix) = prefix {
                    f.write_str(prefix)?;
                }
                f.write_str(text)
            }
            RecordLine::Variant(label) => f.write_str(&variant::wrap_label(label)),
        }
    }
}

/// Pull the implicit marker out of `text`.
fn take_marker(text: &str) -> (bool, String) {
    if text.contains(IMPLICIT_MARK) {
        (true, text.replace(IMPLICIT_MARK, ""))
    } else {
        (false, text.to_string())
    }
}

/// Patches for text left over once the numbers are gone. Lossy:
/// `( To )` only covers the one leftover shape that shows up in practice.
/// Dropping a sign can leave a space at the front, so trim last.
fn cleanup(text: &str) -> String {
    text.replace("  ", " ")
        .replace("% ", "")
        .replace("( To )", "")
        .replace('+', "")
        .trim()
        .to_string()
}

/// Turn one raw fragment into a record piece.
///
/// `has_content` says whether anything was emitted for this item yet; a
/// number-free fragment with nothing before it is the item name.
pub fn assemble_fragment(raw: &str, has_content: bool) -> Option<RecordLine> {
    let data = raw.trim().replace('\u{2013}', "-");

    if variant::is_variant(&data) {
        return Some(RecordLine::Variant(variant::variant_label(&data)));
    }

    let prefix = numeric::extract(&data).and_then(|token| token.prefix());
    if let Some(prefix) = prefix {
        let stripped = numeric::strip_tokens(&data);
        let (implicit, rest) = take_marker(stripped.trim());
        let text = cleanup(&title_case(rest.trim()));
        return Some(RecordLine::Modifier { implicit, prefix: Some(prefix), text });
    }

    if data.is_empty() {
        return None;
    }

    if has_content {
        let (implicit, rest) = take_marker(&data);
        return Some(RecordLine::Modifier { implicit, prefix: None, text: title_case(rest.trim()) });
    }

    Some(RecordLine::Name(data))
}

/// One output line for one item: the rendered pieces back to back.
pub fn assemble_item<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut line = String::new();
    for fragment in fragments {
        if let Some(piece) = assemble_fragment(fragment.as_ref(), !line.is_empty()) {
            line.push_str(&piece.to_string());
        }
    }
    line
}
