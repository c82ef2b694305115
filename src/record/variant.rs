// src/record/variant.rs
use once_cell::sync::Lazy;
use regex::Regex;

// "variant" and everything after it on the line
static VARIANT_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)variant.*").expect("Invalid variant regex"));

pub fn is_variant(text: &str) -> bool {
    VARIANT_TAIL.is_match(text)
}

/// The header text of a style-variant line, e.g. `"Pre 2.6.0 variant"` -> `"Pre 2.6.0"`.
pub fn variant_label(text: &str) -> String {
    VARIANT_TAIL.replace_all(text, "").trim().to_string()
}

/// `| -<label>- `
pub fn wrap_label(label: &str) -> String {
    format!("| -{label}- ")
}

pub fn build_variant(text: &str) -> String {
    wrap_label(&variant_label(text))
}
