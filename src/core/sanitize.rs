// src/core/sanitize.rs

const MINUS_SIGN: char = '\u{2212}';
const EN_DASH: char = '\u{2013}';
const O_DIAERESIS: char = '\u{00F6}';

/// U+2212 and U+2013 both become ASCII `-`.
pub fn ascii_dashes(s: &str) -> String {
    s.replace([MINUS_SIGN, EN_DASH], "-")
}

/// `ö` -> `o`. Item names only; modifier text keeps its umlauts.
pub fn fold_umlaut(s: &str) -> String {
    s.replace(O_DIAERESIS, "o")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Uppercase a letter that follows a non-letter, lowercase the rest.
/// An apostrophe between letters stays inside the word ("doesn't" -> "Doesn't").
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = ch == '\'' && prev.is_some_and(char::is_alphabetic);
        }
        prev = Some(ch);
    }
    out
}
