// src/record/fragment.rs
use crate::core::sanitize::{ascii_dashes, fold_umlaut};

/// Where a raw fragment came from inside an item row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentKind {
    /// First cell of the row.
    Name,
    /// First child of a stats block that has more than one.
    Implicit,
    Explicit,
}

pub const IMPLICIT_MARK: char = '@';

/// Dashes to ASCII everywhere, `ö` folded in names only, `@` in front of implicits.
pub fn normalize_fragment(raw: &str, kind: FragmentKind) -> String {
    let text = ascii_dashes(raw);
    match kind {
        FragmentKind::Name => fold_umlaut(text.trim_end()),
        FragmentKind::Implicit => format!("{IMPLICIT_MARK}{text}"),
        FragmentKind::Explicit => text,
    }
}
