// src/record/numeric.rs
//! Numeric tokens inside modifier text.
//!
//! Five independent matchers, tried in priority order. The token that starts
//! leftmost wins; at the same start position the higher priority matcher wins.
//! That is the same answer one big alternation regex gives, without having
//! to sort out which capture group fired.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Digits with any number of dotted groups (`1.5`, `2.6.0`, `.5`).
/// A bare `.` is not a number.
const NUM: &str = r"\.?\d+(?:\.\d+)*";

static DUAL_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\+*\(({NUM})\s[a-z]+\s({NUM})\)")).expect("Invalid dual range regex")
});
static PERCENTAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\+*({NUM})%")).expect("Invalid percentage regex")
});
static SIMPLE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"({NUM})-({NUM})")).expect("Invalid simple range regex")
});
// "(10-20 to 30-40)" as well as "(10-20) to (30-40)"
static COMPOUND_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\(({NUM})-({NUM})\)?\s\w+\s\(?({NUM})-({NUM})\)"))
        .expect("Invalid compound range regex")
});
static BARE_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(-?)\+?({NUM})")).expect("Invalid bare number regex")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumericToken {
    /// `(10 to 15)`
    DualRange { low: String, high: String },
    /// `+25%`
    Percentage(String),
    /// `150-200`
    SimpleRange { low: String, high: String },
    /// `(10-20) to (30-40)`
    CompoundRange { first: (String, String), second: (String, String) },
    /// `-5`, `+12`, `0.4`
    BareNumber(String),
}

#[derive(Clone, Copy)]
enum Matcher {
    DualRange,
    Percentage,
    SimpleRange,
    CompoundRange,
    BareNumber,
}

const PRIORITY: [Matcher; 5] = [
    Matcher::DualRange,
    Matcher::Percentage,
    Matcher::SimpleRange,
    Matcher::CompoundRange,
    Matcher::BareNumber,
];

impl Matcher {
    fn regex(self) -> &'static Regex {
        match self {
            Matcher::DualRange => &DUAL_RANGE,
            Matcher::Percentage => &PERCENTAGE,
            Matcher::SimpleRange => &SIMPLE_RANGE,
            Matcher::CompoundRange => &COMPOUND_RANGE,
            Matcher::BareNumber => &BARE_NUMBER,
        }
    }

    fn token(self, caps: &Captures) -> NumericToken {
        let g = |i: usize| caps.get(i).map_or(String::new(), |m| m.as_str().to_string());
        match self {
            Matcher::DualRange => NumericToken::DualRange { low: g(1), high: g(2) },
            Matcher::Percentage => NumericToken::Percentage(g(1)),
            Matcher::SimpleRange => NumericToken::SimpleRange { low: g(1), high: g(2) },
            Matcher::CompoundRange => NumericToken::CompoundRange {
                first: (g(1), g(2)),
                second: (g(3), g(4)),
            },
            Matcher::BareNumber => NumericToken::BareNumber(format!("{}{}", g(1), g(2))),
        }
    }
}

/// Leftmost token at or after byte offset `from`, with its span.
fn find_at(text: &str, from: usize) -> Option<(Range<usize>, NumericToken)> {
    let mut best: Option<(Range<usize>, Matcher, Captures)> = None;
    for matcher in PRIORITY {
        let Some(caps) = matcher.regex().captures_at(text, from) else { continue };
        let Some(whole) = caps.get(0) else { continue };
        // strict `<` keeps the earlier matcher on a tie
        if best.as_ref().is_none_or(|(span, _, _)| whole.start() < span.start) {
            best = Some((whole.range(), matcher, caps));
        }
    }
    best.map(|(span, matcher, caps)| (span, matcher.token(&caps)))
}

/// First numeric token in `text`, if any.
pub fn extract(text: &str) -> Option<NumericToken> {
    find_at(text, 0).map(|(_, token)| token)
}

/// `text` with every numeric token removed, scanning left to right.
/// A token wrapped in its own parentheses, as in `(25-30)%`, takes them along.
pub fn strip_tokens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some((mut span, _)) = find_at(text, pos) {
        if span.start > pos && text[..span.start].ends_with('(') && text[span.end..].starts_with(')') {
            span = span.start - 1..span.end + 1;
        }
        out.push_str(&text[pos..span.start]);
        pos = span.end;
    }
    out.push_str(&text[pos..]);
    out
}

fn clean_value(v: &str, compound: bool) -> String {
    v.chars()
        .filter(|c| !matches!(c, '%' | '+') && !(compound && matches!(c, '(' | ')')))
        .collect()
}

impl NumericToken {
    fn values(&self) -> Vec<&str> {
        match self {
            NumericToken::DualRange { low, high } | NumericToken::SimpleRange { low, high } => {
                vec![low, high]
            }
            NumericToken::Percentage(v) | NumericToken::BareNumber(v) => vec![v],
            NumericToken::CompoundRange { first, second } => {
                vec![&first.0, &first.1, &second.0, &second.1]
            }
        }
    }

    /// The `digits:` prefix of a record line. Compound ranges join with `,`,
    /// everything else with `-`. `None` when no value survives cleaning.
    pub fn prefix(&self) -> Option<String> {
        let compound = matches!(self, NumericToken::CompoundRange { .. });
        let values: Vec<String> = self
            .values()
            .into_iter()
            .map(|v| clean_value(v, compound))
            .filter(|v| !v.is_empty())
            .collect();
        if values.is_empty() {
            return None;
        }
        let sep = if compound { "," } else { "-" };
        Some(format!("{}:", values.join(sep)))
    }
}
