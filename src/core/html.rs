// src/core/html.rs
use scraper::{ElementRef, Selector};

/// Parse a selector that is known to be valid at compile time.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

/// All descendant text of an element, concatenated as-is.
pub fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

/// A direct child that carries content: an element, or a text node that
/// is not pure whitespace.
#[derive(Clone, Copy, Debug)]
pub enum Child<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
}

impl<'a> Child<'a> {
    pub fn text(&self) -> String {
        match self {
            Child::Element(el) => text_of(*el),
            Child::Text(t) => t.to_string(),
        }
    }
}

/// Children of `el` minus comments and whitespace-only text.
pub fn significant_children(el: ElementRef<'_>) -> Vec<Child<'_>> {
    el.children()
        .filter_map(|node| {
            if let Some(child) = ElementRef::wrap(node) {
                return Some(Child::Element(child));
            }
            let text: &str = node.value().as_text()?;
            if text.trim().is_empty() { None } else { Some(Child::Text(text)) }
        })
        .collect()
}

/// Elements whose text flows into the surrounding line.
pub fn is_inline(name: &str) -> bool {
    matches!(
        name,
        "a" | "abbr" | "b" | "i" | "em" | "strong" | "small" | "span" | "sup" | "sub" | "u" | "font"
    )
}
