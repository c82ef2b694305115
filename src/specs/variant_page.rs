// src/specs/variant_page.rs
//
// Items with style variants list their modifiers on their own page, below the
// "Modifiers" heading: a <ul> naming the variant, then a <dl> whose text has
// one modifier per line. The section ends at the next <h2>.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::core::html::{self, text_of};
use crate::core::net::{fetch_document, join_url, Fetch};
use crate::error::Result;

static MODIFIERS_ANCHOR: Lazy<Selector> = Lazy::new(|| html::selector("#Modifiers"));

/// "Given a variant page link, return its modifier fragments."
pub trait VariantSource {
    fn variant_fragments(&self, href: &str) -> Result<Vec<String>>;
}

/// Variant pages straight off the wiki.
pub struct WikiVariants<'a> {
    fetcher: &'a dyn Fetch,
    base_url: &'a str,
}

impl<'a> WikiVariants<'a> {
    pub fn new(fetcher: &'a dyn Fetch, base_url: &'a str) -> Self {
        Self { fetcher, base_url }
    }
}

impl VariantSource for WikiVariants<'_> {
    fn variant_fragments(&self, href: &str) -> Result<Vec<String>> {
        let url = join_url(self.base_url, href);
        log::info!("Getting variant page {url}");
        let doc = fetch_document(self.fetcher, &url)?;
        Ok(variant_lines(&doc))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WalkState {
    /// Before any variant list. Only the first `dl` here is read.
    Scanning { dl_read: bool },
    /// After a `ul`. Only the first `dl` of the block is read.
    VariantBlock { dl_read: bool },
}

impl WalkState {
    fn dl_read(self) -> bool {
        match self {
            WalkState::Scanning { dl_read } | WalkState::VariantBlock { dl_read } => dl_read,
        }
    }

    fn mark_read(self) -> Self {
        match self {
            WalkState::Scanning { .. } => WalkState::Scanning { dl_read: true },
            WalkState::VariantBlock { .. } => WalkState::VariantBlock { dl_read: true },
        }
    }
}

/// Variant headers and their modifier lines, in page order.
pub fn variant_lines(doc: &Html) -> Vec<String> {
    let Some(anchor) = doc.select(&MODIFIERS_ANCHOR).next() else {
        log::warn!("Variant page has no Modifiers section");
        return Vec::new();
    };
    let anchor_id = (*anchor).id();

    let mut lines = Vec::new();
    let mut state = WalkState::Scanning { dl_read: false };

    let following = doc
        .root_element()
        .descendants()
        .skip_while(|node| node.id() != anchor_id)
        .skip(1)
        .filter_map(ElementRef::wrap);

    for el in following {
        match el.value().name() {
            "h2" => break,
            "ul" => {
                let header = text_of(el).trim().to_string();
                if !header.is_empty() {
                    lines.push(header);
                }
                state = WalkState::VariantBlock { dl_read: false };
            }
            "dl" if !state.dl_read() => {
                lines.extend(
                    text_of(el)
                        .split('\n')
                        .map(str::trim)
                        .filter(|l| !l.is_empty())
                        .map(str::to_string),
                );
                state = state.mark_read();
            }
            _ => {}
        }
    }
    log::debug!("Variant page: {} lines", lines.len());
    lines
}
