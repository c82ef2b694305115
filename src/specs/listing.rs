// src/specs/listing.rs
//
// A category listing page: one <tr id=...> per item. Rows without an id are
// headers and spacers.
//
//   <tr id="Kaoms_Heart">
//     <td>Kaom's Heart</td>
//     <td><div class="item-stats">
//           <span class="group">implicit</span>       (only when there is one)
//           <span class="group">mod<br>mod<br>...</span>
//     </div></td>
//   </tr>

use once_cell::sync::Lazy;
use scraper::{CaseSensitivity, ElementRef, Html, Selector};

use crate::core::html::{self, Child};
use crate::core::sanitize::normalize_ws;
use crate::error::Result;
use crate::record::{normalize_fragment, FragmentKind};
use super::VariantSource;

static ITEM_ROW: Lazy<Selector> = Lazy::new(|| html::selector("tr[id]"));
static ITEM_STATS: Lazy<Selector> = Lazy::new(|| html::selector("div.item-stats"));
static LINK: Lazy<Selector> = Lazy::new(|| html::selector("a[href]"));

/// Stands in for a list of modifiers that lives on the item's own page.
pub const STYLE_VARIANT_MARKER: &str = "<Style Variant>";

/// One fragment list per item row: name, implicit (`@`-tagged), explicits.
pub fn extract_items(doc: &Html, variants: &dyn VariantSource) -> Result<Vec<Vec<String>>> {
    let mut items = Vec::new();
    for row in doc.select(&ITEM_ROW) {
        let Some(first_cell) = html::significant_children(row).into_iter().next() else {
            continue;
        };
        let name = normalize_fragment(&first_cell.text(), FragmentKind::Name);
        log::debug!("Getting data for {name}");

        let mut fragments = vec![name];
        for stats in row.select(&ITEM_STATS) {
            read_stats(stats, variants, &mut fragments)?;
        }
        items.push(fragments);
    }
    Ok(items)
}

fn read_stats(
    stats: ElementRef<'_>,
    variants: &dyn VariantSource,
    out: &mut Vec<String>,
) -> Result<()> {
    let children = html::significant_children(stats);
    let Some(explicit) = children.last() else {
        return Ok(());
    };
    if children.len() > 1 {
        out.push(normalize_fragment(&children[0].text(), FragmentKind::Implicit));
    }

    let variant_href = variant_link(stats, *explicit);
    for line in modifier_lines(*explicit) {
        if line == STYLE_VARIANT_MARKER {
            if let Some(href) = variant_href {
                for fragment in variants.variant_fragments(href)? {
                    out.push(normalize_fragment(&fragment, FragmentKind::Explicit));
                }
                continue;
            }
            log::warn!("Style variant marker without a link; keeping it as text");
        }
        out.push(normalize_fragment(&line, FragmentKind::Explicit));
    }
    Ok(())
}

/// The link behind the style-variant marker. Implicits can carry links of
/// their own, so prefer the marker's own link, then the first link of the
/// explicit block, then any link in the stats block.
fn variant_link<'a>(stats: ElementRef<'a>, explicit: Child<'a>) -> Option<&'a str> {
    let links: Vec<ElementRef<'a>> = stats.select(&LINK).collect();
    links
        .iter()
        .find(|a| normalize_ws(&html::text_of(**a)) == STYLE_VARIANT_MARKER)
        .or_else(|| match explicit {
            Child::Element(el) => links.iter().find(|a| el.descendants().any(|n| n.id() == a.id())),
            Child::Text(_) => None,
        })
        .or_else(|| links.first())
        .and_then(|a| href_of(*a))
}

fn href_of<'a>(a: ElementRef<'a>) -> Option<&'a str> {
    a.value().attr("href")
}

/// Split an explicit block into modifier lines. Inline markup stays in the
/// line it sits in; `<br>` and block elements end the line.
fn modifier_lines(block: Child<'_>) -> Vec<String> {
    let mut lines = LineCollector::default();
    match block {
        Child::Element(el) => lines.walk(el),
        Child::Text(text) => lines.current.push_str(text),
    }
    lines.flush();
    lines.done
}

#[derive(Default)]
struct LineCollector {
    done: Vec<String>,
    current: String,
}

impl LineCollector {
    fn flush(&mut self) {
        let line = normalize_ws(&self.current);
        self.current.clear();
        if !line.is_empty() {
            self.done.push(line);
        }
    }

    fn walk(&mut self, el: ElementRef<'_>) {
        for node in el.children() {
            if let Some(child) = ElementRef::wrap(node) {
                let name = child.value().name();
                if name == "br" {
                    self.flush();
                } else if html::is_inline(name)
                    && !child.value().has_class("group", CaseSensitivity::CaseSensitive)
                {
                    self.walk(child);
                } else {
                    self.flush();
                    self.walk(child);
                    self.flush();
                }
            } else if let Some(text) = node.value().as_text() {
                self.current.push_str(text);
            }
        }
    }
}
