// src/specs/index.rs
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::core::{html, net::join_url};
use crate::error::{Error, Result};

static TABLE: Lazy<Selector> = Lazy::new(|| html::selector("table"));
static HLIST: Lazy<Selector> = Lazy::new(|| html::selector("div.hlist"));
static LINK: Lazy<Selector> = Lazy::new(|| html::selector("a[href]"));

/// Listing page URLs linked from the overview page.
///
/// The links sit in the page's first table, one `div.hlist` per item class.
/// `page_url` is only used for the error message.
pub fn category_urls(doc: &Html, page_url: &str, base_url: &str) -> Result<Vec<String>> {
    let table = doc.select(&TABLE).next().ok_or_else(|| Error::Structure {
        url: page_url.to_string(),
        reason: "no table with category links".to_string(),
    })?;

    let mut urls = Vec::new();
    for list in table.select(&HLIST) {
        for link in list.select(&LINK) {
            if let Some(href) = link.value().attr("href") {
                urls.push(join_url(base_url, href));
            }
        }
    }
    log::debug!("Index: {} category links", urls.len());
    Ok(urls)
}
