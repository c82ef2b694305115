// src/specs/mod.rs
//! # Page readers
//!
//! One module per kind of wiki page. Each knows *where the data lives in the
//! HTML* and pulls it out as raw text fragments; turning fragments into record
//! lines is `record`'s job.
//!
//! ## What lives here
//! - **Pure tree walking** over parsed pages (`scraper::Html`).
//! - **Tolerant extraction**: a node that does not have the expected shape is
//!   read as plain text rather than failing the run.
//! - The one place a page reader needs another page (style variants) goes
//!   through the `VariantSource` trait, so tests can stub it.
//!
//! ## What does **not** live here
//! - Networking and the worker pool (`core::net`, `scrape`).
//! - Number formatting, title casing, record lines (`record`).
//! - File output (`file`).
//!
//! ## Typical call chain
//! ```text
//! runner → index::category_urls(index page)
//!        → scrape::collect_catalog → listing::extract_items(listing page)
//!                                      ↘ VariantSource → variant_page::variant_lines
//! ```
//!
//! ## Current readers
//! - `index` – category links on the unique item overview page.
//! - `listing` – item rows on a category listing page.
//! - `variant_page` – the Modifiers section of an item page with style variants.
pub mod index;
pub mod listing;
pub mod variant_page;

pub use variant_page::{VariantSource, WikiVariants};
