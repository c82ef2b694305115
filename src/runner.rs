// src/runner.rs
use std::path::PathBuf;

use chrono::Local;

use crate::{
    config::RunOptions,
    core::net::{fetch_document, Fetch},
    error::Result,
    file,
    progress::Progress,
    record::assemble_item,
    scrape,
    specs::index,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub out_path: PathBuf,
    pub pages: usize,
    pub items: usize,
}

/// Top-level run: index page → listing pages (parallel) → record lines → file.
///
/// The output file is truncated as soon as the index has been read, and the
/// records are appended only after every listing page came back. A failure in
/// between leaves just the header behind.
pub fn run(
    opts: &RunOptions,
    fetcher: &dyn Fetch,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    progress.log("Getting web page...");
    let mut urls = {
        let doc = fetch_document(fetcher, &opts.index_url)?;
        index::category_urls(&doc, &opts.index_url, &opts.base_url)?
    };
    if urls.is_empty() {
        log::warn!("No category links on {}", opts.index_url);
    }
    urls.extend(opts.extra_page_urls());

    file::write_header(&opts.out_path, Local::now().naive_local())?;

    let pages = scrape::collect_catalog(&urls, fetcher, &opts.base_url, opts.workers, progress)?;

    let lines: Vec<String> = pages.iter().flatten().map(|item| assemble_item(item)).collect();
    file::append_lines(&opts.out_path, &lines)?;
    log::info!("Wrote {} records to {}", lines.len(), opts.out_path.display());

    Ok(RunSummary { out_path: opts.out_path.clone(), pages: pages.len(), items: lines.len() })
}
