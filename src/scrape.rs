// src/scrape.rs
use std::{
    thread, time::Duration,
    sync::{ mpsc, atomic::{ AtomicBool, AtomicUsize, Ordering }},
};

use crate::{
    config::consts::{ JITTER_MS, REQUEST_PAUSE_MS },
    core::net::{ fetch_document, Fetch },
    error::{ Error, Result },
    progress::Progress,
    specs::{ listing, WikiVariants },
};

/// Items of one listing page; each item is its ordered fragment list.
pub type PageItems = Vec<Vec<String>>;

/// Fetch one listing page and read its item rows.
pub fn scrape_listing(fetcher: &dyn Fetch, base_url: &str, url: &str) -> Result<PageItems> {
    let doc = fetch_document(fetcher, url)?;
    let variants = WikiVariants::new(fetcher, base_url);
    listing::extract_items(&doc, &variants)
}

/// Read every listing page on `workers` threads.
///
/// The result lines up with `urls`. The first failure stops workers from
/// taking new pages; pages already in flight finish, then the error is returned.
pub fn collect_catalog(
    urls: &[String],
    fetcher: &dyn Fetch,
    base_url: &str,
    workers: usize,
    progress: &mut dyn Progress,
) -> Result<Vec<PageItems>> {
    progress.begin(urls.len());

    let counter = AtomicUsize::new(0);
    let abort = AtomicBool::new(false);
    let (res_tx, res_rx) = mpsc::channel::<(usize, Result<PageItems>)>();
    let workers = workers.min(urls.len()).max(1);

    let mut pages: Vec<Option<PageItems>> = urls.iter().map(|_| None).collect();
    let mut first_err: Option<Error> = None;

    thread::scope(|s| {
        // Spawn workers
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (counter, abort) = (&counter, &abort);
            s.spawn(move || {
                loop {
                    if abort.load(Ordering::Relaxed) {
                        break;
                    }
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    if i >= urls.len() {
                        break;
                    }
                    let result = scrape_listing(fetcher, base_url, &urls[i]);
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    let jitter = (i as u64) % JITTER_MS;
                    thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        // Aggregate results
        for (i, result) in res_rx.iter() {
            match result {
                Ok(items) => {
                    log::info!("Page {}: {} items from {}", i, items.len(), urls[i]);
                    progress.page_done(i, &urls[i], items.len());
                    pages[i] = Some(items);
                }
                Err(e) => {
                    log::error!("Page {}: {}: {e}", i, urls[i]);
                    progress.page_failed(i, &urls[i]);
                    abort.store(true, Ordering::Relaxed);
                    first_err.get_or_insert(e);
                }
            }
        }
    });

    progress.finish();

    if let Some(e) = first_err {
        return Err(e);
    }
    pages.into_iter().collect::<Option<Vec<_>>>().ok_or(Error::Pool)
}
