// src/cli.rs
use std::{env, time::Instant};

use log::LevelFilter;

use crate::{
    config::RunOptions,
    core::HttpFetcher,
    error::{Error, Result},
    progress::Progress,
    runner,
};

/// Prints one line per page, like the old script did.
#[derive(Default)]
pub struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Getting {total} listing pages...");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn page_done(&mut self, _index: usize, url: &str, items: usize) {
        self.done += 1;
        println!("[{}/{}] {url}: {items} items", self.done, self.total);
    }

    fn page_failed(&mut self, _index: usize, url: &str) {
        eprintln!("Failed: {url}");
    }
}

/// The tool takes no arguments.
pub fn check_args<I: IntoIterator<Item = String>>(args: I) -> Result<()> {
    match args.into_iter().next() {
        None => Ok(()),
        Some(a) => Err(Error::Usage(format!(
            "Unknown arg: {a} (scrape_uniques takes no arguments and writes Uniques.txt)"
        ))),
    }
}

pub fn run() -> Result<()> {
    check_args(env::args().skip(1))?;

    if let Err(e) = crate::log::init(LevelFilter::Debug) {
        eprintln!("Warning: debug log disabled: {e}");
    }

    let started = Instant::now();
    let fetcher = HttpFetcher::new();
    let mut progress = CliProgress::default();
    let summary = runner::run(&RunOptions::default(), &fetcher, &mut progress)?;

    println!(
        "Wrote {} items from {} pages to {}",
        summary.items,
        summary.pages,
        summary.out_path.display()
    );
    println!("Program execution time: {:?}", started.elapsed());
    Ok(())
}
