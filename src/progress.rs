// src/progress.rs
/// Lightweight progress reporting for the scrape.
/// The CLI implements this to print status lines; tests use `NullProgress`.
pub trait Progress {
    /// Called once the page list is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One listing page was fetched and read.
    fn page_done(&mut self, _index: usize, _url: &str, _items: usize) {}

    fn page_failed(&mut self, _index: usize, _url: &str) {}

    /// Called at the end of the parallel phase, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
