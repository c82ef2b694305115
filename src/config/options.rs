// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// Everything a run needs to know. The binary takes no arguments, so this is
/// always `RunOptions::default()` outside of tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub index_url: String,
    pub base_url: String,
    /// List pages the index does not link; paths relative to `base_url`.
    pub extra_pages: Vec<String>,
    pub out_path: PathBuf,
    pub workers: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            index_url: INDEX_URL.to_string(),
            base_url: BASE_URL.to_string(),
            extra_pages: EXTRA_LIST_PAGES.iter().map(|p| p.to_string()).collect(),
            out_path: PathBuf::from(OUT_FILE),
            workers: WORKERS,
        }
    }
}

impl RunOptions {
    pub fn extra_page_urls(&self) -> Vec<String> {
        self.extra_pages
            .iter()
            .map(|p| crate::core::net::join_url(&self.base_url, p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_pages_resolve_against_base() {
        let opts = RunOptions {
            base_url: "http://wiki.test".into(),
            extra_pages: vec!["/List_of_unique_maps".into()],
            ..RunOptions::default()
        };
        assert_eq!(opts.extra_page_urls(), vec!["http://wiki.test/List_of_unique_maps"]);
    }

    #[test]
    fn defaults_write_uniques_txt_with_four_workers() {
        let opts = RunOptions::default();
        assert_eq!(opts.out_path, PathBuf::from("Uniques.txt"));
        assert_eq!(opts.workers, 4);
        assert_eq!(opts.extra_pages.len(), 2);
    }
}
