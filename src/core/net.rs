// src/core/net.rs

// Blocking page source. Everything above this file sees `fetch(url) -> Html`.

use std::io::Read;
use std::time::Duration;

use scraper::Html;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Anything that can turn a URL into a page body.
/// Shared by the worker threads, hence `Sync`.
pub trait Fetch: Sync {
    fn get(&self, url: &str) -> Result<String>;
}

/// Fetch and parse in one go. The returned tree is not `Send`; parse where you use it.
pub fn fetch_document(fetcher: &dyn Fetch, url: &str) -> Result<Html> {
    let body = fetcher.get(url)?;
    Ok(Html::parse_document(&body))
}

pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        log::debug!("GET {url}");
        let resp = match self.agent.get(url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, _)) => {
                return Err(Error::Status { url: url.to_string(), status });
            }
            Err(ureq::Error::Transport(t)) => {
                return Err(Error::Transport { url: url.to_string(), message: t.to_string() });
            }
        };

        // into_string() caps bodies at 10 MB; list pages can get close
        let mut body = String::new();
        resp.into_reader().read_to_string(&mut body)?;
        Ok(body)
    }
}

/// Resolve a wiki href against the site root. Absolute URLs pass through.
pub fn join_url(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), href.trim_start_matches('/'))
}
