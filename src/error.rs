// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: u16 },

    #[error("request failed: {url}: {message}")]
    Transport { url: String, message: String },

    #[error("unexpected page layout at {url}: {reason}")]
    Structure { url: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("worker pool ended before all pages were returned")]
    Pool,

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
