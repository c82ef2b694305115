// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod record;
pub mod specs;

pub mod cli;
pub mod file;
pub mod progress;
pub mod runner;
pub mod scrape;

pub use error::{Error, Result};
