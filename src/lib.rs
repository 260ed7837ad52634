// src/lib.rs
//! Incremental scraper for the BIS research publications listing.
//!
//! ```no_run
//! use bis_scrape::{config::CrawlOptions, progress::TracingProgress, scrape};
//!
//! let mut progress = TracingProgress::default();
//! let docs = scrape::collect_documents(CrawlOptions::default().with_max_documents(10), &mut progress)?;
//! # Ok::<(), bis_scrape::error::CrawlError>(())
//! ```

pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod pages;
pub mod progress;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;

pub use document::Document;
pub use scrape::{Crawler, Flow};
