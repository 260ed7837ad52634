// src/scrape/mod.rs
mod crawl;
pub mod gate;

pub use crawl::{join_link, Crawl, Crawler, Flow};
pub use gate::{Accumulator, GateStop};

use crate::{
    config::CrawlOptions,
    core::HttpFetcher,
    document::Document,
    error::Result,
    progress::Progress,
};

/// One crawl over HTTP with a fresh client. Only client construction can
/// fail; the crawl itself always yields a (possibly empty) list.
pub fn collect_documents(
    options: CrawlOptions,
    progress: &mut dyn Progress,
) -> Result<Vec<Document>> {
    let http = HttpFetcher::from_options(&options)?;
    Ok(Crawler::new(&http, &http, options, progress).run())
}
