// src/scrape/crawl.rs
use std::thread;

use url::Url;

use crate::{
    config::CrawlOptions,
    core::{RawFetch, RenderFetch},
    document::{Document, KEY_AUTHOR, KEY_DOC_TYPE},
    error::{CrawlError, Result},
    progress::Progress,
    pages::{parse_detail, parse_listing, Enrichment, ListingRow},
};

use super::gate::{Accumulator, GateStop};

/// What a page (or the whole crawl) ended with.
#[derive(Debug)]
pub enum Flow {
    /// Keep paginating. Only a page returns this, never a whole crawl.
    Continue,
    /// Every page up to `max_pages` was read.
    StopPageLimit,
    /// No listing table, or a row at/before the start date.
    StopExhausted,
    /// Met the newest document of the previous run.
    StopCaughtUp,
    StopLimitReached,
    StopError(CrawlError),
}

impl Flow {
    pub fn is_continue(&self) -> bool {
        matches!(self, Flow::Continue)
    }
}

/// Result of one crawl: what was collected and why it ended.
#[derive(Debug)]
pub struct Crawl {
    pub documents: Vec<Document>,
    pub end: Flow,
}

pub struct Crawler<'a> {
    renderer: &'a dyn RenderFetch,
    fetcher: &'a dyn RawFetch,
    options: CrawlOptions,
    progress: &'a mut dyn Progress,
}

impl<'a> Crawler<'a> {
    pub fn new(
        renderer: &'a dyn RenderFetch,
        fetcher: &'a dyn RawFetch,
        options: CrawlOptions,
        progress: &'a mut dyn Progress,
    ) -> Self {
        progress.debug("Parser init completed");
        Self { renderer, fetcher, options, progress }
    }

    pub fn options(&self) -> &CrawlOptions {
        &self.options
    }

    /// Collected documents in discovery order. Never fails; faults end the
    /// crawl early and are reported through the progress sink.
    pub fn run(&mut self) -> Vec<Document> {
        self.crawl().documents
    }

    pub fn crawl(&mut self) -> Crawl {
        self.progress.debug(&format!("Parse process start: {}", self.options.host));
        let mut acc = Accumulator::new(
            self.options.max_documents,
            self.options.last_document.as_ref(),
        );

        let end = self.paginate(&mut acc);
        match &end {
            Flow::Continue | Flow::StopPageLimit => self.progress.debug("Page limit reached"),
            Flow::StopExhausted => self.progress.debug("No more qualifying documents"),
            Flow::StopCaughtUp => self.progress.info("Reached a document from the previous run"),
            Flow::StopLimitReached => self.progress.info(&format!(
                "Max count documents reached ({})",
                self.options.max_documents.unwrap_or_default()
            )),
            Flow::StopError(e) => self.progress.error(&format!("Parsing stopped with error: {e}")),
        }

        let documents = acc.into_inner();
        self.progress.finish(documents.len());
        Crawl { documents, end }
    }

    fn paginate(&mut self, acc: &mut Accumulator) -> Flow {
        for page in 1..=self.options.max_pages {
            if page > 1 && !self.options.page_delay.is_zero() {
                thread::sleep(self.options.page_delay); // be polite
            }
            let flow = self.crawl_page(page, acc);
            if !flow.is_continue() {
                return flow;
            }
        }
        Flow::StopPageLimit
    }

    fn crawl_page(&mut self, page: u32, acc: &mut Accumulator) -> Flow {
        let url = self.options.page_url(page);
        self.progress.page_started(page, &url);

        // Status comes from the plain fetch, content from the renderer.
        let resp = match self.fetcher.raw_get(&url) {
            Ok(resp) => resp,
            Err(e) => return Flow::StopError(e),
        };
        if !resp.is_success() {
            return Flow::StopError(CrawlError::Status { status: resp.status, url });
        }
        match self.renderer.rendered_html(&url) {
            Ok(html) => self.extract_page(&html, acc),
            Err(e) => Flow::StopError(e),
        }
    }

    /// Walk the rows of one rendered listing page into `acc`.
    pub fn extract_page(&mut self, html: &str, acc: &mut Accumulator) -> Flow {
        let Some(rows) = parse_listing(html) else {
            self.progress.debug("No listing table on page");
            return Flow::StopExhausted;
        };

        for row in rows {
            let row = match row {
                Ok(row) => row,
                Err(e) => return Flow::StopError(e),
            };
            self.progress.debug(&format!("Document type: {} | title: {}", row.doc_type, row.title));

            // Listing is newest first; nothing after this row qualifies.
            if row.pub_date <= self.options.start_date {
                return Flow::StopExhausted;
            }

            let doc = match self.build_document(row) {
                Ok(doc) => doc,
                Err(e) => return Flow::StopError(e),
            };
            match acc.submit(doc) {
                Ok(doc) => self.progress.document_added(doc),
                Err(GateStop::CaughtUp) => return Flow::StopCaughtUp,
                Err(GateStop::LimitReached(_)) => return Flow::StopLimitReached,
            }
        }
        Flow::Continue
    }

    fn build_document(&mut self, row: ListingRow) -> Result<Document> {
        let web_link = join_link(&self.options.host, &row.source)?;
        let mut doc = Document::scraped(row.title, web_link, row.pub_date);
        if !row.doc_type.is_empty() {
            doc.other_data.insert(KEY_DOC_TYPE.to_string(), row.doc_type);
        }

        if row.source.contains(".pdf") {
            return Ok(doc);
        }
        match self.enrich(&doc.web_link) {
            Ok(extra) => {
                doc.abstract_ = extra.abstract_;
                if let Some(author) = extra.author {
                    doc.other_data.insert(KEY_AUTHOR.to_string(), author);
                }
                match extra.canonical_link {
                    Some(link) => doc.web_link = link,
                    None => self
                        .progress
                        .debug(&format!("No document link found for {}", doc.web_link)),
                }
            }
            // Keep the partial record.
            Err(e) => self
                .progress
                .error(&format!("Detail page {} failed: {e}", doc.web_link)),
        }
        Ok(doc)
    }

    /// Abstract, author and canonical (absolute) link from a detail page.
    pub fn enrich(&self, web_link: &str) -> Result<Enrichment> {
        let resp = self.fetcher.raw_get(web_link)?;
        if !resp.is_success() {
            return Err(CrawlError::Status { status: resp.status, url: web_link.to_string() });
        }
        let mut extra = parse_detail(&resp.text());
        extra.canonical_link = extra
            .canonical_link
            .map(|link| join_link(&self.options.host, &link))
            .transpose()?;
        Ok(extra)
    }
}

/// Resolve a page link against the site host; absolute links pass through.
/// Root-relative links keep any path prefix of `host`, matching how listing
/// page URLs are built.
pub fn join_link(host: &str, link: &str) -> Result<String> {
    let base = Url::parse(&format!("{}/", host.trim_end_matches('/')))?;
    if let Ok(abs) = Url::parse(link) {
        return Ok(abs.to_string());
    }
    Ok(base.join(link.trim_start_matches('/'))?.to_string())
}
