// src/config/options.rs
use std::time::Duration;

use chrono::NaiveDate;

use super::consts::*;
use crate::document::Document;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Scheme + authority, optionally with a path prefix; no trailing slash.
    /// Listing pages and row links are both resolved under it.
    pub host: String,
    /// Appended to `host`; the page number goes last.
    pub listing_path: String,
    /// Rows dated on or before this end the crawl.
    pub start_date: NaiveDate,
    pub max_pages: u32,
    pub page_delay: Duration,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    /// Hard cap on the number of collected documents.
    pub max_documents: Option<usize>,
    /// Newest document of the previous run; the crawl stops when it reappears.
    pub last_document: Option<Document>,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            listing_path: LISTING_PATH.to_string(),
            start_date: default_start_date(),
            max_pages: MAX_PAGES,
            page_delay: Duration::from_secs(PAGE_DELAY_SECS),
            fetch_timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
            max_documents: None,
            last_document: None,
        }
    }
}

impl CrawlOptions {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = date;
        self
    }

    pub fn with_max_pages(mut self, pages: u32) -> Self {
        self.max_pages = pages;
        self
    }

    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    pub fn with_max_documents(mut self, max: usize) -> Self {
        self.max_documents = Some(max);
        self
    }

    pub fn with_last_document(mut self, doc: Document) -> Self {
        self.last_document = Some(doc);
        self
    }

    pub fn page_url(&self, page: u32) -> String {
        format!("{}{}{}", self.host, self.listing_path, page)
    }
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(START_YEAR, START_MONTH, START_DAY).unwrap_or(NaiveDate::MIN)
}
