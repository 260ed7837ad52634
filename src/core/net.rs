// src/core/net.rs
// Blocking fetch capabilities; the crawler only sees the traits.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::CrawlOptions;
use crate::error::{CrawlError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Final HTML of a page after any client-side scripts ran.
pub trait RenderFetch {
    fn rendered_html(&self, url: &str) -> Result<String>;
}

/// Plain GET; non-2xx statuses are returned, not raised.
pub trait RawFetch {
    fn raw_get(&self, url: &str) -> Result<RawResponse>;
}

/// `reqwest` implementation of both capabilities. Rendering is a plain GET,
/// which is enough for pages that ship their listing server-side.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    pub fn from_options(opts: &CrawlOptions) -> Result<Self> {
        Self::new(&opts.user_agent, opts.fetch_timeout)
    }
}

impl RawFetch for HttpFetcher {
    fn raw_get(&self, url: &str) -> Result<RawResponse> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();
        Ok(RawResponse { status, body })
    }
}

impl RenderFetch for HttpFetcher {
    fn rendered_html(&self, url: &str) -> Result<String> {
        let resp = self.raw_get(url)?;
        if !resp.is_success() {
            return Err(CrawlError::Status { status: resp.status, url: url.to_string() });
        }
        Ok(resp.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_any_2xx() {
        let ok = |status| RawResponse { status, body: Vec::new() }.is_success();
        assert!(ok(200));
        assert!(ok(204));
        assert!(!ok(301));
        assert!(!ok(404));
        assert!(!ok(500));
    }

    #[test]
    fn text_is_lossy_utf8() {
        let r = RawResponse { status: 200, body: b"caf\xc3\xa9 \xff".to_vec() };
        assert_eq!(r.text(), "café \u{fffd}");
    }

    #[test]
    fn builds_client_from_defaults() {
        assert!(HttpFetcher::from_options(&CrawlOptions::default()).is_ok());
    }
}
