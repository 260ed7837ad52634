// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Bad publication date {raw:?}: {source}")]
    Date {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Missing markup: {0}")]
    Markup(&'static str),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, CrawlError>;
