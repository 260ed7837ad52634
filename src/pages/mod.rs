// src/pages/mod.rs
//! # Page readers
//!
//! Page-specific readers for bis.org. Each reader focuses on a single page kind
//! and encodes *where the ground truth lives in the HTML* and *how to extract
//! it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already fetched pages.
//! - **Selector choice** for the one fixed layout the site uses.
//! - **Text normalization** of every extracted free-text field, so callers
//!   only ever see filename-safe strings.
//!
//! ## What does **not** live here
//! - Fetching, pagination, date filtering, dedup and limits. Those belong to
//!   `scrape::crawl`.
//!
//! ## Typical call chain
//! ```text
//! Crawler::run → fetch listing page → pages::listing::parse_listing
//!              ↘ per row → fetch detail page → pages::detail::parse_detail
//! ```
//!
//! ## Testing notes
//! Readers are tested offline against small inline HTML snippets that follow the
//! live layout.
pub mod detail;
pub mod listing;

pub use detail::{parse_detail, Enrichment};
pub use listing::{parse_listing, parse_pub_date, ListingRow};
