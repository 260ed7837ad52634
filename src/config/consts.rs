// src/config/consts.rs

// Source
pub const SOURCE_NAME: &str = "bis";
pub const HOST: &str = "https://www.bis.org";
pub const LISTING_PATH: &str = "/research/index.htm?bis_fsi_publs_page=";

// Only publications strictly after this date qualify
pub const START_YEAR: i32 = 2019;
pub const START_MONTH: u32 = 1;
pub const START_DAY: u32 = 1;

// Pagination
pub const MAX_PAGES: u32 = 3;
pub const PAGE_DELAY_SECS: u64 = 5; // be polite

// Net
pub const FETCH_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("bis_scrape/", env!("CARGO_PKG_VERSION"));
