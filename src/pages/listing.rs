// src/pages/listing.rs
//! Reader for the research publications listing.
//!
//! Purpose:
//! - Parse the rendered HTML of `/research/index.htm?bis_fsi_publs_page=N`.
//! - The listing is `table.documentList`; each `tr` carries
//!   `div.title > a` (title + relative link), `div.pdfdocinfo`
//!   ("Kind | number | pages") and `td.item_date` ("05 Mar 2024").
//!
//! Non-Responsibilities:
//! - No fetching, no date filtering, no detail pages. The crawler decides
//!   what to do with each row.

use chrono::NaiveDate;
use scraper::{ElementRef, Html};

use crate::core::html::{attr, first, first_in_doc, sel, text_trim};
use crate::core::sanitize::{doc_type, normalize_text};
use crate::error::{CrawlError, Result};

pub const DATE_FORMAT: &str = "%d %b %Y";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub title: String,
    pub doc_type: String,
    /// Link as written in the page; usually host-relative.
    pub source: String,
    pub pub_date: NaiveDate,
}

/// `None` when the page has no listing table (past the last page, or the
/// layout changed). Rows without a title link are layout rows and are left
/// out; a row with a title but no usable link or date comes back as `Err`.
pub fn parse_listing(html_doc: &str) -> Option<Vec<Result<ListingRow>>> {
    let doc = Html::parse_document(html_doc);
    let table = first_in_doc(&doc, &sel("table.documentList"))?;

    let row_sel = sel("tr");
    let title_sel = sel("div.title a");

    let mut rows = Vec::new();
    for tr in table.select(&row_sel) {
        let Some(anchor) = first(tr, &title_sel) else { continue };
        let title = normalize_text(&text_trim(anchor));
        if title.is_empty() {
            continue;
        }
        rows.push(read_row(tr, anchor, title));
    }
    Some(rows)
}

fn read_row(tr: ElementRef<'_>, anchor: ElementRef<'_>, title: String) -> Result<ListingRow> {
    let info = first(tr, &sel("div.pdfdocinfo")).map(text_trim).unwrap_or_default();
    let source = attr(anchor, "href")
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .ok_or(CrawlError::Markup("title link without href"))?;
    let date_cell = first(tr, &sel("td.item_date"))
        .ok_or(CrawlError::Markup("row without item_date"))?;

    Ok(ListingRow {
        title,
        doc_type: doc_type(&info),
        source,
        pub_date: parse_pub_date(&text_trim(date_cell))?,
    })
}

/// "05 Mar 2024" → 2024-03-05. Inner whitespace may be any run.
pub fn parse_pub_date(raw: &str) -> Result<NaiveDate> {
    let cleaned = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveDate::parse_from_str(&cleaned, DATE_FORMAT)
        .map_err(|source| CrawlError::Date { raw: raw.to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const PAGE: &str = r#"
        <html><body>
          <table class="documentList">
            <thead><tr><th>Date</th><th>Title</th></tr></thead>
            <tr>
              <td class="item_date">05 Mar 2024</td>
              <td>
                <div class="title"><a href="/publ/work1170.htm">Monetary policy:  a “new” view</a></div>
                <div class="pdfdocinfo">BIS Working Papers&nbsp;| No 1170 | 40 pages</div>
              </td>
            </tr>
            <tr>
              <td class="item_date">
                 28 Feb 2024
              </td>
              <td>
                <div class="title"><a href="/publ/bppdf/bispap140.pdf">Annual review</a></div>
                <div class="pdfdocinfo">BIS Papers</div>
              </td>
            </tr>
          </table>
        </body></html>
    "#;

    #[test]
    fn parses_rows_in_order() {
        let rows = parse_listing(PAGE).unwrap();
        assert_eq!(rows.len(), 2);

        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.title, "Monetary policy_ a _new_ view");
        assert_eq!(first.doc_type, "BIS Working Papers");
        assert_eq!(first.source, "/publ/work1170.htm");
        assert_eq!(first.pub_date, ymd(2024, 3, 5));

        let second = rows[1].as_ref().unwrap();
        assert_eq!(second.doc_type, "BIS Papers");
        assert_eq!(second.source, "/publ/bppdf/bispap140.pdf");
        assert_eq!(second.pub_date, ymd(2024, 2, 28));
    }

    #[test]
    fn missing_table_is_none() {
        assert!(parse_listing("<html><body><p>No results</p></body></html>").is_none());
        assert!(parse_listing(r#"<table class="other"><tr><td>x</td></tr></table>"#).is_none());
    }

    #[test]
    fn bad_date_is_row_error() {
        let page = r#"<table class="documentList"><tr>
            <td class="item_date">March 2024</td>
            <td><div class="title"><a href="/x.htm">X</a></div></td>
        </tr></table>"#;
        let rows = parse_listing(page).unwrap();
        assert!(matches!(rows[0], Err(CrawlError::Date { .. })));
    }

    #[test]
    fn row_without_date_cell_is_row_error() {
        let page = r#"<table class="documentList"><tr>
            <td><div class="title"><a href="/x.htm">X</a></div></td>
        </tr></table>"#;
        let rows = parse_listing(page).unwrap();
        assert!(matches!(rows[0], Err(CrawlError::Markup(_))));
    }

    #[test]
    fn date_format_variants() {
        assert_eq!(parse_pub_date("01 Jan 2019").unwrap(), ymd(2019, 1, 1));
        assert_eq!(parse_pub_date(" 9  Dec\n2023 ").unwrap(), ymd(2023, 12, 9));
        assert!(parse_pub_date("2023-12-09").is_err());
        assert!(parse_pub_date("").is_err());
    }
}
