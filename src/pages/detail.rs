// src/pages/detail.rs
//! Reader for a publication's own page.
//!
//! - `a.pdftitle_link` points at the document itself (often the PDF).
//! - `div.authorline` holds the byline.
//! - `div#cmsContent` holds the abstract, split over `p`/`a` and nested divs.

use scraper::Html;

use crate::core::html::{attr, container_text, first_in_doc, sel};
use crate::core::sanitize::non_empty;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enrichment {
    pub abstract_: Option<String>,
    pub author: Option<String>,
    /// As written in the page; may be host-relative.
    pub canonical_link: Option<String>,
}

pub fn parse_detail(html_doc: &str) -> Enrichment {
    let doc = Html::parse_document(html_doc);

    let canonical_link = first_in_doc(&doc, &sel("a.pdftitle_link"))
        .and_then(|a| attr(a, "href"))
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty());
    let author = first_in_doc(&doc, &sel("div.authorline"))
        .and_then(|div| non_empty(&container_text(div)));
    let abstract_ = first_in_doc(&doc, &sel("div#cmsContent"))
        .and_then(|div| non_empty(&container_text(div)));

    Enrichment { abstract_, author, canonical_link }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_three_blocks() {
        let page = r#"
            <html><body>
              <h1><a class="pdftitle_link" href="/publ/work1170.pdf">Monetary policy</a></h1>
              <div class="authorline"><p>by <a href="/author/jane.htm">Jane Roe</a> and John Doe</p></div>
              <div id="cmsContent">
                <p>Central banks&nbsp;face
                   a trade-off.</p>
                <div><p>JEL: E52 / E58</p></div>
                <table><tr><td>ignored</td></tr></table>
              </div>
            </body></html>
        "#;
        let e = parse_detail(page);
        assert_eq!(e.canonical_link.as_deref(), Some("/publ/work1170.pdf"));
        assert_eq!(e.author.as_deref(), Some("by Jane Roe and John Doe"));
        assert_eq!(e.abstract_.as_deref(), Some("Central banks face a trade-off. JEL_ E52 _ E58"));
    }

    #[test]
    fn absent_blocks_are_none() {
        let e = parse_detail("<html><body><p>Nothing here</p></body></html>");
        assert_eq!(e, Enrichment::default());
    }

    #[test]
    fn empty_blocks_are_none() {
        let page = r#"<div class="authorline"><span>x</span></div><div id="cmsContent"><p> </p></div>
                      <a class="pdftitle_link" href="">doc</a>"#;
        let e = parse_detail(page);
        assert_eq!(e, Enrichment::default());
    }
}
