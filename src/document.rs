// src/document.rs
//! Output record handed to the ingesting platform.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const KEY_AUTHOR: &str = "author";
pub const KEY_DOC_TYPE: &str = "doc_type";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Assigned by the platform on ingestion.
    pub id: Option<u64>,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_: Option<String>,
    pub text: Option<String>,
    pub web_link: String,
    pub local_link: Option<String>,
    pub other_data: BTreeMap<String, String>,
    pub pub_date: NaiveDate,
    pub load_date: Option<NaiveDateTime>,
}

impl Document {
    /// A freshly scraped record: no id, no body text, no load stamp.
    pub fn scraped(title: String, web_link: String, pub_date: NaiveDate) -> Self {
        Self {
            id: None,
            title,
            abstract_: None,
            text: None,
            web_link,
            local_link: None,
            other_data: BTreeMap::new(),
            pub_date,
            load_date: None,
        }
    }

    pub fn author(&self) -> Option<&str> {
        self.other_data.get(KEY_AUTHOR).map(String::as_str)
    }

    pub fn doc_type(&self) -> Option<&str> {
        self.other_data.get(KEY_DOC_TYPE).map(String::as_str)
    }

    /// Stable digest over the fields that identify a publication.
    /// Enrichment-only fields (abstract, author) are not part of it.
    pub fn hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.title.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(self.web_link.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(self.pub_date.format("%Y-%m-%d").to_string().as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// One-line summary used by the "found document" log line.
    pub fn log_line(&self) -> String {
        format!(
            "Find document | name: {} | link to web: {} | publication date: {}",
            self.title, self.web_link, self.pub_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, link: &str) -> Document {
        Document::scraped(
            title.into(),
            link.into(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        )
    }

    #[test]
    fn hash_ignores_enrichment_fields() {
        let a = doc("Paper", "https://www.bis.org/publ/work1.htm");
        let mut b = a.clone();
        b.abstract_ = Some("Longer text".into());
        b.other_data.insert(KEY_AUTHOR.into(), "Someone".into());
        assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn hash_tracks_identity_fields() {
        let a = doc("Paper", "https://www.bis.org/publ/work1.htm");
        let b = doc("Paper", "https://www.bis.org/publ/work2.htm");
        let mut c = a.clone();
        c.pub_date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert_ne!(a.hash(), b.hash());
        assert_ne!(a.hash(), c.hash());
        assert_eq!(a.hash().len(), 64);
    }

    #[test]
    fn serializes_abstract_under_plain_name() {
        let mut d = doc("Paper", "https://www.bis.org/x.htm");
        d.abstract_ = Some("Summary".into());
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["abstract"], "Summary");
        assert_eq!(v["pub_date"], "2024-03-05");
        assert!(v["id"].is_null());
    }
}
