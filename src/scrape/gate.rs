// src/scrape/gate.rs
use crate::document::Document;

/// Why the gate refused a document. Both end the crawl.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateStop {
    /// Reached the newest document of the previous run.
    CaughtUp,
    /// Already holding the configured maximum.
    LimitReached(usize),
}

/// Run-scoped, append-only result list.
#[derive(Debug, Default)]
pub struct Accumulator {
    docs: Vec<Document>,
    max: Option<usize>,
    last_hash: Option<String>,
}

impl Accumulator {
    pub fn new(max: Option<usize>, last_document: Option<&Document>) -> Self {
        Self {
            docs: Vec::new(),
            max,
            last_hash: last_document.map(Document::hash),
        }
    }

    /// Dedup is checked before the limit.
    pub fn submit(&mut self, doc: Document) -> Result<&Document, GateStop> {
        if self.last_hash.as_deref() == Some(doc.hash().as_str()) {
            return Err(GateStop::CaughtUp);
        }
        if let Some(max) = self.max {
            if self.docs.len() >= max {
                return Err(GateStop::LimitReached(max));
            }
        }
        let at = self.docs.len();
        self.docs.push(doc);
        Ok(&self.docs[at])
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn into_inner(self) -> Vec<Document> {
        self.docs
    }
}
