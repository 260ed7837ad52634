// src/progress.rs
/// Observability sink handed to the crawler at construction.
/// Frontends implement this to surface status; the crawler never touches a
/// global logger.
pub trait Progress {
    /// A listing page is about to be fetched.
    fn page_started(&mut self, _page: u32, _url: &str) {}

    /// Document accepted into the result list.
    fn document_added(&mut self, _doc: &crate::document::Document) {}

    fn debug(&mut self, _msg: &str) {}
    fn info(&mut self, _msg: &str) {}
    fn error(&mut self, _msg: &str) {}

    /// Called once at the end, successful or not.
    fn finish(&mut self, _collected: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards everything to `tracing` under the source name.
pub struct TracingProgress {
    source: &'static str,
}

impl TracingProgress {
    pub fn new(source: &'static str) -> Self {
        Self { source }
    }
}

impl Default for TracingProgress {
    fn default() -> Self {
        Self::new(crate::config::consts::SOURCE_NAME)
    }
}

impl Progress for TracingProgress {
    fn page_started(&mut self, page: u32, url: &str) {
        tracing::info!(source = self.source, page, "Loading page: {url}");
    }

    fn document_added(&mut self, doc: &crate::document::Document) {
        tracing::info!(source = self.source, "{}", doc.log_line());
    }

    fn debug(&mut self, msg: &str) {
        tracing::debug!(source = self.source, "{msg}");
    }

    fn info(&mut self, msg: &str) {
        tracing::info!(source = self.source, "{msg}");
    }

    fn error(&mut self, msg: &str) {
        tracing::error!(source = self.source, "{msg}");
    }

    fn finish(&mut self, collected: usize) {
        tracing::info!(source = self.source, collected, "Parse process finished");
    }
}
