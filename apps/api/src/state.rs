use std::sync::Arc;

use crate::ideas::corpus::Corpus;
use crate::ideas::format::FormatMode;
use crate::ideas::render::PageTemplate;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only for the process lifetime, so
/// concurrent requests share it without locks.
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<Corpus>,
    pub page: Arc<PageTemplate>,
    /// Attribution text served verbatim at /humans.txt.
    pub humans: Arc<String>,
    pub mode: FormatMode,
}
