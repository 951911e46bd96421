//! In-memory `VocusApi` double that counts upstream calls.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::clients::vocus::VocusApi;
use crate::clients::wire::{HotContentWire, SearchWire};
use crate::core::error::VocusError;

pub struct StubApi {
    hot: Result<Vec<HotContentWire>, VocusError>,
    search: Result<SearchWire, VocusError>,
    hang: bool,
    calls: AtomicUsize,
    last_title: std::sync::Mutex<Option<String>>,
}

impl StubApi {
    fn base() -> Self {
        Self {
            hot: Ok(Vec::new()),
            search: Ok(SearchWire::default()),
            hang: false,
            calls: AtomicUsize::new(0),
            last_title: std::sync::Mutex::new(None),
        }
    }

    pub fn with_hot(hot: Result<Vec<HotContentWire>, VocusError>) -> Self {
        Self { hot, ..Self::base() }
    }

    pub fn with_search(search: Result<SearchWire, VocusError>) -> Self {
        Self { search, ..Self::base() }
    }

    /// Never answers; only cancellation ends a call.
    pub fn hanging() -> Self {
        Self { hang: true, ..Self::base() }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_title(&self) -> Option<String> {
        self.last_title.lock().ok().and_then(|t| t.clone())
    }

    async fn maybe_hang(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hang {
            std::future::pending::<()>().await;
        }
    }
}

#[async_trait]
impl VocusApi for StubApi {
    async fn hot_contents(&self) -> Result<Vec<HotContentWire>, VocusError> {
        self.maybe_hang().await;
        self.hot.clone()
    }

    async fn search(&self, title: &str) -> Result<SearchWire, VocusError> {
        self.maybe_hang().await;
        if let Ok(mut last) = self.last_title.lock() {
            *last = Some(title.to_string());
        }
        self.search.clone()
    }
}
