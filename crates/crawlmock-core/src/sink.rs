//! Where accepted records go once validated.

use std::sync::{Mutex, PoisonError};

use crate::schema::{CrawlError, CreatorResult};

/// Side-effect target for records that passed validation.
///
/// Implementations are shared across concurrent requests.
pub trait ObservationSink: Send + Sync {
    fn creator_received(&self, creator: &CreatorResult);
    fn crawl_error_received(&self, error: &CrawlError);
}

/// Emits one structured `tracing` event per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ObservationSink for TracingSink {
    fn creator_received(&self, creator: &CreatorResult) {
        tracing::info!(
            creator_id = creator.id.as_deref().unwrap_or("-"),
            unique_id = creator.unique_id.as_deref().unwrap_or("-"),
            nickname = creator.nickname.as_deref().unwrap_or("-"),
            has_profile = creator
                .profiles
                .as_ref()
                .is_some_and(|p| p.creator_profile.is_some()),
            "received creator"
        );
    }

    fn crawl_error_received(&self, error: &CrawlError) {
        let data = serde_json::Value::Object(error.data.clone());
        tracing::error!(
            code = %error.code,
            kind = %error.kind(),
            error_message = %error.message,
            data = %data,
            "error crawling creator"
        );
    }
}

/// Keeps every record in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    creators: Mutex<Vec<CreatorResult>>,
    crawl_errors: Mutex<Vec<CrawlError>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn creators(&self) -> Vec<CreatorResult> {
        self.creators
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn crawl_errors(&self) -> Vec<CrawlError> {
        self.crawl_errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ObservationSink for RecordingSink {
    fn creator_received(&self, creator: &CreatorResult) {
        self.creators
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(creator.clone());
    }

    fn crawl_error_received(&self, error: &CrawlError) {
        self.crawl_errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error.clone());
    }
}
