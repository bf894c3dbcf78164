//! Fetcher seam between the polling loop and the Bot API

use telebot_api::{ApiClient, ApiError, Update};

/// Source of pending updates for the polling loop
///
/// `fetch` returns the updates with identifiers greater than or equal to
/// `offset` (all pending updates when `offset` is `None`), ordered by
/// ascending identifier. Implementations do not retry; retry policy
/// belongs to the polling loop.
pub trait UpdateSource: Send {
    fn fetch(&self, offset: Option<i64>, limit: Option<u8>) -> Result<Vec<Update>, ApiError>;
}

/// Update source backed by the Bot API `getUpdates` method
#[derive(Debug, Clone)]
pub struct ApiUpdateSource {
    client: ApiClient,
}

impl ApiUpdateSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl UpdateSource for ApiUpdateSource {
    fn fetch(&self, offset: Option<i64>, limit: Option<u8>) -> Result<Vec<Update>, ApiError> {
        self.client.get_updates(offset, limit)
    }
}
