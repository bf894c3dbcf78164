//! getUpdates operation

use serde::Serialize;

use crate::{ApiError, BotOperation, Method, Update};

/// getUpdates operation
///
/// Fetches pending updates, ordered by ascending `update_id`. With an
/// offset, the service returns only updates with an identifier greater
/// than or equal to it; the limit caps the batch size at 1 to 100 entries.
pub struct GetUpdatesOperation;

/// Request for getUpdates operation
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GetUpdatesRequest {
    /// Identifier of the first update to be returned
    pub offset: Option<i64>,
    /// Maximum number of updates to retrieve (1-100)
    pub limit: Option<u8>,
}

impl GetUpdatesRequest {
    /// Smallest accepted batch limit
    pub const MIN_LIMIT: u8 = 1;
    /// Largest accepted batch limit
    pub const MAX_LIMIT: u8 = 100;

    /// Check the request parameters before any network traffic
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(limit) = self.limit {
            if !(Self::MIN_LIMIT..=Self::MAX_LIMIT).contains(&limit) {
                return Err(ApiError::InvalidParameter(format!(
                    "limit must be between {} and {}, got {}",
                    Self::MIN_LIMIT,
                    Self::MAX_LIMIT,
                    limit
                )));
            }
        }
        Ok(())
    }
}

impl BotOperation for GetUpdatesOperation {
    type Request = GetUpdatesRequest;
    type Response = Vec<Update>;

    const METHOD: Method = Method::GetUpdates;

    fn build_params(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(offset) = request.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(limit) = request.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}
