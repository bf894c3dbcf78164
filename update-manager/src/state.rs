//! Poll offset state
//!
//! `last_update_id` starts at 0, the sentinel for "nothing consumed yet".
//! It advances only after a poll successfully returns a non-empty batch,
//! so a failed poll redelivers the same range on the next tick.

use telebot_api::Update;

/// Tracks the highest update identifier consumed by the polling loop
#[derive(Debug, Clone, Default)]
pub struct PollState {
    last_update_id: i64,
}

impl PollState {
    /// Create a fresh state with nothing consumed
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the highest update consumed so far; 0 before any
    pub fn last_update_id(&self) -> i64 {
        self.last_update_id
    }

    /// Offset for the next fetch
    ///
    /// `None` until the first update is consumed, then one past the
    /// highest consumed identifier so the service returns only updates the
    /// observers have not seen.
    pub fn next_offset(&self) -> Option<i64> {
        if self.last_update_id == 0 {
            None
        } else {
            Some(self.last_update_id + 1)
        }
    }

    /// Record a successfully fetched batch
    ///
    /// The batch is ordered by ascending identifier, so its last element
    /// is the maximum. The recorded identifier never moves backwards.
    pub fn record_batch(&mut self, batch: &[Update]) {
        if let Some(last) = batch.last() {
            if last.update_id > self.last_update_id {
                self.last_update_id = last.update_id;
            }
        }
    }
}
