//! # Update Manager
//!
//! The update-polling subsystem of telebot-sdk: a background worker that
//! repeatedly fetches pending updates from the Bot API, tracks delivery
//! progress, and dispatches each batch to registered observers without
//! loss or duplication.
//!
//! ## Delivery guarantees
//!
//! - The consumed offset (`last_update_id`) advances only after a poll
//!   successfully returns a non-empty batch, so a failed poll redelivers
//!   the same updates on the next tick (at-least-once, in order).
//! - The poll timer is one-shot and rearmed only after a tick fully
//!   completes: at most one fetch is in flight, and a slow or failed poll
//!   delays the next one instead of overlapping it.
//! - A failed poll is reported on the error channel and never stops the
//!   loop; polling ends only with an explicit [`UpdateManager::stop`].
//! - After `stop()` returns no further ticks run; the result of a fetch
//!   that was mid-flight is discarded and redelivered after the next
//!   start.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use telebot_api::ApiClient;
//! use telebot_update_manager::{ApiUpdateSource, PollerConfig, UpdateManager};
//! use std::time::Duration;
//!
//! let client = ApiClient::new("123456:bot-token");
//! let config = PollerConfig::default()
//!     .with_check_interval(Duration::from_secs(2))
//!     .with_batch_limit(100);
//! let manager = UpdateManager::with_config(ApiUpdateSource::new(client), config);
//!
//! manager.observe_updates(|batch| {
//!     for update in batch {
//!         println!("update {}", update.update_id);
//!     }
//! })?;
//!
//! manager.start()?;
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod manager;
pub mod source;
pub mod state;

mod worker;

// Re-export main types for convenience
pub use config::PollerConfig;
pub use dispatch::{Dispatcher, ObserverId};
pub use error::{Result, UpdateManagerError};
pub use manager::UpdateManager;
pub use source::{ApiUpdateSource, UpdateSource};
pub use state::PollState;

// Re-export commonly used types from dependencies
pub use telebot_api::{ApiError, Update};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ApiError, ApiUpdateSource, ObserverId, PollerConfig, Result, Update, UpdateManager,
        UpdateManagerError, UpdateSource,
    };
}
