//! # telebot-sdk - Sync-first Telegram Bot API client
//!
//! Provides a synchronous client for the Bot API with a background
//! update-polling loop:
//!
//! ```rust,no_run
//! use telebot_sdk::TelebotClient;
//!
//! fn main() -> Result<(), telebot_sdk::SdkError> {
//!     let bot = TelebotClient::new("123456:bot-token");
//!
//!     let me = bot.get_me()?;
//!     println!("running as @{}", me.username.unwrap_or_default());
//!
//!     bot.on_updates(|batch| {
//!         for update in batch {
//!             println!("update {}", update.update_id);
//!         }
//!     })?;
//!
//!     bot.start_checking_updates()?;
//!     std::thread::park();
//!     Ok(())
//! }
//! ```
//!
//! ## Key properties
//!
//! - **Sync-first API**: direct calls run on the caller's thread; no
//!   async runtime is required anywhere.
//! - **Lossless polling**: the consumed offset advances only after a
//!   batch reaches the observers, so failed polls retry the same range
//!   and stopping mid-poll neither drops nor duplicates updates.
//! - **Failure isolation**: transient network errors surface on a
//!   dedicated error channel and never terminate the polling loop.
//!
//! ## Architecture
//!
//! ```text
//! telebot-sdk (TelebotClient facade)
//!     |
//! telebot-sdk-update-manager (polling loop, offset state, dispatch)
//!     |
//! telebot-api (typed Bot API operations)
//!     |
//! telebot-sdk-http-client (HTTP transport, response envelope)
//! ```

// Main exports
pub use client::TelebotClient;
pub use error::SdkError;

// Re-export commonly used types from the layers below
pub use telebot_api::{ApiClient, ApiError, Chat, ChatId, Update, User};
pub use telebot_update_manager::{ObserverId, PollerConfig, UpdateManager};

// Internal modules
mod client;
mod error;
