//! High-level Telegram Bot API operations
//!
//! This crate provides a type-safe, trait-based API for calling Bot API
//! methods. It uses the private `http-client` crate for the low-level HTTP
//! communication and response-envelope handling.
//!
//! Each method is modelled as a stateless [`BotOperation`] with a typed
//! request and response; [`ApiClient`] executes any operation with a bot
//! token:
//!
//! ```rust,no_run
//! use telebot_api::ApiClient;
//!
//! let client = ApiClient::new("123456:bot-token");
//!
//! // Fetch up to 100 pending updates starting from update_id 7
//! let updates = client.get_updates(Some(7), Some(100))?;
//! for update in &updates {
//!     println!("got update {}", update.update_id);
//! }
//! # Ok::<(), telebot_api::ApiError>(())
//! ```
//!
//! Continuous update retrieval (polling, offset tracking, dispatch) lives
//! in the `telebot-sdk-update-manager` crate.

pub mod client;
pub mod error;
pub mod method;
pub mod operation;
pub mod operations;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use method::Method;
pub use operation::BotOperation;
pub use types::{Chat, ChatId, Update, User};
