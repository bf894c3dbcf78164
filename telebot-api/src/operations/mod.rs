//! Bot API operations organized by group
//!
//! This module contains the individual API operations, organized by the
//! area of the Bot API they belong to.

pub mod bot;
pub mod chats;
pub mod updates;

// Re-export commonly used operations
pub use bot::{GetMeOperation, GetMeRequest};
pub use chats::{
    GetChatMembersCountOperation, GetChatOperation, KickChatMemberOperation, LeaveChatOperation,
    UnbanChatMemberOperation,
};
pub use updates::{GetUpdatesOperation, GetUpdatesRequest};
