//! Chat management operations

pub mod get_chat;
pub mod get_chat_members_count;
pub mod kick_chat_member;
pub mod leave_chat;
pub mod unban_chat_member;

pub use get_chat::{GetChatOperation, GetChatRequest};
pub use get_chat_members_count::{GetChatMembersCountOperation, GetChatMembersCountRequest};
pub use kick_chat_member::{KickChatMemberOperation, KickChatMemberRequest};
pub use leave_chat::{LeaveChatOperation, LeaveChatRequest};
pub use unban_chat_member::{UnbanChatMemberOperation, UnbanChatMemberRequest};
