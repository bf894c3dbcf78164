use http_client::Verb;

/// Represents the Bot API methods supported by this crate
///
/// Each method maps to one endpoint under `/bot{token}/` and declares the
/// HTTP verb it is issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// getMe - Basic information about the bot; usable as a ping
    GetMe,

    /// getUpdates - Pending inbound updates, optionally from an offset
    GetUpdates,

    /// getChat - Up-to-date information about a chat
    GetChat,

    /// leaveChat - Make the bot leave a group or channel
    LeaveChat,

    /// getChatMembersCount - Number of members in a chat
    GetChatMembersCount,

    /// kickChatMember - Remove a user from a group or supergroup
    KickChatMember,

    /// unbanChatMember - Lift a previous kick in a supergroup
    UnbanChatMember,
}

impl Method {
    /// Get the wire name of this method as used in the request URL
    pub fn name(&self) -> &'static str {
        match self {
            Method::GetMe => "getMe",
            Method::GetUpdates => "getUpdates",
            Method::GetChat => "getChat",
            Method::LeaveChat => "leaveChat",
            Method::GetChatMembersCount => "getChatMembersCount",
            Method::KickChatMember => "kickChatMember",
            Method::UnbanChatMember => "unbanChatMember",
        }
    }

    /// Get the HTTP verb this method is issued with
    ///
    /// `getUpdates` is a GET with query parameters; every other method
    /// posts its parameters as a form body.
    pub fn verb(&self) -> Verb {
        match self {
            Method::GetUpdates => Verb::Get,
            _ => Verb::Post,
        }
    }
}
