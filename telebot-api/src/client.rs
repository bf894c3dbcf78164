use std::fmt;

use http_client::HttpClient;

use crate::operations::bot::{GetMeOperation, GetMeRequest};
use crate::operations::chats::{
    GetChatMembersCountOperation, GetChatMembersCountRequest, GetChatOperation, GetChatRequest,
    KickChatMemberOperation, KickChatMemberRequest, LeaveChatOperation, LeaveChatRequest,
    UnbanChatMemberOperation, UnbanChatMemberRequest,
};
use crate::operations::updates::{GetUpdatesOperation, GetUpdatesRequest};
use crate::{BotOperation, Chat, ChatId, Result, Update, User};

/// A client for executing Bot API operations with a bot token
///
/// This client bridges the gap between the stateless operation definitions
/// and actual network requests to the Bot API. It uses the internal
/// `http-client` crate for the underlying HTTP communication.
///
/// ```rust,no_run
/// use telebot_api::ApiClient;
///
/// let client = ApiClient::new("123456:bot-token");
/// let me = client.get_me()?;
/// println!("running as @{}", me.username.unwrap_or_default());
/// # Ok::<(), telebot_api::ApiError>(())
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    token: String,
}

impl ApiClient {
    /// Create a new client for the given bot token
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_http_client(token, HttpClient::new())
    }

    /// Create a client with a custom HTTP client
    ///
    /// Most applications should use [`ApiClient::new`] instead. This
    /// constructor exists for custom transport configuration and for tests
    /// that point the client at a local mock server.
    pub fn with_http_client(token: impl Into<String>, http: HttpClient) -> Self {
        Self {
            http,
            token: token.into(),
        }
    }

    /// Execute a Bot API operation
    ///
    /// Builds the request parameters, sends them to the method's endpoint,
    /// and parses the `result` payload into the operation's response type.
    pub fn execute<Op: BotOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let params = Op::build_params(request);

        let value = self
            .http
            .call(&self.token, Op::METHOD.name(), Op::METHOD.verb(), &params)?;

        Op::parse_response(&value)
    }

    /// Get basic information about the bot; usable as a ping
    pub fn get_me(&self) -> Result<User> {
        self.execute::<GetMeOperation>(&GetMeRequest)
    }

    /// Fetch pending updates, ordered by ascending `update_id`
    ///
    /// With an offset, only updates with an identifier greater than or
    /// equal to it are returned. The limit caps the batch size (1-100);
    /// an out-of-range limit fails before any request is sent.
    pub fn get_updates(&self, offset: Option<i64>, limit: Option<u8>) -> Result<Vec<Update>> {
        let request = GetUpdatesRequest { offset, limit };
        request.validate()?;
        self.execute::<GetUpdatesOperation>(&request)
    }

    /// Get up-to-date information about a chat
    pub fn get_chat(&self, chat_id: impl Into<ChatId>) -> Result<Chat> {
        self.execute::<GetChatOperation>(&GetChatRequest {
            chat_id: chat_id.into(),
        })
    }

    /// Make the bot leave a group or channel
    pub fn leave_chat(&self, chat_id: impl Into<ChatId>) -> Result<bool> {
        self.execute::<LeaveChatOperation>(&LeaveChatRequest {
            chat_id: chat_id.into(),
        })
    }

    /// Get the number of members in a chat
    pub fn get_chat_members_count(&self, chat_id: impl Into<ChatId>) -> Result<i64> {
        self.execute::<GetChatMembersCountOperation>(&GetChatMembersCountRequest {
            chat_id: chat_id.into(),
        })
    }

    /// Remove a user from a group or supergroup
    pub fn kick_chat_member(&self, chat_id: impl Into<ChatId>, user_id: i64) -> Result<bool> {
        self.execute::<KickChatMemberOperation>(&KickChatMemberRequest {
            chat_id: chat_id.into(),
            user_id,
        })
    }

    /// Lift a previous kick in a supergroup
    pub fn unban_chat_member(&self, chat_id: impl Into<ChatId>, user_id: i64) -> Result<bool> {
        self.execute::<UnbanChatMemberOperation>(&UnbanChatMemberRequest {
            chat_id: chat_id.into(),
            user_id,
        })
    }
}

impl fmt::Debug for ApiClient {
    // the token never appears in debug output
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let _client = ApiClient::new("123:token");
    }

    #[test]
    fn test_debug_hides_token() {
        let client = ApiClient::new("123:secret-token");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn test_get_updates_rejects_invalid_limit() {
        let client = ApiClient::new("123:token");

        let result = client.get_updates(None, Some(0));
        assert!(matches!(
            result.unwrap_err(),
            crate::ApiError::InvalidParameter(_)
        ));
    }
}
