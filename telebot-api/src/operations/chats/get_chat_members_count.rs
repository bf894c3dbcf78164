//! getChatMembersCount operation

use serde::Serialize;

use crate::{BotOperation, ChatId, Method};

/// getChatMembersCount operation
pub struct GetChatMembersCountOperation;

/// Request for getChatMembersCount operation
#[derive(Debug, Clone, Serialize)]
pub struct GetChatMembersCountRequest {
    pub chat_id: ChatId,
}

impl BotOperation for GetChatMembersCountOperation {
    type Request = GetChatMembersCountRequest;
    type Response = i64;

    const METHOD: Method = Method::GetChatMembersCount;

    fn build_params(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("chat_id", request.chat_id.to_string())]
    }
}
