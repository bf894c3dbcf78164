//! getChat operation

use serde::Serialize;

use crate::{BotOperation, Chat, ChatId, Method};

/// getChat operation
pub struct GetChatOperation;

/// Request for getChat operation
#[derive(Debug, Clone, Serialize)]
pub struct GetChatRequest {
    pub chat_id: ChatId,
}

impl BotOperation for GetChatOperation {
    type Request = GetChatRequest;
    type Response = Chat;

    const METHOD: Method = Method::GetChat;

    fn build_params(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("chat_id", request.chat_id.to_string())]
    }
}
