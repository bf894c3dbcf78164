//! leaveChat operation

use serde::Serialize;

use crate::{BotOperation, ChatId, Method};

/// leaveChat operation
pub struct LeaveChatOperation;

/// Request for leaveChat operation
#[derive(Debug, Clone, Serialize)]
pub struct LeaveChatRequest {
    pub chat_id: ChatId,
}

impl BotOperation for LeaveChatOperation {
    type Request = LeaveChatRequest;
    type Response = bool;

    const METHOD: Method = Method::LeaveChat;

    fn build_params(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("chat_id", request.chat_id.to_string())]
    }
}
