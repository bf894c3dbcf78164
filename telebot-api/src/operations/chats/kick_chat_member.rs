//! kickChatMember operation

use serde::Serialize;

use crate::{BotOperation, ChatId, Method};

/// kickChatMember operation
pub struct KickChatMemberOperation;

/// Request for kickChatMember operation
#[derive(Debug, Clone, Serialize)]
pub struct KickChatMemberRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl BotOperation for KickChatMemberOperation {
    type Request = KickChatMemberRequest;
    type Response = bool;

    const METHOD: Method = Method::KickChatMember;

    fn build_params(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![
            ("chat_id", request.chat_id.to_string()),
            ("user_id", request.user_id.to_string()),
        ]
    }
}
