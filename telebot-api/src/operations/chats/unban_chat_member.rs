//! unbanChatMember operation

use serde::Serialize;

use crate::{BotOperation, ChatId, Method};

/// unbanChatMember operation
pub struct UnbanChatMemberOperation;

/// Request for unbanChatMember operation
#[derive(Debug, Clone, Serialize)]
pub struct UnbanChatMemberRequest {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl BotOperation for UnbanChatMemberOperation {
    type Request = UnbanChatMemberRequest;
    type Response = bool;

    const METHOD: Method = Method::UnbanChatMember;

    fn build_params(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![
            ("chat_id", request.chat_id.to_string()),
            ("user_id", request.user_id.to_string()),
        ]
    }
}
