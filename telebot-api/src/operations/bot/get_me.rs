//! getMe operation

use serde::Serialize;

use crate::{BotOperation, Method, User};

/// getMe operation
///
/// Returns basic information about the bot. Cheap enough to be used as a
/// connectivity ping.
pub struct GetMeOperation;

/// Request for getMe operation; the method takes no parameters
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct GetMeRequest;

impl BotOperation for GetMeOperation {
    type Request = GetMeRequest;
    type Response = User;

    const METHOD: Method = Method::GetMe;

    fn build_params(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
