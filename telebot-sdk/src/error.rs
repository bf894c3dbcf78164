use thiserror::Error;

/// Errors surfaced by the SDK facade
#[derive(Debug, Error)]
pub enum SdkError {
    /// A Bot API call failed
    #[error(transparent)]
    Api(#[from] telebot_api::ApiError),

    /// The update polling subsystem failed
    #[error(transparent)]
    UpdateManager(#[from] telebot_update_manager::UpdateManagerError),
}
