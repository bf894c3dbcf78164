use std::fmt;
use std::time::Duration;

use telebot_api::{ApiClient, ApiError, Chat, ChatId, Update, User};
use telebot_update_manager::{
    ApiUpdateSource, ObserverId, PollerConfig, UpdateManager,
};

use crate::error::SdkError;

/// The main entry point of the SDK
///
/// Bundles the direct Bot API surface with the background update-polling
/// loop. Direct calls like [`get_me`](Self::get_me) run synchronously on
/// the caller's thread; update checking runs on a dedicated background
/// thread and delivers batches to registered observers.
///
/// ```rust,no_run
/// use telebot_sdk::TelebotClient;
///
/// let bot = TelebotClient::new("123456:bot-token");
///
/// bot.on_updates(|batch| {
///     for update in batch {
///         println!("update {}", update.update_id);
///     }
/// })?;
/// bot.on_update_error(|error| {
///     eprintln!("poll failed: {}", error);
/// })?;
///
/// bot.start_checking_updates()?;
/// # Ok::<(), telebot_sdk::SdkError>(())
/// ```
pub struct TelebotClient {
    api: ApiClient,
    updates: UpdateManager,
}

impl TelebotClient {
    /// Create a client for the given bot token
    ///
    /// Update checking polls every second until configured otherwise.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_config(token, PollerConfig::default())
    }

    /// Create a client with a custom polling configuration
    pub fn with_config(token: impl Into<String>, config: PollerConfig) -> Self {
        Self::with_api_client(ApiClient::new(token), config)
    }

    /// Create a client around an existing [`ApiClient`]
    ///
    /// Used by tests to point the whole stack at a mock server.
    pub fn with_api_client(api: ApiClient, config: PollerConfig) -> Self {
        let updates = UpdateManager::with_config(ApiUpdateSource::new(api.clone()), config);
        Self { api, updates }
    }

    /// Direct access to the underlying API client
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Get basic information about the bot; usable as a ping
    pub fn get_me(&self) -> Result<User, SdkError> {
        Ok(self.api.get_me()?)
    }

    /// Fetch pending updates once, without the polling loop
    ///
    /// Applications using [`start_checking_updates`](Self::start_checking_updates)
    /// normally never call this themselves; a manual fetch consumes the
    /// same updates the loop would deliver.
    pub fn get_updates(
        &self,
        offset: Option<i64>,
        limit: Option<u8>,
    ) -> Result<Vec<Update>, SdkError> {
        Ok(self.api.get_updates(offset, limit)?)
    }

    /// Get up-to-date information about a chat
    pub fn get_chat(&self, chat_id: impl Into<ChatId>) -> Result<Chat, SdkError> {
        Ok(self.api.get_chat(chat_id)?)
    }

    /// Make the bot leave a group or channel
    pub fn leave_chat(&self, chat_id: impl Into<ChatId>) -> Result<bool, SdkError> {
        Ok(self.api.leave_chat(chat_id)?)
    }

    /// Get the number of members in a chat
    pub fn get_chat_members_count(&self, chat_id: impl Into<ChatId>) -> Result<i64, SdkError> {
        Ok(self.api.get_chat_members_count(chat_id)?)
    }

    /// Remove a user from a group or supergroup
    pub fn kick_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<bool, SdkError> {
        Ok(self.api.kick_chat_member(chat_id, user_id)?)
    }

    /// Lift a previous kick in a supergroup
    pub fn unban_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
    ) -> Result<bool, SdkError> {
        Ok(self.api.unban_chat_member(chat_id, user_id)?)
    }

    /// Start checking for updates in the background
    ///
    /// Idempotent: calling this while already checking resets the pending
    /// poll timer. Restarting after a stop resumes from the last consumed
    /// update, with no loss and no redelivery.
    pub fn start_checking_updates(&self) -> Result<(), SdkError> {
        tracing::info!("Starting update checking");
        Ok(self.updates.start()?)
    }

    /// Stop checking for updates
    ///
    /// Safe to call from any thread and a no-op when not checking. After
    /// this returns, observers receive nothing further until the next
    /// start.
    pub fn stop_checking_updates(&self) -> Result<(), SdkError> {
        tracing::info!("Stopping update checking");
        Ok(self.updates.stop()?)
    }

    /// Whether update checking is currently active
    pub fn is_checking_updates(&self) -> bool {
        self.updates.is_running()
    }

    /// Change the delay between update polls
    ///
    /// Takes effect at the next poll reschedule.
    pub fn set_check_interval(&self, interval: Duration) -> Result<(), SdkError> {
        Ok(self.updates.set_check_interval(interval)?)
    }

    /// Register an observer for incoming update batches
    ///
    /// The observer is invoked once per successful non-empty poll with the
    /// full batch, ordered by ascending `update_id`.
    pub fn on_updates(
        &self,
        observer: impl Fn(&[Update]) + Send + Sync + 'static,
    ) -> Result<ObserverId, SdkError> {
        Ok(self.updates.observe_updates(observer)?)
    }

    /// Register an observer for failed update polls
    pub fn on_update_error(
        &self,
        observer: impl Fn(&ApiError) + Send + Sync + 'static,
    ) -> Result<ObserverId, SdkError> {
        Ok(self.updates.observe_errors(observer)?)
    }

    /// Remove a previously registered update observer
    pub fn remove_updates_observer(&self, id: ObserverId) -> Result<bool, SdkError> {
        Ok(self.updates.remove_update_observer(id)?)
    }

    /// Remove a previously registered error observer
    pub fn remove_update_error_observer(&self, id: ObserverId) -> Result<bool, SdkError> {
        Ok(self.updates.remove_error_observer(id)?)
    }
}

impl fmt::Debug for TelebotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelebotClient")
            .field("api", &self.api)
            .field("updates", &self.updates)
            .finish()
    }
}
