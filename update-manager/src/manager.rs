//! Sync facade over the background poll worker
//!
//! All timer and dispatch work happens on a dedicated worker thread; the
//! manager itself only flips shared flags and sends commands, so every
//! method is cheap, non-blocking and safe to call from any thread.

use std::fmt;
use std::sync::atomic::Ordering;
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use telebot_api::{ApiError, Update};

use crate::config::PollerConfig;
use crate::dispatch::{Dispatcher, ObserverId};
use crate::error::{Result, UpdateManagerError};
use crate::source::UpdateSource;
use crate::worker::{spawn_poll_worker, Command, PollControl};

/// Continuously polls an update source and dispatches batches to observers
///
/// The manager owns one background worker for its whole lifetime. The
/// worker keeps the consumed-offset state, so stopping and restarting
/// polling resumes exactly where the observers left off, with no loss and
/// no redelivery of already-seen updates.
///
/// # Example
///
/// ```rust,ignore
/// use telebot_api::ApiClient;
/// use telebot_update_manager::{ApiUpdateSource, UpdateManager};
///
/// let client = ApiClient::new("123456:bot-token");
/// let manager = UpdateManager::new(ApiUpdateSource::new(client));
///
/// manager.observe_updates(|batch| {
///     for update in batch {
///         println!("update {}", update.update_id);
///     }
/// })?;
/// manager.observe_errors(|error| {
///     eprintln!("poll failed: {}", error);
/// })?;
///
/// manager.start()?;
/// ```
pub struct UpdateManager {
    /// Send commands to the background worker
    command_tx: Sender<Command>,

    /// Flags shared with the worker; make stop() effective immediately
    control: Arc<PollControl>,

    /// Observer registry shared with the worker
    dispatcher: Arc<Dispatcher>,

    /// Background worker handle (kept alive)
    _worker: JoinHandle<()>,
}

impl UpdateManager {
    /// Create a manager with the default configuration
    pub fn new(source: impl UpdateSource + 'static) -> Self {
        Self::with_config(source, PollerConfig::default())
    }

    /// Create a manager with a custom polling configuration
    pub fn with_config(source: impl UpdateSource + 'static, config: PollerConfig) -> Self {
        let (command_tx, command_rx) = mpsc::channel();
        let control = Arc::new(PollControl::new());
        let dispatcher = Arc::new(Dispatcher::new());

        let worker = spawn_poll_worker(
            Box::new(source),
            Arc::clone(&dispatcher),
            Arc::clone(&control),
            command_rx,
            config.check_interval,
            config.batch_limit,
        );

        Self {
            command_tx,
            control,
            dispatcher,
            _worker: worker,
        }
    }

    /// Arm the poll timer
    ///
    /// Idempotent: starting while already polling resets the pending timer
    /// instead of scheduling a second one.
    pub fn start(&self) -> Result<()> {
        self.control.running.store(true, Ordering::SeqCst);
        self.send(Command::Start)
    }

    /// Disarm the poll timer
    ///
    /// Safe to call from any thread, and a no-op when not polling. After
    /// this returns, no further batches or errors reach the observers: a
    /// fetch already in flight completes, but its result is discarded and
    /// the timer is not rearmed.
    pub fn stop(&self) -> Result<()> {
        self.control.generation.fetch_add(1, Ordering::SeqCst);
        self.control.running.store(false, Ordering::SeqCst);
        self.send(Command::Stop)
    }

    /// Whether the poll timer is currently armed
    pub fn is_running(&self) -> bool {
        self.control.running.load(Ordering::SeqCst)
    }

    /// Change the poll interval
    ///
    /// Takes effect at the next rearm; a tick already scheduled keeps its
    /// deadline.
    pub fn set_check_interval(&self, interval: Duration) -> Result<()> {
        self.send(Command::SetInterval(interval))
    }

    /// Register an observer invoked once per successful non-empty poll
    /// with the full batch, ordered by ascending `update_id`
    pub fn observe_updates(
        &self,
        observer: impl Fn(&[Update]) + Send + Sync + 'static,
    ) -> Result<ObserverId> {
        self.dispatcher.add_update_observer(observer)
    }

    /// Register an observer invoked with the error of every failed poll
    pub fn observe_errors(
        &self,
        observer: impl Fn(&ApiError) + Send + Sync + 'static,
    ) -> Result<ObserverId> {
        self.dispatcher.add_error_observer(observer)
    }

    /// Remove an update observer; returns whether it was registered
    pub fn remove_update_observer(&self, id: ObserverId) -> Result<bool> {
        self.dispatcher.remove_update_observer(id)
    }

    /// Remove an error observer; returns whether it was registered
    pub fn remove_error_observer(&self, id: ObserverId) -> Result<bool> {
        self.dispatcher.remove_error_observer(id)
    }

    fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| UpdateManagerError::WorkerDisconnected)
    }
}

impl Drop for UpdateManager {
    fn drop(&mut self) {
        tracing::debug!("UpdateManager dropping, shutting down poll worker");
        self.control.generation.fetch_add(1, Ordering::SeqCst);
        self.control.running.store(false, Ordering::SeqCst);
        let _ = self.command_tx.send(Command::Shutdown);
    }
}

impl fmt::Debug for UpdateManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateManager")
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}
