//! Observer registry for update batches and poll errors
//!
//! The two channels are independent: update observers see each successful
//! non-empty batch as a whole, in order; error observers see each failed
//! poll. A panicking observer is logged and skipped without affecting the
//! other observers or the polling loop.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use telebot_api::{ApiError, Update};

use crate::error::{Result, UpdateManagerError};

/// Handle identifying a registered observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type UpdateObserver = Arc<dyn Fn(&[Update]) + Send + Sync>;
type ErrorObserver = Arc<dyn Fn(&ApiError) + Send + Sync>;

/// Registry of update and error observers
pub struct Dispatcher {
    next_id: AtomicU64,
    update_observers: RwLock<Vec<(ObserverId, UpdateObserver)>>,
    error_observers: RwLock<Vec<(ObserverId, ErrorObserver)>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            update_observers: RwLock::new(Vec::new()),
            error_observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer for successful non-empty batches
    pub fn add_update_observer(
        &self,
        observer: impl Fn(&[Update]) + Send + Sync + 'static,
    ) -> Result<ObserverId> {
        let id = self.next_id();
        let mut observers = self
            .update_observers
            .write()
            .map_err(|_| UpdateManagerError::LockPoisoned)?;
        observers.push((id, Arc::new(observer)));
        Ok(id)
    }

    /// Register an observer for failed polls
    pub fn add_error_observer(
        &self,
        observer: impl Fn(&ApiError) + Send + Sync + 'static,
    ) -> Result<ObserverId> {
        let id = self.next_id();
        let mut observers = self
            .error_observers
            .write()
            .map_err(|_| UpdateManagerError::LockPoisoned)?;
        observers.push((id, Arc::new(observer)));
        Ok(id)
    }

    /// Remove an update observer; returns whether it was registered
    pub fn remove_update_observer(&self, id: ObserverId) -> Result<bool> {
        let mut observers = self
            .update_observers
            .write()
            .map_err(|_| UpdateManagerError::LockPoisoned)?;
        let before = observers.len();
        observers.retain(|(observer_id, _)| *observer_id != id);
        Ok(observers.len() < before)
    }

    /// Remove an error observer; returns whether it was registered
    pub fn remove_error_observer(&self, id: ObserverId) -> Result<bool> {
        let mut observers = self
            .error_observers
            .write()
            .map_err(|_| UpdateManagerError::LockPoisoned)?;
        let before = observers.len();
        observers.retain(|(observer_id, _)| *observer_id != id);
        Ok(observers.len() < before)
    }

    /// Deliver a batch to every update observer
    pub fn notify_updates(&self, batch: &[Update]) {
        for observer in self.snapshot(&self.update_observers) {
            if catch_unwind(AssertUnwindSafe(|| observer(batch))).is_err() {
                tracing::warn!("Update observer panicked; continuing");
            }
        }
    }

    /// Deliver a poll failure to every error observer
    pub fn notify_error(&self, error: &ApiError) {
        for observer in self.snapshot(&self.error_observers) {
            if catch_unwind(AssertUnwindSafe(|| observer(error))).is_err() {
                tracing::warn!("Error observer panicked; continuing");
            }
        }
    }

    fn next_id(&self) -> ObserverId {
        ObserverId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    // Observers are invoked outside the lock so a callback can register or
    // remove observers without deadlocking.
    fn snapshot<T: Clone>(&self, observers: &RwLock<Vec<(ObserverId, T)>>) -> Vec<T> {
        observers
            .read()
            .map(|list| list.iter().map(|(_, observer)| observer.clone()).collect())
            .unwrap_or_default()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
