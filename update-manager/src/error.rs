use thiserror::Error;

/// Errors that can occur in the update manager itself
///
/// Failures of individual polls are not errors of the manager; they are
/// delivered to the error observers and the loop continues.
#[derive(Debug, Error)]
pub enum UpdateManagerError {
    /// The background poll worker is no longer running
    #[error("Update poll worker has shut down")]
    WorkerDisconnected,

    /// Internal synchronization error
    #[error("Internal synchronization error: observer registry lock poisoned")]
    LockPoisoned,
}

/// Result type for update manager operations
pub type Result<T> = std::result::Result<T, UpdateManagerError>;
