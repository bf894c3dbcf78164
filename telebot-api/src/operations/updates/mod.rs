//! Update retrieval operations

pub mod get_updates;

pub use get_updates::{GetUpdatesOperation, GetUpdatesRequest};
