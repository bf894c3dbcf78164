//! Bot account operations

pub mod get_me;

pub use get_me::{GetMeOperation, GetMeRequest};
