//! HTTP handlers: static status routes and user lookups.

pub mod common;
pub mod users;
pub use common::*;
pub use users::*;
