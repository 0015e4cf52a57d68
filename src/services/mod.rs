//! Services module - Application use cases.

pub mod user_service;

pub use user_service::{UserManager, UserService};
