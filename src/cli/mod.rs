//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `users` - Operational access to stored users

pub mod args;

pub use args::{Cli, Commands};
