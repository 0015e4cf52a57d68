//! User Directory - A minimal user-management backend
//!
//! This crate provides durable storage and retrieval of user records in a
//! relational table, plus a thin service layer exposing a "list all users"
//! operation to external callers.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities (`User`, `UserDraft`)
//! - **services**: Application use cases (user listing)
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Print all stored users
//! cargo run -- users list
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{User, UserDraft};
pub use errors::{AppError, AppResult};
pub use infra::{Database, UserRepository, UserStore};
pub use services::{UserManager, UserService};
