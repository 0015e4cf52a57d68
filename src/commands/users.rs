//! Users command - operational access to the user listing service.

use std::sync::Arc;

use crate::cli::args::{UsersAction, UsersArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Execute the users command
pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;

    match args.action {
        UsersAction::List => {
            let repo = Arc::new(UserStore::new(db.get_connection()));
            let service = UserManager::new(repo);

            let users = service.list_users().await?;
            tracing::info!(count = users.len(), "fetched user records");

            for user in &users {
                let line = serde_json::to_string(user)
                    .map_err(|e| AppError::internal(e.to_string()))?;
                println!("{}", line);
            }
        }
    }

    Ok(())
}
