//! CLI argument definitions and command dispatch.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use common::AppResult;
use domain::{CreateUser, UpdateUser};

use crate::service::UserService;

/// User management command-line client
#[derive(Parser, Debug)]
#[command(name = "user-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the users table if it is missing
    Init,
    /// List all users
    List,
    /// Show one user
    Get {
        /// User id
        id: String,
    },
    /// Create a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Change a user's name or email
    Update {
        /// User id
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a user
    Delete {
        /// User id
        id: String,
    },
}

/// Run a user command against the service and render the outcome as JSON.
///
/// `Init` touches only the schema and is handled by the caller; here it
/// renders as a no-op acknowledgement.
pub async fn execute(service: &dyn UserService, command: Commands) -> AppResult<Value> {
    let output = match command {
        Commands::Init => json!({ "initialized": true }),
        Commands::List => json!(service.find_all_users().await?),
        Commands::Get { id } => json!(service.find_user_by_id(&id).await?),
        Commands::Create { name, email } => {
            json!(service.create_user(CreateUser { name, email }).await?)
        }
        Commands::Update { id, name, email } => {
            json!(service.update_user(&id, UpdateUser { name, email }).await?)
        }
        Commands::Delete { id } => json!({ "deleted": service.delete_user(&id).await? }),
    };

    Ok(output)
}
