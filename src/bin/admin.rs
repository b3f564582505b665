//! CLI administration tool for link-api.
//!
//! API keys are provisioned out-of-band; this tool creates and lists them
//! and checks the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a new API key
//! cargo run --bin admin -- key create --owner ops@example.com
//!
//! # List all keys
//! cargo run --bin admin -- key list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` (required)

use link_api::config::{self, mask_connection_string};
use link_api::domain::entities::NewApiKey;
use link_api::domain::repositories::ApiKeyRepository;
use link_api::infrastructure::persistence::PgApiKeyRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage API keys
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// API key subcommands.
#[derive(Subcommand)]
enum KeyAction {
    /// Create a new API key
    Create {
        /// Owner email recorded with the key
        #[arg(short, long)]
        owner: Option<String>,

        /// Custom key value (auto-generated if not provided)
        #[arg(short, long)]
        key: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all keys
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::Config::from_env()?;
    let database_url = config
        .database_url
        .context("DATABASE_URL (or DB_HOST and friends) must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&database_url)
            )
        })?;

    match cli.command {
        Commands::Key { action } => handle_key_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches key management commands.
async fn handle_key_action(action: KeyAction, pool: &PgPool) -> Result<()> {
    let repo = PgApiKeyRepository::new(Arc::new(pool.clone()));

    match action {
        KeyAction::Create { owner, key, yes } => create_key(&repo, owner, key, yes).await?,
        KeyAction::List => list_keys(&repo).await?,
    }

    Ok(())
}

/// Creates a new API key with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for owner email (or use provided)
/// 2. Generate random key or use provided value
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Store in database
/// 5. Display usage example
async fn create_key(
    repo: &PgApiKeyRepository,
    owner: Option<String>,
    key: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Create API Key".bright_blue().bold());
    println!();

    let owner_email = match owner {
        Some(o) => o,
        None => Input::new()
            .with_prompt("Owner email")
            .interact_text()?,
    };

    let key_value = match key {
        Some(k) => {
            if k.trim().is_empty() {
                anyhow::bail!("API key must not be empty");
            }
            println!("{}", "⚠️  Using provided key value".yellow());
            k
        }
        None => {
            let generated = generate_key();
            println!("{}", "✨ Generated new key".green());
            generated
        }
    };

    println!();
    println!("{}", "Key details:".bright_white().bold());
    println!("  Owner: {}", owner_email.cyan());
    println!("  Key:   {}", key_value.bright_yellow().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this key?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    if !repo
        .find_by_key(&key_value)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to look up key: {}", e))?
        .is_empty()
    {
        anyhow::bail!("An API key with this value already exists");
    }

    repo.create(NewApiKey {
        key: key_value.clone(),
        owner_email,
    })
    .await
    .map_err(|e| anyhow::anyhow!("Failed to create key: {}", e))?;

    println!();
    println!("{}", "✅ Key created successfully!".green().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -X POST -d \"apiKey={}&url=https://example.com\" http://localhost:3000/api/add",
        key_value.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all API keys, newest first.
///
/// # Output Format
///
/// ```text
/// 📋 API Keys
///
///   Key                                        Owner                          Created
///   ────────────────────────────────────────────────────────────────────────────────────
///   Xk3...                                     ops@example.com                2024-01-15 10:30
/// ```
async fn list_keys(repo: &PgApiKeyRepository) -> Result<()> {
    println!("{}", "📋 API Keys".bright_blue().bold());
    println!();

    let keys = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list keys: {}", e))?;

    if keys.is_empty() {
        println!("{}", "  No keys found".yellow());
        println!();
        println!(
            "  Create one with: {} admin key create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<42} {:<30} {:<20}",
        "Key".bright_white().bold(),
        "Owner".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(92).bright_black());

    for key in &keys {
        println!(
            "  {:<42} {:<30} {}",
            key.key.bright_yellow(),
            key.owner_email.cyan(),
            key.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", keys.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}

/// Generates a random API key.
///
/// # Format
///
/// - Length: 40 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_key() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const KEY_LEN: usize = 40;

    let mut rng = rand::rng();

    (0..KEY_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_key_format() {
        let key = generate_key();

        assert_eq!(key.len(), 40);
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(key, generate_key());
    }
}
