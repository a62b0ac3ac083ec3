//! CLI entrypoint for larder
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use larder_application::{
    Assistant, AssistantLimits, ConversationLogger, DishLogService, GroceryService,
    InventoryService, NoConversationLogger, PlannerService, StructuredOutputGuard,
    SuggestionService, ToolExecutionContext, ToolRegistry,
};
use larder_domain::UserProfile;
use larder_infrastructure::{
    ConfigLoader, FileConfig, GeminiProxyClient, JsonlConversationLogger, MemoryStore,
    seed_demo_data,
};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod args;
mod output;
mod repl;

use args::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        print_config_locations();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    info!("Starting larder");

    // === Dependency Injection ===
    let client = Arc::new(GeminiProxyClient::new(
        &config.backend.base_url,
        Duration::from_secs(config.backend.timeout_secs),
    )?);

    let store = Arc::new(MemoryStore::new());
    if !cli.no_seed {
        seed_demo_data(&store).await?;
    }

    let logger = build_logger(&config);
    let profile = UserProfile::default();

    let ctx = ToolExecutionContext::new(
        store.clone() as Arc<dyn InventoryService>,
        store.clone() as Arc<dyn PlannerService>,
        store.clone() as Arc<dyn GroceryService>,
        store.clone() as Arc<dyn DishLogService>,
        Some(profile.clone()),
    );

    let assistant = Assistant::new(
        StructuredOutputGuard::new(client.clone()),
        ToolRegistry::with_default_executors(),
        ctx,
        logger,
    );

    let limits = AssistantLimits {
        request_cooldown: Duration::from_secs(config.assistant.request_cooldown_secs),
        max_requests_per_session: config.assistant.max_requests_per_session,
    };
    let suggestions = SuggestionService::new(StructuredOutputGuard::new(client), limits);

    let mut repl = repl::ChatRepl::new(
        assistant,
        suggestions,
        store.clone() as Arc<dyn InventoryService>,
        store as Arc<dyn PlannerService>,
        profile,
    );

    // Suggestion mode
    if let Some(kind) = cli.suggest {
        let text = repl.run_suggestion(kind).await?;
        println!("{text}");
        return Ok(());
    }

    // Chat mode
    if cli.chat {
        repl.run().await?;
        return Ok(());
    }

    // Single message mode - message is required
    let message = match cli.message {
        Some(m) => m,
        None => bail!("Message is required. Use --chat for interactive mode."),
    };

    repl.send_once(&message).await?;

    Ok(())
}

fn build_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    match &config.logging.conversation_log {
        Some(path) => match JsonlConversationLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    }
}

fn print_config_locations() {
    println!("Configuration file locations (highest priority first):");
    println!("  1. --config <path>");
    match ConfigLoader::project_config_path() {
        Some(path) => println!("  2. {} (found)", path.display()),
        None => println!("  2. ./larder.toml or ./.larder.toml (not found)"),
    }
    match ConfigLoader::global_config_path() {
        Some(path) => {
            let marker = if path.exists() { "found" } else { "not found" };
            println!("  3. {} ({marker})", path.display());
        }
        None => println!("  3. <platform config dir unavailable>"),
    }
}

/// Ask the user to confirm a pending destructive action on stdin.
pub(crate) fn prompt_confirmation() -> Result<bool> {
    print!("Proceed? [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
