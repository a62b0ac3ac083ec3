//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which suggestion flow to run with `--suggest`
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SuggestionKind {
    /// Meal ideas cookable from current inventory
    Meals,
    /// A seven-day meal plan starting today
    Plan,
    /// Grocery purchases covering planned meals and low stock
    Grocery,
}

/// CLI arguments for larder
#[derive(Parser, Debug)]
#[command(name = "larder")]
#[command(author, version, about = "Pantry assistant - chat with your kitchen")]
#[command(long_about = r#"
Larder is a meal-planning assistant. Ask it about your pantry in plain
language and it answers or acts through a closed set of tools: adding
inventory, adjusting quantities, planning meals, generating grocery
lists, and logging cooked dishes.

Destructive actions ask for confirmation before they run.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./larder.toml       Project-level config
3. ~/.config/larder/config.toml   Global config

Example:
  larder "what can I cook tonight?"
  larder "add 2 kg of rice to the pantry"
  larder --chat
  larder --suggest grocery
"#)]
pub struct Cli {
    /// The message to send to the assistant (not required in chat mode)
    pub message: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Run a suggestion flow instead of a conversation
    #[arg(long, value_enum, value_name = "KIND")]
    pub suggest: Option<SuggestionKind>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Start with an empty store instead of the demo pantry
    #[arg(long)]
    pub no_seed: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
